pub mod contest;
pub mod contest_participant;
pub mod contributor_image;
pub mod profile;
