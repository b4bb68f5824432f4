use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, Set};

use scheduler::availability::find_joinable;
use scheduler::participants::{has_capacity, participant_count};

use crate::common::{contest_row, join_contest, seed_profile, test_db};

#[tokio::test]
async fn listing_includes_only_open_windows() {
    let db = test_db().await;
    let admin = seed_profile(&db, "admin1").await;
    let now = Utc::now();

    // Open now: one-time contests are available from creation.
    let one_time = contest_row(
        admin,
        "One Time",
        "none",
        now + Duration::days(1),
        now + Duration::days(2),
    )
    .insert(&db)
    .await
    .unwrap();

    // Open now: daily instance starting in 12 hours (window opened 12 hours ago).
    let upcoming_daily = contest_row(
        admin,
        "Upcoming Daily",
        "daily",
        now + Duration::hours(12),
        now + Duration::hours(36),
    )
    .insert(&db)
    .await
    .unwrap();

    // Inside its window, but templates are never listed.
    let mut row = contest_row(
        admin,
        "Template",
        "daily",
        now + Duration::hours(12),
        now + Duration::hours(36),
    );
    row.is_recurring_template = Set(true);
    row.next_generation_date = Set(Some(now - Duration::hours(12)));
    row.insert(&db).await.unwrap();

    // Window not open yet: daily contest starting in 10 days.
    contest_row(
        admin,
        "Far Daily",
        "daily",
        now + Duration::days(10),
        now + Duration::days(11),
    )
    .insert(&db)
    .await
    .unwrap();

    // Ended.
    contest_row(
        admin,
        "Ended",
        "none",
        now - Duration::days(2),
        now - Duration::days(1),
    )
    .insert(&db)
    .await
    .unwrap();

    // Deactivated but otherwise open.
    let mut row = contest_row(
        admin,
        "Deactivated",
        "none",
        now + Duration::days(1),
        now + Duration::days(2),
    );
    row.is_active = Set(false);
    row.insert(&db).await.unwrap();

    // Query with a fresh timestamp: one-time contests open at created_at.
    let listed = find_joinable(&db, Utc::now()).await.unwrap();
    let ids: Vec<i32> = listed.iter().map(|c| c.id).collect();

    // Ordered by start time: the daily instance starts before the one-time.
    assert_eq!(ids, vec![upcoming_daily.id, one_time.id]);
}

#[tokio::test]
async fn listing_skips_rows_with_malformed_cadence() {
    let db = test_db().await;
    let admin = seed_profile(&db, "admin1").await;
    let now = Utc::now();

    contest_row(
        admin,
        "Corrupt",
        "biweekly",
        now + Duration::days(1),
        now + Duration::days(2),
    )
    .insert(&db)
    .await
    .unwrap();

    // A corrupt row hides itself instead of failing the listing.
    let listed = find_joinable(&db, now).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn occupancy_is_derived_from_participant_rows() {
    let db = test_db().await;
    let admin = seed_profile(&db, "admin1").await;
    let now = Utc::now();

    let mut row = contest_row(
        admin,
        "Tiny Contest",
        "none",
        now + Duration::days(1),
        now + Duration::days(2),
    );
    row.max_participants = Set(2);
    let contest = row.insert(&db).await.unwrap();

    assert_eq!(participant_count(&db, contest.id).await.unwrap(), 0);
    assert!(has_capacity(&db, &contest).await.unwrap());

    let p1 = seed_profile(&db, "voter1").await;
    let p2 = seed_profile(&db, "voter2").await;
    join_contest(&db, contest.id, p1).await;
    join_contest(&db, contest.id, p2).await;

    assert_eq!(participant_count(&db, contest.id).await.unwrap(), 2);
    assert!(!has_capacity(&db, &contest).await.unwrap());
}
