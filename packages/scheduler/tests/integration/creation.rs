use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};

use scheduler::Cadence;

use scheduler::availability::{is_available_for_joining, is_listed_for_joining};
use scheduler::creation::{AdminActor, NewContest, create_contest};
use scheduler::entity::contest;
use scheduler::error::SchedulerError;

use crate::common::{seed_profile, test_db};

fn valid_request(cadence: Cadence) -> NewContest {
    let start = Utc::now() + Duration::days(5);
    NewContest {
        title: "Golden Hour".into(),
        category: "Full Body".into(),
        image: "covers/golden-hour.jpg".into(),
        attributes: serde_json::json!({"Hair Color": ["Brown", "Black"]}),
        max_participants: 100,
        start_time: start,
        end_time: start + Duration::days(1),
        cadence,
        cost_cents: 250,
    }
}

#[tokio::test]
async fn one_time_contest_has_no_recurrence_fields() {
    let db = test_db().await;
    let admin = AdminActor {
        profile_id: seed_profile(&db, "admin1").await,
    };

    let model = create_contest(&db, admin, valid_request(Cadence::None), false)
        .await
        .unwrap();

    assert_eq!(model.cadence, "none");
    assert!(!model.is_recurring_template);
    assert_eq!(model.parent_contest_id, None);
    assert_eq!(model.next_generation_date, None);
    assert!(model.is_active);

    // Available the moment it is created, even though it starts in 5 days.
    assert!(is_available_for_joining(&model, Utc::now()).unwrap());
}

#[tokio::test]
async fn recurring_contest_without_flag_self_generates() {
    let db = test_db().await;
    let admin = AdminActor {
        profile_id: seed_profile(&db, "admin1").await,
    };

    let req = valid_request(Cadence::Weekly);
    let start = req.start_time;
    let model = create_contest(&db, admin, req, false).await.unwrap();

    assert_eq!(model.cadence, "weekly");
    assert!(!model.is_recurring_template);
    assert_eq!(model.next_generation_date, Some(start - Duration::days(7)));
}

#[tokio::test]
async fn force_template_creates_non_joinable_template() {
    let db = test_db().await;
    let admin = AdminActor {
        profile_id: seed_profile(&db, "admin1").await,
    };

    let mut req = valid_request(Cadence::Daily);
    req.start_time = Utc::now() + Duration::hours(12);
    req.end_time = req.start_time + Duration::hours(24);
    let start = req.start_time;
    let model = create_contest(&db, admin, req, true).await.unwrap();

    assert!(model.is_recurring_template);
    assert_eq!(model.next_generation_date, Some(start - Duration::days(1)));

    // Inside its advance window, but a template is never listed.
    let now = Utc::now();
    assert!(is_available_for_joining(&model, now).unwrap());
    assert!(!is_listed_for_joining(&model, now).unwrap());
}

#[tokio::test]
async fn force_template_is_ignored_for_one_time_contests() {
    let db = test_db().await;
    let admin = AdminActor {
        profile_id: seed_profile(&db, "admin1").await,
    };

    let model = create_contest(&db, admin, valid_request(Cadence::None), true)
        .await
        .unwrap();

    assert!(!model.is_recurring_template);
    assert_eq!(model.next_generation_date, None);
}

#[tokio::test]
async fn rejects_end_time_not_after_start_time() {
    let db = test_db().await;
    let admin = AdminActor {
        profile_id: seed_profile(&db, "admin1").await,
    };

    let mut req = valid_request(Cadence::None);
    req.end_time = req.start_time;
    let err = create_contest(&db, admin, req, false).await.unwrap_err();
    assert!(matches!(err, SchedulerError::Validation(_)));

    // Rejected before any state was created.
    let count = contest::Entity::find().count(&db).await.unwrap();
    assert_eq!(count, 0);
}
