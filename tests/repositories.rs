//! Repository and façade tests against a live database.
//!
//! Run with `TEST_DATABASE_URL=postgres://... cargo test`; skipped when unset.

mod common;

use common::{test_pool, unique_digits, unique_voter};
use sqlx::migrate::MigrateDatabase;
use sqlx::Postgres;
use votedb::db;
use votedb::error::AppError;
use votedb::VotingService;

#[tokio::test]
async fn insert_then_lookup_returns_inserted_voter() {
    let Some(pool) = test_pool().await else { return };
    let ids = unique_voter();

    db::voter_create(&pool, &ids.voter_id, "Asha Rao", &ids.aadhar, "9876543210", "female")
        .await
        .unwrap();

    let by_aadhar = db::voter_find_by_aadhar(&pool, &ids.aadhar)
        .await
        .unwrap()
        .expect("voter by aadhar");
    assert_eq!(by_aadhar.voter_id, ids.voter_id);
    assert_eq!(by_aadhar.name, "Asha Rao");
    assert_eq!(by_aadhar.phone, "9876543210");
    assert_eq!(by_aadhar.gender, "female");

    let by_id = db::voter_find_by_voter_id(&pool, &ids.voter_id)
        .await
        .unwrap()
        .expect("voter by id");
    assert_eq!(by_id, by_aadhar);
}

#[tokio::test]
async fn lookup_of_unknown_voter_is_none() {
    let Some(pool) = test_pool().await else { return };
    let ids = unique_voter();
    assert!(db::voter_find_by_aadhar(&pool, &ids.aadhar)
        .await
        .unwrap()
        .is_none());
    assert!(db::voter_summary_by_aadhar(&pool, &ids.aadhar)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn duplicate_voter_keys_conflict() {
    let Some(pool) = test_pool().await else { return };
    let ids = unique_voter();
    db::voter_create(&pool, &ids.voter_id, "First", &ids.aadhar, "1", "male")
        .await
        .unwrap();

    // same aadhar, new voter id
    let other = unique_voter();
    let err = db::voter_create(&pool, &other.voter_id, "Second", &ids.aadhar, "2", "male")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {:?}", err);

    // same voter id, new aadhar
    let err = db::voter_create(&pool, &ids.voter_id, "Third", &other.aadhar, "3", "male")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {:?}", err);
}

#[tokio::test]
async fn one_vote_per_voter() {
    let Some(pool) = test_pool().await else { return };
    let ids = unique_voter();

    db::vote_create(&pool, &ids.voter_id, "Green Party", "Pune")
        .await
        .unwrap();
    let err = db::vote_create(&pool, &ids.voter_id, "Blue Party", "Pune")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let vote = db::vote_find_by_voter_id(&pool, &ids.voter_id)
        .await
        .unwrap()
        .expect("vote");
    assert_eq!(vote.poll, "Green Party");
    assert_eq!(vote.district, "Pune");
}

#[tokio::test]
async fn update_and_delete_by_aadhar() {
    let Some(pool) = test_pool().await else { return };
    let ids = unique_voter();
    db::voter_create(&pool, &ids.voter_id, "Old Name", &ids.aadhar, "1111111111", "male")
        .await
        .unwrap();

    let updated = db::voter_update_by_aadhar(&pool, "New Name", "2222222222", "other", &ids.aadhar)
        .await
        .unwrap();
    assert_eq!(updated, 1);
    let row = db::voter_find_by_aadhar(&pool, &ids.aadhar)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.name, "New Name");
    assert_eq!(row.phone, "2222222222");
    assert_eq!(row.gender, "other");
    assert_eq!(row.voter_id, ids.voter_id);

    assert_eq!(db::voter_delete_by_aadhar(&pool, &ids.aadhar).await.unwrap(), 1);
    assert_eq!(db::voter_delete_by_aadhar(&pool, &ids.aadhar).await.unwrap(), 0);
    assert!(db::voter_find_by_aadhar(&pool, &ids.aadhar)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn summary_district_follows_vote() {
    let Some(pool) = test_pool().await else { return };
    let ids = unique_voter();
    db::voter_create(&pool, &ids.voter_id, "Ravi", &ids.aadhar, "5555555555", "male")
        .await
        .unwrap();

    let before = db::voter_summary_by_aadhar(&pool, &ids.aadhar)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(before.district, None);

    db::vote_create(&pool, &ids.voter_id, "Orange", "Nagpur")
        .await
        .unwrap();
    let after = db::voter_summary_by_aadhar(&pool, &ids.aadhar)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after.name, "Ravi");
    assert_eq!(after.district.as_deref(), Some("Nagpur"));

    let all = db::voters_list_with_district(&pool).await.unwrap();
    assert!(all
        .iter()
        .any(|s| s.name == "Ravi" && s.district.as_deref() == Some("Nagpur")));
}

#[tokio::test]
async fn counts_reflect_inserts() {
    let Some(pool) = test_pool().await else { return };
    let party = format!("Party{}", unique_digits());

    assert_eq!(db::vote_count_by_poll(&pool, &party).await.unwrap(), 0);
    for _ in 0..3 {
        let ids = unique_voter();
        db::vote_create(&pool, &ids.voter_id, &format!("{} (North)", party), "Delhi")
            .await
            .unwrap();
    }
    assert_eq!(db::vote_count_by_poll(&pool, &party).await.unwrap(), 3);
    assert!(db::vote_count_total(&pool).await.unwrap() >= 3);

    let ids = unique_voter();
    db::voter_create(&pool, &ids.voter_id, "Counted", &ids.aadhar, "1", "female")
        .await
        .unwrap();
    assert!(db::voter_count_total(&pool).await.unwrap() >= 1);
}

#[tokio::test]
async fn party_count_ignores_case() {
    let Some(pool) = test_pool().await else { return };
    let party = format!("MixedCase{}", unique_digits());
    let ids = unique_voter();
    db::vote_create(&pool, &ids.voter_id, &party, "Chennai")
        .await
        .unwrap();

    assert_eq!(db::vote_count_by_poll(&pool, &party).await.unwrap(), 1);
    assert_eq!(
        db::vote_count_by_poll(&pool, &party.to_lowercase()).await.unwrap(),
        1
    );
    assert_eq!(
        db::vote_count_by_poll(&pool, &party.to_uppercase()).await.unwrap(),
        1
    );
}

#[tokio::test]
async fn ensure_database_creates_once() {
    let Ok(base_url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("Skip integration test: set TEST_DATABASE_URL");
        return;
    };
    let name = db::database_name(&base_url);
    let prefix = &base_url[..base_url.rfind(name).unwrap_or(base_url.len())];
    let fresh_url = format!("{}votedb_bootstrap_{}", prefix, unique_digits());

    let first = db::ensure_database(&fresh_url).await;
    let second = db::ensure_database(&fresh_url).await;
    Postgres::drop_database(&fresh_url).await.unwrap();

    assert!(matches!(first, Ok(true)), "first call: {:?}", first);
    assert!(matches!(second, Ok(false)), "second call: {:?}", second);
}

#[tokio::test]
async fn admin_insert_and_lookups() {
    let Some(pool) = test_pool().await else { return };
    let digits = unique_digits();
    let reg_id = format!("ADM{}", digits);
    let aadhar: i64 = digits.parse().unwrap();

    db::admin_create(&pool, &reg_id, "Returning Officer", aadhar, "9000000000", "female")
        .await
        .unwrap();

    let by_reg = db::admin_find_by_registration_id(&pool, &reg_id)
        .await
        .unwrap()
        .expect("admin by registration id");
    assert_eq!(by_reg.aadhar, aadhar);
    let by_aadhar = db::admin_find_by_aadhar(&pool, aadhar)
        .await
        .unwrap()
        .expect("admin by aadhar");
    assert_eq!(by_aadhar, by_reg);

    let other_aadhar: i64 = unique_digits().parse().unwrap();
    let err = db::admin_create(&pool, &reg_id, "Duplicate", other_aadhar, "1", "male")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn facade_reports_sentinels() {
    let Some(pool) = test_pool().await else { return };
    let svc = VotingService::new(pool);
    let ids = unique_voter();

    assert!(svc.add_voter(&ids.voter_id, "Meera", &ids.aadhar, "1234567890", "female").await);
    assert!(!svc.add_voter(&ids.voter_id, "Meera", &ids.aadhar, "1234567890", "female").await);
    assert_eq!(
        svc.find_voter_by_voter_id(&ids.voter_id).await.map(|v| v.aadhar),
        Some(ids.aadhar.clone())
    );

    // update reports success even when nothing matched
    let missing = unique_voter();
    assert!(svc.update_voter_by_aadhar("x", "1", "f", &missing.aadhar).await);
    assert!(!svc.delete_voter_by_aadhar(&missing.aadhar).await);

    assert!(svc.submit_vote(&ids.voter_id, "Lotus", "Mumbai").await);
    assert!(!svc.submit_vote(&ids.voter_id, "Lotus", "Mumbai").await);
    assert_eq!(
        svc.voter_summary_by_aadhar(&ids.aadhar).await.and_then(|s| s.district),
        Some("Mumbai".to_string())
    );
    assert!(svc.party_votes("Lotus").await.unwrap_or(0) >= 1);
    assert!(svc.total_votes().await.is_some());
    assert!(svc.total_voters().await.is_some());
    assert!(svc.all_voters().await.is_some());

    assert!(svc.delete_voter_by_aadhar(&ids.aadhar).await);
    assert!(svc.find_voter_by_aadhar(&ids.aadhar).await.is_none());
}
