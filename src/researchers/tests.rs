use super::models::ResearcherUpdate;
use super::services;
use crate::experiments::researcher_links::models as researcher_links;
use crate::experiments::services as experiments;
use crate::test_helpers::{create_test_experiment, create_test_researcher, setup_test_db};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

#[tokio::test]
async fn create_and_fetch_researcher() {
    let db = setup_test_db().await;

    let created = create_test_researcher(&db, "Kovaleva", "Anna").await;
    assert!(created.id > 0);

    let fetched = services::get_researcher(&db, created.id)
        .await
        .expect("query failed")
        .expect("researcher should exist");
    assert_eq!(fetched.surname, "Kovaleva");
    assert_eq!(fetched.organization, "Test Laboratory");
}

#[tokio::test]
async fn get_missing_researcher_returns_none() {
    let db = setup_test_db().await;

    let fetched = services::get_researcher(&db, 9999).await.expect("query failed");
    assert!(fetched.is_none());
}

#[tokio::test]
async fn partial_update_leaves_other_fields_untouched() {
    let db = setup_test_db().await;
    let researcher = create_test_researcher(&db, "Petrov", "Ivan").await;

    let updated = services::update_researcher(
        &db,
        researcher.id,
        ResearcherUpdate {
            academic_degree: Some(Some("PhD".to_string())),
            ..Default::default()
        },
    )
    .await
    .expect("update failed");

    assert_eq!(updated.academic_degree.as_deref(), Some("PhD"));
    assert_eq!(updated.surname, "Petrov");
    assert_eq!(updated.email, researcher.email);
}

#[tokio::test]
async fn update_can_clear_nullable_field() {
    let db = setup_test_db().await;
    let researcher = create_test_researcher(&db, "Sidorova", "Elena").await;

    services::update_researcher(
        &db,
        researcher.id,
        ResearcherUpdate {
            academic_degree: Some(Some("DSc".to_string())),
            ..Default::default()
        },
    )
    .await
    .expect("update failed");

    let cleared = services::update_researcher(
        &db,
        researcher.id,
        ResearcherUpdate {
            academic_degree: Some(None),
            ..Default::default()
        },
    )
    .await
    .expect("update failed");

    assert!(cleared.academic_degree.is_none());
}

#[tokio::test]
async fn delete_researcher_unassigns_but_keeps_experiments() {
    let db = setup_test_db().await;
    let researcher = create_test_researcher(&db, "Orlov", "Dmitri").await;
    let experiment = create_test_experiment(&db, "Calorimetry run", Some(researcher.id)).await;

    services::delete_researcher(&db, researcher.id)
        .await
        .expect("delete failed");

    assert!(
        services::get_researcher(&db, researcher.id)
            .await
            .expect("query failed")
            .is_none()
    );
    let links = researcher_links::Entity::find()
        .filter(researcher_links::Column::ResearcherId.eq(researcher.id))
        .all(&db)
        .await
        .expect("query failed");
    assert!(links.is_empty());

    let survivor = experiments::get_experiment(&db, experiment.id)
        .await
        .expect("query failed")
        .expect("experiment should survive researcher deletion");
    assert_eq!(survivor.name, "Calorimetry run");
}

#[tokio::test]
async fn experiment_counts_include_zero_and_sort_busiest_first() {
    let db = setup_test_db().await;
    let busy = create_test_researcher(&db, "Busy", "Researcher").await;
    let idle = create_test_researcher(&db, "Idle", "Researcher").await;

    create_test_experiment(&db, "Run A", Some(busy.id)).await;
    create_test_experiment(&db, "Run B", Some(busy.id)).await;

    let counts = services::researcher_experiment_counts(&db)
        .await
        .expect("aggregation failed");

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].id, busy.id);
    assert_eq!(counts[0].experiment_count, 2);
    assert_eq!(counts[1].id, idle.id);
    assert_eq!(counts[1].experiment_count, 0);
}

#[tokio::test]
async fn experiment_counts_are_stable_across_reruns() {
    let db = setup_test_db().await;
    let researcher = create_test_researcher(&db, "Repeat", "Runner").await;
    create_test_experiment(&db, "Run", Some(researcher.id)).await;

    let first = services::researcher_experiment_counts(&db)
        .await
        .expect("aggregation failed");
    let second = services::researcher_experiment_counts(&db)
        .await
        .expect("aggregation failed");

    assert_eq!(first, second);
}
