use super::models::SampleUpdate;
use super::services;
use crate::experiments::sample_links::models as sample_links;
use crate::measurements::services as measurements;
use crate::test_helpers::{
    create_test_experiment, create_test_measurement, create_test_researcher, create_test_sample,
    setup_test_db,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

#[tokio::test]
async fn create_links_to_experiment_when_requested() {
    let db = setup_test_db().await;
    let experiment = create_test_experiment(&db, "Synthesis", None).await;

    let sample = create_test_sample(&db, "Crystal batch", Some(experiment.id)).await;

    let linked = services::get_samples_for_experiment(&db, experiment.id)
        .await
        .expect("query failed");
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].id, sample.id);
}

#[tokio::test]
async fn create_without_experiment_leaves_no_links() {
    let db = setup_test_db().await;

    let sample = create_test_sample(&db, "Loose specimen", None).await;

    let links = sample_links::Entity::find()
        .filter(sample_links::Column::SampleId.eq(sample.id))
        .all(&db)
        .await
        .expect("query failed");
    assert!(links.is_empty());
}

#[tokio::test]
async fn update_can_clear_mass_and_volume() {
    let db = setup_test_db().await;
    let sample = create_test_sample(&db, "Weighed specimen", None).await;
    assert!(sample.mass.is_some());

    let updated = services::update_sample(
        &db,
        sample.id,
        SampleUpdate {
            mass: Some(None),
            volume: Some(Some(2.5)),
            ..Default::default()
        },
    )
    .await
    .expect("update failed");

    assert!(updated.mass.is_none());
    assert_eq!(updated.volume, Some(2.5));
    assert_eq!(updated.name, "Weighed specimen");
}

#[tokio::test]
async fn duplicate_link_is_rejected() {
    let db = setup_test_db().await;
    let experiment = create_test_experiment(&db, "Linked run", None).await;
    let sample = create_test_sample(&db, "Specimen", None).await;

    let first = services::add_sample_to_experiment(&db, sample.id, experiment.id)
        .await
        .expect("link failed");
    let second = services::add_sample_to_experiment(&db, sample.id, experiment.id)
        .await
        .expect("link failed");

    assert!(first);
    assert!(!second);

    let links = sample_links::Entity::find()
        .filter(sample_links::Column::SampleId.eq(sample.id))
        .all(&db)
        .await
        .expect("query failed");
    assert_eq!(links.len(), 1);
}

#[tokio::test]
async fn remove_link_reports_whether_it_existed() {
    let db = setup_test_db().await;
    let experiment = create_test_experiment(&db, "Unlink run", None).await;
    let sample = create_test_sample(&db, "Specimen", Some(experiment.id)).await;

    assert!(
        services::remove_sample_from_experiment(&db, sample.id, experiment.id)
            .await
            .expect("unlink failed")
    );
    assert!(
        !services::remove_sample_from_experiment(&db, sample.id, experiment.id)
            .await
            .expect("unlink failed")
    );
}

#[tokio::test]
async fn complete_delete_takes_measurements_and_links() {
    let db = setup_test_db().await;
    let experiment = create_test_experiment(&db, "Host run", None).await;
    let sample = create_test_sample(&db, "Doomed specimen", Some(experiment.id)).await;
    create_test_measurement(&db, sample.id, "density", 2.2).await;
    create_test_measurement(&db, sample.id, "purity", 99.1).await;

    services::delete_sample_completely(&db, sample.id)
        .await
        .expect("delete failed");

    assert!(
        services::get_sample(&db, sample.id)
            .await
            .expect("query failed")
            .is_none()
    );
    assert!(
        measurements::get_measurements_for_sample(&db, sample.id)
            .await
            .expect("query failed")
            .is_empty()
    );
    assert!(
        sample_links::Entity::find()
            .filter(sample_links::Column::SampleId.eq(sample.id))
            .all(&db)
            .await
            .expect("query failed")
            .is_empty()
    );
    // The experiment is untouched.
    assert!(
        crate::experiments::services::get_experiment(&db, experiment.id)
            .await
            .expect("query failed")
            .is_some()
    );
}

#[tokio::test]
async fn experiments_by_sample_walks_the_association_both_ways() {
    let db = setup_test_db().await;
    let first = create_test_experiment(&db, "First run", None).await;
    let second = create_test_experiment(&db, "Second run", None).await;
    let sample = create_test_sample(&db, "Shared specimen", Some(first.id)).await;
    services::add_sample_to_experiment(&db, sample.id, second.id)
        .await
        .expect("link failed");

    let experiments = services::get_experiments_by_sample_id(&db, sample.id)
        .await
        .expect("query failed");
    assert_eq!(experiments.len(), 2);

    let unknown = services::get_experiments_by_sample_id(&db, 9999)
        .await
        .expect("query failed");
    assert!(unknown.is_empty());
}

#[tokio::test]
async fn researcher_scoped_create_links_to_earliest_experiment() {
    let db = setup_test_db().await;
    let researcher = create_test_researcher(&db, "Keeper", "Lena").await;
    let earliest = create_test_experiment(&db, "Earliest run", Some(researcher.id)).await;
    create_test_experiment(&db, "Later run", Some(researcher.id)).await;

    let sample = services::create_sample_for_researcher(
        &db,
        super::models::SampleCreate {
            name: "Walk-in specimen".to_string(),
            ..Default::default()
        },
        researcher.id,
    )
    .await
    .expect("create failed");

    let hosts = services::get_experiments_by_sample_id(&db, sample.id)
        .await
        .expect("query failed");
    assert_eq!(hosts.len(), 1);
    assert_eq!(hosts[0].id, earliest.id);
}

#[tokio::test]
async fn researcher_scoped_create_spawns_catch_all_experiment() {
    let db = setup_test_db().await;
    let researcher = create_test_researcher(&db, "Newcomer", "Oleg").await;

    let sample = services::create_sample_for_researcher(
        &db,
        super::models::SampleCreate {
            name: "First specimen".to_string(),
            ..Default::default()
        },
        researcher.id,
    )
    .await
    .expect("create failed");

    let mine = crate::experiments::services::get_my_experiments(&db, researcher.id)
        .await
        .expect("query failed");
    assert_eq!(mine.len(), 1);
    assert_eq!(
        mine[0].status,
        crate::experiments::models::ExperimentStatus::InProgress
    );

    let hosts = services::get_experiments_by_sample_id(&db, sample.id)
        .await
        .expect("query failed");
    assert_eq!(hosts.len(), 1);
    assert_eq!(hosts[0].id, mine[0].id);

    // A second registration reuses the catch-all instead of spawning another.
    services::create_sample_for_researcher(
        &db,
        super::models::SampleCreate {
            name: "Second specimen".to_string(),
            ..Default::default()
        },
        researcher.id,
    )
    .await
    .expect("create failed");
    let mine = crate::experiments::services::get_my_experiments(&db, researcher.id)
        .await
        .expect("query failed");
    assert_eq!(mine.len(), 1);
}

#[tokio::test]
async fn my_samples_deduplicates_across_experiments() {
    let db = setup_test_db().await;
    let researcher = create_test_researcher(&db, "Collector", "Sam").await;
    let run_a = create_test_experiment(&db, "Run A", Some(researcher.id)).await;
    let run_b = create_test_experiment(&db, "Run B", Some(researcher.id)).await;
    let shared = create_test_sample(&db, "Shared", Some(run_a.id)).await;
    services::add_sample_to_experiment(&db, shared.id, run_b.id)
        .await
        .expect("link failed");
    create_test_sample(&db, "Only A", Some(run_a.id)).await;
    // A sample belonging to someone else's experiment.
    let foreign = create_test_experiment(&db, "Foreign", None).await;
    create_test_sample(&db, "Foreign specimen", Some(foreign.id)).await;

    let mine = services::get_my_samples(&db, researcher.id)
        .await
        .expect("query failed");

    assert_eq!(mine.len(), 2);
    assert!(mine.iter().any(|s| s.name == "Shared"));
    assert!(mine.iter().any(|s| s.name == "Only A"));
}
