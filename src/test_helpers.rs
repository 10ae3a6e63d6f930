//! Shared fixtures for the service and registry tests.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::equipment::models::EquipmentCreate;
use crate::experiments::models::{ExperimentCreate, ExperimentStatus};
use crate::measurements::models::MeasurementCreate;
use crate::researchers::models::ResearcherCreate;
use crate::samples::models::SampleCreate;

/// Fresh in-memory SQLite database with the full schema applied.
///
/// The pool is capped at one connection: every connection to
/// `sqlite::memory:` opens its own database, so a larger pool would hand out
/// blank databases to some queries.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run database migrations");

    db
}

pub async fn create_test_researcher(
    db: &DatabaseConnection,
    surname: &str,
    name: &str,
) -> crate::researchers::models::Model {
    crate::researchers::services::create_researcher(
        db,
        ResearcherCreate {
            surname: surname.to_string(),
            name: name.to_string(),
            organization: "Test Laboratory".to_string(),
            email: format!("{}@lab.test", surname.to_lowercase()),
            ..Default::default()
        },
    )
    .await
    .expect("Failed to create test researcher")
}

pub async fn create_test_experiment(
    db: &DatabaseConnection,
    name: &str,
    researcher_id: Option<i32>,
) -> crate::experiments::models::Model {
    crate::experiments::services::create_experiment(
        db,
        ExperimentCreate {
            name: name.to_string(),
            purpose: format!("Purpose of {name}"),
            status: ExperimentStatus::Planned,
            researcher_id,
            ..Default::default()
        },
    )
    .await
    .expect("Failed to create test experiment")
}

pub async fn create_test_sample(
    db: &DatabaseConnection,
    name: &str,
    experiment_id: Option<i32>,
) -> crate::samples::models::Model {
    crate::samples::services::create_sample(
        db,
        SampleCreate {
            name: name.to_string(),
            chemical_formula: Some("H2O".to_string()),
            aggregate_state: Some("liquid".to_string()),
            mass: Some(10.0),
            experiment_id,
            ..Default::default()
        },
    )
    .await
    .expect("Failed to create test sample")
}

pub async fn create_test_equipment(
    db: &DatabaseConnection,
    name: &str,
) -> crate::equipment::models::Model {
    crate::equipment::services::create_equipment(
        db,
        EquipmentCreate {
            name: name.to_string(),
            description: None,
        },
    )
    .await
    .expect("Failed to create test equipment")
}

pub async fn create_test_measurement(
    db: &DatabaseConnection,
    sample_id: i32,
    property: &str,
    value: f64,
) -> crate::measurements::models::Model {
    crate::measurements::services::create_measurement(
        db,
        MeasurementCreate {
            sample_id,
            method: "titration".to_string(),
            property: property.to_string(),
            value,
            unit: "g/L".to_string(),
            ..Default::default()
        },
    )
    .await
    .expect("Failed to create test measurement")
}
