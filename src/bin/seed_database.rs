//! Loads a small demo dataset so the desktop frontend has something to show
//! on first launch. Safe to re-run against an empty database only.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use labrecords::config::Config;
use labrecords::equipment::models::EquipmentCreate;
use labrecords::equipment::services as equipment;
use labrecords::experiments::models::{ExperimentCreate, ExperimentStatus};
use labrecords::experiments::services as experiments;
use labrecords::measurements::models::MeasurementCreate;
use labrecords::measurements::services as measurements;
use labrecords::methods::models::MethodCreate;
use labrecords::methods::services as methods;
use labrecords::researchers::models::ResearcherCreate;
use labrecords::researchers::services as researchers;
use labrecords::results::models::ResultCreate;
use labrecords::results::services as results;
use labrecords::samples::models::SampleCreate;
use labrecords::samples::services as samples;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    tracing::info!(db_url = %config.db_url, "Connecting");
    let db = Database::connect(&config.db_url)
        .await
        .context("Failed to connect to database")?;

    Migrator::up(&db, None)
        .await
        .context("Failed to apply migrations")?;

    let ivanova = researchers::create_researcher(
        &db,
        ResearcherCreate {
            surname: "Ivanova".to_string(),
            name: "Ekaterina".to_string(),
            academic_degree: Some("PhD in Chemistry".to_string()),
            organization: "Institute of Physical Chemistry".to_string(),
            email: "e.ivanova@ipc.example".to_string(),
            ..Default::default()
        },
    )
    .await?;
    let smirnov = researchers::create_researcher(
        &db,
        ResearcherCreate {
            surname: "Smirnov".to_string(),
            name: "Alexei".to_string(),
            organization: "Institute of Physical Chemistry".to_string(),
            email: "a.smirnov@ipc.example".to_string(),
            ..Default::default()
        },
    )
    .await?;
    tracing::info!("Seeded 2 researchers");

    let today = Utc::now().date_naive();
    let electrolysis = experiments::create_experiment(
        &db,
        ExperimentCreate {
            name: "Copper sulfate electrolysis".to_string(),
            purpose: "Measure deposition rate at varying current densities".to_string(),
            date_of_event: Some(today - Duration::days(40)),
            status: ExperimentStatus::Completed,
            researcher_id: Some(ivanova.id),
            ..Default::default()
        },
    )
    .await?;
    let titration = experiments::create_experiment(
        &db,
        ExperimentCreate {
            name: "Acid-base titration series".to_string(),
            purpose: "Calibrate indicator response across pH range".to_string(),
            date_of_event: Some(today - Duration::days(7)),
            status: ExperimentStatus::InProgress,
            researcher_id: Some(smirnov.id),
            ..Default::default()
        },
    )
    .await?;
    tracing::info!("Seeded 2 experiments");

    let electrolyte = samples::create_sample(
        &db,
        SampleCreate {
            name: "CuSO4 electrolyte".to_string(),
            chemical_formula: Some("CuSO4".to_string()),
            aggregate_state: Some("liquid".to_string()),
            volume: Some(250.0),
            experiment_id: Some(electrolysis.id),
            ..Default::default()
        },
    )
    .await?;
    samples::create_sample(
        &db,
        SampleCreate {
            name: "HCl standard solution".to_string(),
            chemical_formula: Some("HCl".to_string()),
            aggregate_state: Some("liquid".to_string()),
            volume: Some(100.0),
            experiment_id: Some(titration.id),
            ..Default::default()
        },
    )
    .await?;

    equipment::create_equipment_and_link_to_experiment(
        &db,
        EquipmentCreate {
            name: "DC power supply".to_string(),
            description: Some("0-30 V, 0-5 A bench supply".to_string()),
        },
        electrolysis.id,
    )
    .await?;
    equipment::create_equipment_and_link_to_experiment(
        &db,
        EquipmentCreate {
            name: "Burette, 50 mL".to_string(),
            description: None,
        },
        titration.id,
    )
    .await?;

    methods::create_method(
        &db,
        MethodCreate {
            experiment_id: electrolysis.id,
            name: "Constant-current electrolysis".to_string(),
            description: Some("Copper electrodes, stirred cell".to_string()),
        },
    )
    .await?;

    measurements::create_measurement(
        &db,
        MeasurementCreate {
            sample_id: electrolyte.id,
            method: "gravimetry".to_string(),
            property: "copper deposited".to_string(),
            value: 0.312,
            unit: "g".to_string(),
            accuracy: Some(0.001),
            time_of_event: Some(Utc::now().fixed_offset()),
        },
    )
    .await?;

    results::create_result(
        &db,
        ResultCreate {
            experiment_id: electrolysis.id,
            r#type: "report".to_string(),
            conclusions: Some("Deposition rate linear with current density".to_string()),
            ..Default::default()
        },
    )
    .await?;

    tracing::info!("Demo dataset loaded");
    Ok(())
}
