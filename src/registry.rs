//! Failure-swallowing façade for the desktop frontend.
//!
//! The widget layer works in terms of "did it work" and "what rows do I
//! render", not database errors. Every function here delegates to a service,
//! logs the error on failure and degrades to `None`, `false` or an empty
//! list so the frontend never has to unwind a `DbErr`. Code that needs the
//! error itself should call the service modules directly.

use sea_orm::{DatabaseConnection, DbErr};

use crate::conditions::models::{ConditionCreate, ConditionUpdate, ConditionWithExperiment};
use crate::conditions::services as conditions;
use crate::equipment::models::{EquipmentCreate, EquipmentUpdate};
use crate::equipment::services as equipment;
use crate::experiments::models::{
    ExperimentCreate, ExperimentRelations, ExperimentUpdate, ExperimentWithResearcher,
    MonthlyExperimentCount,
};
use crate::experiments::services as experiments;
use crate::measurements::models::{MeasurementCreate, MeasurementUpdate, MeasurementWithSample};
use crate::measurements::services as measurements;
use crate::methods::models::{MethodCreate, MethodUpdate, MethodWithExperiment};
use crate::methods::services as methods;
use crate::researchers::models::{ResearcherCreate, ResearcherExperimentCount, ResearcherUpdate};
use crate::researchers::services as researchers;
use crate::results::models::{ResultCreate, ResultUpdate, ResultWithExperiment};
use crate::results::services as results;
use crate::samples::models::{SampleCreate, SampleUpdate};
use crate::samples::services as samples;

fn or_none<T>(op: &str, result: Result<T, DbErr>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::error!("{op} failed: {err}");
            None
        }
    }
}

fn or_empty<T>(op: &str, result: Result<Vec<T>, DbErr>) -> Vec<T> {
    result.unwrap_or_else(|err| {
        tracing::error!("{op} failed: {err}");
        Vec::new()
    })
}

fn or_false(op: &str, result: Result<(), DbErr>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::error!("{op} failed: {err}");
            false
        }
    }
}

// Researchers

pub async fn create_researcher(
    db: &DatabaseConnection,
    data: ResearcherCreate,
) -> Option<crate::researchers::models::Model> {
    or_none("create_researcher", researchers::create_researcher(db, data).await)
}

pub async fn get_all_researchers(db: &DatabaseConnection) -> Vec<crate::researchers::models::Model> {
    or_empty("get_all_researchers", researchers::get_all_researchers(db).await)
}

pub async fn get_researcher(
    db: &DatabaseConnection,
    id: i32,
) -> Option<crate::researchers::models::Model> {
    or_none("get_researcher", researchers::get_researcher(db, id).await).flatten()
}

pub async fn update_researcher(
    db: &DatabaseConnection,
    id: i32,
    data: ResearcherUpdate,
) -> Option<crate::researchers::models::Model> {
    or_none("update_researcher", researchers::update_researcher(db, id, data).await)
}

pub async fn delete_researcher(db: &DatabaseConnection, id: i32) -> bool {
    or_false("delete_researcher", researchers::delete_researcher(db, id).await)
}

pub async fn researcher_experiment_counts(
    db: &DatabaseConnection,
) -> Vec<ResearcherExperimentCount> {
    or_empty(
        "researcher_experiment_counts",
        researchers::researcher_experiment_counts(db).await,
    )
}

// Experiments

pub async fn create_experiment(
    db: &DatabaseConnection,
    data: ExperimentCreate,
) -> Option<crate::experiments::models::Model> {
    or_none("create_experiment", experiments::create_experiment(db, data).await)
}

pub async fn get_experiment(
    db: &DatabaseConnection,
    id: i32,
) -> Option<crate::experiments::models::Model> {
    or_none("get_experiment", experiments::get_experiment(db, id).await).flatten()
}

pub async fn update_experiment(
    db: &DatabaseConnection,
    id: i32,
    data: ExperimentUpdate,
) -> Option<crate::experiments::models::Model> {
    or_none("update_experiment", experiments::update_experiment(db, id, data).await)
}

pub async fn delete_experiment(db: &DatabaseConnection, id: i32) -> bool {
    or_false("delete_experiment", experiments::delete_experiment(db, id).await)
}

pub async fn delete_experiment_completely(db: &DatabaseConnection, id: i32) -> bool {
    or_false(
        "delete_experiment_completely",
        experiments::delete_experiment_completely(db, id).await,
    )
}

pub async fn get_all_experiments_with_researchers(
    db: &DatabaseConnection,
) -> Vec<ExperimentWithResearcher> {
    or_empty(
        "get_all_experiments_with_researchers",
        experiments::get_all_experiments_with_researchers(db).await,
    )
}

pub async fn get_my_experiments(
    db: &DatabaseConnection,
    researcher_id: i32,
) -> Vec<crate::experiments::models::Model> {
    or_empty(
        "get_my_experiments",
        experiments::get_my_experiments(db, researcher_id).await,
    )
}

pub async fn get_experiment_with_relations(
    db: &DatabaseConnection,
    id: i32,
) -> Option<ExperimentRelations> {
    or_none(
        "get_experiment_with_relations",
        experiments::experiment_with_relations(db, id).await,
    )
    .flatten()
}

/// Monthly experiment counts for the dashboard chart. `window_days` falls
/// back to the default trailing window when absent.
pub async fn monthly_experiment_counts(
    db: &DatabaseConnection,
    window_days: Option<i64>,
) -> Vec<MonthlyExperimentCount> {
    let window_days = window_days.unwrap_or(experiments::DEFAULT_STATS_WINDOW_DAYS);
    or_empty(
        "monthly_experiment_counts",
        experiments::monthly_experiment_counts(db, window_days).await,
    )
}

// Samples

pub async fn create_sample(
    db: &DatabaseConnection,
    data: SampleCreate,
) -> Option<crate::samples::models::Model> {
    or_none("create_sample", samples::create_sample(db, data).await)
}

pub async fn create_sample_for_researcher(
    db: &DatabaseConnection,
    data: SampleCreate,
    researcher_id: i32,
) -> Option<crate::samples::models::Model> {
    or_none(
        "create_sample_for_researcher",
        samples::create_sample_for_researcher(db, data, researcher_id).await,
    )
}

pub async fn get_all_samples(db: &DatabaseConnection) -> Vec<crate::samples::models::Model> {
    or_empty("get_all_samples", samples::get_all_samples(db).await)
}

pub async fn get_sample(db: &DatabaseConnection, id: i32) -> Option<crate::samples::models::Model> {
    or_none("get_sample", samples::get_sample(db, id).await).flatten()
}

pub async fn update_sample(
    db: &DatabaseConnection,
    id: i32,
    data: SampleUpdate,
) -> Option<crate::samples::models::Model> {
    or_none("update_sample", samples::update_sample(db, id, data).await)
}

pub async fn delete_sample_completely(db: &DatabaseConnection, id: i32) -> bool {
    or_false(
        "delete_sample_completely",
        samples::delete_sample_completely(db, id).await,
    )
}

/// The sample editor's delete button. Same cascade as
/// [`delete_sample_completely`]; a sample is never deleted without its
/// measurements.
pub async fn delete_sample(db: &DatabaseConnection, id: i32) -> bool {
    or_false("delete_sample", samples::delete_sample_completely(db, id).await)
}

pub async fn add_sample_to_experiment(
    db: &DatabaseConnection,
    sample_id: i32,
    experiment_id: i32,
) -> bool {
    or_none(
        "add_sample_to_experiment",
        samples::add_sample_to_experiment(db, sample_id, experiment_id).await,
    )
    .unwrap_or(false)
}

pub async fn remove_sample_from_experiment(
    db: &DatabaseConnection,
    sample_id: i32,
    experiment_id: i32,
) -> bool {
    or_none(
        "remove_sample_from_experiment",
        samples::remove_sample_from_experiment(db, sample_id, experiment_id).await,
    )
    .unwrap_or(false)
}

pub async fn get_samples_for_experiment(
    db: &DatabaseConnection,
    experiment_id: i32,
) -> Vec<crate::samples::models::Model> {
    or_empty(
        "get_samples_for_experiment",
        samples::get_samples_for_experiment(db, experiment_id).await,
    )
}

pub async fn get_experiments_by_sample_id(
    db: &DatabaseConnection,
    sample_id: i32,
) -> Vec<crate::experiments::models::Model> {
    or_empty(
        "get_experiments_by_sample_id",
        samples::get_experiments_by_sample_id(db, sample_id).await,
    )
}

pub async fn get_my_samples(
    db: &DatabaseConnection,
    researcher_id: i32,
) -> Vec<crate::samples::models::Model> {
    or_empty("get_my_samples", samples::get_my_samples(db, researcher_id).await)
}

// Equipment

pub async fn create_equipment(
    db: &DatabaseConnection,
    data: EquipmentCreate,
) -> Option<crate::equipment::models::Model> {
    or_none("create_equipment", equipment::create_equipment(db, data).await)
}

pub async fn get_all_equipment(db: &DatabaseConnection) -> Vec<crate::equipment::models::Model> {
    or_empty("get_all_equipment", equipment::get_all_equipment(db).await)
}

pub async fn get_equipment(
    db: &DatabaseConnection,
    id: i32,
) -> Option<crate::equipment::models::Model> {
    or_none("get_equipment", equipment::get_equipment(db, id).await).flatten()
}

pub async fn update_equipment(
    db: &DatabaseConnection,
    id: i32,
    data: EquipmentUpdate,
) -> Option<crate::equipment::models::Model> {
    or_none("update_equipment", equipment::update_equipment(db, id, data).await)
}

pub async fn delete_equipment(db: &DatabaseConnection, id: i32) -> bool {
    or_false("delete_equipment", equipment::delete_equipment(db, id).await)
}

pub async fn add_equipment_to_experiment(
    db: &DatabaseConnection,
    equipment_id: i32,
    experiment_id: i32,
) -> bool {
    or_none(
        "add_equipment_to_experiment",
        equipment::add_equipment_to_experiment(db, equipment_id, experiment_id).await,
    )
    .unwrap_or(false)
}

pub async fn remove_equipment_from_experiment(
    db: &DatabaseConnection,
    equipment_id: i32,
    experiment_id: i32,
) -> bool {
    or_none(
        "remove_equipment_from_experiment",
        equipment::remove_equipment_from_experiment(db, equipment_id, experiment_id).await,
    )
    .unwrap_or(false)
}

pub async fn create_equipment_and_link_to_experiment(
    db: &DatabaseConnection,
    data: EquipmentCreate,
    experiment_id: i32,
) -> Option<crate::equipment::models::Model> {
    or_none(
        "create_equipment_and_link_to_experiment",
        equipment::create_equipment_and_link_to_experiment(db, data, experiment_id).await,
    )
}

// Methods

pub async fn create_method(
    db: &DatabaseConnection,
    data: MethodCreate,
) -> Option<crate::methods::models::Model> {
    or_none("create_method", methods::create_method(db, data).await)
}

pub async fn get_method(db: &DatabaseConnection, id: i32) -> Option<crate::methods::models::Model> {
    or_none("get_method", methods::get_method(db, id).await).flatten()
}

pub async fn update_method(
    db: &DatabaseConnection,
    id: i32,
    data: MethodUpdate,
) -> Option<crate::methods::models::Model> {
    or_none("update_method", methods::update_method(db, id, data).await)
}

pub async fn delete_method(db: &DatabaseConnection, id: i32) -> bool {
    or_false("delete_method", methods::delete_method(db, id).await)
}

pub async fn get_all_methods(db: &DatabaseConnection) -> Vec<MethodWithExperiment> {
    or_empty("get_all_methods", methods::get_all_methods(db).await)
}

// Results

pub async fn create_result(
    db: &DatabaseConnection,
    data: ResultCreate,
) -> Option<crate::results::models::Model> {
    or_none("create_result", results::create_result(db, data).await)
}

pub async fn get_result(db: &DatabaseConnection, id: i32) -> Option<crate::results::models::Model> {
    or_none("get_result", results::get_result(db, id).await).flatten()
}

pub async fn update_result(
    db: &DatabaseConnection,
    id: i32,
    data: ResultUpdate,
) -> Option<crate::results::models::Model> {
    or_none("update_result", results::update_result(db, id, data).await)
}

pub async fn delete_result(db: &DatabaseConnection, id: i32) -> bool {
    or_false("delete_result", results::delete_result(db, id).await)
}

pub async fn get_all_results(db: &DatabaseConnection) -> Vec<ResultWithExperiment> {
    or_empty("get_all_results", results::get_all_results(db).await)
}

// Conditions

pub async fn create_condition(
    db: &DatabaseConnection,
    data: ConditionCreate,
) -> Option<crate::conditions::models::Model> {
    or_none("create_condition", conditions::create_condition(db, data).await)
}

pub async fn get_condition(
    db: &DatabaseConnection,
    id: i32,
) -> Option<crate::conditions::models::Model> {
    or_none("get_condition", conditions::get_condition(db, id).await).flatten()
}

pub async fn update_condition(
    db: &DatabaseConnection,
    id: i32,
    data: ConditionUpdate,
) -> Option<crate::conditions::models::Model> {
    or_none("update_condition", conditions::update_condition(db, id, data).await)
}

pub async fn delete_condition(db: &DatabaseConnection, id: i32) -> bool {
    or_false("delete_condition", conditions::delete_condition(db, id).await)
}

pub async fn get_all_conditions(db: &DatabaseConnection) -> Vec<ConditionWithExperiment> {
    or_empty("get_all_conditions", conditions::get_all_conditions(db).await)
}

// Measurements

pub async fn create_measurement(
    db: &DatabaseConnection,
    data: MeasurementCreate,
) -> Option<crate::measurements::models::Model> {
    or_none("create_measurement", measurements::create_measurement(db, data).await)
}

pub async fn get_measurement(
    db: &DatabaseConnection,
    id: i32,
) -> Option<crate::measurements::models::Model> {
    or_none("get_measurement", measurements::get_measurement(db, id).await).flatten()
}

pub async fn update_measurement(
    db: &DatabaseConnection,
    id: i32,
    data: MeasurementUpdate,
) -> Option<crate::measurements::models::Model> {
    or_none(
        "update_measurement",
        measurements::update_measurement(db, id, data).await,
    )
}

pub async fn delete_measurement(db: &DatabaseConnection, id: i32) -> bool {
    or_false("delete_measurement", measurements::delete_measurement(db, id).await)
}

pub async fn get_measurements_for_sample(
    db: &DatabaseConnection,
    sample_id: i32,
) -> Vec<crate::measurements::models::Model> {
    or_empty(
        "get_measurements_for_sample",
        measurements::get_measurements_for_sample(db, sample_id).await,
    )
}

pub async fn get_all_measurements(db: &DatabaseConnection) -> Vec<MeasurementWithSample> {
    or_empty("get_all_measurements", measurements::get_all_measurements(db).await)
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::{
        create_test_experiment, create_test_researcher, create_test_sample, setup_test_db,
    };

    #[tokio::test]
    async fn missing_rows_come_back_as_none_not_errors() {
        let db = setup_test_db().await;

        assert!(super::get_researcher(&db, 123).await.is_none());
        assert!(super::get_experiment(&db, 123).await.is_none());
        assert!(super::get_experiment_with_relations(&db, 123).await.is_none());
    }

    #[tokio::test]
    async fn link_outcomes_map_to_booleans() {
        let db = setup_test_db().await;
        let experiment = create_test_experiment(&db, "Registry run", None).await;
        let sample = create_test_sample(&db, "Registry specimen", None).await;

        assert!(super::add_sample_to_experiment(&db, sample.id, experiment.id).await);
        assert!(!super::add_sample_to_experiment(&db, sample.id, experiment.id).await);
        assert!(super::remove_sample_from_experiment(&db, sample.id, experiment.id).await);
        assert!(!super::remove_sample_from_experiment(&db, sample.id, experiment.id).await);
    }

    #[tokio::test]
    async fn monthly_counts_default_window_applies() {
        let db = setup_test_db().await;
        create_test_experiment(&db, "Recent run", None).await;

        let counts = super::monthly_experiment_counts(&db, None).await;
        let total: u64 = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn delete_reports_success() {
        let db = setup_test_db().await;
        let researcher = create_test_researcher(&db, "Boundary", "Case").await;

        assert!(super::delete_researcher(&db, researcher.id).await);
        assert!(super::get_researcher(&db, researcher.id).await.is_none());
    }
}
