use super::equipment_links::models as equipment_links;
use super::models::{
    ActiveModel, Column, Entity, ExperimentCreate, ExperimentRelations, ExperimentUpdate,
    ExperimentWithResearcher, Model, MonthlyExperimentCount, Relation,
};
use super::researcher_links::models as researcher_links;
use super::sample_links::models as sample_links;
use crate::{
    conditions::models as conditions, equipment::models as equipment,
    measurements::models as measurements, methods::models as methods,
    researchers::models as researchers, results::models as results, samples::models as samples,
};
use chrono::{Datelike, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    JoinType, ModelTrait, QueryFilter, QuerySelect, RelationTrait, TransactionTrait,
};
use std::collections::BTreeMap;

/// Number of days the monthly activity statistic looks back by default.
pub const DEFAULT_STATS_WINDOW_DAYS: i64 = 180;

pub async fn create_experiment(
    db: &DatabaseConnection,
    data: ExperimentCreate,
) -> Result<Model, DbErr> {
    let txn = db.begin().await?;

    let active = ActiveModel {
        name: Set(data.name),
        purpose: Set(data.purpose),
        description: Set(data.description),
        plan: Set(data.plan),
        // An experiment without an explicit event date is dated today.
        date_of_event: Set(data.date_of_event.or_else(|| Some(Utc::now().date_naive()))),
        status: Set(data.status),
        ..Default::default()
    };
    let experiment = active.insert(&txn).await?;

    if let Some(researcher_id) = data.researcher_id {
        let link = researcher_links::ActiveModel {
            researcher_id: Set(researcher_id),
            experiment_id: Set(experiment.id),
            ..Default::default()
        };
        link.insert(&txn).await?;
    }

    txn.commit().await?;
    Ok(experiment)
}

pub async fn get_experiment(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(db).await
}

pub async fn update_experiment(
    db: &DatabaseConnection,
    id: i32,
    data: ExperimentUpdate,
) -> Result<Model, DbErr> {
    let existing = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Experiment not found".to_string()))?;

    data.merge_into(existing.into_active_model()).update(db).await
}

/// Partial cascade: removes the experiment, its owned Method/Result/Condition
/// rows and every association row referencing it. Samples, equipment,
/// researchers and measurements are left untouched.
pub async fn delete_experiment(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
    let txn = db.begin().await?;

    researcher_links::Entity::delete_many()
        .filter(researcher_links::Column::ExperimentId.eq(id))
        .exec(&txn)
        .await?;
    equipment_links::Entity::delete_many()
        .filter(equipment_links::Column::ExperimentId.eq(id))
        .exec(&txn)
        .await?;
    sample_links::Entity::delete_many()
        .filter(sample_links::Column::ExperimentId.eq(id))
        .exec(&txn)
        .await?;
    methods::Entity::delete_many()
        .filter(methods::Column::ExperimentId.eq(id))
        .exec(&txn)
        .await?;
    results::Entity::delete_many()
        .filter(results::Column::ExperimentId.eq(id))
        .exec(&txn)
        .await?;
    conditions::Entity::delete_many()
        .filter(conditions::Column::ExperimentId.eq(id))
        .exec(&txn)
        .await?;
    Entity::delete_by_id(id).exec(&txn).await?;

    txn.commit().await
}

/// Full cascade: everything `delete_experiment` removes, plus the measurements
/// of every sample associated with the experiment. Measurements are removed
/// for shared samples too, i.e. samples that other surviving experiments still
/// reference lose their measurements as well.
pub async fn delete_experiment_completely(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
    let txn = db.begin().await?;

    // Collect the sample ids before their association rows go away.
    let sample_ids: Vec<i32> = sample_links::Entity::find()
        .filter(sample_links::Column::ExperimentId.eq(id))
        .all(&txn)
        .await?
        .into_iter()
        .map(|link| link.sample_id)
        .collect();

    if !sample_ids.is_empty() {
        measurements::Entity::delete_many()
            .filter(measurements::Column::SampleId.is_in(sample_ids))
            .exec(&txn)
            .await?;
    }

    researcher_links::Entity::delete_many()
        .filter(researcher_links::Column::ExperimentId.eq(id))
        .exec(&txn)
        .await?;
    equipment_links::Entity::delete_many()
        .filter(equipment_links::Column::ExperimentId.eq(id))
        .exec(&txn)
        .await?;
    sample_links::Entity::delete_many()
        .filter(sample_links::Column::ExperimentId.eq(id))
        .exec(&txn)
        .await?;
    methods::Entity::delete_many()
        .filter(methods::Column::ExperimentId.eq(id))
        .exec(&txn)
        .await?;
    results::Entity::delete_many()
        .filter(results::Column::ExperimentId.eq(id))
        .exec(&txn)
        .await?;
    conditions::Entity::delete_many()
        .filter(conditions::Column::ExperimentId.eq(id))
        .exec(&txn)
        .await?;
    Entity::delete_by_id(id).exec(&txn).await?;

    txn.commit().await
}

/// Flat table view: every experiment with the display name of its primary
/// researcher ("Unassigned" when no researcher is linked).
pub async fn get_all_experiments_with_researchers(
    db: &DatabaseConnection,
) -> Result<Vec<ExperimentWithResearcher>, DbErr> {
    let rows = Entity::find()
        .find_with_related(researchers::Entity)
        .all(db)
        .await?;

    let experiments = rows
        .into_iter()
        .map(|(experiment, researchers)| {
            let researcher = researchers
                .first()
                .map_or_else(|| "Unassigned".to_string(), |r| {
                    format!("{} {}", r.surname, r.name)
                });
            ExperimentWithResearcher {
                id: experiment.id,
                name: experiment.name,
                purpose: experiment.purpose,
                status: experiment.status,
                date_of_event: experiment.date_of_event,
                description: experiment.description,
                researcher,
            }
        })
        .collect();

    Ok(experiments)
}

/// Experiments assigned to one researcher.
pub async fn get_my_experiments(
    db: &DatabaseConnection,
    researcher_id: i32,
) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .join(JoinType::InnerJoin, Relation::ResearcherLinks.def())
        .filter(researcher_links::Column::ResearcherId.eq(researcher_id))
        .all(db)
        .await
}

/// Assembles one experiment together with its researchers, methods, samples,
/// equipment, results, conditions and the measurements of its samples.
///
/// A missing experiment yields `Ok(None)`. A failing relation sub-query is
/// logged and degrades to an empty list so a single broken relation does not
/// take the whole detail view down.
pub async fn experiment_with_relations(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<ExperimentRelations>, DbErr> {
    let Some(experiment) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let researchers = experiment
        .find_related(researchers::Entity)
        .all(db)
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(experiment_id = id, "failed to load researchers: {err}");
            Vec::new()
        });

    let methods = methods::Entity::find()
        .filter(methods::Column::ExperimentId.eq(id))
        .all(db)
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(experiment_id = id, "failed to load methods: {err}");
            Vec::new()
        });

    let samples = experiment
        .find_related(samples::Entity)
        .all(db)
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(experiment_id = id, "failed to load samples: {err}");
            Vec::new()
        });

    let equipment = experiment
        .find_related(equipment::Entity)
        .all(db)
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(experiment_id = id, "failed to load equipment: {err}");
            Vec::new()
        });

    let results = results::Entity::find()
        .filter(results::Column::ExperimentId.eq(id))
        .all(db)
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(experiment_id = id, "failed to load results: {err}");
            Vec::new()
        });

    let conditions = conditions::Entity::find()
        .filter(conditions::Column::ExperimentId.eq(id))
        .all(db)
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(experiment_id = id, "failed to load conditions: {err}");
            Vec::new()
        });

    let sample_ids: Vec<i32> = samples.iter().map(|sample| sample.id).collect();
    let measurements = if sample_ids.is_empty() {
        Vec::new()
    } else {
        measurements::Entity::find()
            .filter(measurements::Column::SampleId.is_in(sample_ids))
            .all(db)
            .await
            .unwrap_or_else(|err| {
                tracing::warn!(experiment_id = id, "failed to load measurements: {err}");
                Vec::new()
            })
    };

    Ok(Some(ExperimentRelations {
        experiment,
        researchers,
        methods,
        samples,
        equipment,
        results,
        conditions,
        measurements,
    }))
}

/// Experiments per calendar month inside the trailing window, labelled like
/// "Mar 2026" and ordered chronologically. Months without experiments are
/// omitted rather than zero-filled.
pub async fn monthly_experiment_counts(
    db: &DatabaseConnection,
    window_days: i64,
) -> Result<Vec<MonthlyExperimentCount>, DbErr> {
    let cutoff = Utc::now().date_naive() - chrono::Duration::days(window_days);

    let experiments = Entity::find()
        .filter(Column::DateOfEvent.gte(cutoff))
        .all(db)
        .await?;

    let mut buckets: BTreeMap<(i32, u32), MonthlyExperimentCount> = BTreeMap::new();
    for experiment in experiments {
        if let Some(date) = experiment.date_of_event {
            buckets
                .entry((date.year(), date.month()))
                .or_insert_with(|| MonthlyExperimentCount {
                    month: date.format("%b %Y").to_string(),
                    count: 0,
                })
                .count += 1;
        }
    }

    Ok(buckets.into_values().collect())
}
