use super::models::{ActiveModel, Entity, Model, SampleCreate, SampleUpdate};
use crate::experiments::models as experiments;
use crate::experiments::models::ExperimentStatus;
use crate::experiments::researcher_links::models as researcher_links;
use crate::experiments::sample_links::models as sample_links;
use crate::measurements::models as measurements;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    JoinType, ModelTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};

pub async fn create_sample(db: &DatabaseConnection, data: SampleCreate) -> Result<Model, DbErr> {
    let txn = db.begin().await?;

    let experiment_id = data.experiment_id;
    let sample = ActiveModel::from(data).insert(&txn).await?;

    if let Some(experiment_id) = experiment_id {
        let link = sample_links::ActiveModel {
            sample_id: Set(sample.id),
            experiment_id: Set(experiment_id),
            ..Default::default()
        };
        link.insert(&txn).await?;
    }

    txn.commit().await?;
    Ok(sample)
}

/// Registers a sample on behalf of a researcher without naming an experiment:
/// the sample is linked to the researcher's earliest experiment, and a
/// catch-all experiment is created first when the researcher has none yet.
/// `experiment_id` on the payload is ignored here.
pub async fn create_sample_for_researcher(
    db: &DatabaseConnection,
    data: SampleCreate,
    researcher_id: i32,
) -> Result<Model, DbErr> {
    let txn = db.begin().await?;

    let sample = ActiveModel::from(data).insert(&txn).await?;

    let default_experiment = experiments::Entity::find()
        .join(
            JoinType::InnerJoin,
            experiments::Relation::ResearcherLinks.def(),
        )
        .filter(researcher_links::Column::ResearcherId.eq(researcher_id))
        .order_by_asc(experiments::Column::Id)
        .one(&txn)
        .await?;

    let experiment_id = match default_experiment {
        Some(experiment) => experiment.id,
        None => {
            let experiment = experiments::ActiveModel {
                name: Set(format!("Researcher {researcher_id} samples")),
                purpose: Set("Catch-all for samples registered outside an experiment".to_string()),
                date_of_event: Set(Some(Utc::now().date_naive())),
                status: Set(ExperimentStatus::InProgress),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            let link = researcher_links::ActiveModel {
                researcher_id: Set(researcher_id),
                experiment_id: Set(experiment.id),
                ..Default::default()
            };
            link.insert(&txn).await?;
            experiment.id
        }
    };

    let link = sample_links::ActiveModel {
        sample_id: Set(sample.id),
        experiment_id: Set(experiment_id),
        ..Default::default()
    };
    link.insert(&txn).await?;

    txn.commit().await?;
    Ok(sample)
}

pub async fn get_all_samples(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
    Entity::find().all(db).await
}

pub async fn get_sample(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(db).await
}

pub async fn update_sample(
    db: &DatabaseConnection,
    id: i32,
    data: SampleUpdate,
) -> Result<Model, DbErr> {
    let existing = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Sample not found".to_string()))?;

    data.merge_into(existing.into_active_model()).update(db).await
}

/// Removes the sample together with its measurements and every association
/// row that links it to an experiment.
pub async fn delete_sample_completely(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
    let txn = db.begin().await?;

    measurements::Entity::delete_many()
        .filter(measurements::Column::SampleId.eq(id))
        .exec(&txn)
        .await?;
    sample_links::Entity::delete_many()
        .filter(sample_links::Column::SampleId.eq(id))
        .exec(&txn)
        .await?;
    Entity::delete_by_id(id).exec(&txn).await?;

    txn.commit().await
}

/// Links a sample to an experiment. Returns `false` without inserting when
/// the association already exists.
pub async fn add_sample_to_experiment(
    db: &DatabaseConnection,
    sample_id: i32,
    experiment_id: i32,
) -> Result<bool, DbErr> {
    let existing = sample_links::Entity::find()
        .filter(sample_links::Column::SampleId.eq(sample_id))
        .filter(sample_links::Column::ExperimentId.eq(experiment_id))
        .one(db)
        .await?;
    if existing.is_some() {
        return Ok(false);
    }

    let link = sample_links::ActiveModel {
        sample_id: Set(sample_id),
        experiment_id: Set(experiment_id),
        ..Default::default()
    };
    link.insert(db).await?;
    Ok(true)
}

/// Unlinks a sample from an experiment. Returns `false` when no such
/// association existed.
pub async fn remove_sample_from_experiment(
    db: &DatabaseConnection,
    sample_id: i32,
    experiment_id: i32,
) -> Result<bool, DbErr> {
    let outcome = sample_links::Entity::delete_many()
        .filter(sample_links::Column::SampleId.eq(sample_id))
        .filter(sample_links::Column::ExperimentId.eq(experiment_id))
        .exec(db)
        .await?;
    Ok(outcome.rows_affected > 0)
}

pub async fn get_samples_for_experiment(
    db: &DatabaseConnection,
    experiment_id: i32,
) -> Result<Vec<Model>, DbErr> {
    let Some(experiment) = experiments::Entity::find_by_id(experiment_id).one(db).await? else {
        return Ok(Vec::new());
    };
    experiment.find_related(Entity).all(db).await
}

pub async fn get_experiments_by_sample_id(
    db: &DatabaseConnection,
    sample_id: i32,
) -> Result<Vec<experiments::Model>, DbErr> {
    let Some(sample) = Entity::find_by_id(sample_id).one(db).await? else {
        return Ok(Vec::new());
    };
    sample.find_related(experiments::Entity).all(db).await
}

/// Samples used by any experiment the researcher is assigned to.
pub async fn get_my_samples(
    db: &DatabaseConnection,
    researcher_id: i32,
) -> Result<Vec<Model>, DbErr> {
    let experiment_ids: Vec<i32> = researcher_links::Entity::find()
        .filter(researcher_links::Column::ResearcherId.eq(researcher_id))
        .all(db)
        .await?
        .into_iter()
        .map(|link| link.experiment_id)
        .collect();

    if experiment_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut sample_ids: Vec<i32> = sample_links::Entity::find()
        .filter(sample_links::Column::ExperimentId.is_in(experiment_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|link| link.sample_id)
        .collect();
    sample_ids.sort_unstable();
    sample_ids.dedup();

    if sample_ids.is_empty() {
        return Ok(Vec::new());
    }

    Entity::find()
        .filter(super::models::Column::Id.is_in(sample_ids))
        .all(db)
        .await
}
