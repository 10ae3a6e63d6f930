use super::models::{
    ActiveModel, ConditionCreate, ConditionUpdate, ConditionWithExperiment, Entity, Model,
};
use crate::experiments::models as experiments;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, QueryOrder,
};

pub async fn create_condition(
    db: &DatabaseConnection,
    data: ConditionCreate,
) -> Result<Model, DbErr> {
    ActiveModel::from(data).insert(db).await
}

pub async fn get_condition(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(db).await
}

pub async fn update_condition(
    db: &DatabaseConnection,
    id: i32,
    data: ConditionUpdate,
) -> Result<Model, DbErr> {
    let existing = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Condition not found".to_string()))?;

    data.merge_into(existing.into_active_model()).update(db).await
}

pub async fn delete_condition(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
    Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}

/// Every condition record joined with its experiment, grouped by experiment
/// name.
pub async fn get_all_conditions(
    db: &DatabaseConnection,
) -> Result<Vec<ConditionWithExperiment>, DbErr> {
    let rows = Entity::find()
        .find_also_related(experiments::Entity)
        .order_by_asc(experiments::Column::Name)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(condition, experiment)| ConditionWithExperiment {
            id: condition.id,
            temperature: condition.temperature,
            pressure: condition.pressure,
            humidity: condition.humidity,
            ph: condition.ph,
            illumination: condition.illumination,
            duration: condition.duration,
            experiment_name: experiment.map_or_else(|| "Unknown".to_string(), |e| e.name),
        })
        .collect())
}
