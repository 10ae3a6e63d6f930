use super::models::{ActiveModel, Entity, Model, ResultCreate, ResultUpdate, ResultWithExperiment};
use crate::experiments::models as experiments;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, QueryOrder,
};

pub async fn create_result(db: &DatabaseConnection, data: ResultCreate) -> Result<Model, DbErr> {
    ActiveModel::from(data).insert(db).await
}

pub async fn get_result(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(db).await
}

pub async fn update_result(
    db: &DatabaseConnection,
    id: i32,
    data: ResultUpdate,
) -> Result<Model, DbErr> {
    let existing = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Result not found".to_string()))?;

    data.merge_into(existing.into_active_model()).update(db).await
}

pub async fn delete_result(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
    Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}

/// Every result joined with its experiment, grouped by experiment name.
pub async fn get_all_results(db: &DatabaseConnection) -> Result<Vec<ResultWithExperiment>, DbErr> {
    let rows = Entity::find()
        .find_also_related(experiments::Entity)
        .order_by_asc(experiments::Column::Name)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(result, experiment)| ResultWithExperiment {
            id: result.id,
            r#type: result.r#type,
            description: result.description,
            conclusions: result.conclusions,
            url: result.url,
            experiment_name: experiment.map_or_else(|| "Unknown".to_string(), |e| e.name),
        })
        .collect())
}
