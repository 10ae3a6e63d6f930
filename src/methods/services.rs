use super::models::{ActiveModel, Entity, MethodCreate, MethodUpdate, MethodWithExperiment, Model};
use crate::experiments::models as experiments;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, QueryOrder,
};

pub async fn create_method(db: &DatabaseConnection, data: MethodCreate) -> Result<Model, DbErr> {
    ActiveModel::from(data).insert(db).await
}

pub async fn get_method(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(db).await
}

pub async fn update_method(
    db: &DatabaseConnection,
    id: i32,
    data: MethodUpdate,
) -> Result<Model, DbErr> {
    let existing = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Method not found".to_string()))?;

    data.merge_into(existing.into_active_model()).update(db).await
}

pub async fn delete_method(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
    Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}

/// Every method joined with its experiment, grouped by experiment name.
pub async fn get_all_methods(db: &DatabaseConnection) -> Result<Vec<MethodWithExperiment>, DbErr> {
    let rows = Entity::find()
        .find_also_related(experiments::Entity)
        .order_by_asc(experiments::Column::Name)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(method, experiment)| MethodWithExperiment {
            id: method.id,
            name: method.name,
            description: method.description,
            experiment_name: experiment.map_or_else(|| "Unknown".to_string(), |e| e.name),
        })
        .collect())
}
