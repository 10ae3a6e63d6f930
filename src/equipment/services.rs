use super::models::{ActiveModel, Column, Entity, EquipmentCreate, EquipmentUpdate, Model};
use crate::experiments::equipment_links::models as equipment_links;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, TransactionTrait,
};

/// Creates a piece of equipment, or returns the existing row when one with
/// the same name is already registered. Names are the dedup key because the
/// same instrument is typically re-entered for every experiment that uses it.
pub async fn create_equipment(
    db: &DatabaseConnection,
    data: EquipmentCreate,
) -> Result<Model, DbErr> {
    if let Some(existing) = Entity::find()
        .filter(Column::Name.eq(data.name.clone()))
        .one(db)
        .await?
    {
        return Ok(existing);
    }

    ActiveModel::from(data).insert(db).await
}

pub async fn get_all_equipment(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
    Entity::find().all(db).await
}

pub async fn get_equipment(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(db).await
}

pub async fn update_equipment(
    db: &DatabaseConnection,
    id: i32,
    data: EquipmentUpdate,
) -> Result<Model, DbErr> {
    let existing = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Equipment not found".to_string()))?;

    data.merge_into(existing.into_active_model()).update(db).await
}

/// Removes the equipment and every association row linking it to an
/// experiment. The experiments themselves are untouched.
pub async fn delete_equipment(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
    let txn = db.begin().await?;

    equipment_links::Entity::delete_many()
        .filter(equipment_links::Column::EquipmentId.eq(id))
        .exec(&txn)
        .await?;
    Entity::delete_by_id(id).exec(&txn).await?;

    txn.commit().await
}

/// Links a piece of equipment to an experiment. Returns `false` without
/// inserting when the association already exists.
pub async fn add_equipment_to_experiment(
    db: &DatabaseConnection,
    equipment_id: i32,
    experiment_id: i32,
) -> Result<bool, DbErr> {
    let existing = equipment_links::Entity::find()
        .filter(equipment_links::Column::EquipmentId.eq(equipment_id))
        .filter(equipment_links::Column::ExperimentId.eq(experiment_id))
        .one(db)
        .await?;
    if existing.is_some() {
        return Ok(false);
    }

    let link = equipment_links::ActiveModel {
        equipment_id: Set(equipment_id),
        experiment_id: Set(experiment_id),
        ..Default::default()
    };
    link.insert(db).await?;
    Ok(true)
}

/// Unlinks a piece of equipment from an experiment. Returns `false` when no
/// such association existed.
pub async fn remove_equipment_from_experiment(
    db: &DatabaseConnection,
    equipment_id: i32,
    experiment_id: i32,
) -> Result<bool, DbErr> {
    let outcome = equipment_links::Entity::delete_many()
        .filter(equipment_links::Column::EquipmentId.eq(equipment_id))
        .filter(equipment_links::Column::ExperimentId.eq(experiment_id))
        .exec(db)
        .await?;
    Ok(outcome.rows_affected > 0)
}

/// One-step registration used by the experiment editor: resolves (or creates)
/// the equipment by name and links it to the experiment in one transaction.
pub async fn create_equipment_and_link_to_experiment(
    db: &DatabaseConnection,
    data: EquipmentCreate,
    experiment_id: i32,
) -> Result<Model, DbErr> {
    let txn = db.begin().await?;

    let equipment = match Entity::find()
        .filter(Column::Name.eq(data.name.clone()))
        .one(&txn)
        .await?
    {
        Some(existing) => existing,
        None => ActiveModel::from(data).insert(&txn).await?,
    };

    let linked = equipment_links::Entity::find()
        .filter(equipment_links::Column::EquipmentId.eq(equipment.id))
        .filter(equipment_links::Column::ExperimentId.eq(experiment_id))
        .one(&txn)
        .await?
        .is_some();
    if !linked {
        let link = equipment_links::ActiveModel {
            equipment_id: Set(equipment.id),
            experiment_id: Set(experiment_id),
            ..Default::default()
        };
        link.insert(&txn).await?;
    }

    txn.commit().await?;
    Ok(equipment)
}
