use super::models::{
    ActiveModel, Column, Entity, MeasurementCreate, MeasurementUpdate, MeasurementWithSample, Model,
};
use crate::samples::models as samples;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder,
};

pub async fn create_measurement(
    db: &DatabaseConnection,
    data: MeasurementCreate,
) -> Result<Model, DbErr> {
    ActiveModel::from(data).insert(db).await
}

pub async fn get_measurement(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(db).await
}

pub async fn update_measurement(
    db: &DatabaseConnection,
    id: i32,
    data: MeasurementUpdate,
) -> Result<Model, DbErr> {
    let existing = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Measurement not found".to_string()))?;

    data.merge_into(existing.into_active_model()).update(db).await
}

pub async fn delete_measurement(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
    Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}

pub async fn get_measurements_for_sample(
    db: &DatabaseConnection,
    sample_id: i32,
) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::SampleId.eq(sample_id))
        .order_by_desc(Column::TimeOfEvent)
        .all(db)
        .await
}

/// Every measurement joined with its sample, newest first.
pub async fn get_all_measurements(
    db: &DatabaseConnection,
) -> Result<Vec<MeasurementWithSample>, DbErr> {
    let rows = Entity::find()
        .find_also_related(samples::Entity)
        .order_by_desc(Column::TimeOfEvent)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(measurement, sample)| MeasurementWithSample {
            id: measurement.id,
            sample_name: sample.map_or_else(|| "Unknown".to_string(), |s| s.name),
            method: measurement.method,
            property: measurement.property,
            value: measurement.value,
            unit: measurement.unit,
            accuracy: measurement.accuracy,
            time_of_event: measurement.time_of_event,
        })
        .collect())
}
