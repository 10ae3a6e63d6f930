use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One measured property of a sample, e.g. density by pycnometry.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "measurements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub sample_id: i32,
    pub method: String,
    pub property: String,
    pub value: f64,
    pub unit: String,
    pub accuracy: Option<f64>,
    pub time_of_event: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::samples::models::Entity",
        from = "Column::SampleId",
        to = "crate::samples::models::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Samples,
}

impl Related<crate::samples::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Samples.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MeasurementCreate {
    pub sample_id: i32,
    pub method: String,
    pub property: String,
    pub value: f64,
    pub unit: String,
    pub accuracy: Option<f64>,
    pub time_of_event: Option<DateTimeWithTimeZone>,
}

impl From<MeasurementCreate> for ActiveModel {
    fn from(data: MeasurementCreate) -> Self {
        Self {
            sample_id: Set(data.sample_id),
            method: Set(data.method),
            property: Set(data.property),
            value: Set(data.value),
            unit: Set(data.unit),
            accuracy: Set(data.accuracy),
            time_of_event: Set(data.time_of_event),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MeasurementUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub accuracy: Option<Option<f64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub time_of_event: Option<Option<DateTimeWithTimeZone>>,
}

impl MeasurementUpdate {
    pub fn merge_into(self, mut model: ActiveModel) -> ActiveModel {
        if let Some(method) = self.method {
            model.method = Set(method);
        }
        if let Some(property) = self.property {
            model.property = Set(property);
        }
        if let Some(value) = self.value {
            model.value = Set(value);
        }
        if let Some(unit) = self.unit {
            model.unit = Set(unit);
        }
        if let Some(accuracy) = self.accuracy {
            model.accuracy = Set(accuracy);
        }
        if let Some(time_of_event) = self.time_of_event {
            model.time_of_event = Set(time_of_event);
        }
        model
    }
}

/// List row for the measurements table view, joined with the measured sample.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MeasurementWithSample {
    pub id: i32,
    pub sample_name: String,
    pub method: String,
    pub property: String,
    pub value: f64,
    pub unit: String,
    pub accuracy: Option<f64>,
    pub time_of_event: Option<DateTimeWithTimeZone>,
}
