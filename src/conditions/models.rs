use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ambient conditions recorded for one experiment run.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "conditions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub experiment_id: i32,
    /// Degrees Celsius.
    #[sea_orm(column_type = "Decimal(Some((5, 2)))", nullable)]
    pub temperature: Option<Decimal>,
    /// Kilopascals.
    #[sea_orm(column_type = "Decimal(Some((6, 2)))", nullable)]
    pub pressure: Option<Decimal>,
    /// Relative humidity, percent.
    #[sea_orm(column_type = "Decimal(Some((5, 2)))", nullable)]
    pub humidity: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((3, 2)))", nullable)]
    pub ph: Option<Decimal>,
    pub illumination: Option<String>,
    pub duration: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::experiments::models::Entity",
        from = "Column::ExperimentId",
        to = "crate::experiments::models::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Experiments,
}

impl Related<crate::experiments::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Experiments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConditionCreate {
    pub experiment_id: i32,
    pub temperature: Option<Decimal>,
    pub pressure: Option<Decimal>,
    pub humidity: Option<Decimal>,
    pub ph: Option<Decimal>,
    pub illumination: Option<String>,
    pub duration: Option<DateTimeWithTimeZone>,
}

impl From<ConditionCreate> for ActiveModel {
    fn from(data: ConditionCreate) -> Self {
        Self {
            experiment_id: Set(data.experiment_id),
            temperature: Set(data.temperature),
            pressure: Set(data.pressure),
            humidity: Set(data.humidity),
            ph: Set(data.ph),
            illumination: Set(data.illumination),
            duration: Set(data.duration),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConditionUpdate {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub temperature: Option<Option<Decimal>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub pressure: Option<Option<Decimal>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub humidity: Option<Option<Decimal>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub ph: Option<Option<Decimal>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub illumination: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub duration: Option<Option<DateTimeWithTimeZone>>,
}

impl ConditionUpdate {
    pub fn merge_into(self, mut model: ActiveModel) -> ActiveModel {
        if let Some(temperature) = self.temperature {
            model.temperature = Set(temperature);
        }
        if let Some(pressure) = self.pressure {
            model.pressure = Set(pressure);
        }
        if let Some(humidity) = self.humidity {
            model.humidity = Set(humidity);
        }
        if let Some(ph) = self.ph {
            model.ph = Set(ph);
        }
        if let Some(illumination) = self.illumination {
            model.illumination = Set(illumination);
        }
        if let Some(duration) = self.duration {
            model.duration = Set(duration);
        }
        model
    }
}

/// List row for the conditions table view, joined with the owning experiment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConditionWithExperiment {
    pub id: i32,
    pub temperature: Option<Decimal>,
    pub pressure: Option<Decimal>,
    pub humidity: Option<Decimal>,
    pub ph: Option<Decimal>,
    pub illumination: Option<String>,
    pub duration: Option<DateTimeWithTimeZone>,
    pub experiment_name: String,
}
