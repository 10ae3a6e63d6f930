use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "samples")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub chemical_formula: Option<String>,
    pub aggregate_state: Option<String>,
    /// Grams.
    pub mass: Option<f64>,
    /// Millilitres.
    pub volume: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::measurements::models::Entity")]
    Measurements,
    #[sea_orm(has_many = "crate::experiments::sample_links::models::Entity")]
    ExperimentLinks,
}

impl Related<crate::measurements::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Measurements.def()
    }
}

impl Related<crate::experiments::models::Entity> for Entity {
    fn to() -> RelationDef {
        crate::experiments::sample_links::models::Relation::Experiments.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            crate::experiments::sample_links::models::Relation::Samples
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SampleCreate {
    pub name: String,
    pub description: Option<String>,
    pub chemical_formula: Option<String>,
    pub aggregate_state: Option<String>,
    pub mass: Option<f64>,
    pub volume: Option<f64>,
    /// Links the new sample to this experiment in the same transaction.
    pub experiment_id: Option<i32>,
}

impl From<SampleCreate> for ActiveModel {
    fn from(data: SampleCreate) -> Self {
        Self {
            name: Set(data.name),
            description: Set(data.description),
            chemical_formula: Set(data.chemical_formula),
            aggregate_state: Set(data.aggregate_state),
            mass: Set(data.mass),
            volume: Set(data.volume),
            ..Default::default()
        }
    }
}

/// Partial update payload. `None` leaves the column untouched; for nullable
/// columns `Some(None)` clears the stored value.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SampleUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub chemical_formula: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub aggregate_state: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub mass: Option<Option<f64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub volume: Option<Option<f64>>,
}

impl SampleUpdate {
    pub fn merge_into(self, mut model: ActiveModel) -> ActiveModel {
        if let Some(name) = self.name {
            model.name = Set(name);
        }
        if let Some(description) = self.description {
            model.description = Set(description);
        }
        if let Some(chemical_formula) = self.chemical_formula {
            model.chemical_formula = Set(chemical_formula);
        }
        if let Some(aggregate_state) = self.aggregate_state {
            model.aggregate_state = Set(aggregate_state);
        }
        if let Some(mass) = self.mass {
            model.mass = Set(mass);
        }
        if let Some(volume) = self.volume {
            model.volume = Set(volume);
        }
        model
    }
}
