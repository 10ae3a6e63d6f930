use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum ExperimentStatus {
    #[default]
    #[sea_orm(string_value = "planned")]
    Planned,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experiments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub purpose: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub plan: Option<String>,
    pub date_of_event: Option<Date>,
    pub status: ExperimentStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::methods::models::Entity")]
    Methods,
    #[sea_orm(has_many = "crate::results::models::Entity")]
    Results,
    #[sea_orm(has_many = "crate::conditions::models::Entity")]
    Conditions,
    #[sea_orm(has_many = "super::researcher_links::models::Entity")]
    ResearcherLinks,
    #[sea_orm(has_many = "super::sample_links::models::Entity")]
    SampleLinks,
    #[sea_orm(has_many = "super::equipment_links::models::Entity")]
    EquipmentLinks,
}

impl Related<crate::methods::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Methods.def()
    }
}

impl Related<crate::results::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Results.def()
    }
}

impl Related<crate::conditions::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Conditions.def()
    }
}

impl Related<crate::researchers::models::Entity> for Entity {
    fn to() -> RelationDef {
        super::researcher_links::models::Relation::Researchers.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::researcher_links::models::Relation::Experiments
                .def()
                .rev(),
        )
    }
}

impl Related<crate::samples::models::Entity> for Entity {
    fn to() -> RelationDef {
        super::sample_links::models::Relation::Samples.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::sample_links::models::Relation::Experiments.def().rev())
    }
}

impl Related<crate::equipment::models::Entity> for Entity {
    fn to() -> RelationDef {
        super::equipment_links::models::Relation::Equipment.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::equipment_links::models::Relation::Experiments
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ExperimentCreate {
    pub name: String,
    pub purpose: String,
    pub description: Option<String>,
    pub plan: Option<String>,
    pub date_of_event: Option<Date>,
    pub status: ExperimentStatus,
    /// Assigns the new experiment to this researcher in the same transaction.
    pub researcher_id: Option<i32>,
}

/// Partial update payload. `None` leaves the column untouched; for nullable
/// columns `Some(None)` clears the stored value.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ExperimentUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
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
    pub plan: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub date_of_event: Option<Option<Date>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ExperimentStatus>,
}

impl ExperimentUpdate {
    pub fn merge_into(self, mut model: ActiveModel) -> ActiveModel {
        if let Some(name) = self.name {
            model.name = Set(name);
        }
        if let Some(purpose) = self.purpose {
            model.purpose = Set(purpose);
        }
        if let Some(description) = self.description {
            model.description = Set(description);
        }
        if let Some(plan) = self.plan {
            model.plan = Set(plan);
        }
        if let Some(date_of_event) = self.date_of_event {
            model.date_of_event = Set(date_of_event);
        }
        if let Some(status) = self.status {
            model.status = Set(status);
        }
        model
    }
}

/// Flat list row for the experiments table view: the experiment plus the
/// display name of its primary researcher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExperimentWithResearcher {
    pub id: i32,
    pub name: String,
    pub purpose: String,
    pub status: ExperimentStatus,
    pub date_of_event: Option<Date>,
    pub description: Option<String>,
    pub researcher: String,
}

/// Composite read model assembling one experiment with everything attached to
/// it, used by the detail view and the report generators.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExperimentRelations {
    pub experiment: Model,
    pub researchers: Vec<crate::researchers::models::Model>,
    pub methods: Vec<crate::methods::models::Model>,
    pub samples: Vec<crate::samples::models::Model>,
    pub equipment: Vec<crate::equipment::models::Model>,
    pub results: Vec<crate::results::models::Model>,
    pub conditions: Vec<crate::conditions::models::Model>,
    pub measurements: Vec<crate::measurements::models::Model>,
}

/// One bucket of the monthly activity statistic, labelled like "Mar 2026".
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonthlyExperimentCount {
    pub month: String,
    pub count: u64,
}
