use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub experiment_id: i32,
    /// Kind of deliverable, e.g. "dataset", "report", "publication".
    pub r#type: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub conclusions: Option<String>,
    pub url: Option<String>,
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
pub struct ResultCreate {
    pub experiment_id: i32,
    pub r#type: String,
    pub description: Option<String>,
    pub conclusions: Option<String>,
    pub url: Option<String>,
}

impl From<ResultCreate> for ActiveModel {
    fn from(data: ResultCreate) -> Self {
        Self {
            experiment_id: Set(data.experiment_id),
            r#type: Set(data.r#type),
            description: Set(data.description),
            conclusions: Set(data.conclusions),
            url: Set(data.url),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ResultUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
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
    pub conclusions: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub url: Option<Option<String>>,
}

impl ResultUpdate {
    pub fn merge_into(self, mut model: ActiveModel) -> ActiveModel {
        if let Some(r#type) = self.r#type {
            model.r#type = Set(r#type);
        }
        if let Some(description) = self.description {
            model.description = Set(description);
        }
        if let Some(conclusions) = self.conclusions {
            model.conclusions = Set(conclusions);
        }
        if let Some(url) = self.url {
            model.url = Set(url);
        }
        model
    }
}

/// List row for the results table view, joined with the owning experiment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultWithExperiment {
    pub id: i32,
    pub r#type: String,
    pub description: Option<String>,
    pub conclusions: Option<String>,
    pub url: Option<String>,
    pub experiment_name: String,
}
