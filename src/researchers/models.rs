use sea_orm::ActiveValue::Set;
use sea_orm::FromQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "researchers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub surname: String,
    pub name: String,
    pub patronymic: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub biography: Option<String>,
    pub academic_degree: Option<String>,
    pub organization: String,
    pub email: String,
    pub url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::experiments::researcher_links::models::Entity")]
    ExperimentLinks,
}

impl Related<crate::experiments::researcher_links::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExperimentLinks.def()
    }
}

impl Related<crate::experiments::models::Entity> for Entity {
    fn to() -> RelationDef {
        crate::experiments::researcher_links::models::Relation::Experiments.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            crate::experiments::researcher_links::models::Relation::Researchers
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ResearcherCreate {
    pub surname: String,
    pub name: String,
    pub patronymic: Option<String>,
    pub biography: Option<String>,
    pub academic_degree: Option<String>,
    pub organization: String,
    pub email: String,
    pub url: Option<String>,
}

impl From<ResearcherCreate> for ActiveModel {
    fn from(data: ResearcherCreate) -> Self {
        ActiveModel {
            surname: Set(data.surname),
            name: Set(data.name),
            patronymic: Set(data.patronymic),
            biography: Set(data.biography),
            academic_degree: Set(data.academic_degree),
            organization: Set(data.organization),
            email: Set(data.email),
            url: Set(data.url),
            ..Default::default()
        }
    }
}

/// Partial update payload. `None` leaves the column untouched; for nullable
/// columns `Some(None)` clears the stored value.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ResearcherUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub patronymic: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub biography: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub academic_degree: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub url: Option<Option<String>>,
}

impl ResearcherUpdate {
    pub fn merge_into(self, mut model: ActiveModel) -> ActiveModel {
        if let Some(surname) = self.surname {
            model.surname = Set(surname);
        }
        if let Some(name) = self.name {
            model.name = Set(name);
        }
        if let Some(patronymic) = self.patronymic {
            model.patronymic = Set(patronymic);
        }
        if let Some(biography) = self.biography {
            model.biography = Set(biography);
        }
        if let Some(academic_degree) = self.academic_degree {
            model.academic_degree = Set(academic_degree);
        }
        if let Some(organization) = self.organization {
            model.organization = Set(organization);
        }
        if let Some(email) = self.email {
            model.email = Set(email);
        }
        if let Some(url) = self.url {
            model.url = Set(url);
        }
        model
    }
}

/// Row of the "experiments per researcher" statistic. Researchers without any
/// experiment assignment appear with a zero count.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct ResearcherExperimentCount {
    pub id: i32,
    pub surname: String,
    pub name: String,
    pub experiment_count: i64,
}
