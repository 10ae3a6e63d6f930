use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "equipment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::experiments::equipment_links::models::Entity")]
    ExperimentLinks,
}

impl Related<crate::experiments::models::Entity> for Entity {
    fn to() -> RelationDef {
        crate::experiments::equipment_links::models::Relation::Experiments.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            crate::experiments::equipment_links::models::Relation::Equipment
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EquipmentCreate {
    pub name: String,
    pub description: Option<String>,
}

impl From<EquipmentCreate> for ActiveModel {
    fn from(data: EquipmentCreate) -> Self {
        Self {
            name: Set(data.name),
            description: Set(data.description),
            ..Default::default()
        }
    }
}

/// Partial update payload. `None` leaves the column untouched; for nullable
/// columns `Some(None)` clears the stored value.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EquipmentUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub description: Option<Option<String>>,
}

impl EquipmentUpdate {
    pub fn merge_into(self, mut model: ActiveModel) -> ActiveModel {
        if let Some(name) = self.name {
            model.name = Set(name);
        }
        if let Some(description) = self.description {
            model.description = Set(description);
        }
        model
    }
}
