//! Join rows between equipment and the experiments that use it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experiment_equipment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub equipment_id: i32,
    pub experiment_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::equipment::models::Entity",
        from = "Column::EquipmentId",
        to = "crate::equipment::models::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Equipment,
    #[sea_orm(
        belongs_to = "crate::experiments::models::Entity",
        from = "Column::ExperimentId",
        to = "crate::experiments::models::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Experiments,
}

impl Related<crate::equipment::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipment.def()
    }
}

impl Related<crate::experiments::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Experiments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
