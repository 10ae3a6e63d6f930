//! Join rows between researchers and the experiments they conduct. Pure
//! association records with no payload beyond the two foreign keys.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experiment_researchers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub researcher_id: i32,
    pub experiment_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::researchers::models::Entity",
        from = "Column::ResearcherId",
        to = "crate::researchers::models::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Researchers,
    #[sea_orm(
        belongs_to = "crate::experiments::models::Entity",
        from = "Column::ExperimentId",
        to = "crate::experiments::models::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Experiments,
}

impl Related<crate::researchers::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Researchers.def()
    }
}

impl Related<crate::experiments::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Experiments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
