use super::models::{
    ActiveModel, Entity, Model, ResearcherCreate, ResearcherExperimentCount, ResearcherUpdate,
};
use crate::experiments::researcher_links::models as researcher_links;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};

pub async fn create_researcher(
    db: &DatabaseConnection,
    data: ResearcherCreate,
) -> Result<Model, DbErr> {
    let active: ActiveModel = data.into();
    active.insert(db).await
}

pub async fn get_all_researchers(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
    Entity::find().all(db).await
}

pub async fn get_researcher(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(db).await
}

pub async fn update_researcher(
    db: &DatabaseConnection,
    id: i32,
    data: ResearcherUpdate,
) -> Result<Model, DbErr> {
    let existing = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Researcher not found".to_string()))?;

    data.merge_into(existing.into_active_model()).update(db).await
}

/// Removes the researcher and its experiment assignments. The experiments
/// themselves persist, becoming unassigned.
pub async fn delete_researcher(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
    let txn = db.begin().await?;

    researcher_links::Entity::delete_many()
        .filter(researcher_links::Column::ResearcherId.eq(id))
        .exec(&txn)
        .await?;
    Entity::delete_by_id(id).exec(&txn).await?;

    txn.commit().await
}

/// Experiments per researcher, zero-count researchers included, busiest first.
pub async fn researcher_experiment_counts(
    db: &DatabaseConnection,
) -> Result<Vec<ResearcherExperimentCount>, DbErr> {
    Entity::find()
        .select_only()
        .column(super::models::Column::Id)
        .column(super::models::Column::Surname)
        .column(super::models::Column::Name)
        .column_as(researcher_links::Column::Id.count(), "experiment_count")
        .join(
            JoinType::LeftJoin,
            super::models::Relation::ExperimentLinks.def(),
        )
        .group_by(super::models::Column::Id)
        .group_by(super::models::Column::Surname)
        .group_by(super::models::Column::Name)
        .order_by_desc(researcher_links::Column::Id.count())
        .into_model::<ResearcherExperimentCount>()
        .all(db)
        .await
}
