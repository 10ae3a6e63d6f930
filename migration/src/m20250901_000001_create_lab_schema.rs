use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    #[allow(clippy::too_many_lines)] // Consolidated schema requires extensive table definitions
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Researchers table
        manager
            .create_table(
                Table::create()
                    .table(Researchers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Researchers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Researchers::Surname).string_len(100).not_null())
                    .col(ColumnDef::new(Researchers::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Researchers::Patronymic).string_len(100))
                    .col(ColumnDef::new(Researchers::Biography).text())
                    .col(ColumnDef::new(Researchers::AcademicDegree).string_len(100))
                    .col(
                        ColumnDef::new(Researchers::Organization)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Researchers::Email).string_len(100).not_null())
                    .col(ColumnDef::new(Researchers::Url).string_len(200))
                    .to_owned(),
            )
            .await?;

        // Experiments table
        manager
            .create_table(
                Table::create()
                    .table(Experiments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Experiments::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Experiments::Purpose).string_len(500).not_null())
                    .col(ColumnDef::new(Experiments::Description).text())
                    .col(ColumnDef::new(Experiments::Plan).text())
                    .col(ColumnDef::new(Experiments::DateOfEvent).date())
                    .col(ColumnDef::new(Experiments::Status).string_len(20).not_null())
                    .to_owned(),
            )
            .await?;

        // Samples table
        manager
            .create_table(
                Table::create()
                    .table(Samples::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Samples::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Samples::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Samples::Description).text())
                    .col(ColumnDef::new(Samples::ChemicalFormula).string_len(100))
                    .col(ColumnDef::new(Samples::AggregateState).string_len(100))
                    .col(ColumnDef::new(Samples::Mass).double())
                    .col(ColumnDef::new(Samples::Volume).double())
                    .to_owned(),
            )
            .await?;

        // Equipment table. Name de-duplication is enforced by the services
        // (check-before-insert), not by a unique constraint.
        manager
            .create_table(
                Table::create()
                    .table(Equipment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Equipment::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Equipment::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Equipment::Description).text())
                    .to_owned(),
            )
            .await?;

        // Methods table
        manager
            .create_table(
                Table::create()
                    .table(Methods::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Methods::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Methods::ExperimentId).integer().not_null())
                    .col(ColumnDef::new(Methods::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Methods::Description).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_methods_experiment_id")
                            .from(Methods::Table, Methods::ExperimentId)
                            .to(Experiments::Table, Experiments::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Results table
        manager
            .create_table(
                Table::create()
                    .table(Results::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Results::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Results::ExperimentId).integer().not_null())
                    .col(ColumnDef::new(Results::Type).string_len(100).not_null())
                    .col(ColumnDef::new(Results::Description).text())
                    .col(ColumnDef::new(Results::Conclusions).text())
                    .col(ColumnDef::new(Results::Url).string_len(255))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_results_experiment_id")
                            .from(Results::Table, Results::ExperimentId)
                            .to(Experiments::Table, Experiments::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Conditions table
        manager
            .create_table(
                Table::create()
                    .table(Conditions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Conditions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Conditions::ExperimentId).integer().not_null())
                    .col(ColumnDef::new(Conditions::Temperature).decimal_len(5, 2))
                    .col(ColumnDef::new(Conditions::Pressure).decimal_len(6, 2))
                    .col(ColumnDef::new(Conditions::Humidity).decimal_len(5, 2))
                    .col(ColumnDef::new(Conditions::Ph).decimal_len(3, 2))
                    .col(ColumnDef::new(Conditions::Illumination).string_len(100))
                    .col(ColumnDef::new(Conditions::Duration).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conditions_experiment_id")
                            .from(Conditions::Table, Conditions::ExperimentId)
                            .to(Experiments::Table, Experiments::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Measurements table
        manager
            .create_table(
                Table::create()
                    .table(Measurements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Measurements::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Measurements::SampleId).integer().not_null())
                    .col(ColumnDef::new(Measurements::Method).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Measurements::Property)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Measurements::Value).double().not_null())
                    .col(ColumnDef::new(Measurements::Unit).string_len(50).not_null())
                    .col(ColumnDef::new(Measurements::Accuracy).double())
                    .col(ColumnDef::new(Measurements::TimeOfEvent).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_measurements_sample_id")
                            .from(Measurements::Table, Measurements::SampleId)
                            .to(Samples::Table, Samples::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Association tables. Pair uniqueness is application-enforced.
        manager
            .create_table(
                Table::create()
                    .table(ExperimentResearchers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExperimentResearchers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ExperimentResearchers::ResearcherId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExperimentResearchers::ExperimentId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experiment_researchers_researcher_id")
                            .from(
                                ExperimentResearchers::Table,
                                ExperimentResearchers::ResearcherId,
                            )
                            .to(Researchers::Table, Researchers::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experiment_researchers_experiment_id")
                            .from(
                                ExperimentResearchers::Table,
                                ExperimentResearchers::ExperimentId,
                            )
                            .to(Experiments::Table, Experiments::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExperimentSamples::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExperimentSamples::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ExperimentSamples::SampleId).integer().not_null())
                    .col(
                        ColumnDef::new(ExperimentSamples::ExperimentId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experiment_samples_sample_id")
                            .from(ExperimentSamples::Table, ExperimentSamples::SampleId)
                            .to(Samples::Table, Samples::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experiment_samples_experiment_id")
                            .from(ExperimentSamples::Table, ExperimentSamples::ExperimentId)
                            .to(Experiments::Table, Experiments::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExperimentEquipment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExperimentEquipment::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ExperimentEquipment::EquipmentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExperimentEquipment::ExperimentId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experiment_equipment_equipment_id")
                            .from(ExperimentEquipment::Table, ExperimentEquipment::EquipmentId)
                            .to(Equipment::Table, Equipment::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experiment_equipment_experiment_id")
                            .from(ExperimentEquipment::Table, ExperimentEquipment::ExperimentId)
                            .to(Experiments::Table, Experiments::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup indexes for the foreign keys the cascades filter on
        manager
            .create_index(
                Index::create()
                    .name("idx_methods_experiment_id")
                    .table(Methods::Table)
                    .col(Methods::ExperimentId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_results_experiment_id")
                    .table(Results::Table)
                    .col(Results::ExperimentId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_conditions_experiment_id")
                    .table(Conditions::Table)
                    .col(Conditions::ExperimentId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_measurements_sample_id")
                    .table(Measurements::Table)
                    .col(Measurements::SampleId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse dependency order
        manager
            .drop_table(Table::drop().table(ExperimentEquipment::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ExperimentSamples::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ExperimentResearchers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Measurements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Conditions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Results::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Methods::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Equipment::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Samples::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Experiments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Researchers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Researchers {
    Table,
    Id,
    Surname,
    Name,
    Patronymic,
    Biography,
    AcademicDegree,
    Organization,
    Email,
    Url,
}

#[derive(DeriveIden)]
enum Experiments {
    Table,
    Id,
    Name,
    Purpose,
    Description,
    Plan,
    DateOfEvent,
    Status,
}

#[derive(DeriveIden)]
enum Samples {
    Table,
    Id,
    Name,
    Description,
    ChemicalFormula,
    AggregateState,
    Mass,
    Volume,
}

#[derive(DeriveIden)]
enum Equipment {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum Methods {
    Table,
    Id,
    ExperimentId,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum Results {
    Table,
    Id,
    ExperimentId,
    Type,
    Description,
    Conclusions,
    Url,
}

#[derive(DeriveIden)]
enum Conditions {
    Table,
    Id,
    ExperimentId,
    Temperature,
    Pressure,
    Humidity,
    Ph,
    Illumination,
    Duration,
}

#[derive(DeriveIden)]
enum Measurements {
    Table,
    Id,
    SampleId,
    Method,
    Property,
    Value,
    Unit,
    Accuracy,
    TimeOfEvent,
}

#[derive(DeriveIden)]
enum ExperimentResearchers {
    Table,
    Id,
    ResearcherId,
    ExperimentId,
}

#[derive(DeriveIden)]
enum ExperimentSamples {
    Table,
    Id,
    SampleId,
    ExperimentId,
}

#[derive(DeriveIden)]
enum ExperimentEquipment {
    Table,
    Id,
    EquipmentId,
    ExperimentId,
}
