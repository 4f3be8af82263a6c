use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create Vet Visits Table
        manager
            .create_table(
                Table::create()
                    .table(VetVisits::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VetVisits::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(VetVisits::PetId).integer().not_null())
                    .col(ColumnDef::new(VetVisits::VisitDate).date_time().not_null())
                    .col(ColumnDef::new(VetVisits::Reason).string().not_null())
                    .col(ColumnDef::new(VetVisits::Diagnosis).string().null())
                    .col(ColumnDef::new(VetVisits::Treatment).string().null())
                    .col(ColumnDef::new(VetVisits::VetName).string().null())
                    .col(ColumnDef::new(VetVisits::VetClinic).string().null())
                    .col(ColumnDef::new(VetVisits::Cost).double().null())
                    .col(ColumnDef::new(VetVisits::Notes).text().null())
                    .col(ColumnDef::new(VetVisits::NextVisit).date_time().null())
                    .col(ColumnDef::new(VetVisits::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(VetVisits::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-vet_visit-pet_id")
                            .from(VetVisits::Table, VetVisits::PetId)
                            .to(Pets::Table, Pets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create Medications Table
        manager
            .create_table(
                Table::create()
                    .table(Medications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Medications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Medications::PetId).integer().not_null())
                    .col(ColumnDef::new(Medications::Name).string().not_null())
                    .col(ColumnDef::new(Medications::Dosage).string().not_null())
                    .col(ColumnDef::new(Medications::Frequency).string().not_null())
                    .col(ColumnDef::new(Medications::TimeOfDay).string().not_null())
                    .col(
                        ColumnDef::new(Medications::StartDate)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Medications::EndDate).date_time().null())
                    .col(ColumnDef::new(Medications::RefillDate).date_time().null())
                    .col(
                        ColumnDef::new(Medications::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Medications::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Medications::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-medication-pet_id")
                            .from(Medications::Table, Medications::PetId)
                            .to(Pets::Table, Pets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create Feeding Schedules Table
        manager
            .create_table(
                Table::create()
                    .table(FeedingSchedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeedingSchedules::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FeedingSchedules::PetId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeedingSchedules::MealName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FeedingSchedules::Time).string().not_null())
                    .col(
                        ColumnDef::new(FeedingSchedules::FoodType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeedingSchedules::Portion)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeedingSchedules::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(FeedingSchedules::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeedingSchedules::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-feeding_schedule-pet_id")
                            .from(FeedingSchedules::Table, FeedingSchedules::PetId)
                            .to(Pets::Table, Pets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeedingSchedules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Medications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(VetVisits::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Pets {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum VetVisits {
    Table,
    Id,
    PetId,
    VisitDate,
    Reason,
    Diagnosis,
    Treatment,
    VetName,
    VetClinic,
    Cost,
    Notes,
    NextVisit,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Medications {
    Table,
    Id,
    PetId,
    Name,
    Dosage,
    Frequency,
    TimeOfDay,
    StartDate,
    EndDate,
    RefillDate,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum FeedingSchedules {
    Table,
    Id,
    PetId,
    MealName,
    Time,
    FoodType,
    Portion,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
