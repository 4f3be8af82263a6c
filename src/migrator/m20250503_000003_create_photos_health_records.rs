use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create Photos Table
        manager
            .create_table(
                Table::create()
                    .table(Photos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Photos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Photos::PetId).integer().not_null())
                    .col(ColumnDef::new(Photos::Url).string().not_null())
                    .col(ColumnDef::new(Photos::Caption).string().null())
                    .col(ColumnDef::new(Photos::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-photo-pet_id")
                            .from(Photos::Table, Photos::PetId)
                            .to(Pets::Table, Pets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create Health Records Table
        manager
            .create_table(
                Table::create()
                    .table(HealthRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HealthRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HealthRecords::PetId).integer().not_null())
                    .col(
                        ColumnDef::new(HealthRecords::RecordDate)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HealthRecords::RecordType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(HealthRecords::Title).string().not_null())
                    .col(ColumnDef::new(HealthRecords::Value).string().null())
                    .col(ColumnDef::new(HealthRecords::Unit).string().null())
                    .col(ColumnDef::new(HealthRecords::Notes).text().null())
                    .col(
                        ColumnDef::new(HealthRecords::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HealthRecords::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-health_record-pet_id")
                            .from(HealthRecords::Table, HealthRecords::PetId)
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
            .drop_table(Table::drop().table(HealthRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Photos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Pets {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Photos {
    Table,
    Id,
    PetId,
    Url,
    Caption,
    CreatedAt,
}

#[derive(DeriveIden)]
enum HealthRecords {
    Table,
    Id,
    PetId,
    RecordDate,
    RecordType,
    Title,
    Value,
    Unit,
    Notes,
    CreatedAt,
    UpdatedAt,
}
