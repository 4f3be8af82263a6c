use sea_orm_migration::prelude::*;

mod m20250412_000001_create_users_pets;
mod m20250419_000002_create_care_tables;
mod m20250503_000003_create_photos_health_records;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250412_000001_create_users_pets::Migration),
            Box::new(m20250419_000002_create_care_tables::Migration),
            Box::new(m20250503_000003_create_photos_health_records::Migration),
        ]
    }
}
