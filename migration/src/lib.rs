pub use sea_orm_migration::prelude::*;

mod m20220509_000001_user;
mod m20220509_000002_character;
mod m20220509_000003_planet;
mod m20220509_000004_favorite;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220509_000001_user::Migration),
            Box::new(m20220509_000002_character::Migration),
            Box::new(m20220509_000003_planet::Migration),
            Box::new(m20220509_000004_favorite::Migration),
        ]
    }
}
