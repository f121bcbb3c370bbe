use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(pk_auto(Planets::Id))
                    .col(string_len_uniq(Planets::Name, 50))
                    .col(integer(Planets::Diameter))
                    .col(string_len(Planets::Gravity, 50))
                    .col(string_len(Planets::Terrain, 50))
                    .col(string_len(Planets::SurfaceWater, 50))
                    .col(big_integer(Planets::Population))
                    .col(integer(Planets::RotationPeriod))
                    .col(integer(Planets::OrbitalPeriod))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Planets {
    Table,
    Id,
    Name,
    Diameter,
    Gravity,
    Terrain,
    SurfaceWater,
    Population,
    RotationPeriod,
    OrbitalPeriod,
}
