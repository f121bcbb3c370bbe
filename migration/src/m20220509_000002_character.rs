use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(pk_auto(Characters::Id))
                    .col(string_len_uniq(Characters::Name, 50))
                    .col(string_len(Characters::BirthYear, 25))
                    .col(string_len(Characters::Gender, 25))
                    .col(integer(Characters::Height))
                    .col(integer(Characters::Mass))
                    .col(string_len(Characters::SkinColor, 25))
                    .col(string_len(Characters::EyeColor, 25))
                    .col(string_len(Characters::HairColor, 25))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Characters {
    Table,
    Id,
    Name,
    BirthYear,
    Gender,
    Height,
    Mass,
    SkinColor,
    EyeColor,
    HairColor,
}
