//! Create `recipe` table.
//!
//! `name` is the lookup key and primary key; `description` is free text.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipe::Table)
                    .if_not_exists()
                    .col(text(Recipe::Name).primary_key())
                    .col(text(Recipe::Description).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Recipe::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Recipe { Table, Name, Description }
