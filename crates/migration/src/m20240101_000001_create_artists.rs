//! Create `artists` table.
//!
//! One row per artist, keyed by the client-chosen `username`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Artists::Table)
                    .if_not_exists()
                    .col(string_len(Artists::Username, 255).primary_key())
                    .col(string_len(Artists::ArtistName, 255).not_null())
                    .col(string_len(Artists::ArtistGenre, 255).not_null())
                    .col(integer(Artists::AlbumsRecorded).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Artists::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Artists { Table, Username, ArtistName, ArtistGenre, AlbumsRecorded }
