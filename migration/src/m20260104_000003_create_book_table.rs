use sea_orm_migration::{prelude::*, schema::*};

use super::m20260104_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(pk_auto(Book::Id))
                    .col(integer(Book::UserId))
                    .col(string_len(Book::Title, 200))
                    .col(string_len(Book::Author, 200))
                    .col(string_len_null(Book::IsbnNumber, 13))
                    .col(string_null(Book::ImgUrl))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_user_id")
                            .from(Book::Table, Book::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Book::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Book {
    Table,
    Id,
    UserId,
    Title,
    Author,
    IsbnNumber,
    ImgUrl,
}
