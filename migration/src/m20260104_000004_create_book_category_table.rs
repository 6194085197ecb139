use sea_orm_migration::{prelude::*, schema::*};

use super::m20260104_000002_create_category_table::Category;
use super::m20260104_000003_create_book_table::Book;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(BookCategory::Id))
                    .col(integer(BookCategory::BookId))
                    .col(integer(BookCategory::CategoryId))
                    .col(date(BookCategory::Date))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_category_book_id")
                            .from(BookCategory::Table, BookCategory::BookId)
                            .to(Book::Table, Book::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_category_category_id")
                            .from(BookCategory::Table, BookCategory::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One link per book/category pair
        manager
            .create_index(
                Index::create()
                    .name("idx_book_category_book_id_category_id")
                    .table(BookCategory::Table)
                    .col(BookCategory::BookId)
                    .col(BookCategory::CategoryId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookCategory {
    Table,
    Id,
    BookId,
    CategoryId,
    Date,
}
