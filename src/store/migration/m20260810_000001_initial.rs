use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .col(pk_auto(User::Id))
                    .col(string(User::Name))
                    .col(string(User::Email))
                    .col(integer(User::Age))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .col(pk_auto(Product::Id))
                    .col(timestamp(Product::CreatedAt))
                    .col(timestamp(Product::UpdatedAt))
                    .col(timestamp_null(Product::DeletedAt))
                    .col(string(Product::Code))
                    .col(unsigned(Product::Price))
                    .to_owned(),
            )
            .await?;

        // soft-delete lookups go through this index
        manager
            .create_index(
                Index::create()
                    .name("idx_product_deleted_at")
                    .table(Product::Table)
                    .col(Product::DeletedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut td = Table::drop();
        td.table(User::Table).table(Product::Table);
        manager.drop_table(td).await?;

        Ok(())
    }
}

#[derive(Iden)]
pub enum User {
    Table,
    Id,
    Name,
    Email,
    Age,
}

#[derive(Iden)]
pub enum Product {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
    Code,
    Price,
}
