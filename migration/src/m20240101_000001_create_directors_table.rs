use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Directors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Directors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Directors::Name).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        // Name uniqueness is checked on create only, so this stays a plain index
        manager
            .create_index(
                Index::create()
                    .name("idx_directors_name")
                    .table(Directors::Table)
                    .col(Directors::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Directors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Directors {
    Table,
    Id,
    Name,
}
