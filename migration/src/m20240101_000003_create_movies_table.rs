use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // director_id and genre_id carry no foreign key constraint: deleting a
        // director or genre leaves the movie rows pointing at the old id.
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movies::Title).string_len(255).null())
                    .col(ColumnDef::new(Movies::Description).string_len(255).null())
                    .col(ColumnDef::new(Movies::Trailer).string_len(255).null())
                    .col(ColumnDef::new(Movies::Year).integer().null())
                    .col(ColumnDef::new(Movies::Rating).double().null())
                    .col(ColumnDef::new(Movies::GenreId).integer().null())
                    .col(ColumnDef::new(Movies::DirectorId).integer().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movies_title")
                    .table(Movies::Table)
                    .col(Movies::Title)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movies_director_id")
                    .table(Movies::Table)
                    .col(Movies::DirectorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movies_genre_id")
                    .table(Movies::Table)
                    .col(Movies::GenreId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Movies {
    Table,
    Id,
    Title,
    Description,
    Trailer,
    Year,
    Rating,
    GenreId,
    DirectorId,
}
