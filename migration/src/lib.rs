pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_directors_table;
mod m20240101_000002_create_genres_table;
mod m20240101_000003_create_movies_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_directors_table::Migration),
            Box::new(m20240101_000002_create_genres_table::Migration),
            Box::new(m20240101_000003_create_movies_table::Migration),
        ]
    }
}
