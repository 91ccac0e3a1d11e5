use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;
use crate::db::repositories::{DirectorRepository, GenreRepository, MovieRepository};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    pub fn movies(&self) -> MovieRepository {
        MovieRepository::new(self.db.clone())
    }

    pub fn directors(&self) -> DirectorRepository {
        DirectorRepository::new(self.db.clone())
    }

    pub fn genres(&self) -> GenreRepository {
        GenreRepository::new(self.db.clone())
    }
}
