//! Movie listing by director and/or genre.
//!
//! An empty listing is never returned silently when a filter was supplied:
//! the lookup explains whether a referenced director or genre is missing or
//! whether the references exist but no movie matches them. The director is
//! always resolved before the genre.

use sea_orm::DatabaseConnection;

use crate::{
    db::{
        entities::{director, genre, movie},
        repositories::{DirectorRepository, GenreRepository, MovieRepository},
    },
    error::{AppError, Result},
};

pub const DIRECTOR_NOT_FOUND: &str = "Director with the requested id is not in the catalog";
pub const GENRE_NOT_FOUND: &str = "Genre with the requested id is not in the catalog";

/// A reference filter value as it arrived in the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKey {
    Id(i32),
    /// Not an integer key. Matches no movie and resolves to no entity.
    Unresolvable(String),
}

impl FilterKey {
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<i32>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Unresolvable(raw.to_string()),
        }
    }

    pub fn id(&self) -> Option<i32> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Unresolvable(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieFilter {
    pub director: Option<FilterKey>,
    pub genre: Option<FilterKey>,
}

impl MovieFilter {
    pub fn from_query(director_id: Option<&str>, genre_id: Option<&str>) -> Self {
        Self {
            director: director_id.map(FilterKey::parse),
            genre: genre_id.map(FilterKey::parse),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.director.is_none() && self.genre.is_none()
    }
}

pub struct MovieLookup {
    movies: MovieRepository,
    directors: DirectorRepository,
    genres: GenreRepository,
}

impl MovieLookup {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            movies: MovieRepository::new(db.clone()),
            directors: DirectorRepository::new(db.clone()),
            genres: GenreRepository::new(db),
        }
    }

    /// Select the movies matching `filter`.
    ///
    /// Fails with `ReferenceNotFound` or `EmptyResult` when a filter was
    /// supplied and nothing matched. An unfiltered listing of an empty
    /// catalog is just an empty list.
    pub async fn find(&self, filter: &MovieFilter) -> Result<Vec<movie::Model>> {
        let movies = self.select(filter).await?;

        if movies.is_empty() && !filter.is_unfiltered() {
            return Err(self.explain_empty(filter).await?);
        }

        tracing::debug!(
            director = ?filter.director,
            genre = ?filter.genre,
            count = movies.len(),
            "Resolved movie listing"
        );

        Ok(movies)
    }

    async fn select(&self, filter: &MovieFilter) -> Result<Vec<movie::Model>> {
        let director = filter.director.as_ref().map(FilterKey::id);
        let genre = filter.genre.as_ref().map(FilterKey::id);

        if matches!(director, Some(None)) || matches!(genre, Some(None)) {
            return Ok(Vec::new());
        }

        self.movies
            .find_filtered(director.flatten(), genre.flatten())
            .await
    }

    async fn explain_empty(&self, filter: &MovieFilter) -> Result<AppError> {
        let director = match &filter.director {
            Some(key) => match self.resolve_director(key).await? {
                Some(director) => Some(director),
                None => return Ok(AppError::ReferenceNotFound(DIRECTOR_NOT_FOUND.to_string())),
            },
            None => None,
        };

        let genre = match &filter.genre {
            Some(key) => match self.resolve_genre(key).await? {
                Some(genre) => Some(genre),
                None => return Ok(AppError::ReferenceNotFound(GENRE_NOT_FOUND.to_string())),
            },
            None => None,
        };

        Ok(AppError::EmptyResult(empty_result_message(
            director.as_ref().map(|d| d.name.as_str()),
            genre.as_ref().map(|g| g.name.as_str()),
        )))
    }

    async fn resolve_director(&self, key: &FilterKey) -> Result<Option<director::Model>> {
        match key.id() {
            Some(id) => self.directors.find_by_id(id).await,
            None => Ok(None),
        }
    }

    async fn resolve_genre(&self, key: &FilterKey) -> Result<Option<genre::Model>> {
        match key.id() {
            Some(id) => self.genres.find_by_id(id).await,
            None => Ok(None),
        }
    }
}

pub fn empty_result_message(director: Option<&str>, genre: Option<&str>) -> String {
    match (director, genre) {
        (Some(director), Some(genre)) => {
            format!("No movies by director \"{director}\" in genre \"{genre}\" found in the catalog")
        }
        (Some(director), None) => {
            format!("No movies by director \"{director}\" found in the catalog")
        }
        (None, Some(genre)) => format!("No movies in genre \"{genre}\" found in the catalog"),
        (None, None) => "No movies found in the catalog".to_string(),
    }
}
