use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::{
    db::entities::movie,
    error::{AppError, Result},
    handlers::input::{check_length, require_text, AppJson, AppPath, AppQuery, CreatedResponse},
    services::{MovieFilter, MovieLookup},
    state::AppState,
};

const MOVIE_NOT_FOUND: &str = "Movie with the requested id not found";

/// Raw reference filters; values are interpreted by [`MovieFilter`]
#[derive(Deserialize)]
pub struct ListMoviesQuery {
    pub director_id: Option<String>,
    pub genre_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MovieResponse {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

impl From<movie::Model> for MovieResponse {
    fn from(movie: movie::Model) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            description: movie.description,
            trailer: movie.trailer,
            year: movie.year,
            rating: movie.rating,
            genre_id: movie.genre_id,
            director_id: movie.director_id,
        }
    }
}

/// Movie create/update body. Update is a full replace: every field left
/// out of the body is stored as null.
#[derive(Debug, Deserialize)]
pub struct MovieRequest {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

impl MovieRequest {
    fn check_lengths(&self) -> Result<()> {
        check_length(self.title.as_deref(), "title")?;
        check_length(self.description.as_deref(), "description")?;
        check_length(self.trailer.as_deref(), "trailer")
    }

    fn assign_to(self, active: &mut movie::ActiveModel) {
        active.title = Set(self.title);
        active.description = Set(self.description);
        active.trailer = Set(self.trailer);
        active.year = Set(self.year);
        active.rating = Set(self.rating);
        active.genre_id = Set(self.genre_id);
        active.director_id = Set(self.director_id);
    }
}

pub async fn list_movies(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListMoviesQuery>,
) -> Result<Json<Vec<MovieResponse>>> {
    let filter = MovieFilter::from_query(query.director_id.as_deref(), query.genre_id.as_deref());

    let movies = MovieLookup::new(state.db.clone()).find(&filter).await?;

    Ok(Json(movies.into_iter().map(MovieResponse::from).collect()))
}

pub async fn get_movie(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MovieResponse>> {
    let movie = state
        .movies()
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(MOVIE_NOT_FOUND.to_string()))?;

    Ok(Json(movie.into()))
}

pub async fn create_movie(
    State(state): State<AppState>,
    AppJson(payload): AppJson<MovieRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    if payload.id.is_some() {
        tracing::debug!(entity = "movie", "Ignoring client-supplied id");
    }
    let title = require_text(payload.title.clone(), "title")?;
    payload.check_lengths()?;

    let movies = state.movies();
    if movies.find_by_title(&title).await?.is_some() {
        return Err(AppError::Conflict(format!(
            "A movie titled \"{}\" is already in the catalog",
            title
        )));
    }

    let mut active = movie::ActiveModel::default();
    payload.assign_to(&mut active);
    let movie = movies.create(active).await?;

    tracing::info!(id = movie.id, title = %title, "Movie created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "New movie added to the catalog".to_string(),
            id: movie.id,
        }),
    ))
}

pub async fn update_movie(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<MovieRequest>,
) -> Result<StatusCode> {
    let movies = state.movies();
    let movie = movies
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(MOVIE_NOT_FOUND.to_string()))?;
    payload.check_lengths()?;

    let mut active: movie::ActiveModel = movie.into();
    payload.assign_to(&mut active);
    movies.update(active).await?;

    tracing::info!(id, "Movie updated");

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_movie(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode> {
    let movies = state.movies();
    let movie = movies
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(MOVIE_NOT_FOUND.to_string()))?;

    movies.delete(movie).await?;

    tracing::info!(id, "Movie deleted");

    Ok(StatusCode::NO_CONTENT)
}
