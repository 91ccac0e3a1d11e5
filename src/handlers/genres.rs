use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::{
    db::entities::genre,
    error::{AppError, Result},
    handlers::input::{AppJson, AppPath, CreatedResponse, NameRequest},
    state::AppState,
};

const GENRE_NOT_FOUND: &str = "Genre with the requested id not found";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GenreResponse {
    pub id: i32,
    pub name: String,
}

impl From<genre::Model> for GenreResponse {
    fn from(genre: genre::Model) -> Self {
        Self {
            id: genre.id,
            name: genre.name,
        }
    }
}

/// A genre together with the titles of the movies filed under it
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GenreDetailResponse {
    pub genre: GenreResponse,
    pub movies: Vec<String>,
}

pub async fn list_genres(State(state): State<AppState>) -> Result<Json<Vec<GenreResponse>>> {
    let genres = state.genres().find_all().await?;

    Ok(Json(genres.into_iter().map(GenreResponse::from).collect()))
}

pub async fn get_genre(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<GenreDetailResponse>> {
    let genre = state
        .genres()
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(GENRE_NOT_FOUND.to_string()))?;

    let movies = state.movies().titles_for_genre(genre.id).await?;

    Ok(Json(GenreDetailResponse {
        genre: genre.into(),
        movies,
    }))
}

pub async fn create_genre(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NameRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let name = payload.into_name("genre")?;

    let genres = state.genres();
    if genres.find_by_name(&name).await?.is_some() {
        return Err(AppError::Conflict(format!(
            "A genre named \"{}\" is already in the catalog",
            name
        )));
    }

    let genre = genres
        .create(genre::ActiveModel {
            name: Set(name),
            ..Default::default()
        })
        .await?;

    tracing::info!(id = genre.id, name = %genre.name, "Genre created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "New genre added to the catalog".to_string(),
            id: genre.id,
        }),
    ))
}

pub async fn update_genre(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<NameRequest>,
) -> Result<StatusCode> {
    let name = payload.into_name("genre")?;

    let genres = state.genres();
    let genre = genres
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(GENRE_NOT_FOUND.to_string()))?;

    let mut active: genre::ActiveModel = genre.into();
    active.name = Set(name);
    genres.update(active).await?;

    tracing::info!(id, "Genre updated");

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_genre(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode> {
    let genres = state.genres();
    let genre = genres
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(GENRE_NOT_FOUND.to_string()))?;

    genres.delete(genre).await?;

    tracing::info!(id, "Genre deleted");

    Ok(StatusCode::NO_CONTENT)
}
