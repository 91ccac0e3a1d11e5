use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::{
    db::entities::director,
    error::{AppError, Result},
    handlers::input::{AppJson, AppPath, CreatedResponse, NameRequest},
    state::AppState,
};

const DIRECTOR_NOT_FOUND: &str = "Director with the requested id not found";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DirectorResponse {
    pub id: i32,
    pub name: String,
}

impl From<director::Model> for DirectorResponse {
    fn from(director: director::Model) -> Self {
        Self {
            id: director.id,
            name: director.name,
        }
    }
}

pub async fn list_directors(State(state): State<AppState>) -> Result<Json<Vec<DirectorResponse>>> {
    let directors = state.directors().find_all().await?;

    Ok(Json(directors.into_iter().map(DirectorResponse::from).collect()))
}

pub async fn get_director(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<DirectorResponse>> {
    let director = state
        .directors()
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(DIRECTOR_NOT_FOUND.to_string()))?;

    Ok(Json(director.into()))
}

pub async fn create_director(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NameRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let name = payload.into_name("director")?;

    let directors = state.directors();
    if directors.find_by_name(&name).await?.is_some() {
        return Err(AppError::Conflict(format!(
            "A director named \"{}\" is already in the catalog",
            name
        )));
    }

    let director = directors
        .create(director::ActiveModel {
            name: Set(name),
            ..Default::default()
        })
        .await?;

    tracing::info!(id = director.id, name = %director.name, "Director created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "New director added to the catalog".to_string(),
            id: director.id,
        }),
    ))
}

/// Rename a director. Names are not re-checked for duplicates here.
pub async fn update_director(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<NameRequest>,
) -> Result<StatusCode> {
    let name = payload.into_name("director")?;

    let directors = state.directors();
    let director = directors
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(DIRECTOR_NOT_FOUND.to_string()))?;

    let mut active: director::ActiveModel = director.into();
    active.name = Set(name);
    directors.update(active).await?;

    tracing::info!(id, "Director updated");

    Ok(StatusCode::NO_CONTENT)
}

/// Movies that reference the director keep their director_id.
pub async fn delete_director(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode> {
    let directors = state.directors();
    let director = directors
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(DIRECTOR_NOT_FOUND.to_string()))?;

    directors.delete(director).await?;

    tracing::info!(id, "Director deleted");

    Ok(StatusCode::NO_CONTENT)
}
