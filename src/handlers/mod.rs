pub mod directors;
pub mod genres;
pub mod health;
pub mod input;
pub mod movies;

use axum::{middleware, routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Catalog routes. Collection paths answer with and without the trailing slash.
pub fn api_routes() -> Router<AppState> {
    let movies_root = get(movies::list_movies).post(movies::create_movie);
    let directors_root = get(directors::list_directors).post(directors::create_director);
    let genres_root = get(genres::list_genres).post(genres::create_genre);

    Router::new()
        // Movie endpoints
        .route("/movies", movies_root.clone())
        .route("/movies/", movies_root)
        .route(
            "/movies/:id",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )

        // Director endpoints
        .route("/directors", directors_root.clone())
        .route("/directors/", directors_root)
        .route(
            "/directors/:id",
            get(directors::get_director)
                .put(directors::update_director)
                .delete(directors::delete_director),
        )

        // Genre endpoints
        .route("/genres", genres_root.clone())
        .route("/genres/", genres_root)
        .route(
            "/genres/:id",
            get(genres::get_genre)
                .put(genres::update_genre)
                .delete(genres::delete_genre),
        )
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .merge(api_routes())

        // Middleware
        .layer(middleware::map_response_with_state(
            state.clone(),
            crate::middleware::legacy_status_codes,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
