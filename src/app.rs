use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/today", get(handlers::get_today))
        .route(
            "/api/entries",
            get(handlers::list_entries).post(handlers::save_entry),
        )
        .route("/api/entries/:date", get(handlers::get_entry))
        .route("/api/weekly", get(handlers::get_weekly))
        .route("/api/goal", get(handlers::get_goal).put(handlers::save_goal))
        .route(
            "/api/motivation",
            get(handlers::get_motivation).post(handlers::mark_motivation),
        )
        .route("/api/motivation/next", get(handlers::next_quote))
        .route("/api/articles", get(handlers::list_articles))
        .with_state(state)
}
