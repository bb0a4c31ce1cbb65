pub mod processing;
pub mod templates;

use axum::{
    Router,
    extract::Form,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::Deserialize;

use processing::{RecordError, training_summary, walk_summary};
use templates::{
    render_landing_page, render_training_page, render_unknown_training_page, render_walk_page,
};

pub fn build_app() -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/training", post(handle_training))
        .route("/walk", post(handle_walk))
}

async fn landing_page() -> Html<String> {
    Html(render_landing_page())
}

/// Form fields shared by both report endpoints: the raw tracker packet plus
/// the physiological parameters the formulas need.
#[derive(Debug, Deserialize)]
struct PacketForm {
    packet: String,
    weight: f64,
    height: f64,
}

async fn handle_training(Form(form): Form<PacketForm>) -> impl IntoResponse {
    match training_summary(&form.packet, form.weight, form.height) {
        Ok(summary) => Html(render_training_page(&summary)).into_response(),
        // An unrecognized activity is a reportable condition, not a bad request.
        Err(RecordError::UnknownActivity(_)) => {
            Html(render_unknown_training_page()).into_response()
        }
        Err(err) => (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    }
}

async fn handle_walk(Form(form): Form<PacketForm>) -> impl IntoResponse {
    match walk_summary(&form.packet, form.weight, form.height) {
        Ok(summary) => Html(render_walk_page(&summary)).into_response(),
        Err(err) => (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    }
}
