use axum::{
    Router,
    extract::State,
    response::{Html, Json},
    routing::{get, post},
};
use rand::thread_rng;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::models::{GenerationRequest, GenerationResponse, Tone};
use crate::services::humanize;
use crate::services::llm::TextGenerator;
use crate::services::prompt;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/generate", post(generate))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::AllowMethods::any())
                .allow_headers(tower_http::cors::AllowHeaders::any()),
        )
        .layer(TraceLayer::new_for_http())
}

async fn index() -> Html<&'static str> {
    Html(
        r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>BlogSmith</title>
        <meta charset="utf-8">
        <style>
            body { font-family: Arial, sans-serif; margin: 40px; }
            .info-box { background-color: #f0f8ff; padding: 20px; border-radius: 8px; margin: 20px 0; }
            .endpoint { background-color: #f5f5f5; padding: 10px; margin: 10px 0; border-radius: 4px; font-family: monospace; }
        </style>
    </head>
    <body>
        <h1>BlogSmith</h1>

        <div class="info-box">
            <h2>Service Information</h2>
            <p>This service generates humanlike blog posts from a topic and a tone, optionally as part of a multi-part series.</p>
        </div>

        <h2>Available Endpoints:</h2>
        <div class="endpoint">GET / - This information page</div>
        <div class="endpoint">GET /health - Health check</div>
        <div class="endpoint">POST /api/generate - Generate a blog post</div>

        <h2>How to Use:</h2>
        <p>POST JSON to /api/generate with a required "topic", an optional "tone"
        (casual, professional, academic, humorous, inspirational), an optional
        "seriesInfo" object for multi-part series, and an optional "humanize" flag.</p>
    </body>
    </html>
    "#,
    )
}

async fn health_check() -> &'static str {
    "OK"
}

async fn generate(
    State(state): State<AppState>,
    Json(mut request): Json<GenerationRequest>,
) -> Result<Json<GenerationResponse>, ApiError> {
    let topic = request.topic.trim().to_string();
    if topic.is_empty() {
        return Err(ApiError::Validation("Topic is required".to_string()));
    }

    let tone = Tone::parse(request.tone.as_deref());

    if let Some(info) = request.series_info.as_mut() {
        for part in info.previous_parts.iter_mut() {
            *part = part.trim().to_string();
        }
    }

    tracing::info!(topic = %topic, tone = tone.name(), "generating blog content");
    let prompt = prompt::build_prompt(&topic, tone, request.series_info.as_ref());
    let content = state.generator.generate(&prompt).await?;

    if request.humanize {
        let content = humanize::humanize(&content, &mut thread_rng());
        let word_count = humanize::count_words(&content);
        return Ok(Json(GenerationResponse {
            content,
            word_count: Some(word_count),
        }));
    }

    Ok(Json(GenerationResponse {
        content,
        word_count: None,
    }))
}
