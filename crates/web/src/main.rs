use std::time::Duration;

use anyhow::Context;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod routes;
mod store;

use config::Config;
use middleware::auth::ApiKeys;
use store::Store;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::wods::handlers::create_wod,
        features::wods::handlers::get_wod,
        features::scores::handlers::submit_score,
        features::scores::handlers::list_event_scores,
        features::leaderboards::handlers::get_wod_leaderboard,
        features::leaderboards::handlers::get_event_standings,
    ),
    components(
        schemas(
            scoring::dto::wod::CreateWodRequest,
            scoring::dto::wod::TimeCapRequest,
            scoring::dto::wod::ExerciseTargetRequest,
            scoring::dto::wod::WodResponse,
            scoring::dto::score::ScoreResponse,
            scoring::dto::leaderboard::LeaderboardResponse,
            scoring::dto::leaderboard::LeaderboardRow,
            scoring::dto::leaderboard::StandingsResponse,
            scoring::models::RawScoreSubmission,
            scoring::models::ExerciseResult,
            scoring::models::ExerciseTarget,
            scoring::models::ExerciseSlot,
            scoring::models::ScoringMode,
            scoring::models::ScoreBreakdown,
            scoring::models::ExerciseBreakdown,
            scoring::models::StandingsEntry,
            scoring::models::Violation,
            scoring::models::ViolationCode,
        )
    ),
    tags(
        (name = "wods", description = "WOD definitions used for scoring"),
        (name = "scores", description = "Score submission"),
        (name = "leaderboards", description = "Ranked leaderboards and event standings"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting WOD scoring API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if api_keys.is_empty() {
        tracing::warn!("API_KEYS is empty, WOD registration and score submission are disabled");
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let app = routes::router(Store::new(), api_keys)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
