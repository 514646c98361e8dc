mod dto;
mod error;
mod handlers;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use corretor_llm::OpenAiGenerator;
use corretor_pipeline::EssayPipeline;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

const DEFAULT_MODEL: &str = "gpt-4o-mini";

pub struct ServerState {
    pub pipeline: EssayPipeline<OpenAiGenerator>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
    let api_base = env::var("OPENAI_API_BASE").ok();
    info!(%model, "configuring generator");

    let generator = OpenAiGenerator::new(&model, api_base.as_deref());
    let state = Arc::new(ServerState {
        pipeline: EssayPipeline::new(generator),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let app = Router::new()
        .route("/evaluate", post(handlers::evaluate))
        .layer(trace_layer)
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state);

    let addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
