use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use hireflow::config::AppConfig;
use hireflow::error::AppError;
use hireflow::hiring::{
    demo, hiring_router, HiringService, InMemoryStore, PipelineBoard,
};
use hireflow::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct OpsState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "hireflow",
    about = "Applicant tracking service: job postings, candidate pipelines, and interview scheduling",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Seed fixture data and print the pipeline board for the demo job
    Demo,
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
    /// Preload the in-memory store with demo fixtures
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Demo => run_demo(),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let store = Arc::new(InMemoryStore::new());
    let service = Arc::new(HiringService::new(store));

    if args.seed {
        let seeded = demo::seed(&service)?;
        info!(job_id = %seeded.job_id.0, "demo fixtures loaded");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let ops_state = OpsState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let ops_routes = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(ops_state);

    let app = hiring_router(service)
        .merge(ops_routes)
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "applicant tracking service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_demo() -> Result<(), AppError> {
    let store = Arc::new(InMemoryStore::new());
    let service = HiringService::new(store);

    let seeded = demo::seed(&service)?;
    let job = service.get_job(&seeded.job_id)?;
    let board = service.pipeline_board(&seeded.job_id)?;

    println!("Hiring pipeline demo");
    println!("Job: {} at {} ({})", job.title, job.company, job.status.label());
    render_board(&board);

    let stats = service.dashboard_stats()?;
    println!("\nDashboard");
    println!("- Open roles: {}", stats.open_roles);
    println!("- Active candidates: {}", stats.active_candidates);
    println!(
        "- Offers: {} sent, {} accepted, {} pending",
        stats.offers_sent.total, stats.offers_sent.accepted, stats.offers_sent.pending
    );

    Ok(())
}

fn render_board(board: &PipelineBoard) {
    println!("\nPipeline board");
    for column in &board.columns {
        println!("- {} ({})", column.stage_label, column.candidates.len());
        for card in &column.candidates {
            println!(
                "  * {} [{}] {}",
                card.candidate_name,
                card.status.label(),
                card.tags.join(", ")
            );
        }
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<OpsState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<OpsState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
