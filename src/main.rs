use axum::Router;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use beerstock::config::Config;
use beerstock::db::{create_pool, init_db, queries, AppState};
use beerstock::handlers;
use beerstock::models::{BeerStyle, CreateBeer};

#[derive(Parser, Debug)]
#[command(name = "beerstock")]
#[command(about = "Inventory-management REST service for a beer catalog")]
struct Cli {
    /// Seed the database with dev data (a few well-known beers)
    #[arg(long)]
    seed: bool,

    /// Delete the database on exit (dev mode only, useful for fresh starts)
    #[arg(long)]
    ephemeral: bool,
}

/// Seeds the database with dev data for testing.
/// Only runs in dev mode and when the catalog is empty.
fn seed_dev_data(state: &AppState) {
    let conn = state.db.get().expect("Failed to get db connection for seeding");

    let existing = queries::list_beers(&conn).expect("Failed to list beers");
    if !existing.is_empty() {
        tracing::info!("Database already has data, skipping seed");
        return;
    }

    let seeds = [
        CreateBeer {
            name: "Brahma".to_string(),
            brand: "Ambev".to_string(),
            style: BeerStyle::Lager,
            quantity: 10,
            max: 50,
        },
        CreateBeer {
            name: "Skol".to_string(),
            brand: "Ambev".to_string(),
            style: BeerStyle::Lager,
            quantity: 10,
            max: 50,
        },
        CreateBeer {
            name: "Colorado Appia".to_string(),
            brand: "Colorado".to_string(),
            style: BeerStyle::Weiss,
            quantity: 5,
            max: 30,
        },
    ];

    for input in &seeds {
        let beer = queries::create_beer(&conn, input).expect("Failed to seed beer");
        tracing::info!("Seeded beer: {} ({})", beer.name, beer.id);
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beerstock=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();

    if config.dev_mode {
        tracing::info!("Running in DEVELOPMENT mode");
    }

    // Create the database pool and initialize the schema
    let db_pool = create_pool(&config.database_path).expect("Failed to create database pool");
    {
        let conn = db_pool.get().expect("Failed to get connection");
        init_db(&conn).expect("Failed to initialize database");
    }

    let state = AppState { db: db_pool };

    // Seed dev data if --seed flag is passed (only in dev mode)
    if cli.seed {
        if !config.dev_mode {
            tracing::warn!("--seed flag ignored: not in dev mode (set BEERSTOCK_ENV=dev)");
        } else {
            seed_dev_data(&state);
        }
    }

    // Build the application router
    let app = Router::new()
        .merge(handlers::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start the server
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    let cleanup_on_exit = cli.ephemeral && config.dev_mode;
    let db_path = config.database_path.clone();

    if cleanup_on_exit {
        tracing::info!("EPHEMERAL MODE: database will be deleted on exit");
    }

    tracing::info!("Beerstock server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to start server");

    if cleanup_on_exit {
        tracing::info!("Cleaning up ephemeral database...");
        if let Err(e) = std::fs::remove_file(&db_path) {
            tracing::warn!("Failed to remove {}: {}", db_path, e);
        } else {
            tracing::info!("Removed {}", db_path);
        }
        let _ = std::fs::remove_file(format!("{}-wal", db_path));
        let _ = std::fs::remove_file(format!("{}-shm", db_path));
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}
