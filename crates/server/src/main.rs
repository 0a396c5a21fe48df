//! Countries-API: leaderboard and country reference data server
//!
//! Usage:
//!   countries-api serve --port 8080    : Launch the HTTP API
//!   countries-api top --page 0         : Print a leaderboard page
//!   countries-api lookup "burma"       : Resolve a country name

use clap::{Parser, Subcommand};
use countries_api::{router, AppState, APP_VERSION};
use persistence::repository::{EntryPage, LeaderboardQuery};
use persistence::Database;
use tracing::{error, info};

const DEFAULT_DB_PATH: &str = "data/leaderboard.db";

#[derive(Parser)]
#[command(name = "countries-api")]
#[command(about = "Countries-of-the-world leaderboard API", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the HTTP API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
    },
    /// Print one leaderboard page (no web server)
    Top {
        /// Zero-based page index
        #[arg(long, default_value_t = 0)]
        page: i64,
    },
    /// Resolve a country name, accepting alternative namings
    Lookup {
        /// Country name to resolve
        name: String,
    },
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug,persistence=debug,countries_api=debug,sqlx=info")
    } else {
        EnvFilter::new("info,persistence=info,countries_api=info,sqlx=warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).compact())
        .with(filter)
        .init();
}

fn db_path() -> String {
    std::env::var("LEADERBOARD_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string())
}

async fn open_database(db_path: &str) -> anyhow::Result<Database> {
    Database::new(db_path).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        anyhow::anyhow!("Database initialization failed: {}", e)
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    dotenvy::dotenv().ok();

    match cli.command {
        Commands::Serve { host, port } => {
            cmd_serve(&host, port).await?;
        }
        Commands::Top { page } => {
            cmd_top(page).await?;
        }
        Commands::Lookup { name } => {
            cmd_lookup(&name)?;
        }
    }

    Ok(())
}

// ============================================================================
// Serve command: Axum web server
// ============================================================================

async fn cmd_serve(host: &str, port: u16) -> anyhow::Result<()> {
    info!("Countries-API v{} starting...", APP_VERSION);

    let db_path = db_path();
    let db = open_database(&db_path).await?;
    info!("Database initialized: {}", db_path);

    let state = AppState::new(db);
    let db = state.db.clone();
    let app = router(state);

    let addr: std::net::SocketAddr = format!("{}:{}", host, port).parse()?;
    println!("\n=== Countries-API v{} ===", APP_VERSION);
    println!("Listening on http://{}", addr);
    println!("\nEndpoints:");
    println!("  GET    /api/health                  - Health check");
    println!("  GET    /api/leaderboard?page=N      - Ranked page of entries");
    println!("  GET    /api/leaderboard/:id         - Single entry");
    println!("  POST   /api/leaderboard             - Create entry");
    println!("  PUT    /api/leaderboard/:id         - Replace entry");
    println!("  DELETE /api/leaderboard/:id         - Delete entry");
    println!("  GET    /api/countries               - Country names");
    println!("  GET    /api/countries/alternatives  - Alternative namings");
    println!("  GET    /api/countries/map           - Name → display name");
    println!("  GET    /api/codes                   - Name → ISO code");
    println!("\n  Database: {}", db_path);
    println!("\nPress Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Ctrl+C received, shutting down...");
        })
        .await?;

    db.close().await;
    info!("Database closed");

    Ok(())
}

// ============================================================================
// Top command: print a leaderboard page
// ============================================================================

async fn cmd_top(page: i64) -> anyhow::Result<()> {
    let db = open_database(&db_path()).await?;
    let result = LeaderboardQuery::new(db.pool()).list_page(page).await?;
    print_page(page, &result);
    db.close().await;
    Ok(())
}

fn print_page(page: i64, result: &EntryPage) {
    if result.entries.is_empty() {
        println!("\nNo entries on page {}.", page);
        return;
    }

    println!("\nLeaderboard — page {}:", page);
    println!(
        "  {:>4}  {:>6}  {:<20} {:<20} {:>9} {:>10}",
        "#", "Id", "Name", "Country", "Countries", "Time"
    );
    println!("  {}", "-".repeat(76));
    let first_rank = page * persistence::repository::PAGE_SIZE;
    for (i, e) in result.entries.iter().enumerate() {
        println!(
            "  {:>4}  {:>6}  {:<20} {:<20} {:>9} {:>10}",
            first_rank + i as i64 + 1,
            e.id,
            e.name,
            e.country,
            e.countries_visited,
            e.time,
        );
    }
    if result.has_more {
        println!("\n  More entries: countries-api top --page {}", page + 1);
    }
}

// ============================================================================
// Lookup command: country reference data
// ============================================================================

fn cmd_lookup(name: &str) -> anyhow::Result<()> {
    let country = reference::resolve(name)?;
    println!("{} ({})", country.name, country.code.to_lowercase());
    Ok(())
}
