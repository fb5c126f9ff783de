use clap::Parser;
use mailtrack_rs::api::{ApiServer, AppState};
use mailtrack_rs::categories::CategoryManager;
use mailtrack_rs::config::Config;
use mailtrack_rs::emails::EmailManager;
use mailtrack_rs::followups::{sweeper, FollowUpManager};
use mailtrack_rs::templates::TemplateManager;
use mailtrack_rs::users::UserManager;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "mailtrack-rs", about = "Email tracking and assisted-reply backend")]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Override the configured listen address
    #[arg(short, long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Starting mailtrack-rs server");

    // Load configuration
    let mut config = if std::path::Path::new(&args.config).exists() {
        Config::from_file(&args.config)?
    } else {
        info!("No config file found, using defaults");
        Config::default()
    };

    if let Some(listen) = args.listen {
        config.server.listen_addr = listen;
    }

    info!("Configuration loaded");
    info!("  API listening on: {}", config.server.listen_addr);
    info!("  Database: {}", config.storage.database_url);
    info!(
        "  Overdue sweep every {}s",
        config.followups.sweep_interval_secs
    );

    // Connect storage
    let db = SqlitePoolOptions::new()
        .connect(&config.storage.database_url)
        .await?;

    // Wire up managers
    let users = Arc::new(UserManager::new(db.clone()));
    let categories = Arc::new(CategoryManager::new(db.clone()));
    let emails = Arc::new(EmailManager::new(
        db.clone(),
        users.clone(),
        categories.clone(),
    ));
    let followups = Arc::new(FollowUpManager::new(db.clone(), emails.clone()));
    let templates = Arc::new(TemplateManager::new(db.clone(), users.clone()));

    users.init_db().await?;
    categories.init_db().await?;
    emails.init_db().await?;
    followups.init_db().await?;
    templates.init_db().await?;

    // Background overdue sweep
    let sweep_manager = followups.clone();
    let sweep_interval = Duration::from_secs(config.followups.sweep_interval_secs);
    let sweeper_handle = tokio::spawn(async move {
        sweeper::run_sweeper(sweep_manager, sweep_interval).await;
    });

    // API server
    let state = Arc::new(AppState {
        users,
        categories,
        emails,
        followups,
        templates,
    });

    let server = ApiServer::new(state, config.server.listen_addr.clone());
    let server_handle = tokio::spawn(async move { server.run().await });

    tokio::select! {
        result = server_handle => {
            match result {
                Ok(Ok(())) => info!("API server exited"),
                Ok(Err(e)) => error!("API server error: {}", e),
                Err(e) => error!("API task panic: {}", e),
            }
        }
        result = sweeper_handle => {
            match result {
                Ok(()) => info!("Overdue sweeper exited"),
                Err(e) => error!("Sweeper task panic: {}", e),
            }
        }
    }

    Ok(())
}
