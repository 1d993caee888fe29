/// Rollcall Server - user CRUD over HTTP
use clap::{Parser, Subcommand};
use rollcall_core::{NewUser, UserStore};
use rollcall_server::{config::ServerConfig, create_router, state::AppState};
use rollcall_storage::SqliteUserStore;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rollcall-server")]
#[command(about = "Rollcall user CRUD server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user
    AddUser {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Email address
        #[arg(short, long)]
        email: String,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rollcall_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            serve(config).await?;
        }
        Commands::AddUser { name, email } => {
            add_user(&config, name, email).await?;
        }
        Commands::ListUsers => {
            list_users(&config).await?;
        }
    }

    Ok(())
}

async fn open_store(config: &ServerConfig) -> anyhow::Result<SqliteUserStore> {
    let store = SqliteUserStore::connect(&config.storage.database_url).await?;
    tracing::info!("Connected to {}", config.storage.database_url);
    Ok(store)
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Rollcall Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("Mode: {:?}", config.server.mode);

    let store: Arc<dyn UserStore> = Arc::new(open_store(&config).await?);

    // Build application state
    let app_state = AppState::new(store, config.server.mode);

    // Build router
    let app = create_router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(config: &ServerConfig, name: String, email: String) -> anyhow::Result<()> {
    let store = open_store(config).await?;

    let id = store.create_user(NewUser::new(name, email)).await?;

    println!("Created user {}", id);

    Ok(())
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let store = open_store(config).await?;

    let users = store.list_users().await?;
    let total = rollcall_storage::users::count(store.pool()).await?;

    println!("Users ({}):", total);
    for user in users {
        println!("  {} - {} <{}> ({})", user.id, user.name, user.email, user.created_at);
    }

    Ok(())
}
