use clap::{Parser, Subcommand};
use catalog_client::api::ApiConfig;
use catalog_core::model::DEFAULT_PER_PAGE;
use tracing_subscriber::EnvFilter;

mod browse;
mod render;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Browse the game catalog from a terminal", long_about = None)]
struct Cli {
    /// Catalog server URL
    #[arg(short, long, default_value = "http://127.0.0.1:5100")]
    server: String,

    /// Games per page (1-100)
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    per_page: u32,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List one page of games
    List {
        /// Page to show
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Show a single game
    Show {
        /// Game ID
        id: u64,
    },
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so they never mix with the listing (respects RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ApiConfig::new(&cli.server).with_per_page(cli.per_page);

    let result = match cli.command.unwrap_or(Command::List { page: 1 }) {
        Command::List { page } => browse::list_page(config, page).await,
        Command::Show { id } => browse::show_game(config, id).await,
    };

    match result {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
