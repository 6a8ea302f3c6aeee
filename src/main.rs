use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use filmiry::OutputFormat;
use filmiry::catalog::CatalogError;
use filmiry::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "filmiry", about = "Movie & TV show discovery, rendered from the TMDB catalog")]
struct Args {
    /// Address to render, e.g. `/movie/603` or `/search?query=matrix`
    #[arg(default_value = "/")]
    location: String,

    /// Output format
    #[arg(short, long, default_value_t, value_enum)]
    format: OutputFormat,

    /// Site origin used for canonical URLs
    #[arg(long)]
    origin: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to filmiry.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("filmiry.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Filmiry starting up at {} ({:?})", args.location, args.format);

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Ignoring config file: {}", e);
            config::FilmiryConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.origin.as_deref());

    match filmiry::shell::run(&resolved, &args.location, args.format).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(CatalogError::Config(reason)) => {
            log::error!("Catalog not configured: {}", reason);
            eprintln!(
                "TMDB API key is missing. Set TMDB_API_KEY or add api_key under [tmdb] in ~/.filmiry/config.toml."
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("Render failed: {}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
