use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use revise::core::config::{self, CliOverrides};
use revise::revision::{HttpRevisionClient, RevisionClient};
use revise::{headless, tui};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "revise", about = "Sentence-by-sentence text revision client")]
struct Args {
    /// Revision server base URL
    #[arg(short, long)]
    server: Option<String>,

    /// Pre-fill the text field from a file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Instruction sent along with the text
    #[arg(short = 'p', long)]
    instruction: Option<String>,

    /// Submit once, print the revision cards, and exit
    #[arg(long, requires = "input")]
    headless: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to revise.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("revise.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        config::ReviseConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            server_url: args.server.as_deref(),
            instruction: args.instruction.as_deref(),
        },
    );

    log::info!("Revise starting up against {}", resolved.server_url);

    let text = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => String::new(),
    };

    let client: Arc<dyn RevisionClient> =
        Arc::new(HttpRevisionClient::new(resolved.server_url.clone()));

    if args.headless {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) =
            headless::run(client.as_ref(), text, resolved.instruction, &mut stdout).await
        {
            log::warn!("Headless run failed: {}", e);
            eprintln!("revise: {e}");
            std::process::exit(1);
        }
        return Ok(());
    }

    tui::run(resolved, client, text)
}
