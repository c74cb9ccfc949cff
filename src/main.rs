use clap::Parser;
use mailgenie::core::config::{self, CliOverrides, MailGenieConfig};
use mailgenie::core::tone::Tone;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "mailgenie", about = "Draft email replies from the terminal")]
struct Args {
    /// Generation endpoint URL (overrides config and MAILGENIE_ENDPOINT_URL)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Initial reply tone
    #[arg(short, long, value_enum)]
    tone: Option<Tone>,

    /// Request timeout in seconds (0 disables it)
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to mailgenie.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("mailgenie.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            log::warn!("Config error, falling back to defaults: {}", e);
            MailGenieConfig::default()
        }
    };

    let cli = CliOverrides {
        endpoint_url: args.endpoint,
        timeout_secs: args.timeout,
        tone: args.tone,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "MailGenie starting up: endpoint={}, timeout={:?}, tone={}",
        resolved.endpoint_url,
        resolved.timeout,
        resolved.tone.label()
    );

    mailgenie::tui::run(resolved)
}
