use std::error::Error;
use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use mailerdash::api::{MailerLiteApi, MailerLiteClient};
use mailerdash::core::config::{self, CliOverrides};
use mailerdash::tui;

#[derive(Parser)]
#[command(name = "mailerdash", version, about = "Terminal dashboard for MailerLite")]
struct Args {
    /// Config profile to use
    #[arg(short, long)]
    profile: Option<String>,

    /// Maximum items fetched per view (0 = no limit)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Run without an API client; every view loads an empty list
    #[arg(long)]
    demo: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Terminal belongs to the UI, so logs go to mailerdash.log in the working directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Ok(log_file) = File::create("mailerdash.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    let file_config = config::load_config()?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            profile: args.profile,
            fetch_limit: args.limit,
        },
    );
    log::info!(
        "mailerdash starting with profile '{}' (fetch limit {})",
        resolved.profile,
        resolved.fetch_limit
    );

    let client: Option<Arc<dyn MailerLiteApi>> = if args.demo {
        log::info!("Demo mode: no API client");
        None
    } else {
        let Some(token) = resolved.api_token.clone() else {
            return Err(format!(
                "no API token for profile '{}' (set MAILERLITE_API_TOKEN or api_token in {})",
                resolved.profile,
                config::config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "~/.mailerdash/config.toml".to_string())
            )
            .into());
        };
        Some(Arc::new(MailerLiteClient::new(
            token,
            Some(resolved.base_url.clone()),
        )?))
    };

    tui::run(client, &resolved)?;
    Ok(())
}
