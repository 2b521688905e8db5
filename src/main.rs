// Standard library
use std::io::Write;
use std::process::ExitCode;

// 3rd party crates
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project imports
use myip::functions::run;
use myip::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "myip", version, about = "Get your public IP address!", long_about = None)]
struct Args {
    /// IP provider URL like https://ifconfig.me, if empty a random one will be used
    #[arg(long, env = "MYIP_PROVIDER")]
    provider: Option<String>,
}

/// Prints the caller's public IP address.
///
/// A single provider is queried: the one given with `--provider` (or
/// `MYIP_PROVIDER`), otherwise one picked at random from the configured list.
/// The address goes to stdout without a trailing newline; diagnostics and
/// logs go to stderr.
#[tokio::main]
async fn main() -> ExitCode {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("myip: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // setup logging, keeping the HTTP stack quiet whatever the level.
    let directives: String = format!(
        "{},hyper=error,hyper_util=error,reqwest=error,rustls=error",
        settings.get_log_level()
    );
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    debug!("⚙️ Settings have been loaded.");

    match run(args.provider.as_deref(), &settings).await {
        Ok(ip) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = write!(stdout, "{}", ip).and_then(|_| stdout.flush()) {
                eprintln!("myip: failed to write address: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("IP discovery failed: {:?}", e);
            eprintln!("myip: {}", e);
            ExitCode::FAILURE
        }
    }
}
