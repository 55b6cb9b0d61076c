mod console;

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

use deal_desk::api::{DashboardApi, HttpApi, MemoryBackend, TradingDealsApi};
use deal_desk::config::Config;
use deal_desk::shell::Shell;

fn split<T>(api: Arc<T>) -> (Arc<dyn DashboardApi>, Arc<dyn TradingDealsApi>)
where
    T: DashboardApi + TradingDealsApi + 'static,
{
    (api.clone(), api)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if matches!(args.first().map(String::as_str), Some("-h" | "--help" | "help")) {
        println!("{}", console::USAGE);
        return Ok(());
    }
    let command = console::parse(&args)?;

    let (dashboard_api, trading_api) = if cfg.offline {
        split(Arc::new(MemoryBackend::new(cfg.today())))
    } else {
        split(Arc::new(HttpApi::new(&cfg)))
    };

    let mut shell = Shell::new(dashboard_api, trading_api, cfg.timezone);
    let output = console::run(&mut shell, command).await?;
    println!("{output}");

    Ok(())
}
