use anyhow::{bail, Result};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use deal_desk::config::Config;
use deal_desk::models::Platform;
use deal_desk::trading::{calculate, CalcInputs};

const USAGE: &str = "usage: trade_calc <PL|Bliss> <buy_rub> <buy_rate|buy_usd> <sell_rate> [--json]
  PL takes the buy rate, Bliss takes the dollars bought";

fn main() -> Result<()> {
    let cfg = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json = match args.iter().position(|a| a == "--json") {
        Some(i) => {
            args.remove(i);
            true
        }
        None => false,
    };

    let [platform, buy_rub, manual, sell_rate] = args.as_slice() else {
        bail!("{USAGE}");
    };
    let Some(platform) = Platform::from_str_loose(platform) else {
        bail!("unknown platform '{platform}'\n{USAGE}");
    };

    // The manual field goes to whichever side the platform enters by hand.
    let inputs = match platform {
        Platform::Pl => CalcInputs::from_text(platform, buy_rub, "", manual, sell_rate),
        Platform::Bliss => CalcInputs::from_text(platform, buy_rub, manual, "", sell_rate),
    };
    debug!("{} read as {}: {:?}", manual, platform.manual_buy_field(), inputs);
    let d = calculate(&inputs);

    if json {
        println!("{}", serde_json::to_string_pretty(&d)?);
        return Ok(());
    }

    println!("Platform:        {}", platform);
    println!("Buy USD:         {:.2}", d.buy_usd_calc);
    println!("Buy rate:        {:.4}", d.buy_rate_calc);
    println!("Sell RUB:        {}", d.sell_rub);
    println!("Sell USDT:       {:.4}", d.sell_usdt);
    println!("Profit $:        {:.4}", d.profit_usd);
    println!("Trader profit:   {:.4}", d.trader_profit);

    Ok(())
}
