use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Platform;

/// A currency-trading deal as stored by the remote system.
///
/// Derived fields (`sell_rub`, `sell_usdt`, `profit_usd`, `trader_profit`, and
/// whichever of `buy_usd`/`buy_rate` is not manual for the platform) are
/// computed remotely and only ever read here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingDeal {
    pub id: i64,
    pub trader_name: String,
    pub platform: Platform,
    pub trade_date: NaiveDate,
    /// `None` when the remote system stored zero or nothing.
    #[serde(default)]
    pub buy_rub: Option<f64>,
    #[serde(default)]
    pub buy_usd: Option<f64>,
    #[serde(default)]
    pub buy_rate: Option<f64>,
    #[serde(default)]
    pub buy_deal_id: Option<String>,
    #[serde(default)]
    pub sell_rub: Option<f64>,
    #[serde(default)]
    pub sell_usdt: Option<f64>,
    #[serde(default)]
    pub sell_rate: Option<f64>,
    #[serde(default)]
    pub sell_order_number: Option<String>,
    #[serde(default)]
    pub profit_usd: Option<f64>,
    #[serde(default)]
    pub trader_profit: Option<f64>,
    #[serde(default)]
    pub is_finalized: bool,
}
