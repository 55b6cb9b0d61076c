pub mod http;
pub mod memory;

pub use http::HttpApi;
pub use memory::MemoryBackend;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{DashboardStats, Deal, NewDeal, TradingDeal};
use crate::trading::payload::TradingDealPayload;

/// The trading-deals endpoint.
#[async_trait]
pub trait TradingDealsApi: Send + Sync {
    async fn list_trading_deals(&self) -> Result<Vec<TradingDeal>>;
    async fn create_trading_deal(&self, payload: &TradingDealPayload) -> Result<()>;
    async fn update_trading_deal(&self, id: i64, payload: &TradingDealPayload) -> Result<()>;
}

/// The generic-deals and statistics endpoints behind the dashboard.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn list_deals(&self) -> Result<Vec<Deal>>;
    async fn create_deal(&self, deal: &NewDeal) -> Result<()>;
    async fn fetch_stats(&self) -> Result<DashboardStats>;
}
