#![allow(dead_code)]

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Mutex;

use deal_desk::api::{DashboardApi, TradingDealsApi};
use deal_desk::models::{DashboardStats, Deal, DealStatus, NewDeal, Platform, TradingDeal};
use deal_desk::trading::TradingDealPayload;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn deal(id: i64, client: &str, amount: f64, profit: f64, status: DealStatus) -> Deal {
    Deal {
        id,
        client_name: client.to_string(),
        amount,
        profit,
        status,
        date: day(2024, 3, id as u32),
        created_at: None,
        created_by: None,
    }
}

/// Stored 500 000 RUB deal sold at 98.5; PL bought at 99.5, Bliss bought 5000 USD.
pub fn trading_deal(id: i64, platform: Platform) -> TradingDeal {
    let (buy_usd, buy_rate) = match platform {
        Platform::Pl => (500_000.0 / 99.5, 99.5),
        Platform::Bliss => (5000.0, 100.0),
    };
    let sell_usdt = 500_000.0 / 98.5;
    TradingDeal {
        id,
        trader_name: format!("Trader {id}"),
        platform,
        trade_date: day(2024, 3, 5),
        buy_rub: Some(500_000.0),
        buy_usd: Some(buy_usd),
        buy_rate: Some(buy_rate),
        buy_deal_id: None,
        sell_rub: Some(500_000.0),
        sell_usdt: Some(sell_usdt),
        sell_rate: Some(98.5),
        sell_order_number: None,
        profit_usd: Some(sell_usdt - buy_usd),
        trader_profit: Some((sell_usdt - buy_usd) * 0.0025),
        is_finalized: false,
    }
}

/// One request seen by the mock. Trading bodies are kept as JSON so tests
/// can check exactly which keys went out.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListTradingDeals,
    CreateTradingDeal(Value),
    UpdateTradingDeal(i64, Value),
    ListDeals,
    CreateDeal(NewDeal),
    FetchStats,
}

/// Canned endpoints that record every call. Writes append to or replace the
/// canned rows so that a reload sees them.
#[derive(Default)]
pub struct MockApi {
    trading: Mutex<Vec<TradingDeal>>,
    deals: Mutex<Vec<Deal>>,
    stats: Mutex<DashboardStats>,
    calls: Mutex<Vec<Call>>,
    failing: Mutex<HashSet<&'static str>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trading_deals(self, deals: Vec<TradingDeal>) -> Self {
        *self.trading.lock().unwrap() = deals;
        self
    }

    pub fn with_deals(self, deals: Vec<Deal>) -> Self {
        *self.deals.lock().unwrap() = deals;
        self
    }

    pub fn with_stats(self, stats: DashboardStats) -> Self {
        *self.stats.lock().unwrap() = stats;
        self
    }

    /// Make the named operation fail from now on.
    pub fn fail(&self, op: &'static str) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn recover(&self, op: &'static str) {
        self.failing.lock().unwrap().remove(op);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: Call, op: &'static str) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(op) {
            bail!("{op} failed");
        }
        Ok(())
    }
}

fn stored(id: i64, payload: &TradingDealPayload) -> TradingDeal {
    TradingDeal {
        id,
        trader_name: payload.trader_name.clone(),
        platform: payload.manual_buy.platform(),
        trade_date: NaiveDate::parse_from_str(&payload.trade_date, "%Y-%m-%d").unwrap_or(day(2024, 1, 1)),
        buy_rub: payload.buy_rub,
        buy_usd: None,
        buy_rate: None,
        buy_deal_id: payload.buy_deal_id.clone(),
        sell_rub: None,
        sell_usdt: None,
        sell_rate: payload.sell_rate,
        sell_order_number: payload.sell_order_number.clone(),
        profit_usd: None,
        trader_profit: None,
        is_finalized: false,
    }
}

#[async_trait]
impl TradingDealsApi for MockApi {
    async fn list_trading_deals(&self) -> Result<Vec<TradingDeal>> {
        self.record(Call::ListTradingDeals, "list_trading_deals")?;
        Ok(self.trading.lock().unwrap().clone())
    }

    async fn create_trading_deal(&self, payload: &TradingDealPayload) -> Result<()> {
        self.record(Call::CreateTradingDeal(serde_json::to_value(payload)?), "create_trading_deal")?;
        let mut rows = self.trading.lock().unwrap();
        let id = rows.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        rows.push(stored(id, payload));
        Ok(())
    }

    async fn update_trading_deal(&self, id: i64, payload: &TradingDealPayload) -> Result<()> {
        self.record(
            Call::UpdateTradingDeal(id, serde_json::to_value(payload)?),
            "update_trading_deal",
        )?;
        let mut rows = self.trading.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|d| d.id == id) {
            *row = stored(id, payload);
        }
        Ok(())
    }
}

#[async_trait]
impl DashboardApi for MockApi {
    async fn list_deals(&self) -> Result<Vec<Deal>> {
        self.record(Call::ListDeals, "list_deals")?;
        Ok(self.deals.lock().unwrap().clone())
    }

    async fn create_deal(&self, body: &NewDeal) -> Result<()> {
        self.record(Call::CreateDeal(body.clone()), "create_deal")?;
        let mut rows = self.deals.lock().unwrap();
        let id = rows.len() as i64 + 1;
        rows.insert(
            0,
            Deal {
                id,
                client_name: body.client_name.clone(),
                amount: body.amount.unwrap_or(0.0),
                profit: body.profit.unwrap_or(0.0),
                status: DealStatus::Pending,
                date: body.deal_date,
                created_at: None,
                created_by: None,
            },
        );
        Ok(())
    }

    async fn fetch_stats(&self) -> Result<DashboardStats> {
        self.record(Call::FetchStats, "fetch_stats")?;
        Ok(self.stats.lock().unwrap().clone())
    }
}
