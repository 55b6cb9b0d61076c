use anyhow::Result;
use async_trait::async_trait;
use chrono::{Datelike, Months, NaiveDate};
use std::collections::BTreeMap;
use tokio::sync::Mutex;
use tracing::debug;

use crate::api::{DashboardApi, TradingDealsApi};
use crate::error::ApiError;
use crate::models::{DashboardStats, Deal, DealStatus, NewDeal, SeriesPoint, TradingDeal};
use crate::trading::calculator::{RubUsdRelation, TRADER_COMMISSION_RATE};
use crate::trading::payload::{ManualBuy, TradingDealPayload};

/// Months of history covered by the stats series.
const SERIES_MONTHS: u32 = 3;

#[derive(Default)]
struct Store {
    trading: Vec<TradingDeal>,
    next_trading_id: i64,
    deals: Vec<Deal>,
    next_deal_id: i64,
}

/// In-process stand-in for the three remote endpoints.
///
/// Answers the way the remote system does: derived trading fields are
/// recomputed on every write, zero amounts read back as absent, and the
/// stats are aggregated from the stored generic deals as of `today`.
pub struct MemoryBackend {
    store: Mutex<Store>,
    today: NaiveDate,
}

impl MemoryBackend {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            store: Mutex::new(Store {
                next_trading_id: 1,
                next_deal_id: 1,
                ..Store::default()
            }),
            today,
        }
    }

    /// Preload generic deals (ids are kept as given).
    pub fn with_deals(mut self, deals: Vec<Deal>) -> Self {
        let store = self.store.get_mut();
        for deal in deals {
            store.next_deal_id = store.next_deal_id.max(deal.id + 1);
            store.deals.push(deal);
        }
        self
    }

    /// Preload trading deals (ids are kept as given).
    pub fn with_trading_deals(mut self, deals: Vec<TradingDeal>) -> Self {
        let store = self.store.get_mut();
        for deal in deals {
            store.next_trading_id = store.next_trading_id.max(deal.id + 1);
            store.trading.push(deal);
        }
        self
    }
}

fn rejected(endpoint: &'static str, status: u16) -> anyhow::Error {
    ApiError { endpoint, status }.into()
}

fn non_zero(v: Option<f64>) -> Option<f64> {
    v.filter(|n| *n != 0.0)
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Build the stored row for a payload, deriving what the client never sends.
fn stored_trading_deal(id: i64, payload: &TradingDealPayload, is_finalized: bool) -> Result<TradingDeal> {
    let trade_date = NaiveDate::parse_from_str(&payload.trade_date, "%Y-%m-%d")
        .map_err(|_| rejected("trading deals", 400))?;

    let buy_rub = payload.buy_rub.unwrap_or(0.0);
    let sell_rate = payload.sell_rate.unwrap_or(0.0);

    let (buy_usd, buy_rate) = match payload.manual_buy {
        ManualBuy::Pl { buy_rate } => (
            RubUsdRelation::checked_usd(buy_rub, buy_rate.unwrap_or(0.0)),
            buy_rate,
        ),
        ManualBuy::Bliss { buy_usd } => (
            buy_usd,
            RubUsdRelation::checked_rate(buy_rub, buy_usd.unwrap_or(0.0)),
        ),
    };
    let sell_usdt = RubUsdRelation::checked_usd(buy_rub, sell_rate);

    let profit_usd = match (non_zero(buy_usd), non_zero(sell_usdt)) {
        (Some(bought), Some(sold)) => Some(sold - bought),
        _ => None,
    };

    Ok(TradingDeal {
        id,
        trader_name: payload.trader_name.clone(),
        platform: payload.manual_buy.platform(),
        trade_date,
        buy_rub: non_zero(Some(buy_rub)),
        buy_usd: non_zero(buy_usd),
        buy_rate: non_zero(buy_rate),
        buy_deal_id: payload.buy_deal_id.clone(),
        sell_rub: non_zero(Some(buy_rub)),
        sell_usdt: non_zero(sell_usdt),
        sell_rate: non_zero(Some(sell_rate)),
        sell_order_number: payload.sell_order_number.clone(),
        profit_usd: non_zero(profit_usd),
        trader_profit: non_zero(profit_usd.map(|p| p * TRADER_COMMISSION_RATE)),
        is_finalized,
    })
}

fn compute_stats(deals: &[Deal], today: NaiveDate) -> DashboardStats {
    let total_revenue: f64 = deals.iter().map(|d| d.amount).sum();
    let total_profit: f64 = deals.iter().map(|d| d.profit).sum();
    let active_deals = deals.iter().filter(|d| d.status == DealStatus::Active).count() as u64;

    let profit_margin = if total_revenue > 0.0 {
        round1(total_profit / total_revenue * 100.0)
    } else {
        0.0
    };

    let cutoff = today
        .checked_sub_months(Months::new(SERIES_MONTHS))
        .unwrap_or(today);

    // month number -> (abbreviation, revenue, profit)
    let mut months: BTreeMap<u32, (String, f64, f64)> = BTreeMap::new();
    for d in deals.iter().filter(|d| d.date >= cutoff) {
        let entry = months
            .entry(d.date.month())
            .or_insert_with(|| (d.date.format("%b").to_string(), 0.0, 0.0));
        entry.1 += d.amount;
        entry.2 += d.profit;
    }

    let sales_data = months
        .values()
        .map(|(month, revenue, _)| SeriesPoint {
            month: month.clone(),
            value: *revenue,
        })
        .collect();
    let profit_data = months
        .values()
        .map(|(month, revenue, profit)| SeriesPoint {
            month: month.clone(),
            value: if *revenue > 0.0 {
                round1(profit / revenue * 100.0)
            } else {
                0.0
            },
        })
        .collect();

    DashboardStats {
        total_revenue,
        total_profit,
        profit_margin,
        active_deals,
        total_deals: Some(deals.len() as u64),
        sales_data,
        profit_data,
    }
}

#[async_trait]
impl TradingDealsApi for MemoryBackend {
    async fn list_trading_deals(&self) -> Result<Vec<TradingDeal>> {
        let store = self.store.lock().await;
        let mut deals = store.trading.clone();
        deals.sort_by(|a, b| b.trade_date.cmp(&a.trade_date).then(b.id.cmp(&a.id)));
        Ok(deals)
    }

    async fn create_trading_deal(&self, payload: &TradingDealPayload) -> Result<()> {
        let mut store = self.store.lock().await;
        let id = store.next_trading_id;
        let deal = stored_trading_deal(id, payload, false)?;
        debug!("memory: stored trading deal {}", id);
        store.trading.push(deal);
        store.next_trading_id += 1;
        Ok(())
    }

    async fn update_trading_deal(&self, id: i64, payload: &TradingDealPayload) -> Result<()> {
        let mut store = self.store.lock().await;
        let slot = store
            .trading
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| rejected("trading deals", 404))?;
        *slot = stored_trading_deal(id, payload, slot.is_finalized)?;
        debug!("memory: updated trading deal {}", id);
        Ok(())
    }
}

#[async_trait]
impl DashboardApi for MemoryBackend {
    async fn list_deals(&self) -> Result<Vec<Deal>> {
        let store = self.store.lock().await;
        let mut deals = store.deals.clone();
        deals.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(deals)
    }

    async fn create_deal(&self, deal: &NewDeal) -> Result<()> {
        let (amount, profit) = match (non_zero(deal.amount), non_zero(deal.profit)) {
            (Some(a), Some(p)) if !deal.client_name.is_empty() => (a, p),
            _ => return Err(rejected("deals", 400)),
        };

        let mut store = self.store.lock().await;
        let id = store.next_deal_id;
        store.deals.push(Deal {
            id,
            client_name: deal.client_name.clone(),
            amount,
            profit,
            status: DealStatus::Pending,
            date: deal.deal_date,
            created_at: None,
            created_by: None,
        });
        store.next_deal_id += 1;
        Ok(())
    }

    async fn fetch_stats(&self) -> Result<DashboardStats> {
        let store = self.store.lock().await;
        Ok(compute_stats(&store.deals, self.today))
    }
}
