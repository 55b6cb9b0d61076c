use chrono::NaiveDate;

use crate::models::{Deal, DealStatus, Platform, TradingDeal};

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn deal(
    id: i64,
    client: &str,
    amount: f64,
    profit: f64,
    status: DealStatus,
    date: NaiveDate,
) -> Deal {
    Deal {
        id,
        client_name: client.to_string(),
        amount,
        profit,
        status,
        date,
        created_at: None,
        created_by: None,
    }
}

/// A stored 500 000 RUB deal dated 2024-03-05, sold at 98.5.
/// PL buys at 99.5; Bliss buys 5000 USD.
pub fn trading_deal(id: i64, platform: Platform) -> TradingDeal {
    let (buy_usd, buy_rate) = match platform {
        Platform::Pl => (500_000.0 / 99.5, 99.5),
        Platform::Bliss => (5000.0, 100.0),
    };
    let sell_usdt = 500_000.0 / 98.5;
    let profit = sell_usdt - buy_usd;
    TradingDeal {
        id,
        trader_name: format!("Trader {id}"),
        platform,
        trade_date: day(2024, 3, 5),
        buy_rub: Some(500_000.0),
        buy_usd: Some(buy_usd),
        buy_rate: Some(buy_rate),
        buy_deal_id: Some(format!("BUY-{id}")),
        sell_rub: Some(500_000.0),
        sell_usdt: Some(sell_usdt),
        sell_rate: Some(98.5),
        sell_order_number: Some(format!("ORD-{id}")),
        profit_usd: Some(profit),
        trader_profit: Some(profit * 0.0025),
        is_finalized: false,
    }
}
