use serde::Serialize;

use crate::models::Platform;

/// The one buy-side field a platform lets the user type in. The variant tag
/// is serialized as the `platform` field of the payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "platform")]
pub enum ManualBuy {
    #[serde(rename = "PL")]
    Pl { buy_rate: Option<f64> },
    Bliss { buy_usd: Option<f64> },
}

impl ManualBuy {
    pub fn platform(&self) -> Platform {
        match self {
            ManualBuy::Pl { .. } => Platform::Pl,
            ManualBuy::Bliss { .. } => Platform::Bliss,
        }
    }
}

/// Body sent to the trading endpoint on create and update. Numbers that did
/// not read as numbers travel as `null`; derived fields are never sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradingDealPayload {
    pub trader_name: String,
    /// Sent exactly as entered in the form.
    pub trade_date: String,
    pub buy_rub: Option<f64>,
    pub sell_rate: Option<f64>,
    pub buy_deal_id: Option<String>,
    pub sell_order_number: Option<String>,
    #[serde(flatten)]
    pub manual_buy: ManualBuy,
}

/// Update body: the payload plus the id of the record it replaces.
#[derive(Debug, Clone, Serialize)]
pub struct TradingDealUpdate<'a> {
    pub id: i64,
    #[serde(flatten)]
    pub payload: &'a TradingDealPayload,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(manual_buy: ManualBuy) -> TradingDealPayload {
        TradingDealPayload {
            trader_name: "Ivanov I.I.".into(),
            trade_date: "2024-03-05".into(),
            buy_rub: Some(500_000.0),
            sell_rate: Some(98.5),
            buy_deal_id: None,
            sell_order_number: Some("S-1".into()),
            manual_buy,
        }
    }

    #[test]
    fn pl_sends_only_buy_rate() {
        let v = serde_json::to_value(payload(ManualBuy::Pl { buy_rate: Some(99.5) })).unwrap();
        assert_eq!(v["platform"], "PL");
        assert_eq!(v["buy_rate"], 99.5);
        assert!(v.get("buy_usd").is_none());
        assert!(v.get("id").is_none());
        assert!(v["buy_deal_id"].is_null());
        assert_eq!(v["sell_order_number"], "S-1");
    }

    #[test]
    fn bliss_sends_only_buy_usd() {
        let v = serde_json::to_value(payload(ManualBuy::Bliss { buy_usd: Some(5000.0) })).unwrap();
        assert_eq!(v["platform"], "Bliss");
        assert_eq!(v["buy_usd"], 5000.0);
        assert!(v.get("buy_rate").is_none());
    }

    #[test]
    fn unreadable_manual_field_is_null() {
        let v = serde_json::to_value(payload(ManualBuy::Pl { buy_rate: None })).unwrap();
        assert!(v["buy_rate"].is_null());
    }

    #[test]
    fn update_carries_id() {
        let p = payload(ManualBuy::Pl { buy_rate: Some(99.5) });
        let v = serde_json::to_value(TradingDealUpdate { id: 42, payload: &p }).unwrap();
        assert_eq!(v["id"], 42);
        assert_eq!(v["platform"], "PL");
        assert_eq!(v["trader_name"], "Ivanov I.I.");
    }
}
