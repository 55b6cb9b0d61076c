use anyhow::{bail, Result};
use chrono::NaiveDate;

use crate::error::SubmitError;
use crate::models::{Platform, TradingDeal};
use crate::trading::calculator::{calculate, read_number, CalcInputs, DerivedFields};
use crate::trading::payload::{ManualBuy, TradingDealPayload};

/// Whether the form creates a new record or rewrites an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    TraderName,
    Platform,
    TradeDate,
    BuyRub,
    BuyUsd,
    BuyRate,
    BuyDealId,
    SellRate,
    SellOrderNumber,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::TraderName,
        FormField::Platform,
        FormField::TradeDate,
        FormField::BuyRub,
        FormField::BuyUsd,
        FormField::BuyRate,
        FormField::BuyDealId,
        FormField::SellRate,
        FormField::SellOrderNumber,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::TraderName => "trader_name",
            FormField::Platform => "platform",
            FormField::TradeDate => "trade_date",
            FormField::BuyRub => "buy_rub",
            FormField::BuyUsd => "buy_usd",
            FormField::BuyRate => "buy_rate",
            FormField::BuyDealId => "buy_deal_id",
            FormField::SellRate => "sell_rate",
            FormField::SellOrderNumber => "sell_order_number",
        }
    }

    pub fn from_name(name: &str) -> Option<FormField> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// Text state of the trading-deal dialog. Every field is kept as typed;
/// numbers are read only when previewing or submitting.
#[derive(Debug, Clone, PartialEq)]
pub struct TradingDealForm {
    pub mode: FormMode,
    pub trader_name: String,
    pub platform: Platform,
    pub trade_date: String,
    pub buy_rub: String,
    pub buy_usd: String,
    pub buy_rate: String,
    pub buy_deal_id: String,
    pub sell_rate: String,
    pub sell_order_number: String,
}

impl TradingDealForm {
    /// Creation defaults: blank fields, PL, dated `today`.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            mode: FormMode::Creating,
            trader_name: String::new(),
            platform: Platform::Pl,
            trade_date: today.format("%Y-%m-%d").to_string(),
            buy_rub: String::new(),
            buy_usd: String::new(),
            buy_rate: String::new(),
            buy_deal_id: String::new(),
            sell_rate: String::new(),
            sell_order_number: String::new(),
        }
    }

    /// Load a stored record for editing. Absent values become empty text.
    pub fn from_deal(deal: &TradingDeal) -> Self {
        let num = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_default();
        Self {
            mode: FormMode::Editing(deal.id),
            trader_name: deal.trader_name.clone(),
            platform: deal.platform,
            trade_date: deal.trade_date.format("%Y-%m-%d").to_string(),
            buy_rub: num(deal.buy_rub),
            buy_usd: num(deal.buy_usd),
            buy_rate: num(deal.buy_rate),
            buy_deal_id: deal.buy_deal_id.clone().unwrap_or_default(),
            sell_rate: num(deal.sell_rate),
            sell_order_number: deal.sell_order_number.clone().unwrap_or_default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    /// Apply one edit. Only the platform selector can refuse a value.
    pub fn set(&mut self, field: FormField, value: &str) -> Result<()> {
        let value = value.to_string();
        match field {
            FormField::TraderName => self.trader_name = value,
            FormField::Platform => match Platform::from_str_loose(&value) {
                Some(p) => self.platform = p,
                None => bail!("unknown platform '{value}' (expected PL or Bliss)"),
            },
            FormField::TradeDate => self.trade_date = value,
            FormField::BuyRub => self.buy_rub = value,
            FormField::BuyUsd => self.buy_usd = value,
            FormField::BuyRate => self.buy_rate = value,
            FormField::BuyDealId => self.buy_deal_id = value,
            FormField::SellRate => self.sell_rate = value,
            FormField::SellOrderNumber => self.sell_order_number = value,
        }
        Ok(())
    }

    pub fn calc_inputs(&self) -> CalcInputs {
        CalcInputs::from_text(
            self.platform,
            &self.buy_rub,
            &self.buy_usd,
            &self.buy_rate,
            &self.sell_rate,
        )
    }

    /// Live preview of the derived fields for the current text.
    pub fn preview(&self) -> DerivedFields {
        calculate(&self.calc_inputs())
    }

    /// Labels of the required fields that are still empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.trader_name.is_empty() {
            missing.push("Trader name");
        }
        if self.buy_rub.is_empty() {
            missing.push("Buy amount (RUB)");
        }
        if self.sell_rate.is_empty() {
            missing.push("Sell rate");
        }
        missing
    }

    /// Validate and build the request body.
    pub fn to_payload(&self) -> Result<TradingDealPayload, SubmitError> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(SubmitError::MissingFields(missing));
        }

        let manual_buy = match self.platform {
            Platform::Pl => ManualBuy::Pl {
                buy_rate: read_number(&self.buy_rate),
            },
            Platform::Bliss => ManualBuy::Bliss {
                buy_usd: read_number(&self.buy_usd),
            },
        };

        Ok(TradingDealPayload {
            trader_name: self.trader_name.clone(),
            trade_date: self.trade_date.clone(),
            buy_rub: read_number(&self.buy_rub),
            sell_rate: read_number(&self.sell_rate),
            buy_deal_id: non_empty(&self.buy_deal_id),
            sell_order_number: non_empty(&self.sell_order_number),
            manual_buy,
        })
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
