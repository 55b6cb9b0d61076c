use serde::Serialize;

use crate::models::Platform;

/// Trader's share of the dollar profit (0.25%).
pub const TRADER_COMMISSION_RATE: f64 = 0.0025;

/// `rub = rate × usd`, read in any of its three directions.
///
/// The `checked_*` readings are `None` when the divisor is zero; the plain
/// readings collapse that case to `0.0`.
pub struct RubUsdRelation;

impl RubUsdRelation {
    pub fn rub(rate: f64, usd: f64) -> f64 {
        rate * usd
    }

    pub fn checked_usd(rub: f64, rate: f64) -> Option<f64> {
        checked_div(rub, rate)
    }

    pub fn checked_rate(rub: f64, usd: f64) -> Option<f64> {
        checked_div(rub, usd)
    }

    pub fn usd(rub: f64, rate: f64) -> f64 {
        Self::checked_usd(rub, rate).unwrap_or(0.0)
    }

    pub fn rate(rub: f64, usd: f64) -> f64 {
        Self::checked_rate(rub, usd).unwrap_or(0.0)
    }
}

fn checked_div(numerator: f64, divisor: f64) -> Option<f64> {
    if divisor != 0.0 {
        Some(numerator / divisor)
    } else {
        None
    }
}

/// Read a number the way a lenient form field does: skip leading
/// whitespace and take the longest numeric prefix (`"12abc"` is 12).
/// Empty, non-numeric and non-finite text gives `None`.
pub fn read_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let at = |i: usize| bytes.get(i).copied();

    let mut end = 0;
    if matches!(at(0), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while at(end).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
    }
    let mut digits = end - int_start;

    if at(end) == Some(b'.') {
        let mut frac_end = end + 1;
        while at(frac_end).is_some_and(|b| b.is_ascii_digit()) {
            frac_end += 1;
        }
        let frac_digits = frac_end - end - 1;
        if frac_digits > 0 || digits > 0 {
            digits += frac_digits;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(at(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(at(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_start = exp_end;
        while at(exp_end).is_some_and(|b| b.is_ascii_digit()) {
            exp_end += 1;
        }
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// [`read_number`], with unreadable text counted as zero.
pub fn amount_or_zero(text: &str) -> f64 {
    read_number(text).unwrap_or(0.0)
}

/// Raw calculator inputs, already read as numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalcInputs {
    pub platform: Platform,
    pub buy_rub: f64,
    pub buy_usd: f64,
    pub buy_rate: f64,
    pub sell_rate: f64,
}

impl CalcInputs {
    pub fn from_text(
        platform: Platform,
        buy_rub: &str,
        buy_usd: &str,
        buy_rate: &str,
        sell_rate: &str,
    ) -> Self {
        Self {
            platform,
            buy_rub: amount_or_zero(buy_rub),
            buy_usd: amount_or_zero(buy_usd),
            buy_rate: amount_or_zero(buy_rate),
            sell_rate: amount_or_zero(sell_rate),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DerivedFields {
    pub buy_usd_calc: f64,
    pub buy_rate_calc: f64,
    pub sell_rub: f64,
    pub sell_usdt: f64,
    pub profit_usd: f64,
    pub trader_profit: f64,
}

/// Compute every derived field of a trading deal from its manual inputs.
///
/// The buy leg keeps the platform's manual field as-is and reconstructs the
/// other one from the ruble amount. The sell leg always settles the same
/// ruble principal at `sell_rate`.
pub fn calculate(inputs: &CalcInputs) -> DerivedFields {
    let (buy_usd_calc, buy_rate_calc) = match inputs.platform {
        Platform::Pl => (
            RubUsdRelation::usd(inputs.buy_rub, inputs.buy_rate),
            inputs.buy_rate,
        ),
        Platform::Bliss => (
            inputs.buy_usd,
            RubUsdRelation::rate(inputs.buy_rub, inputs.buy_usd),
        ),
    };

    let sell_rub = inputs.buy_rub;
    let sell_usdt = RubUsdRelation::usd(sell_rub, inputs.sell_rate);
    let profit_usd = sell_usdt - buy_usd_calc;

    DerivedFields {
        buy_usd_calc,
        buy_rate_calc,
        sell_rub,
        sell_usdt,
        profit_usd,
        trader_profit: profit_usd * TRADER_COMMISSION_RATE,
    }
}
