use crate::format::{or_dash, ru_amount, Align, TextTable};
use crate::models::{Platform, TradingDeal};
use crate::trading::form::TradingDealForm;

/// Dense listing of trading deals, one row per record.
pub fn render_deals(deals: &[TradingDeal]) -> String {
    let mut table = TextTable::new(&[
        ("Date", Align::Left),
        ("Trader", Align::Left),
        ("Platform", Align::Left),
        ("Buy RUB", Align::Right),
        ("Buy USD", Align::Right),
        ("Buy rate", Align::Right),
        ("Deal ID", Align::Left),
        ("Sell RUB", Align::Right),
        ("Sell USDT", Align::Right),
        ("Sell rate", Align::Right),
        ("Order #", Align::Left),
        ("Profit $", Align::Right),
        ("Share", Align::Right),
        ("ID", Align::Right),
    ]);

    for d in deals {
        table.push(vec![
            d.trade_date.format("%d.%m.%Y").to_string(),
            d.trader_name.clone(),
            d.platform.to_string(),
            or_dash(d.buy_rub.map(ru_amount)),
            or_dash(d.buy_usd.map(|v| format!("{v:.2}"))),
            or_dash(d.buy_rate.map(|v| format!("{v:.4}"))),
            or_dash(d.buy_deal_id.clone().filter(|s| !s.is_empty())),
            or_dash(d.sell_rub.map(ru_amount)),
            or_dash(d.sell_usdt.map(|v| format!("{v:.4}"))),
            or_dash(d.sell_rate.map(|v| format!("{v:.4}"))),
            or_dash(d.sell_order_number.clone().filter(|s| !s.is_empty())),
            or_dash(d.profit_usd.map(|v| format!("{v:+.4}"))),
            or_dash(d.trader_profit.map(|v| format!("{v:.4}"))),
            d.id.to_string(),
        ]);
    }

    if table.is_empty() {
        return "No trading deals yet.".to_string();
    }
    table.render()
}

/// Form contents with the read-only derived values next to them.
pub fn render_preview(form: &TradingDealForm) -> String {
    let d = form.preview();
    let title = if form.is_editing() {
        "Edit deal"
    } else {
        "New deal"
    };

    let (usd_label, rate_label) = match form.platform {
        Platform::Pl => ("Buy USD (calculated)", "Buy rate"),
        Platform::Bliss => ("Buy USD", "Buy rate (calculated)"),
    };
    let (usd_value, rate_value) = match form.platform {
        Platform::Pl => (format!("{:.2}", d.buy_usd_calc), form.buy_rate.clone()),
        Platform::Bliss => (form.buy_usd.clone(), format!("{:.4}", d.buy_rate_calc)),
    };

    let rows = [
        ("Trader", form.trader_name.clone()),
        ("Platform", form.platform.to_string()),
        ("Trade date", form.trade_date.clone()),
        ("Buy RUB", form.buy_rub.clone()),
        (usd_label, usd_value),
        (rate_label, rate_value),
        ("Buy deal ID", form.buy_deal_id.clone()),
        ("Sell RUB", d.sell_rub.to_string()),
        ("Sell USDT", format!("{:.4}", d.sell_usdt)),
        ("Sell rate", form.sell_rate.clone()),
        ("Sell order #", form.sell_order_number.clone()),
        ("Profit $", format!("{:.4}", d.profit_usd)),
        ("Trader profit (0.25%)", format!("{:.4}", d.trader_profit)),
    ];

    let width = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    let mut out = vec![title.to_string()];
    out.extend(rows.iter().map(|(label, value)| format!("  {label:<width$}  {value}")));
    out.join("\n")
}
