use crate::dashboard::view::DashboardView;
use crate::format::{ru_amount, Align, TextTable};
use crate::models::Deal;

pub fn render_summary(view: &DashboardView) -> String {
    let stats = view.stats();
    let mut out = vec![
        format!("Total revenue:  {} ₽", ru_amount(stats.total_revenue)),
        format!(
            "Total profit:   {} ₽ (margin {:.1}%)",
            ru_amount(stats.total_profit),
            stats.profit_margin
        ),
        format!("Active deals:   {}", stats.active_deals),
        format!("Deals loaded:   {}", view.deals().len()),
        String::new(),
        "Recent deals".to_string(),
    ];

    let recent = view.recent();
    if recent.is_empty() {
        out.push("  No deals yet.".to_string());
    } else {
        let mut table = TextTable::new(&[
            ("Client", Align::Left),
            ("Amount", Align::Right),
            ("Profit", Align::Right),
            ("Status", Align::Left),
            ("Date", Align::Left),
        ]);
        for d in recent {
            table.push(vec![
                d.client_name.clone(),
                ru_amount(d.amount),
                ru_amount(d.profit),
                d.status.label().to_string(),
                d.date.format("%d.%m.%Y").to_string(),
            ]);
        }
        out.push(table.render());
    }
    out.join("\n")
}

/// Every loaded deal with its margin.
pub fn render_deal_list(deals: &[Deal]) -> String {
    if deals.is_empty() {
        return "No deals yet.".to_string();
    }
    let mut table = TextTable::new(&[
        ("ID", Align::Right),
        ("Client", Align::Left),
        ("Amount", Align::Right),
        ("Profit", Align::Right),
        ("Margin", Align::Right),
        ("Status", Align::Left),
        ("Date", Align::Left),
    ]);
    for d in deals {
        table.push(vec![
            d.id.to_string(),
            d.client_name.clone(),
            ru_amount(d.amount),
            ru_amount(d.profit),
            d.margin()
                .map(|m| format!("{:.1}%", m * 100.0))
                .unwrap_or_else(|| "—".to_string()),
            d.status.label().to_string(),
            d.date.format("%d.%m.%Y").to_string(),
        ]);
    }
    table.render()
}
