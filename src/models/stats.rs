use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub month: String,
    pub value: f64,
}

/// Aggregates served by the statistics endpoint. Every field falls back to
/// zero/empty, which is also what the dashboard shows before (or instead of)
/// a successful load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_revenue: f64,
    pub total_profit: f64,
    /// Percent, one decimal.
    pub profit_margin: f64,
    pub active_deals: u64,
    pub total_deals: Option<u64>,
    pub sales_data: Vec<SeriesPoint>,
    pub profit_data: Vec<SeriesPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case() {
        let raw = r#"{
            "totalRevenue": 1250000.0,
            "totalProfit": 210000.0,
            "profitMargin": 16.8,
            "activeDeals": 4,
            "totalDeals": 9,
            "salesData": [{"month": "Jan", "value": 400000.0}],
            "profitData": [{"month": "Jan", "value": 15.2}]
        }"#;
        let stats: DashboardStats = serde_json::from_str(raw).unwrap();
        assert_eq!(stats.active_deals, 4);
        assert_eq!(stats.total_deals, Some(9));
        assert_eq!(stats.sales_data[0].month, "Jan");
        assert!((stats.profit_margin - 16.8).abs() < 1e-12);
    }

    #[test]
    fn missing_fields_fall_back_to_zero() {
        let stats: DashboardStats = serde_json::from_str(r#"{"activeDeals": 2}"#).unwrap();
        assert_eq!(stats.active_deals, 2);
        assert_eq!(stats.total_revenue, 0.0);
        assert!(stats.sales_data.is_empty());
        assert!(stats.total_deals.is_none());
    }
}
