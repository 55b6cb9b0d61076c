use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealStatus {
    Active,
    Completed,
    Pending,
}

impl fmt::Display for DealStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealStatus::Active => write!(f, "active"),
            DealStatus::Completed => write!(f, "completed"),
            DealStatus::Pending => write!(f, "pending"),
        }
    }
}

impl DealStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DealStatus::Active => "Active",
            DealStatus::Completed => "Completed",
            DealStatus::Pending => "Awaiting",
        }
    }
}

/// A generic client deal as listed by the deals endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: i64,
    #[serde(rename = "client")]
    pub client_name: String,
    pub amount: f64,
    pub profit: f64,
    pub status: DealStatus,
    #[serde(with = "dotted_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
}

impl Deal {
    /// Profit as a fraction of the deal amount. `None` for a zero amount.
    pub fn margin(&self) -> Option<f64> {
        if self.amount != 0.0 {
            Some(self.profit / self.amount)
        } else {
            None
        }
    }
}

/// Body posted to the deals endpoint to create a deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDeal {
    pub client_name: String,
    pub amount: Option<f64>,
    pub profit: Option<f64>,
    pub deal_date: NaiveDate,
}

/// `DD.MM.YYYY`, the form the deals endpoint uses for dates.
pub mod dotted_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%d.%m.%Y";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_listing_row() {
        let raw = r#"{
            "id": 3,
            "client": "Horns & Hooves LLC",
            "amount": 250000.0,
            "profit": 45000.0,
            "status": "active",
            "date": "14.02.2024",
            "created_at": "2024-02-14T10:00:00",
            "created_by": null
        }"#;
        let deal: Deal = serde_json::from_str(raw).unwrap();
        assert_eq!(deal.client_name, "Horns & Hooves LLC");
        assert_eq!(deal.status, DealStatus::Active);
        assert_eq!(deal.date, NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());
        assert!(deal.created_by.is_none());
        assert!((deal.margin().unwrap() - 0.18).abs() < 1e-12);
    }

    #[test]
    fn margin_of_zero_amount_is_none() {
        let deal = Deal {
            id: 1,
            client_name: "X".into(),
            amount: 0.0,
            profit: 10.0,
            status: DealStatus::Pending,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            created_at: None,
            created_by: None,
        };
        assert!(deal.margin().is_none());
    }

    #[test]
    fn new_deal_body_shape() {
        let body = NewDeal {
            client_name: "Acme".into(),
            amount: Some(1000.0),
            profit: None,
            deal_date: NaiveDate::from_ymd_opt(2024, 5, 9).unwrap(),
        };
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["client_name"], "Acme");
        assert_eq!(v["amount"], 1000.0);
        assert!(v["profit"].is_null());
        assert_eq!(v["deal_date"], "2024-05-09");
    }
}
