use chrono::NaiveDate;

use crate::error::SubmitError;
use crate::models::NewDeal;
use crate::trading::calculator::read_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealField {
    Client,
    Amount,
    Profit,
}

/// The add-deal form on the dashboard. Plain text, no derived values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DealForm {
    pub client_name: String,
    pub amount: String,
    pub profit: String,
}

impl DealForm {
    pub fn set(&mut self, field: DealField, value: &str) {
        let slot = match field {
            DealField::Client => &mut self.client_name,
            DealField::Amount => &mut self.amount,
            DealField::Profit => &mut self.profit,
        };
        *slot = value.to_string();
    }

    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.client_name.is_empty() {
            missing.push("Client");
        }
        if self.amount.is_empty() {
            missing.push("Amount");
        }
        if self.profit.is_empty() {
            missing.push("Profit");
        }
        missing
    }

    /// Validate and build the body for the deals endpoint, dated `today`.
    /// Unparsable numbers are sent as null and left to the endpoint to reject.
    pub fn to_new_deal(&self, today: NaiveDate) -> Result<NewDeal, SubmitError> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(SubmitError::MissingFields(missing));
        }
        Ok(NewDeal {
            client_name: self.client_name.clone(),
            amount: read_number(&self.amount),
            profit: read_number(&self.profit),
            deal_date: today,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::day;

    #[test]
    fn blocks_until_all_fields_filled() {
        let mut form = DealForm::default();
        form.set(DealField::Amount, "1000");
        match form.to_new_deal(day(2024, 5, 9)) {
            Err(SubmitError::MissingFields(fields)) => assert_eq!(fields, vec!["Client", "Profit"]),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn builds_body_dated_today() {
        let mut form = DealForm::default();
        form.set(DealField::Client, "Acme");
        form.set(DealField::Amount, "250000");
        form.set(DealField::Profit, "abc");
        let body = form.to_new_deal(day(2024, 5, 9)).unwrap();
        assert_eq!(body.client_name, "Acme");
        assert_eq!(body.amount, Some(250000.0));
        assert_eq!(body.profit, None);
        assert_eq!(body.deal_date, day(2024, 5, 9));
    }
}
