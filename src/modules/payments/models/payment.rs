use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};

/// A monetary application against exactly one commitment.
///
/// Payments are created by the payment-entry workflow and are read-only for
/// the scheduling engine; they are never split across commitments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub commitment_id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

impl Payment {
    pub fn new(
        commitment_id: impl Into<String>,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<Self> {
        let commitment_id = commitment_id.into();
        if commitment_id.trim().is_empty() {
            return Err(AppError::validation("Payment requires a commitment id"));
        }
        if amount < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Payment amount cannot be negative, got {}",
                amount
            )));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            commitment_id,
            amount,
            date,
        })
    }
}
