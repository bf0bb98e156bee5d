use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::payments::models::Payment;

/// Rounding tolerance for deciding a commitment is fully paid: 1% of the
/// total amount. Absorbs rounding noise from multi-currency or tax rounding
/// upstream.
pub fn completion_tolerance(total_amount: Decimal) -> Decimal {
    total_amount * Decimal::new(1, 2) // 0.01
}

/// Derived payment summary for one commitment. Never persisted; recomputed
/// from the live payment set on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStats {
    pub total_amount: Decimal,
    pub total_paid: Decimal,
    /// `max(0, total_amount - total_paid)`
    pub remaining_amount: Decimal,
    /// 0..=100, coerced to 0 when `total_amount` is 0
    pub payment_percentage: Decimal,
    pub payments_count: usize,
    pub is_completely_paid: bool,
    pub is_partially_paid: bool,
    pub has_no_payments: bool,
}

impl PaymentStats {
    /// Stats for a commitment with no recorded payments
    pub fn empty(total_amount: Decimal) -> Self {
        Self::from_payments(total_amount, &[])
    }

    /// Accumulate a payment set into summary statistics.
    ///
    /// All payments in the slice are assumed to reference the same
    /// commitment; use [`PaymentStats::for_commitment`] when the slice may be
    /// unfiltered.
    pub fn from_payments(total_amount: Decimal, payments: &[Payment]) -> Self {
        let total_paid: Decimal = payments.iter().map(|p| p.amount).sum();
        let remaining_amount = (total_amount - total_paid).max(Decimal::ZERO);

        let payment_percentage = if total_amount > Decimal::ZERO {
            (total_paid / total_amount * Decimal::from(100)).round_dp(2)
        } else {
            Decimal::ZERO
        };

        let tolerance = completion_tolerance(total_amount);
        let is_completely_paid = remaining_amount <= tolerance || total_paid >= total_amount;
        let is_partially_paid = total_paid > Decimal::ZERO && !is_completely_paid;
        let has_no_payments = total_paid == Decimal::ZERO;

        Self {
            total_amount,
            total_paid,
            remaining_amount,
            payment_percentage,
            payments_count: payments.len(),
            is_completely_paid,
            is_partially_paid,
            has_no_payments,
        }
    }

    /// Like [`PaymentStats::from_payments`] but drops payments referencing a
    /// different commitment id first
    pub fn for_commitment(
        commitment_id: &str,
        total_amount: Decimal,
        payments: &[Payment],
    ) -> Self {
        let own: Vec<Payment> = payments
            .iter()
            .filter(|p| p.commitment_id == commitment_id)
            .cloned()
            .collect();
        Self::from_payments(total_amount, &own)
    }
}
