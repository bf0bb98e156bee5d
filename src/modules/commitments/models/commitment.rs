use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Currency, Result};
use crate::modules::commitments::models::Periodicity;

/// Monetary components of a commitment. The stored total is always derived
/// from these, never hand-edited.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountComponents {
    pub base_amount: Decimal,
    /// Additive tax (e.g. VAT)
    #[serde(default)]
    pub tax_amount: Decimal,
    /// Subtractive withholdings (e.g. retención, ICA)
    #[serde(default)]
    pub withholding_amount: Decimal,
    #[serde(default)]
    pub discount_amount: Decimal,
}

impl AmountComponents {
    pub fn base(base_amount: Decimal) -> Self {
        Self {
            base_amount,
            ..Self::default()
        }
    }

    /// Derived obligation total, rounded to the currency scale
    pub fn total(&self, currency: Currency) -> Decimal {
        currency.round(
            self.base_amount + self.tax_amount - self.withholding_amount - self.discount_amount,
        )
    }

    fn validate(&self, currency: Currency) -> Result<()> {
        for (name, value) in [
            ("baseAmount", self.base_amount),
            ("taxAmount", self.tax_amount),
            ("withholdingAmount", self.withholding_amount),
            ("discountAmount", self.discount_amount),
        ] {
            if value < Decimal::ZERO {
                return Err(AppError::validation(format!(
                    "{} cannot be negative, got {}",
                    name, value
                )));
            }
            currency
                .validate_amount(value)
                .map_err(|reason| AppError::validation(format!("{}: {}", name, reason)))?;
        }

        if self.total(currency) < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Derived total is negative ({}); withholdings and discount exceed base plus tax",
                self.total(currency)
            )));
        }

        Ok(())
    }
}

/// Auditable manual completion override. Replaces the loose legacy `paid`
/// boolean for newly marked records: who set it and when.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualPaidMark {
    pub marked_by: String,
    pub marked_at: NaiveDateTime,
}

/// A financial obligation instance, possibly one member of a recurring series.
///
/// Stored field names are camelCase (`groupId`, `dueDate`, ...) to match the
/// external document store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commitment {
    pub id: String,
    /// Present only for members of a recurring series
    #[serde(default)]
    pub group_id: Option<String>,
    /// 0-based position within the group; 0 for the anchor and for one-offs
    #[serde(default)]
    pub recurring_index: u32,

    pub company_id: String,
    pub company_name: String,
    pub beneficiary: String,
    pub beneficiary_tax_id: String,
    pub concept: String,

    pub base_amount: Decimal,
    #[serde(default)]
    pub tax_amount: Decimal,
    #[serde(default)]
    pub withholding_amount: Decimal,
    #[serde(default)]
    pub discount_amount: Decimal,
    /// Always derived from the components above; see [`Commitment::set_amounts`]
    pub total_amount: Decimal,
    #[serde(default)]
    pub currency: Currency,

    pub due_date: NaiveDate,
    pub periodicity: Periodicity,

    /// Legacy manual override flag, kept for records that predate
    /// [`ManualPaidMark`]
    #[serde(default)]
    pub paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_paid: Option<ManualPaidMark>,
    /// Denormalized hint maintained by the write path; never authoritative
    /// and never written by the status classifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Commitment {
    /// Create a new standalone commitment draft
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        company_id: impl Into<String>,
        company_name: impl Into<String>,
        beneficiary: impl Into<String>,
        beneficiary_tax_id: impl Into<String>,
        concept: impl Into<String>,
        amounts: AmountComponents,
        currency: Currency,
        due_date: NaiveDate,
        periodicity: Periodicity,
    ) -> Result<Self> {
        let company_id = company_id.into();
        let company_name = company_name.into();
        let beneficiary = beneficiary.into();
        let beneficiary_tax_id = beneficiary_tax_id.into();
        let concept = concept.into();

        if company_id.trim().is_empty() {
            return Err(AppError::validation("Company id cannot be empty"));
        }
        if beneficiary.trim().is_empty() {
            return Err(AppError::validation("Beneficiary cannot be empty"));
        }
        if concept.trim().is_empty() {
            return Err(AppError::validation("Concept cannot be empty"));
        }
        amounts.validate(currency)?;

        let total_amount = amounts.total(currency);
        let now = chrono::Utc::now().naive_utc();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            group_id: None,
            recurring_index: 0,
            company_id,
            company_name,
            beneficiary,
            beneficiary_tax_id,
            concept,
            base_amount: amounts.base_amount,
            tax_amount: amounts.tax_amount,
            withholding_amount: amounts.withholding_amount,
            discount_amount: amounts.discount_amount,
            total_amount,
            currency,
            due_date,
            periodicity,
            paid: false,
            manual_paid: None,
            status: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the monetary components and rederive the total. This is the
    /// only sanctioned way to change amounts.
    pub fn set_amounts(&mut self, amounts: AmountComponents) -> Result<()> {
        amounts.validate(self.currency)?;
        self.base_amount = amounts.base_amount;
        self.tax_amount = amounts.tax_amount;
        self.withholding_amount = amounts.withholding_amount;
        self.discount_amount = amounts.discount_amount;
        self.total_amount = amounts.total(self.currency);
        self.touch();
        Ok(())
    }

    pub fn amounts(&self) -> AmountComponents {
        AmountComponents {
            base_amount: self.base_amount,
            tax_amount: self.tax_amount,
            withholding_amount: self.withholding_amount,
            discount_amount: self.discount_amount,
        }
    }

    pub fn is_recurring(&self) -> bool {
        self.periodicity.is_recurring()
    }

    /// True when either the auditable override or the legacy flag marks this
    /// commitment as manually settled
    pub fn is_manually_paid(&self) -> bool {
        self.paid || self.manual_paid.is_some()
    }

    /// Record an auditable manual completion
    pub fn mark_manually_paid(&mut self, marked_by: impl Into<String>) -> Result<()> {
        if self.manual_paid.is_some() {
            return Err(AppError::validation("Commitment is already marked as paid"));
        }

        self.manual_paid = Some(ManualPaidMark {
            marked_by: marked_by.into(),
            marked_at: chrono::Utc::now().naive_utc(),
        });
        self.touch();
        Ok(())
    }

    /// Sibling draft for one recurrence instance: fresh id, same
    /// classification and amounts, new schedule position.
    pub fn recurrence_draft(
        &self,
        due_date: NaiveDate,
        group_id: impl Into<String>,
        recurring_index: u32,
    ) -> Commitment {
        let now = chrono::Utc::now().naive_utc();
        Commitment {
            id: Uuid::new_v4().to_string(),
            group_id: Some(group_id.into()),
            recurring_index,
            due_date,
            paid: false,
            manual_paid: None,
            status: None,
            created_at: now,
            updated_at: now,
            ..self.clone()
        }
    }

    /// Display name carrying the instance month, e.g. "Rent - April 2025".
    /// The stored `concept` stays identical across a group; this is for
    /// display only.
    pub fn decorated_concept(&self) -> String {
        if self.group_id.is_some() && self.recurring_index > 0 {
            format!("{} - {}", self.concept, self.due_date.format("%B %Y"))
        } else {
            self.concept.clone()
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().naive_utc();
    }
}
