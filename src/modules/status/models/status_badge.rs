use serde::{Deserialize, Serialize};

/// Authoritative display status of a commitment, derived from payments and
/// the due date. Lower priority wins when several conditions hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKey {
    /// Fully paid (within tolerance) or manually marked as paid
    Completed,
    /// Some payment recorded, not yet complete; never reported overdue
    Partial,
    /// No payments and the due date has passed
    Overdue,
    /// No payments, due today or later
    Pending,
}

impl StatusKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Partial => "partial",
            Self::Overdue => "overdue",
            Self::Pending => "pending",
        }
    }

    /// Evaluation order of the classifier; 1 is strongest
    pub fn priority(&self) -> u8 {
        match self {
            Self::Completed => 1,
            Self::Partial => 2,
            Self::Overdue => 3,
            Self::Pending => 4,
        }
    }
}

impl std::fmt::Display for StatusKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for StatusKey {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        match value.as_str() {
            "completed" => Ok(Self::Completed),
            "partial" => Ok(Self::Partial),
            "overdue" => Ok(Self::Overdue),
            "pending" => Ok(Self::Pending),
            _ => Err(format!("Invalid status key: {}", value)),
        }
    }
}

/// Display metadata for one classified status. Advisory only; never written
/// back to the stored `status` field. Serialize-only: badges are recomputed
/// from payments on every read, never parsed back in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub key: StatusKey,
    pub label: &'static str,
    /// Theme color key consumed by the status chip
    pub color: &'static str,
    pub priority: u8,
    pub description: String,
}

impl StatusBadge {
    pub fn completed() -> Self {
        Self {
            key: StatusKey::Completed,
            label: "Paid",
            color: "success",
            priority: StatusKey::Completed.priority(),
            description: "Commitment fully paid".to_string(),
        }
    }

    pub fn partial(percentage: rust_decimal::Decimal) -> Self {
        Self {
            key: StatusKey::Partial,
            label: "Partially Paid",
            color: "warning",
            priority: StatusKey::Partial.priority(),
            description: format!("Paid {}% of total", percentage.round_dp(1)),
        }
    }

    pub fn overdue() -> Self {
        Self {
            key: StatusKey::Overdue,
            label: "Overdue",
            color: "error",
            priority: StatusKey::Overdue.priority(),
            description: "No payments and due date passed".to_string(),
        }
    }

    pub fn pending() -> Self {
        Self {
            key: StatusKey::Pending,
            label: "Pending",
            color: "info",
            priority: StatusKey::Pending.priority(),
            description: "No payments, due date current".to_string(),
        }
    }
}
