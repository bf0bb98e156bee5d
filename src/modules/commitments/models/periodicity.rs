use serde::{Deserialize, Serialize};

/// Recurrence rule of a commitment.
///
/// Every recurring variant maps to a fixed month interval; `Unique` is a
/// one-off and has no interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Periodicity {
    /// One-time payment, no recurrence
    Unique,
    /// Every month
    Monthly,
    /// Every 2 months
    Bimonthly,
    /// Every 3 months
    Quarterly,
    /// Every 4 months
    Fourmonthly,
    /// Every 6 months
    Biannual,
    /// Every 12 months
    Annual,
}

impl Periodicity {
    /// Month interval between consecutive instances; `None` for `Unique`
    pub fn interval_months(&self) -> Option<u32> {
        match self {
            Self::Unique => None,
            Self::Monthly => Some(1),
            Self::Bimonthly => Some(2),
            Self::Quarterly => Some(3),
            Self::Fourmonthly => Some(4),
            Self::Biannual => Some(6),
            Self::Annual => Some(12),
        }
    }

    pub fn is_recurring(&self) -> bool {
        !matches!(self, Self::Unique)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unique => "unique",
            Self::Monthly => "monthly",
            Self::Bimonthly => "bimonthly",
            Self::Quarterly => "quarterly",
            Self::Fourmonthly => "fourmonthly",
            Self::Biannual => "biannual",
            Self::Annual => "annual",
        }
    }

    /// Human-readable description for display
    pub fn description(&self) -> &'static str {
        match self {
            Self::Unique => "One-time payment",
            Self::Monthly => "Monthly",
            Self::Bimonthly => "Bimonthly (every 2 months)",
            Self::Quarterly => "Quarterly (every 3 months)",
            Self::Fourmonthly => "Four-monthly (every 4 months)",
            Self::Biannual => "Biannual (every 6 months)",
            Self::Annual => "Annual (every 12 months)",
        }
    }

    /// All recurring variants, in interval order
    pub fn recurring_variants() -> &'static [Periodicity] {
        &[
            Self::Monthly,
            Self::Bimonthly,
            Self::Quarterly,
            Self::Fourmonthly,
            Self::Biannual,
            Self::Annual,
        ]
    }
}

impl std::fmt::Display for Periodicity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for Periodicity {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        match value.as_str() {
            "unique" => Ok(Self::Unique),
            "monthly" => Ok(Self::Monthly),
            "bimonthly" => Ok(Self::Bimonthly),
            "quarterly" => Ok(Self::Quarterly),
            "fourmonthly" => Ok(Self::Fourmonthly),
            "biannual" => Ok(Self::Biannual),
            "annual" => Ok(Self::Annual),
            _ => Err(format!("Invalid periodicity: {}", value)),
        }
    }
}
