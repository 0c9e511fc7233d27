//! Per-period cash flows.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::validation::validate_finite;

/// Net cash received (positive) or paid (negative) during one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowEntry {
    /// 1-based period index.
    #[serde(alias = "year")]
    pub period: u32,
    /// Net amount for the period.
    #[serde(alias = "cashFlow", alias = "cash_flow")]
    pub amount: f64,
}

impl CashFlowEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(period: u32, amount: f64) -> Self {
        Self { period, amount }
    }
}

/// Ordered sequence of cash flows, one per period.
///
/// Periods start at 1 and strictly increase; gaps are allowed. Amounts are
/// finite. Both properties are checked on construction and deserialization,
/// so every calculator can rely on them.
///
/// # Example
///
/// ```rust
/// use capbudget_core::types::CashFlowSeries;
///
/// let series = CashFlowSeries::from_amounts(&[300.0, 400.0, 500.0]).unwrap();
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.total(), 1200.0);
/// assert_eq!(series.last().unwrap().period, 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CashFlowEntry>", into = "Vec<CashFlowEntry>")]
pub struct CashFlowSeries {
    entries: Vec<CashFlowEntry>,
}

impl CashFlowSeries {
    /// Creates a series from explicit entries.
    pub fn new(entries: Vec<CashFlowEntry>) -> CoreResult<Self> {
        let mut previous = 0;
        for entry in &entries {
            if entry.period <= previous {
                return Err(CoreError::InvalidPeriod {
                    period: entry.period,
                    previous,
                });
            }
            if !entry.amount.is_finite() {
                return Err(CoreError::non_finite(
                    format!("cash flow (period {})", entry.period),
                    entry.amount,
                ));
            }
            previous = entry.period;
        }
        Ok(Self { entries })
    }

    /// Creates a series with periods `1..=n` from a slice of amounts.
    pub fn from_amounts(amounts: &[f64]) -> CoreResult<Self> {
        let entries = (1u32..)
            .zip(amounts.iter())
            .map(|(period, &amount)| CashFlowEntry::new(period, amount))
            .collect();
        Self::new(entries)
    }

    /// Creates a series of net flows `revenue - cost` with periods `1..=n`.
    pub fn from_revenues_and_costs(revenues: &[f64], costs: &[f64]) -> CoreResult<Self> {
        if revenues.len() != costs.len() {
            return Err(CoreError::LengthMismatch {
                revenues: revenues.len(),
                costs: costs.len(),
            });
        }
        let net: Vec<f64> = revenues
            .iter()
            .zip(costs.iter())
            .map(|(revenue, cost)| revenue - cost)
            .collect();
        Self::from_amounts(&net)
    }

    /// Returns the entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CashFlowEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &CashFlowEntry> {
        self.entries.iter()
    }

    /// Returns the undiscounted sum of all amounts.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|cf| cf.amount).sum()
    }

    /// Returns the final entry.
    #[must_use]
    pub fn last(&self) -> Option<&CashFlowEntry> {
        self.entries.last()
    }

    /// Returns a copy with every amount multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> CoreResult<Self> {
        validate_finite("scale factor", factor)?;
        Self::new(
            self.entries
                .iter()
                .map(|cf| CashFlowEntry::new(cf.period, cf.amount * factor))
                .collect(),
        )
    }
}

impl TryFrom<Vec<CashFlowEntry>> for CashFlowSeries {
    type Error = CoreError;

    fn try_from(entries: Vec<CashFlowEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<CashFlowSeries> for Vec<CashFlowEntry> {
    fn from(series: CashFlowSeries) -> Self {
        series.entries
    }
}

impl<'a> IntoIterator for &'a CashFlowSeries {
    type Item = &'a CashFlowEntry;
    type IntoIter = std::slice::Iter<'a, CashFlowEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for CashFlowSeries {
    type Item = CashFlowEntry;
    type IntoIter = std::vec::IntoIter<CashFlowEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
