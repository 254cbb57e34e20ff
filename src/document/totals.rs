use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::format_amount;

/// Number of accepted transactions and their control sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ControlTotals {
    count: usize,
    sum: Decimal,
}

impl ControlTotals {
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn sum(&self) -> Decimal {
        self.sum
    }

    /// Control sum with two decimal places, as written to `CtrlSum`.
    pub fn formatted_sum(&self) -> String {
        format_amount(self.sum)
    }

    /// Totals with `value` booked, or `None` if the sum would overflow.
    pub(crate) fn checked_add(&self, value: Decimal) -> Option<Self> {
        Some(Self {
            count: self.count + 1,
            sum: self.sum.checked_add(value)?,
        })
    }
}
