use anyhow::{anyhow, bail, Result};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::shared::month::month_name;

/// Day of month on which a reporting period closes; the next one opens the day after
const PERIOD_CLOSING_DAY: u32 = 20;

/// A commute reporting period, identified by the month it closes in.
///
/// Period `(2024, 3)` runs from 21.02.2024 to 20.03.2024 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ReportPeriod {
    year: i32,
    month: u32,
}

impl ReportPeriod {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            bail!("month must be between 1 and 12, got {}", month);
        }
        Ok(Self { year, month })
    }

    /// The period a given day is reported in
    pub fn containing(date: NaiveDate) -> Self {
        let (year, month) = if date.day() > PERIOD_CLOSING_DAY {
            next_month(date.year(), date.month())
        } else {
            (date.year(), date.month())
        };
        Self { year, month }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// File name the backend's spreadsheet is saved under.
    /// Consumed by an external process, so the format must not change.
    pub fn file_name(&self) -> String {
        format!("Indemnite_KM_MB_{}_{:02}.xlsx", self.year, self.month)
    }

    /// `year=2024&month=3` for the report endpoint; the month is not padded here
    pub fn query_string(&self) -> Result<String> {
        serde_qs::to_string(self).map_err(|e| anyhow!("failed to encode {}: {}", self.label(), e))
    }

    /// "March 2024"
    pub fn label(&self) -> String {
        match month_name(self.month) {
            Some(name) => format!("{} {}", name, self.year),
            None => format!("{}-{:02}", self.year, self.month),
        }
    }

    /// First day of the period (the 21st of the previous month)
    pub fn start_date(&self) -> Result<NaiveDate> {
        let (year, month) = previous_month(self.year, self.month);
        NaiveDate::from_ymd_opt(year, month, PERIOD_CLOSING_DAY + 1)
            .ok_or_else(|| anyhow!("period {} starts outside the calendar", self.label()))
    }

    /// Last day of the period (the 20th of the month)
    pub fn end_date(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, PERIOD_CLOSING_DAY)
            .ok_or_else(|| anyhow!("period {} ends outside the calendar", self.label()))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::containing(date) == *self
    }
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}
