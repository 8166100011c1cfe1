use std::collections::{BTreeMap, BTreeSet};

use crate::activities::dto::MonthlyRow;
use crate::shared::month::month_name;

/// Monthly totals pivoted by sport, for table and chart rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySummary {
    /// Distinct sport types, sorted
    pub sports: Vec<String>,
    /// One entry per (year, month), newest first
    pub months: Vec<MonthTotals>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthTotals {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub by_sport: BTreeMap<String, f64>,
    pub total_km: f64,
}

impl MonthTotals {
    /// Distance for a sport, 0 when nothing was recorded
    pub fn km_for(&self, sport: &str) -> f64 {
        self.by_sport.get(sport).copied().unwrap_or(0.0)
    }
}

impl MonthlySummary {
    /// Pivot backend rows. Row order is not trusted; the result is sorted here.
    pub fn from_rows(rows: &[MonthlyRow]) -> Self {
        let mut sports = BTreeSet::new();
        let mut months: BTreeMap<(i32, u32), MonthTotals> = BTreeMap::new();

        for row in rows {
            sports.insert(row.sport_type.clone());
            let entry = months
                .entry((row.year, row.month))
                .or_insert_with(|| MonthTotals {
                    year: row.year,
                    month: row.month,
                    month_name: month_name(row.month)
                        .map(str::to_string)
                        .unwrap_or_else(|| row.month_name.clone()),
                    by_sport: BTreeMap::new(),
                    total_km: 0.0,
                });
            *entry.by_sport.entry(row.sport_type.clone()).or_insert(0.0) += row.total_km;
            entry.total_km += row.total_km;
        }

        Self {
            sports: sports.into_iter().collect(),
            months: months.into_values().rev().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Total km per sport across all months
    pub fn totals_by_sport(&self) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for month in &self.months {
            for (sport, km) in &month.by_sport {
                *totals.entry(sport.clone()).or_insert(0.0) += km;
            }
        }
        totals
    }

    /// Total km per year across all sports
    pub fn totals_by_year(&self) -> BTreeMap<i32, f64> {
        let mut totals = BTreeMap::new();
        for month in &self.months {
            *totals.entry(month.year).or_insert(0.0) += month.total_km;
        }
        totals
    }

    pub fn grand_total(&self) -> f64 {
        self.months.iter().map(|m| m.total_km).sum()
    }
}
