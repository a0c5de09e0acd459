// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed spending categories, in rule priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Transport,
    Groceries,
    Utilities,
    Food,
    Entertainment,
    Shopping,
    Others,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Transport,
        Category::Groceries,
        Category::Utilities,
        Category::Food,
        Category::Entertainment,
        Category::Shopping,
        Category::Others,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Transport => "Transport",
            Category::Groceries => "Groceries",
            Category::Utilities => "Utilities",
            Category::Food => "Food",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A ledger row that survived cleaning: valid date, valid amount.
/// Not yet categorized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedRow {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub category: Category,
}

impl Transaction {
    /// Grouping key for calendar-month buckets. Derived, never stored.
    pub fn month_key(&self) -> (i32, u32) {
        (self.date.year(), self.date.month())
    }
}

/// Time bucketing for the spend chart. Monthly when the data spans two or
/// more calendar months, daily otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Granularity {
    Monthly,
    Daily,
}

/// One bucket of the time-series chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Decimal,
}

/// Everything the presentation pass consumes. Read-only projections of the
/// working set; building one never mutates the transactions it was fed.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_spent: Decimal,
    pub avg_transaction: Decimal,
    pub granularity: Granularity,
    pub timeline: Vec<SeriesPoint>,
    pub by_category: Vec<CategoryTotal>,
    pub transactions: Vec<Transaction>,
}
