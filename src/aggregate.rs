// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, CategoryTotal, Granularity, SeriesPoint, Summary, Transaction};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet, HashMap};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Pick the time bucketing from the number of distinct calendar months in
/// the working set: two or more means monthly, otherwise daily. An empty
/// set counts as zero months and routes to daily with no groups.
pub fn select_granularity(txns: &[Transaction]) -> Granularity {
    let months: BTreeSet<(i32, u32)> = txns.iter().map(Transaction::month_key).collect();
    if months.len() >= 2 {
        Granularity::Monthly
    } else {
        Granularity::Daily
    }
}

/// Group amounts by calendar month, chronologically. Labels like
/// "Jan 2024" are attached only after ordering on the (year, month) key;
/// label text does not sort by calendar.
fn monthly_series(txns: &[Transaction]) -> Vec<SeriesPoint> {
    let mut groups: BTreeMap<(i32, u32), Decimal> = BTreeMap::new();
    for t in txns {
        *groups.entry(t.month_key()).or_insert(Decimal::ZERO) += t.amount;
    }
    groups
        .into_iter()
        .map(|((year, month), total)| SeriesPoint {
            label: format!("{} {}", MONTH_NAMES[(month - 1) as usize], year),
            total,
        })
        .collect()
}

/// Group amounts by day-of-month within the single month present.
fn daily_series(txns: &[Transaction]) -> Vec<SeriesPoint> {
    use chrono::Datelike;
    let mut groups: BTreeMap<u32, Decimal> = BTreeMap::new();
    for t in txns {
        *groups.entry(t.date.day()).or_insert(Decimal::ZERO) += t.amount;
    }
    groups
        .into_iter()
        .map(|(day, total)| SeriesPoint {
            label: day.to_string(),
            total,
        })
        .collect()
}

/// Reduce the working set into every projection the dashboard renders.
///
/// All aggregations are read-only; the transaction list comes back sorted
/// by date descending with a stable sort, so same-day entries keep their
/// input order. An empty set yields zero KPIs and empty series rather
/// than faulting.
pub fn summarize(txns: Vec<Transaction>) -> Summary {
    let total_spent: Decimal = txns.iter().map(|t| t.amount).sum();
    let avg_transaction = if txns.is_empty() {
        Decimal::ZERO
    } else {
        total_spent / Decimal::from(txns.len())
    };

    let granularity = select_granularity(&txns);
    let timeline = match granularity {
        Granularity::Monthly => monthly_series(&txns),
        Granularity::Daily => daily_series(&txns),
    };

    let mut sums: HashMap<Category, Decimal> = HashMap::new();
    for t in &txns {
        *sums.entry(t.category).or_insert(Decimal::ZERO) += t.amount;
    }
    // Categories with no transactions are absent, not zero rows.
    let by_category = Category::ALL
        .iter()
        .filter_map(|c| {
            sums.get(c).map(|&total| CategoryTotal {
                category: *c,
                total,
            })
        })
        .collect();

    let mut transactions = txns;
    transactions.sort_by(|a, b| b.date.cmp(&a.date));

    Summary {
        total_spent,
        avg_transaction,
        granularity,
        timeline,
        by_category,
        transactions,
    }
}
