// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, CleanedRow, Transaction};

/// Keyword groups in priority order; the first group with a matching
/// keyword wins, regardless of later matches.
const RULES: &[(Category, &[&str])] = &[
    (Category::Transport, &["uber", "ola", "rapido"]),
    (Category::Groceries, &["grocery", "supermarket"]),
    (Category::Utilities, &["electricity", "bill", "water"]),
    (Category::Food, &["restaurant", "food", "zomato", "swiggy"]),
    (Category::Entertainment, &["movie", "netflix"]),
    (Category::Shopping, &["amazon", "flipkart", "shopping"]),
];

/// Map a free-text description to its spending category.
///
/// Case-insensitive substring match; total over any input, with
/// `Others` as the fallback when no keyword matches.
pub fn categorize(description: &str) -> Category {
    let text = description.to_lowercase();
    for (category, keywords) in RULES {
        if keywords.iter().any(|k| text.contains(k)) {
            return *category;
        }
    }
    Category::Others
}

/// Attach a category to every cleaned row, preserving input order.
/// Label assignment reads only the description; date and amount pass
/// through untouched.
pub fn label(rows: Vec<CleanedRow>) -> Vec<Transaction> {
    rows.into_iter()
        .map(|row| {
            let category = categorize(&row.description);
            Transaction {
                date: row.date,
                description: row.description,
                amount: row.amount,
                category,
            }
        })
        .collect()
}
