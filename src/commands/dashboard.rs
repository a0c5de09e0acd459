// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::summarize;
use crate::categorize::label;
use crate::loader::read_ledger;
use crate::models::{Granularity, SeriesPoint, Summary};
use crate::utils::{bar, fmt_inr, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("path").unwrap().trim();
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");

    let rows = read_ledger(path)?;
    let summary = summarize(label(rows));

    if json_flag {
        maybe_print_json(true, false, &summary)?;
        return Ok(());
    }
    if jsonl_flag {
        maybe_print_json(false, true, &summary.transactions)?;
        return Ok(());
    }

    render(&summary);
    Ok(())
}

/// One full presentation pass over the summary. Every widget renders even
/// when the working set is empty: zero KPIs, header-only tables.
fn render(s: &Summary) {
    println!("Financial Overview");
    println!(
        "{}",
        pretty_table(
            &["Total Spent", "Avg Transaction"],
            vec![vec![fmt_inr(&s.total_spent), fmt_inr(&s.avg_transaction)]],
        )
    );
    println!();

    println!("Spending Analytics");
    let (title, key) = match s.granularity {
        Granularity::Monthly => ("Monthly Spend (Calendar Wise)", "Month"),
        Granularity::Daily => ("Daily Spend Trend (Current Month)", "Day"),
    };
    println!("{title}");
    println!("{}", series_table(key, &s.timeline));
    println!();

    println!("Category-wise Spend");
    let max = s
        .by_category
        .iter()
        .map(|c| c.total)
        .max()
        .unwrap_or(Decimal::ZERO);
    let rows = s
        .by_category
        .iter()
        .map(|c| {
            vec![
                c.category.to_string(),
                fmt_inr(&c.total),
                bar(c.total, max),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Spent", ""], rows));
    println!();

    println!("Transaction Details");
    let rows = s
        .transactions
        .iter()
        .map(|t| {
            vec![
                t.date.format("%d-%m-%Y").to_string(),
                t.description.clone(),
                t.category.to_string(),
                t.amount.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Description", "Category", "Amount"], rows)
    );
    println!();
    println!("Total Expense: {}", fmt_inr(&s.total_spent));
}

fn series_table(key_header: &str, points: &[SeriesPoint]) -> comfy_table::Table {
    let max = points
        .iter()
        .map(|p| p.total)
        .max()
        .unwrap_or(Decimal::ZERO);
    let rows = points
        .iter()
        .map(|p| vec![p.label.clone(), fmt_inr(&p.total), bar(p.total, max)])
        .collect();
    pretty_table(&[key_header, "Spent", ""], rows)
}
