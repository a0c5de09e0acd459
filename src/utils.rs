// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Width of the chart bar column in terminal cells.
const BAR_WIDTH: usize = 30;

/// KPI currency formatting: rupee symbol plus the integer part.
/// Truncates toward zero, never rounds.
pub fn fmt_inr(d: &Decimal) -> String {
    format!("₹ {}", d.trunc())
}

/// Proportional bar for chart rows: `value / max` of the full width in
/// block characters. Non-positive values and an empty max render empty.
pub fn bar(value: Decimal, max: Decimal) -> String {
    let ratio = match (value.to_f64(), max.to_f64()) {
        (Some(v), Some(m)) if m > 0.0 => (v / m).clamp(0.0, 1.0),
        _ => 0.0,
    };
    let filled = (ratio * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
