// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::CleanedRow;
use chrono::NaiveDate;
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use std::path::Path;
use thiserror::Error;

/// Fatal loader failures. Bad rows are not errors (they are dropped);
/// only an unreadable or structurally invalid source halts the pipeline.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read ledger {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Ledger is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Malformed CSV record: {0}")]
    Record(#[from] csv::Error),
}

/// Per-field parse outcome. A row is kept only if every required field
/// parses; invalid fields mark the whole row for exclusion, never a panic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<T> {
    Valid(T),
    Invalid,
}

/// Day-first date parsing, matching the ledger's DD-first convention.
/// Unambiguous ISO dates are accepted too; anything else is invalid.
const DATE_FORMATS: [&str; 5] = ["%d-%m-%Y", "%d/%m/%Y", "%d-%m-%y", "%d/%m/%y", "%Y-%m-%d"];

pub fn parse_date_dayfirst(raw: &str) -> Field<NaiveDate> {
    let raw = raw.trim();
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Field::Valid(date);
        }
    }
    Field::Invalid
}

pub fn parse_amount(raw: &str) -> Field<Decimal> {
    match raw.trim().parse::<Decimal>() {
        Ok(amount) => Field::Valid(amount),
        Err(_) => Field::Invalid,
    }
}

/// Read the ledger CSV into cleaned rows.
///
/// The header must carry `date`, `description`, and `amount` columns
/// (exact names); column order is free. Rows whose date or amount fail to
/// parse are dropped independently of each other, and a missing
/// description cell becomes the empty string. An empty result is valid.
pub fn read_ledger(path: impl AsRef<Path>) -> Result<Vec<CleanedRow>, LoadError> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| LoadError::Read {
            path: path.display().to_string(),
            source,
        })?;

    let headers = rdr.headers()?.clone();
    let col = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let date_col = col("date")?;
    let desc_col = col("description")?;
    let amount_col = col("amount")?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let rec = result?;
        let date = parse_date_dayfirst(rec.get(date_col).unwrap_or(""));
        let amount = parse_amount(rec.get(amount_col).unwrap_or(""));
        let (Field::Valid(date), Field::Valid(amount)) = (date, amount) else {
            continue;
        };
        rows.push(CleanedRow {
            date,
            description: rec.get(desc_col).unwrap_or("").trim().to_string(),
            amount,
        });
    }
    Ok(rows)
}
