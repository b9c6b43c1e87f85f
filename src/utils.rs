// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::error::{Error, Result};

const UA: &str = concat!(
    "spendwise/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/spendwise)"
);

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

/// Parses a user-entered amount. Accepts a comma decimal separator;
/// rejects anything that is not a non-negative number.
pub fn parse_amount(text: &str) -> Result<Decimal> {
    let normalized = text.trim().replace(',', ".");
    normalized
        .parse::<Decimal>()
        .ok()
        .filter(|amount| *amount >= Decimal::ZERO)
        .ok_or_else(|| Error::validation("Enter a valid non-negative amount."))
}
