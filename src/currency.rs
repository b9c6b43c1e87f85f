// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyOption {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

pub const OPTIONS: [CurrencyOption; 5] = [
    CurrencyOption {
        code: "KZT",
        name: "Kazakhstani Tenge",
        symbol: "KZT",
    },
    CurrencyOption {
        code: "USD",
        name: "US Dollar",
        symbol: "$",
    },
    CurrencyOption {
        code: "EUR",
        name: "Euro",
        symbol: "EUR",
    },
    CurrencyOption {
        code: "RUB",
        name: "Russian Ruble",
        symbol: "RUB",
    },
    CurrencyOption {
        code: "GBP",
        name: "British Pound",
        symbol: "GBP",
    },
];

pub fn is_known(code: &str) -> bool {
    OPTIONS.iter().any(|o| o.code == code)
}

pub fn symbol_for(code: &str) -> &str {
    OPTIONS
        .iter()
        .find(|o| o.code == code)
        .map(|o| o.symbol)
        .unwrap_or(code)
}

/// "$54.25" for symbol currencies, "KZT 54.25" otherwise.
pub fn format(amount: Decimal, code: &str) -> String {
    let symbol = symbol_for(code);
    if symbol == "$" {
        format!("${:.2}", amount)
    } else {
        format!("{} {:.2}", symbol, amount)
    }
}
