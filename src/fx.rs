// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Deserialize;
use tracing::debug;

use crate::currency;
use crate::error::{Error, Result};
use crate::models::{CurrencyConversion, SyncState};
use crate::utils::http_client;

/// Rate table returned by the exchange-rate endpoint: quotes per unit of
/// the base currency.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTable {
    pub base_code: String,
    pub rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn rate_for(&self, code: &str) -> Option<Decimal> {
        self.rates
            .get(&code.to_uppercase())
            .and_then(|r| Decimal::from_f64(*r))
    }
}

pub trait RateSource {
    fn fetch_rates(&self, base: &str) -> Result<RateTable>;
}

const DEFAULT_ENDPOINT: &str = "https://open.er-api.com/v6/latest";

/// Live rates via ExchangeRate-API.
pub struct HttpRateSource {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpRateSource {
    pub fn new() -> Result<Self> {
        Ok(HttpRateSource {
            client: http_client()?,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        Ok(HttpRateSource {
            client: http_client()?,
            endpoint: endpoint.into(),
        })
    }
}

impl RateSource for HttpRateSource {
    fn fetch_rates(&self, base: &str) -> Result<RateTable> {
        let url = format!("{}/{}", self.endpoint, base.to_uppercase());
        debug!("fetching rates from {}", url);
        let resp = self.client.get(url).send()?.error_for_status()?;
        Ok(resp.json::<RateTable>()?)
    }
}

/// One conversion against a freshly fetched table. Identical codes short-
/// circuit with rate 1 and no fetch; a negative amount is rejected before
/// any lookup; a code absent from the table is a data-format failure.
pub fn convert_once<S: RateSource>(
    source: &S,
    amount: Decimal,
    from: &str,
    to: &str,
) -> Result<CurrencyConversion> {
    if amount < Decimal::ZERO {
        return Err(Error::validation("Enter a valid non-negative amount."));
    }
    let from = from.to_uppercase();
    let to = to.to_uppercase();
    if from == to {
        return Ok(CurrencyConversion {
            input_amount: amount,
            source_code: from,
            target_code: to,
            rate: Decimal::ONE,
            output_amount: amount,
        });
    }
    let table = source.fetch_rates(&from)?;
    let rate = table
        .rate_for(&to)
        .ok_or_else(|| Error::decode(format!("currency '{}' missing from rate table", to)))?;
    Ok(CurrencyConversion {
        input_amount: amount,
        source_code: from,
        target_code: to,
        rate,
        output_amount: amount * rate,
    })
}

/// Monotonically increasing request token; completions carrying anything
/// but the newest issued ticket are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Conversion state holder for the exchange screen. Each request gets a
/// ticket so an out-of-order completion from a superseded fetch can never
/// overwrite the newest result.
pub struct ExchangeDesk<S: RateSource> {
    source: S,
    pub from_code: String,
    pub to_code: String,
    last_issued: u64,
    conversion: Option<CurrencyConversion>,
    state: SyncState,
    last_updated: Option<DateTime<Utc>>,
}

impl<S: RateSource> ExchangeDesk<S> {
    pub fn new(source: S) -> Self {
        ExchangeDesk {
            source,
            from_code: currency::OPTIONS[0].code.to_string(),
            to_code: "USD".to_string(),
            last_issued: 0,
            conversion: None,
            state: SyncState::Idle,
            last_updated: None,
        }
    }

    pub fn conversion(&self) -> Option<&CurrencyConversion> {
        self.conversion.as_ref()
    }

    pub fn state(&self) -> &SyncState {
        &self.state
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Adopts the preferred currency as the source side, ignoring codes
    /// that are not in the option table.
    pub fn sync_preferred_currency(&mut self, code: &str) {
        if currency::is_known(code) {
            self.from_code = code.to_string();
        }
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from_code, &mut self.to_code);
    }

    pub fn begin(&mut self) -> Ticket {
        self.last_issued += 1;
        self.state = SyncState::Loading;
        Ticket(self.last_issued)
    }

    /// Applies a completed request. Returns false when the ticket has been
    /// superseded and the outcome was discarded.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<CurrencyConversion>,
        at: DateTime<Utc>,
    ) -> bool {
        if ticket.0 != self.last_issued {
            debug!("discarding stale conversion result (ticket {})", ticket.0);
            return false;
        }
        match outcome {
            Ok(conversion) => {
                self.conversion = Some(conversion);
                self.last_updated = Some(at);
                self.state = SyncState::Success;
            }
            Err(e) => {
                self.state = SyncState::Error(e.to_string());
            }
        }
        true
    }

    /// Fetch-and-apply for the common synchronous path.
    pub fn convert(&mut self, amount: Decimal, now: DateTime<Utc>) {
        let ticket = self.begin();
        let outcome = convert_once(&self.source, amount, &self.from_code, &self.to_code);
        self.complete(ticket, outcome, now);
    }

    pub fn rate_line(&self) -> Option<String> {
        self.conversion.as_ref().map(|c| {
            format!(
                "1 {} = {:.4} {}",
                c.source_code, c.rate, c.target_code
            )
        })
    }
}

/// Home-card rate digest: one line per fixed currency against USD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tip {
    pub text: String,
    pub source: String,
}

pub const TIP_BASE: &str = "USD";
pub const TIP_CURRENCIES: [&str; 3] = ["KZT", "EUR", "RUB"];

pub fn rates_tip<S: RateSource>(source: &S) -> Result<Tip> {
    let table = source.fetch_rates(TIP_BASE)?;
    let mut lines = Vec::with_capacity(TIP_CURRENCIES.len());
    for code in TIP_CURRENCIES {
        let rate = table
            .rate_for(code)
            .ok_or_else(|| Error::decode(format!("currency '{}' missing from rate table", code)))?;
        lines.push(format!("1 {} = {:.2} {}", TIP_BASE, rate, code));
    }
    Ok(Tip {
        text: lines.join("\n"),
        source: "ExchangeRate-API".to_string(),
    })
}
