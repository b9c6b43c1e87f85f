// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;
use tracing::warn;

use crate::budget::CategoryBudgets;
use crate::currency;
use crate::cycle::clamp_cycle_day;
use crate::error::{Error, Result};
use crate::models::{Category, FinancialGoal};

pub const DEFAULT_CURRENCY: &str = "KZT";
pub const DEFAULT_MONTH_START_DAY: u32 = 1;

const GOALS_KEY: &str = "goals";
const CATEGORY_BUDGET_PREFIX: &str = "categoryBudget_";

pub fn default_monthly_budget() -> Decimal {
    Decimal::new(2000, 0)
}

fn kv_get(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v = conn
        .query_row("SELECT value FROM settings WHERE key=?1", params![key], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v)
}

fn kv_set(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn currency_code(conn: &Connection) -> Result<String> {
    Ok(kv_get(conn, "currency_code")?.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()))
}

pub fn set_currency_code(conn: &Connection, code: &str) -> Result<()> {
    let code = code.to_uppercase();
    if !currency::is_known(&code) {
        return Err(Error::validation(format!("Unknown currency '{}'", code)));
    }
    kv_set(conn, "currency_code", &code)
}

/// Persisted values outside 1..=28 (or unparseable ones) are clamped or
/// defaulted on read; the setting never makes cycle math fail.
pub fn month_start_day(conn: &Connection) -> Result<u32> {
    let day = match kv_get(conn, "month_start_day")? {
        Some(raw) => raw.parse::<u32>().unwrap_or_else(|_| {
            warn!("unreadable month_start_day '{}', using default", raw);
            DEFAULT_MONTH_START_DAY
        }),
        None => DEFAULT_MONTH_START_DAY,
    };
    Ok(clamp_cycle_day(day))
}

pub fn set_month_start_day(conn: &Connection, day: u32) -> Result<()> {
    if !(1..=28).contains(&day) {
        return Err(Error::validation("Month start day must be between 1 and 28."));
    }
    kv_set(conn, "month_start_day", &day.to_string())
}

pub fn monthly_budget(conn: &Connection) -> Result<Decimal> {
    let budget = match kv_get(conn, "monthly_budget")? {
        Some(raw) => raw.parse::<Decimal>().unwrap_or_else(|_| {
            warn!("unreadable monthly_budget '{}', using default", raw);
            default_monthly_budget()
        }),
        None => default_monthly_budget(),
    };
    Ok(budget)
}

pub fn set_monthly_budget(conn: &Connection, amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(Error::validation("Monthly budget cannot be negative."));
    }
    kv_set(conn, "monthly_budget", &amount.to_string())
}

fn category_budget_key(category: Category) -> String {
    format!("{}{}", CATEGORY_BUDGET_PREFIX, category.code())
}

pub fn category_budget(conn: &Connection, category: Category) -> Result<Decimal> {
    let limit = match kv_get(conn, &category_budget_key(category))? {
        Some(raw) => raw.parse::<Decimal>().unwrap_or_else(|_| {
            warn!(
                "unreadable budget for category '{}', treating as unset",
                category.code()
            );
            Decimal::ZERO
        }),
        None => Decimal::ZERO,
    };
    Ok(limit)
}

pub fn set_category_budget(conn: &Connection, category: Category, limit: Decimal) -> Result<()> {
    if limit < Decimal::ZERO {
        return Err(Error::validation("Budget limit cannot be negative."));
    }
    kv_set(conn, &category_budget_key(category), &limit.to_string())
}

/// Loads every category's limit into one explicit mapping. Membership is
/// fixed by the enum; no dynamic keys reach the engines.
pub fn category_budgets(conn: &Connection) -> Result<CategoryBudgets> {
    let mut budgets = CategoryBudgets::new();
    for category in Category::ALL {
        budgets.set_limit(category, category_budget(conn, category)?)?;
    }
    Ok(budgets)
}

/// Goal list stored as a JSON array with ISO-8601 dates under one key.
/// A malformed payload is a decode error for the caller to surface.
pub fn load_goals(conn: &Connection) -> Result<Vec<FinancialGoal>> {
    match kv_get(conn, GOALS_KEY)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

pub fn save_goals(conn: &Connection, goals: &[FinancialGoal]) -> Result<()> {
    let payload = serde_json::to_string(goals)?;
    kv_set(conn, GOALS_KEY, &payload)
}
