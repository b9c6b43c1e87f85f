// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::cycle::CycleRange;
use crate::error::{Error, Result};
use crate::models::{Category, Transaction, TransactionKind};

/// Explicit category -> limit mapping; a zero limit means "no limit set".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBudgets(BTreeMap<Category, Decimal>);

impl CategoryBudgets {
    pub fn new() -> Self {
        CategoryBudgets::default()
    }

    pub fn limit(&self, category: Category) -> Decimal {
        self.0.get(&category).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn set_limit(&mut self, category: Category, limit: Decimal) -> Result<()> {
        if limit < Decimal::ZERO {
            return Err(Error::validation("Budget limit cannot be negative."));
        }
        self.0.insert(category, limit);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Decimal,
}

/// Expense totals per category within the range. Zero-total categories are
/// dropped; the rest sort descending by total, enum order on ties.
pub fn category_totals(transactions: &[Transaction], range: &CycleRange) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Category::ALL
        .iter()
        .map(|&category| {
            let total = transactions
                .iter()
                .filter(|t| {
                    t.kind == TransactionKind::Expense
                        && t.category == category
                        && range.contains(t.date)
                })
                .map(|t| t.amount)
                .sum();
            CategoryTotal { category, total }
        })
        .filter(|entry| entry.total > Decimal::ZERO)
        .collect();
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    OnTrack,
    CloseToLimit,
    Over,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend {
    pub category: Category,
    pub total: Decimal,
    pub limit: Decimal,
    /// Bar fill in [0, 1]: against the limit when one is set, otherwise
    /// relative to the largest observed total.
    pub progress: f64,
    pub status: BudgetStatus,
}

const CLOSE_TO_LIMIT: f64 = 0.75;

/// Joins spend totals with configured limits into display rows.
pub fn breakdown(totals: &[CategoryTotal], budgets: &CategoryBudgets) -> Vec<CategorySpend> {
    let max_observed = totals
        .iter()
        .map(|t| t.total)
        .max()
        .unwrap_or(Decimal::ZERO);
    totals
        .iter()
        .map(|entry| {
            let limit = budgets.limit(entry.category);
            let progress = progress_ratio(entry.total, limit, max_observed);
            CategorySpend {
                category: entry.category,
                total: entry.total,
                limit,
                progress,
                status: status_for(entry.total, limit, progress),
            }
        })
        .collect()
}

/// Spend of the whole cycle against the single monthly budget preference.
pub fn overall_progress(spent: Decimal, monthly_budget: Decimal) -> f64 {
    progress_ratio(spent, monthly_budget, Decimal::ZERO)
}

fn progress_ratio(total: Decimal, limit: Decimal, max_observed: Decimal) -> f64 {
    let denominator = if limit > Decimal::ZERO {
        limit
    } else if max_observed > Decimal::ZERO {
        max_observed
    } else {
        return 0.0;
    };
    (total / denominator).to_f64().unwrap_or(0.0).min(1.0)
}

fn status_for(total: Decimal, limit: Decimal, progress: f64) -> BudgetStatus {
    if limit > Decimal::ZERO && total > limit {
        BudgetStatus::Over
    } else if limit > Decimal::ZERO && progress >= CLOSE_TO_LIMIT {
        BudgetStatus::CloseToLimit
    } else {
        BudgetStatus::OnTrack
    }
}
