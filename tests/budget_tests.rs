// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use spendwise::budget::{self, BudgetStatus, CategoryBudgets, CategoryTotal};
use spendwise::cycle;
use spendwise::models::{Category, Transaction, TransactionKind};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

fn expense(amount: i64, category: Category, days_ago: i64) -> Transaction {
    let date = now() - Duration::days(days_ago);
    Transaction {
        id: format!("{}-{}", category.code(), days_ago),
        title: category.title().to_string(),
        amount: Decimal::from(amount),
        date,
        kind: TransactionKind::Expense,
        category,
        note: String::new(),
        is_recurring: false,
        created_at: date,
    }
}

#[test]
fn totals_drop_zero_categories_and_sort_descending() {
    let cycle = cycle::current_cycle_range(now().date_naive(), 1);
    let mut income = expense(900, Category::Salary, 2);
    income.kind = TransactionKind::Income;
    let transactions = vec![
        expense(120, Category::Food, 1),
        expense(80, Category::Food, 2),
        expense(300, Category::Shopping, 3),
        expense(40, Category::Transport, 90), // outside the cycle
        income,                               // income never counts as spend
    ];

    let totals = budget::category_totals(&transactions, &cycle);
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].category, Category::Shopping);
    assert_eq!(totals[0].total, Decimal::from(300));
    assert_eq!(totals[1].category, Category::Food);
    assert_eq!(totals[1].total, Decimal::from(200));
}

#[test]
fn progress_measures_against_the_limit_when_set() {
    let mut budgets = CategoryBudgets::new();
    budgets.set_limit(Category::Food, Decimal::from(400)).unwrap();
    let totals = vec![CategoryTotal {
        category: Category::Food,
        total: Decimal::from(100),
    }];

    let rows = budget::breakdown(&totals, &budgets);
    assert_eq!(rows[0].progress, 0.25);
    assert_eq!(rows[0].status, BudgetStatus::OnTrack);
}

#[test]
fn no_limit_falls_back_to_relative_bar_and_is_never_over() {
    let budgets = CategoryBudgets::new();
    let totals = vec![
        CategoryTotal {
            category: Category::Shopping,
            total: Decimal::from(200),
        },
        CategoryTotal {
            category: Category::Food,
            total: Decimal::from(50),
        },
    ];

    let rows = budget::breakdown(&totals, &budgets);
    assert_eq!(rows[0].progress, 1.0);
    assert_eq!(rows[1].progress, 0.25);
    assert_eq!(rows[1].status, BudgetStatus::OnTrack);
}

#[test]
fn spending_past_the_limit_is_over_and_clamped() {
    let mut budgets = CategoryBudgets::new();
    budgets.set_limit(Category::Food, Decimal::from(100)).unwrap();
    let totals = vec![CategoryTotal {
        category: Category::Food,
        total: Decimal::from(150),
    }];

    let rows = budget::breakdown(&totals, &budgets);
    assert_eq!(rows[0].status, BudgetStatus::Over);
    assert_eq!(rows[0].progress, 1.0);
}

#[test]
fn seventy_five_percent_flags_close_to_limit() {
    let mut budgets = CategoryBudgets::new();
    budgets.set_limit(Category::Food, Decimal::from(100)).unwrap();
    let totals = vec![CategoryTotal {
        category: Category::Food,
        total: Decimal::from(80),
    }];

    let rows = budget::breakdown(&totals, &budgets);
    assert_eq!(rows[0].status, BudgetStatus::CloseToLimit);
}

#[test]
fn negative_limits_are_rejected() {
    let mut budgets = CategoryBudgets::new();
    assert!(budgets.set_limit(Category::Food, Decimal::from(-1)).is_err());
    assert_eq!(budgets.limit(Category::Food), Decimal::ZERO);
}

#[test]
fn overall_budget_progress_clamps_and_guards_zero() {
    assert_eq!(
        budget::overall_progress(Decimal::from(500), Decimal::from(2000)),
        0.25
    );
    assert_eq!(
        budget::overall_progress(Decimal::from(5000), Decimal::from(2000)),
        1.0
    );
    assert_eq!(budget::overall_progress(Decimal::from(5), Decimal::ZERO), 0.0);
}
