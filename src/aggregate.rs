// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::cycle::{CycleRange, midnight};
use crate::models::{Category, Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
    RecurringOnly,
}

impl TypeFilter {
    pub const ALL: [TypeFilter; 4] = [
        TypeFilter::All,
        TypeFilter::Income,
        TypeFilter::Expense,
        TypeFilter::RecurringOnly,
    ];

    pub fn title(self) -> &'static str {
        match self {
            TypeFilter::All => "All",
            TypeFilter::Income => "Income",
            TypeFilter::Expense => "Expense",
            TypeFilter::RecurringOnly => "Recurring",
        }
    }
}

/// "No filter" is its own variant so the unfiltered state stays
/// unambiguous; not an Option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn title(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(category) => category.title(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    DateDesc,
    DateAsc,
    AmountDesc,
    AmountAsc,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::DateDesc,
        SortMode::DateAsc,
        SortMode::AmountDesc,
        SortMode::AmountAsc,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SortMode::DateDesc => "Date (Newest)",
            SortMode::DateAsc => "Date (Oldest)",
            SortMode::AmountDesc => "Amount (High)",
            SortMode::AmountAsc => "Amount (Low)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateScope {
    #[default]
    All,
    CurrentCycle,
    Last7Days,
    Last30Days,
}

impl DateScope {
    pub const ALL: [DateScope; 4] = [
        DateScope::All,
        DateScope::CurrentCycle,
        DateScope::Last7Days,
        DateScope::Last30Days,
    ];

    pub fn title(self) -> &'static str {
        match self {
            DateScope::All => "All Time",
            DateScope::CurrentCycle => "This Cycle",
            DateScope::Last7Days => "Last 7 Days",
            DateScope::Last30Days => "Last 30 Days",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    pub type_filter: TypeFilter,
    pub category_filter: CategoryFilter,
    pub sort: SortMode,
    pub search: String,
    pub scope: DateScope,
}

/// Applies the query to a snapshot: type filter, category filter,
/// free-text search, then date scope, all conjunctive, then a stable
/// sort. Ties keep their prior relative order.
pub fn filter_and_sort(
    transactions: &[Transaction],
    query: &TransactionQuery,
    cycle: &CycleRange,
    now: DateTime<Utc>,
) -> Vec<Transaction> {
    let needle = query.search.trim().to_lowercase();
    let mut out: Vec<Transaction> = transactions
        .iter()
        .filter(|t| matches_type(t, query.type_filter))
        .filter(|t| match query.category_filter {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => t.category == category,
        })
        .filter(|t| matches_search(t, &needle))
        .filter(|t| matches_scope(t, query.scope, cycle, now))
        .cloned()
        .collect();
    match query.sort {
        SortMode::DateDesc => out.sort_by(|a, b| b.date.cmp(&a.date)),
        SortMode::DateAsc => out.sort_by(|a, b| a.date.cmp(&b.date)),
        SortMode::AmountDesc => out.sort_by(|a, b| b.amount.cmp(&a.amount)),
        SortMode::AmountAsc => out.sort_by(|a, b| a.amount.cmp(&b.amount)),
    }
    out
}

fn matches_type(t: &Transaction, filter: TypeFilter) -> bool {
    match filter {
        TypeFilter::All => true,
        TypeFilter::Income => t.kind == TransactionKind::Income,
        TypeFilter::Expense => t.kind == TransactionKind::Expense,
        TypeFilter::RecurringOnly => t.is_recurring,
    }
}

fn matches_search(t: &Transaction, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack = format!("{} {} {}", t.title, t.note, t.category.title()).to_lowercase();
    haystack.contains(needle)
}

fn matches_scope(t: &Transaction, scope: DateScope, cycle: &CycleRange, now: DateTime<Utc>) -> bool {
    let today = midnight(now.date_naive());
    match scope {
        DateScope::All => true,
        DateScope::CurrentCycle => cycle.contains(t.date),
        DateScope::Last7Days => t.date >= today - Duration::days(6) && t.date <= now,
        DateScope::Last30Days => t.date >= today - Duration::days(29) && t.date <= now,
    }
}

/// Net balance over the entire snapshot, not the filtered view.
pub fn balance(transactions: &[Transaction]) -> Decimal {
    transactions.iter().fold(Decimal::ZERO, |total, t| match t.kind {
        TransactionKind::Income => total + t.amount,
        TransactionKind::Expense => total - t.amount,
    })
}

pub fn income_in_range(transactions: &[Transaction], range: &CycleRange) -> Decimal {
    sum_kind_in_range(transactions, TransactionKind::Income, range)
}

pub fn expense_in_range(transactions: &[Transaction], range: &CycleRange) -> Decimal {
    sum_kind_in_range(transactions, TransactionKind::Expense, range)
}

fn sum_kind_in_range(
    transactions: &[Transaction],
    kind: TransactionKind,
    range: &CycleRange,
) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.kind == kind && range.contains(t.date))
        .map(|t| t.amount)
        .sum()
}

/// List display buckets for one cycle; mutually exclusive and covering.
#[derive(Debug, Clone, Default)]
pub struct CycleSegments {
    pub overdue: Vec<Transaction>,
    pub this_cycle: Vec<Transaction>,
    pub future: Vec<Transaction>,
    pub older: Vec<Transaction>,
}

/// Partitions an already-filtered view around start-of-today within the
/// cycle. Overdue includes the cycle-start day itself.
pub fn segment(
    filtered: &[Transaction],
    cycle: &CycleRange,
    now: DateTime<Utc>,
) -> CycleSegments {
    let today = midnight(now.date_naive());
    let mut segments = CycleSegments::default();
    for t in filtered {
        let bucket = if t.date < cycle.start {
            &mut segments.older
        } else if t.date < today {
            &mut segments.overdue
        } else if t.date < cycle.end {
            &mut segments.this_cycle
        } else {
            &mut segments.future
        };
        bucket.push(t.clone());
    }
    segments
}

/// Most recent `n` transactions by date, newest first.
pub fn recent(transactions: &[Transaction], n: usize) -> Vec<Transaction> {
    let mut out = transactions.to_vec();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out.truncate(n);
    out
}
