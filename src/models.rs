// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

    pub fn title(self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Salary,
    Food,
    Transport,
    Entertainment,
    Utilities,
    Shopping,
    Health,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Salary,
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Utilities,
        Category::Shopping,
        Category::Health,
        Category::Other,
    ];

    /// Stable lowercase code, also the serialized form and the suffix of
    /// the per-category budget preference key.
    pub fn code(self) -> &'static str {
        match self {
            Category::Salary => "salary",
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Entertainment => "entertainment",
            Category::Utilities => "utilities",
            Category::Shopping => "shopping",
            Category::Health => "health",
            Category::Other => "other",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Salary => "Salary",
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Utilities => "Utilities",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: Category,
    pub note: String,
    pub is_recurring: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialGoal {
    pub id: String,
    pub title: String,
    pub target_amount: Decimal,
    pub saved_amount: Decimal,
    pub deadline: DateTime<Utc>,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

impl FinancialGoal {
    /// Completion ratio clamped to [0, 1]; zero when no target is set.
    pub fn progress(&self) -> f64 {
        if self.target_amount <= Decimal::ZERO {
            return 0.0;
        }
        (self.saved_amount / self.target_amount)
            .to_f64()
            .unwrap_or(0.0)
            .min(1.0)
    }

    pub fn remaining_amount(&self) -> Decimal {
        (self.target_amount - self.saved_amount).max(Decimal::ZERO)
    }

    /// Over-saving past the target still counts as completed.
    pub fn is_completed(&self) -> bool {
        self.saved_amount >= self.target_amount
    }
}

/// Result of a single currency conversion; derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyConversion {
    pub input_amount: Decimal,
    pub source_code: String,
    pub target_code: String,
    pub rate: Decimal,
    pub output_amount: Decimal,
}

/// Observable lifecycle of an asynchronous collaborator call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SyncState {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl SyncState {
    pub fn is_error(&self) -> bool {
        matches!(self, SyncState::Error(_))
    }
}
