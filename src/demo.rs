// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::Category::{self, *};
use crate::models::TransactionKind::{self, *};
use crate::models::Transaction;

/// Seed data for first-run and preview screens, spread over the six weeks
/// before `reference`.
pub fn demo_transactions(reference: DateTime<Utc>) -> Vec<Transaction> {
    let blueprint: [(&str, i64, i64, TransactionKind, Category, &str, bool); 24] = [
        ("Monthly Salary", 650_000, 2, Income, Salary, "Main job payroll", true),
        ("Freelance Design", 180_000, 9, Income, Salary, "Side project payout", false),
        ("Groceries", 18_500, 1, Expense, Food, "Weekly supermarket run", false),
        ("Coffee", 1_400, 0, Expense, Food, "Morning latte", false),
        ("Dinner", 15_000, 3, Expense, Food, "Dinner with friends", false),
        ("Fuel", 13_500, 4, Expense, Transport, "Car refill", false),
        ("Taxi", 4_500, 7, Expense, Transport, "Late ride home", false),
        ("Internet", 8_500, 6, Expense, Utilities, "Home internet", true),
        ("Electricity", 12_000, 12, Expense, Utilities, "Monthly bill", true),
        ("Streaming", 3_500, 11, Expense, Entertainment, "Video subscription", true),
        ("Cinema", 7_000, 8, Expense, Entertainment, "Weekend movie", false),
        ("Gym", 25_000, 5, Expense, Health, "Monthly membership", true),
        ("Pharmacy", 8_500, 10, Expense, Health, "Vitamins", false),
        ("Clothes", 42_000, 14, Expense, Shopping, "Seasonal sale", false),
        ("Gift", 20_000, 16, Expense, Other, "Birthday present", false),
        ("Bonus", 120_000, 20, Income, Salary, "Quarter bonus", false),
        ("Groceries", 16_200, 22, Expense, Food, "Market refill", false),
        ("Transit Pass", 9_000, 24, Expense, Transport, "Monthly metro pass", true),
        ("Water Bill", 4_500, 28, Expense, Utilities, "Utilities payment", true),
        ("Restaurant", 24_000, 30, Expense, Food, "Family dinner", false),
        ("Monthly Salary", 650_000, 33, Income, Salary, "Main job payroll", true),
        ("Online Shopping", 55_000, 36, Expense, Shopping, "Household items", false),
        ("Doctor Visit", 30_000, 39, Expense, Health, "Checkup", false),
        ("Concert Ticket", 35_000, 43, Expense, Entertainment, "Live concert", false),
    ];

    blueprint
        .into_iter()
        .map(|(title, amount, days_ago, kind, category, note, is_recurring)| {
            let date = reference - Duration::days(days_ago);
            Transaction {
                id: Uuid::new_v4().to_string(),
                title: title.to_string(),
                amount: Decimal::from(amount),
                date,
                kind,
                category,
                note: note.to_string(),
                is_recurring,
                created_at: date,
            }
        })
        .collect()
}
