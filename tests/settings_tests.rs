// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use rusqlite::{Connection, params};
use rust_decimal::Decimal;

use spendwise::db;
use spendwise::models::{Category, FinancialGoal};
use spendwise::settings;

#[test]
fn defaults_apply_when_nothing_is_stored() {
    let conn = db::open_in_memory().unwrap();
    assert_eq!(settings::currency_code(&conn).unwrap(), "KZT");
    assert_eq!(settings::month_start_day(&conn).unwrap(), 1);
    assert_eq!(settings::monthly_budget(&conn).unwrap(), Decimal::from(2000));
    assert_eq!(
        settings::category_budget(&conn, Category::Food).unwrap(),
        Decimal::ZERO
    );
}

#[test]
fn currency_code_round_trips_and_rejects_unknown() {
    let conn = db::open_in_memory().unwrap();
    settings::set_currency_code(&conn, "usd").unwrap();
    assert_eq!(settings::currency_code(&conn).unwrap(), "USD");
    assert!(settings::set_currency_code(&conn, "ZZZ").is_err());
    assert_eq!(settings::currency_code(&conn).unwrap(), "USD");
}

#[test]
fn month_start_day_validates_writes_and_clamps_reads() {
    let conn = db::open_in_memory().unwrap();
    assert!(settings::set_month_start_day(&conn, 0).is_err());
    assert!(settings::set_month_start_day(&conn, 29).is_err());
    settings::set_month_start_day(&conn, 28).unwrap();
    assert_eq!(settings::month_start_day(&conn).unwrap(), 28);

    // a value written by an older build is clamped, not an error
    conn.execute(
        "UPDATE settings SET value='45' WHERE key='month_start_day'",
        [],
    )
    .unwrap();
    assert_eq!(settings::month_start_day(&conn).unwrap(), 28);

    conn.execute(
        "UPDATE settings SET value='not a day' WHERE key='month_start_day'",
        [],
    )
    .unwrap();
    assert_eq!(settings::month_start_day(&conn).unwrap(), 1);
}

#[test]
fn monthly_budget_rejects_negative_and_survives_garbage() {
    let conn = db::open_in_memory().unwrap();
    assert!(settings::set_monthly_budget(&conn, Decimal::from(-1)).is_err());
    settings::set_monthly_budget(&conn, Decimal::new(150050, 2)).unwrap();
    assert_eq!(
        settings::monthly_budget(&conn).unwrap(),
        Decimal::new(150050, 2)
    );

    conn.execute(
        "UPDATE settings SET value='oops' WHERE key='monthly_budget'",
        [],
    )
    .unwrap();
    assert_eq!(settings::monthly_budget(&conn).unwrap(), Decimal::from(2000));
}

#[test]
fn category_budgets_use_one_key_per_category() {
    let conn = db::open_in_memory().unwrap();
    settings::set_category_budget(&conn, Category::Food, Decimal::from(400)).unwrap();
    assert!(settings::set_category_budget(&conn, Category::Food, Decimal::from(-1)).is_err());

    let stored: String = conn
        .query_row(
            "SELECT value FROM settings WHERE key='categoryBudget_food'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(stored, "400");

    let budgets = settings::category_budgets(&conn).unwrap();
    assert_eq!(budgets.limit(Category::Food), Decimal::from(400));
    assert_eq!(budgets.limit(Category::Transport), Decimal::ZERO);
}

#[test]
fn goals_round_trip_as_an_iso_dated_json_array() {
    let conn = db::open_in_memory().unwrap();
    let goal = FinancialGoal {
        id: "g1".to_string(),
        title: "Vacation".to_string(),
        target_amount: Decimal::from(1000),
        saved_amount: Decimal::from(250),
        deadline: Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap(),
        note: "two weeks off".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap(),
    };
    settings::save_goals(&conn, std::slice::from_ref(&goal)).unwrap();

    let raw: String = conn
        .query_row("SELECT value FROM settings WHERE key='goals'", [], |r| {
            r.get(0)
        })
        .unwrap();
    assert!(raw.starts_with('['));
    assert!(raw.contains("2024-09-01T00:00:00Z"));

    let loaded = settings::load_goals(&conn).unwrap();
    assert_eq!(loaded, vec![goal]);
}

#[test]
fn malformed_goal_payload_is_a_decode_error() {
    let conn = db::open_in_memory().unwrap();
    conn.execute(
        "INSERT INTO settings(key, value) VALUES('goals', ?1)",
        params!["[{\"id\": 42}]"],
    )
    .unwrap();
    assert!(settings::load_goals(&conn).is_err());
}

#[test]
fn preferences_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spendwise.sqlite");

    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch("CREATE TABLE settings(key TEXT PRIMARY KEY, value TEXT NOT NULL);")
            .unwrap();
        settings::set_currency_code(&conn, "EUR").unwrap();
        settings::set_month_start_day(&conn, 15).unwrap();
    }

    let conn = Connection::open(&path).unwrap();
    assert_eq!(settings::currency_code(&conn).unwrap(), "EUR");
    assert_eq!(settings::month_start_day(&conn).unwrap(), 15);
}
