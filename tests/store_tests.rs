// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use spendwise::error::Error;
use spendwise::models::{Category, SyncState, Transaction, TransactionKind};
use spendwise::store::{MemoryStore, SnapshotHandler, TransactionFeed, TransactionStore};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

fn tx(id: &str, title: &str, amount: i64) -> Transaction {
    Transaction {
        id: id.to_string(),
        title: title.to_string(),
        amount: Decimal::from(amount),
        date: now(),
        kind: TransactionKind::Expense,
        category: Category::Food,
        note: String::new(),
        is_recurring: false,
        created_at: now() - Duration::days(1),
    }
}

/// Store whose mutations always fail; the listener still gets the seed.
struct FlakyStore {
    inner: MemoryStore,
}

impl TransactionStore for FlakyStore {
    fn listen(&mut self, handler: SnapshotHandler) {
        self.inner.listen(handler);
    }

    fn add(&mut self, _transaction: Transaction) -> spendwise::Result<()> {
        Err(Error::store("permission denied"))
    }

    fn update(&mut self, _transaction: Transaction) -> spendwise::Result<()> {
        Err(Error::store("permission denied"))
    }

    fn delete(&mut self, _id: &str) -> spendwise::Result<()> {
        Err(Error::store("permission denied"))
    }
}

#[test]
fn listening_delivers_the_seeded_snapshot() {
    let store = MemoryStore::seeded(vec![tx("t1", "Coffee", 4)]);
    let mut feed = TransactionFeed::new(store);
    assert_eq!(feed.state(), SyncState::Idle);

    feed.start_listening();
    assert_eq!(feed.state(), SyncState::Success);
    assert_eq!(feed.transactions().len(), 1);
    assert!(feed.last_sync().is_some());
}

#[test]
fn mutations_flow_through_as_full_snapshots() {
    let mut feed = TransactionFeed::new(MemoryStore::new());
    feed.start_listening();

    feed.add(tx("t1", "Coffee", 4)).unwrap();
    feed.add(tx("t2", "Lunch", 12)).unwrap();
    assert_eq!(feed.transactions().len(), 2);

    let mut edited = tx("t2", "Team Lunch", 18);
    edited.is_recurring = true;
    feed.update(edited).unwrap();
    let snapshot = feed.transactions();
    let lunch = snapshot.iter().find(|t| t.id == "t2").unwrap();
    assert_eq!(lunch.title, "Team Lunch");
    assert!(lunch.is_recurring);

    feed.delete("t1").unwrap();
    assert_eq!(feed.transactions().len(), 1);
    assert_eq!(feed.state(), SyncState::Success);
}

#[test]
fn update_of_unknown_id_upserts() {
    let mut feed = TransactionFeed::new(MemoryStore::new());
    feed.start_listening();
    feed.update(tx("fresh", "Rent", 300)).unwrap();
    assert_eq!(feed.transactions().len(), 1);
}

#[test]
fn invalid_drafts_never_reach_the_store() {
    let mut feed = TransactionFeed::new(MemoryStore::new());
    feed.start_listening();

    assert!(feed.add(tx("t1", "   ", 10)).is_err());
    assert!(feed.add(tx("t2", "Coffee", 0)).is_err());
    assert!(feed.add(tx("t3", "Coffee", -5)).is_err());
    assert!(feed.transactions().is_empty());
    // rejected input is not a store failure
    assert_eq!(feed.state(), SyncState::Success);
}

#[test]
fn duplicate_copies_under_a_fresh_identity() {
    let mut feed = TransactionFeed::new(MemoryStore::seeded(vec![tx("t1", "Gym", 25)]));
    feed.start_listening();

    feed.duplicate("t1", now()).unwrap();
    let snapshot = feed.transactions();
    assert_eq!(snapshot.len(), 2);
    let copy = snapshot.iter().find(|t| t.id != "t1").unwrap();
    assert_eq!(copy.title, "Gym");
    assert_eq!(copy.amount, Decimal::from(25));
    assert_eq!(copy.created_at, now());

    assert!(feed.duplicate("missing", now()).is_err());
}

#[test]
fn toggle_recurring_flips_the_flag() {
    let mut feed = TransactionFeed::new(MemoryStore::seeded(vec![tx("t1", "Gym", 25)]));
    feed.start_listening();

    feed.toggle_recurring("t1").unwrap();
    assert!(feed.transactions()[0].is_recurring);
    feed.toggle_recurring("t1").unwrap();
    assert!(!feed.transactions()[0].is_recurring);
}

#[test]
fn store_failure_keeps_the_last_known_good_snapshot() {
    let store = FlakyStore {
        inner: MemoryStore::seeded(vec![tx("t1", "Coffee", 4)]),
    };
    let mut feed = TransactionFeed::new(store);
    feed.start_listening();
    assert_eq!(feed.transactions().len(), 1);

    let err = feed.add(tx("t2", "Lunch", 12)).unwrap_err();
    assert!(matches!(err, Error::Store(_)));
    assert!(feed.state().is_error());
    assert_eq!(feed.transactions().len(), 1);
}
