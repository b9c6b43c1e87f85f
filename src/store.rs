// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{SyncState, Transaction};

pub type SnapshotHandler = Box<dyn FnMut(Result<Vec<Transaction>>)>;

/// Boundary to the user's remote transaction list. The store delivers
/// whole-list snapshots; the core never sees the wire format. An update
/// is an upsert keyed by id.
pub trait TransactionStore {
    fn listen(&mut self, handler: SnapshotHandler);
    fn add(&mut self, transaction: Transaction) -> Result<()>;
    fn update(&mut self, transaction: Transaction) -> Result<()>;
    fn delete(&mut self, id: &str) -> Result<()>;
}

/// In-process store for tests and demo wiring. Every mutation emits a
/// fresh full snapshot, the same replacement semantics the remote store
/// guarantees.
#[derive(Default)]
pub struct MemoryStore {
    transactions: Vec<Transaction>,
    handler: Option<SnapshotHandler>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn seeded(transactions: Vec<Transaction>) -> Self {
        MemoryStore {
            transactions,
            handler: None,
        }
    }

    fn emit(&mut self) {
        if let Some(handler) = self.handler.as_mut() {
            handler(Ok(self.transactions.clone()));
        }
    }
}

impl TransactionStore for MemoryStore {
    fn listen(&mut self, handler: SnapshotHandler) {
        self.handler = Some(handler);
        self.emit();
    }

    fn add(&mut self, transaction: Transaction) -> Result<()> {
        self.transactions.push(transaction);
        self.emit();
        Ok(())
    }

    fn update(&mut self, transaction: Transaction) -> Result<()> {
        match self.transactions.iter_mut().find(|t| t.id == transaction.id) {
            Some(slot) => *slot = transaction,
            None => self.transactions.push(transaction),
        }
        self.emit();
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        self.transactions.retain(|t| t.id != id);
        self.emit();
        Ok(())
    }
}

#[derive(Debug, Default)]
struct FeedShared {
    transactions: Vec<Transaction>,
    state: SyncState,
    last_sync: Option<DateTime<Utc>>,
}

/// Holds the current snapshot on behalf of the presentation layer.
/// Snapshots are applied wholesale, last delivered wins; a store failure
/// keeps the last known-good list and flips the state to error.
pub struct TransactionFeed<S: TransactionStore> {
    store: S,
    shared: Rc<RefCell<FeedShared>>,
    listening: bool,
}

impl<S: TransactionStore> TransactionFeed<S> {
    pub fn new(store: S) -> Self {
        TransactionFeed {
            store,
            shared: Rc::new(RefCell::new(FeedShared::default())),
            listening: false,
        }
    }

    pub fn start_listening(&mut self) {
        if self.listening {
            return;
        }
        self.listening = true;
        self.shared.borrow_mut().state = SyncState::Loading;
        let shared = Rc::clone(&self.shared);
        self.store.listen(Box::new(move |result| {
            let mut inner = shared.borrow_mut();
            match result {
                Ok(items) => {
                    debug!("applied snapshot of {} transactions", items.len());
                    inner.transactions = items;
                    inner.last_sync = Some(Utc::now());
                    inner.state = SyncState::Success;
                }
                Err(e) => {
                    warn!("transaction stream failed: {}", e);
                    inner.state = SyncState::Error(e.to_string());
                }
            }
        }));
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.shared.borrow().transactions.clone()
    }

    pub fn state(&self) -> SyncState {
        self.shared.borrow().state.clone()
    }

    pub fn last_sync(&self) -> Option<DateTime<Utc>> {
        self.shared.borrow().last_sync
    }

    pub fn add(&mut self, transaction: Transaction) -> Result<()> {
        validate(&transaction)?;
        self.mutate(|store| store.add(transaction))
    }

    pub fn update(&mut self, transaction: Transaction) -> Result<()> {
        validate(&transaction)?;
        self.mutate(|store| store.update(transaction))
    }

    pub fn delete(&mut self, id: &str) -> Result<()> {
        self.mutate(|store| store.delete(id))
    }

    /// Copies an existing transaction under a fresh identity.
    pub fn duplicate(&mut self, id: &str, now: DateTime<Utc>) -> Result<()> {
        let Some(original) = self.transactions().into_iter().find(|t| t.id == id) else {
            return Err(Error::validation("No such transaction."));
        };
        let copy = Transaction {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            ..original
        };
        self.mutate(|store| store.add(copy))
    }

    pub fn toggle_recurring(&mut self, id: &str) -> Result<()> {
        let Some(mut transaction) = self.transactions().into_iter().find(|t| t.id == id) else {
            return Err(Error::validation("No such transaction."));
        };
        transaction.is_recurring = !transaction.is_recurring;
        self.mutate(|store| store.update(transaction))
    }

    fn mutate(&mut self, op: impl FnOnce(&mut S) -> Result<()>) -> Result<()> {
        self.shared.borrow_mut().state = SyncState::Loading;
        match op(&mut self.store) {
            Ok(()) => {
                let mut inner = self.shared.borrow_mut();
                if inner.state == SyncState::Loading {
                    inner.state = SyncState::Success;
                }
                Ok(())
            }
            Err(e) => {
                self.shared.borrow_mut().state = SyncState::Error(e.to_string());
                Err(e)
            }
        }
    }
}

fn validate(transaction: &Transaction) -> Result<()> {
    if transaction.title.trim().is_empty() {
        return Err(Error::validation("Title cannot be empty."));
    }
    if transaction.amount <= Decimal::ZERO {
        return Err(Error::validation("Amount must be positive."));
    }
    Ok(())
}
