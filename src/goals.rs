// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Duration, Utc};
use rusqlite::Connection;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::warn;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{FinancialGoal, SyncState};
use crate::settings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalProjection {
    pub message: String,
    pub at_risk: bool,
}

/// Whole days from start-of-today to start-of-deadline; negative once the
/// deadline has passed.
pub fn days_remaining(goal: &FinancialGoal, today: DateTime<Utc>) -> i64 {
    (goal.deadline.date_naive() - today.date_naive()).num_days()
}

/// Linear extrapolation of the completion date from the average daily
/// contribution since the goal was created.
pub fn projection(goal: &FinancialGoal, today: DateTime<Utc>) -> GoalProjection {
    if goal.is_completed() {
        return GoalProjection {
            message: "Completed".to_string(),
            at_risk: false,
        };
    }

    if goal.saved_amount <= Decimal::ZERO {
        let message = if days_remaining(goal, today) < 0 {
            "Deadline passed"
        } else {
            "No progress yet"
        };
        return GoalProjection {
            message: message.to_string(),
            at_risk: true,
        };
    }

    let elapsed_days = (today - goal.created_at).num_days().max(1);
    let daily_rate = goal.saved_amount / Decimal::from(elapsed_days);
    if daily_rate <= Decimal::ZERO {
        return GoalProjection {
            message: "Need regular contributions".to_string(),
            at_risk: true,
        };
    }

    let needed_days = (goal.remaining_amount() / daily_rate)
        .ceil()
        .to_i64()
        .unwrap_or(i64::MAX);
    let projected = Duration::try_days(needed_days)
        .and_then(|d| today.checked_add_signed(d))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    let date_text = projected.format("%b %-d, %Y");

    if projected <= goal.deadline {
        GoalProjection {
            message: format!("On track: ~{}", date_text),
            at_risk: false,
        }
    } else {
        GoalProjection {
            message: format!("At risk: ~{}", date_text),
            at_risk: true,
        }
    }
}

/// The user's goal list plus its persistence and observable state. All
/// mutation paths persist through the preference store passed in.
#[derive(Debug)]
pub struct GoalBook {
    goals: Vec<FinancialGoal>,
    state: SyncState,
}

impl GoalBook {
    /// Loads the stored list. A malformed payload resets to an empty list
    /// and surfaces an error state instead of propagating.
    pub fn load(conn: &Connection) -> GoalBook {
        match settings::load_goals(conn) {
            Ok(goals) => GoalBook {
                goals,
                state: SyncState::Idle,
            },
            Err(e) => {
                warn!("failed to load goals, starting empty: {}", e);
                GoalBook {
                    goals: Vec::new(),
                    state: SyncState::Error("Failed to load goals.".to_string()),
                }
            }
        }
    }

    pub fn goals(&self) -> &[FinancialGoal] {
        &self.goals
    }

    pub fn state(&self) -> &SyncState {
        &self.state
    }

    pub fn goal(&self, id: &str) -> Option<&FinancialGoal> {
        self.goals.iter().find(|g| g.id == id)
    }

    /// Deadline ascending, creation time breaking ties.
    pub fn sorted(&self) -> Vec<FinancialGoal> {
        let mut out = self.goals.clone();
        out.sort_by(|a, b| {
            a.deadline
                .cmp(&b.deadline)
                .then(a.created_at.cmp(&b.created_at))
        });
        out
    }

    pub fn total_target(&self) -> Decimal {
        self.goals.iter().map(|g| g.target_amount).sum()
    }

    pub fn total_saved(&self) -> Decimal {
        self.goals.iter().map(|g| g.saved_amount).sum()
    }

    pub fn overall_progress(&self) -> f64 {
        let target = self.total_target();
        if target <= Decimal::ZERO {
            return 0.0;
        }
        (self.total_saved() / target).to_f64().unwrap_or(0.0).min(1.0)
    }

    pub fn add(
        &mut self,
        conn: &Connection,
        title: &str,
        target_amount: Decimal,
        saved_amount: Decimal,
        deadline: DateTime<Utc>,
        note: &str,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::validation("Goal title cannot be empty."));
        }
        let goal = FinancialGoal {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            target_amount: target_amount.max(Decimal::ZERO),
            saved_amount: saved_amount.max(Decimal::ZERO),
            deadline,
            note: note.trim().to_string(),
            created_at: now,
        };
        self.goals.push(goal);
        self.persist(conn)
    }

    pub fn update(&mut self, conn: &Connection, goal: FinancialGoal) -> Result<()> {
        let Some(slot) = self.goals.iter_mut().find(|g| g.id == goal.id) else {
            return Err(Error::validation("No such goal."));
        };
        *slot = goal;
        self.persist(conn)
    }

    pub fn delete(&mut self, conn: &Connection, id: &str) -> Result<()> {
        self.goals.retain(|g| g.id != id);
        self.persist(conn)
    }

    /// Adds a strictly-positive contribution; anything else is rejected
    /// before the list is touched.
    pub fn contribute(&mut self, conn: &Connection, id: &str, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::validation("Contribution must be positive."));
        }
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) else {
            return Err(Error::validation("No such goal."));
        };
        goal.saved_amount += amount;
        self.persist(conn)
    }

    fn persist(&mut self, conn: &Connection) -> Result<()> {
        match settings::save_goals(conn, &self.goals) {
            Ok(()) => {
                self.state = SyncState::Success;
                Ok(())
            }
            Err(e) => {
                self.state = SyncState::Error("Failed to save goals.".to_string());
                Err(e)
            }
        }
    }
}
