// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc};

/// Half-open accounting window: start-inclusive, end-exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CycleRange {
    pub fn from_days(start: NaiveDate, end: NaiveDate) -> Self {
        CycleRange {
            start: midnight(start),
            end: midnight(end),
        }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && at < self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsPeriod {
    Week,
    Month,
    Year,
}

impl AnalyticsPeriod {
    pub const ALL: [AnalyticsPeriod; 3] = [
        AnalyticsPeriod::Week,
        AnalyticsPeriod::Month,
        AnalyticsPeriod::Year,
    ];

    pub fn title(self) -> &'static str {
        match self {
            AnalyticsPeriod::Week => "Week",
            AnalyticsPeriod::Month => "Month",
            AnalyticsPeriod::Year => "Year",
        }
    }
}

pub fn midnight(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

/// Accounting cycles may start on any day 1..=28; out-of-range
/// configuration (including the unset 0) is clamped, never an error.
pub fn clamp_cycle_day(cycle_start_day: u32) -> u32 {
    cycle_start_day.clamp(1, 28)
}

/// Boundaries of the cycle containing `today`. The cycle starts on the
/// clamped day of the current calendar month, or of the previous month
/// when that day has not yet occurred, and runs exactly one calendar
/// month. The day cap of 28 keeps the arithmetic total in every month.
pub fn current_cycle_range(today: NaiveDate, cycle_start_day: u32) -> CycleRange {
    let day = clamp_cycle_day(cycle_start_day);
    let start = today.with_day(day).and_then(|candidate| {
        if today.day() < day {
            candidate.checked_sub_months(Months::new(1))
        } else {
            Some(candidate)
        }
    });
    match start.and_then(|s| s.checked_add_months(Months::new(1)).map(|e| (s, e))) {
        Some((start, end)) => CycleRange::from_days(start, end),
        None => fallback_range(today),
    }
}

/// Analytics window for the given period: the enclosing Monday-start week,
/// the custom accounting cycle, or the enclosing calendar year.
pub fn period_range(today: NaiveDate, period: AnalyticsPeriod, cycle_start_day: u32) -> CycleRange {
    match period {
        AnalyticsPeriod::Week => {
            let back = Duration::days(today.weekday().num_days_from_monday() as i64);
            let start = today - back;
            CycleRange::from_days(start, start + Duration::days(7))
        }
        AnalyticsPeriod::Month => current_cycle_range(today, cycle_start_day),
        AnalyticsPeriod::Year => {
            match NaiveDate::from_ymd_opt(today.year(), 1, 1)
                .and_then(|s| s.checked_add_months(Months::new(12)).map(|e| (s, e)))
            {
                Some((start, end)) => CycleRange::from_days(start, end),
                None => fallback_range(today),
            }
        }
    }
}

fn fallback_range(today: NaiveDate) -> CycleRange {
    let end = today
        .checked_add_months(Months::new(1))
        .or_else(|| today.checked_add_signed(Duration::days(30)))
        .unwrap_or(today);
    CycleRange::from_days(today, end)
}
