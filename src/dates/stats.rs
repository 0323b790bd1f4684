use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::dates::clock::Clock;
use crate::foundation::core::{DAYS_PER_YEAR, TOTAL_DAYS, TOTAL_WEEKS, TOTAL_YEARS, WEEKS_PER_YEAR};
use crate::foundation::format::round2;

const SECONDS_PER_DAY: i64 = 86_400;
const DAYS_PER_MONTH: f64 = DAYS_PER_YEAR / 12.0;

/// Weeks lived from `birth` to `today`, aligned to birthdays.
///
/// Row `n` of the grid is the year between the `n`th and `n+1`th birthday, so the count is
/// `age * 52 + weeks since the last birthday`, where the in-year part is capped at 51. This keeps
/// the current week inside the correct age row even though a year is slightly longer than 52
/// weeks. The result is clamped to `[0, TOTAL_WEEKS]`.
pub fn calculate_weeks_lived(birth: NaiveDate, today: NaiveDate) -> u32 {
    if today < birth {
        return 0;
    }

    let mut age = today.year() - birth.year();
    let had_birthday_this_year = (today.month(), today.day()) >= (birth.month(), birth.day());
    if !had_birthday_this_year {
        age -= 1;
    }

    let last_birthday = anniversary(birth, age);
    let weeks_since_birthday = (today - last_birthday)
        .num_days()
        .div_euclid(7)
        .clamp(0, i64::from(WEEKS_PER_YEAR - 1));

    let weeks = i64::from(age) * i64::from(WEEKS_PER_YEAR) + weeks_since_birthday;
    weeks.clamp(0, i64::from(TOTAL_WEEKS)) as u32
}

/// The `years`th anniversary of `birth`. A Feb 29 birthday falls on Mar 1 in common years.
fn anniversary(birth: NaiveDate, years: i32) -> NaiveDate {
    let year = birth.year() + years;
    birth
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(birth)
}

/// Snapshot of life statistics for one birth date on one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeStats {
    /// Birthday-aligned weeks lived, in `[0, TOTAL_WEEKS]`.
    pub weeks_lived: u32,
    /// `TOTAL_WEEKS - weeks_lived`.
    pub weeks_remaining: u32,
    /// Whole days since birth.
    pub days_lived: i64,
    /// Days left of the 90-year span, never negative.
    pub days_remaining: i64,
    /// `days_lived / 365.25`.
    pub years_lived: f64,
    /// `weeks_lived / TOTAL_WEEKS * 100`.
    pub percentage_lived: f64,
}

impl LifeStats {
    /// Compute every statistic for `birth` as of `today`.
    pub fn at(birth: NaiveDate, today: NaiveDate) -> Self {
        let days_lived = (today - birth).num_days().max(0);
        let weeks_lived = calculate_weeks_lived(birth, today);
        let weeks_remaining = TOTAL_WEEKS.saturating_sub(weeks_lived);

        Self {
            weeks_lived,
            weeks_remaining,
            days_lived,
            days_remaining: (TOTAL_DAYS - days_lived).max(0),
            years_lived: days_lived as f64 / DAYS_PER_YEAR,
            percentage_lived: f64::from(weeks_lived) / f64::from(TOTAL_WEEKS) * 100.0,
        }
    }

    /// Grid row (0-based age) holding the current week. `None` once the grid is full.
    pub fn current_year(&self) -> Option<u32> {
        (self.weeks_lived < TOTAL_WEEKS).then_some(self.weeks_lived / WEEKS_PER_YEAR)
    }
}

/// Per-second counters for the live wallpaper display.
///
/// Everything is derived from the seconds elapsed since local midnight of the birth date, so the
/// counters never disagree with each other within one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStats {
    /// Seconds since local midnight of the birth date, never negative.
    pub seconds_lived: i64,
    /// `seconds_lived / 60`, truncated.
    pub minutes_lived: i64,
    /// `seconds_lived / 3600`, truncated.
    pub hours_lived: i64,
    /// Whole days contained in `seconds_lived`.
    pub days_lived: i64,
    /// Birthday-aligned weeks, the same count the grid shows.
    pub weeks_lived: u32,
    /// `days_lived / 30.4375`, floored.
    pub months_lived: i64,
    /// `days_lived / 365.25`.
    pub years_lived: f64,
    /// Seconds lived over the seconds in 90 Julian years, in percent.
    pub precise_percentage: f64,
}

impl LiveStats {
    /// Compute the counters for `birth` at the local instant `now`.
    pub fn at(birth: NaiveDate, now: NaiveDateTime) -> Self {
        let seconds_lived = (now - birth.and_time(NaiveTime::MIN))
            .num_seconds()
            .max(0);
        let days_lived = seconds_lived / SECONDS_PER_DAY;
        let total_seconds = f64::from(TOTAL_YEARS) * DAYS_PER_YEAR * SECONDS_PER_DAY as f64;

        Self {
            seconds_lived,
            minutes_lived: seconds_lived / 60,
            hours_lived: seconds_lived / 3_600,
            days_lived,
            weeks_lived: calculate_weeks_lived(birth, now.date()),
            months_lived: (days_lived as f64 / DAYS_PER_MONTH).floor() as i64,
            years_lived: days_lived as f64 / DAYS_PER_YEAR,
            precise_percentage: seconds_lived as f64 / total_seconds * 100.0,
        }
    }
}

/// Free-function form of [`LifeStats::at`].
pub fn calculate_life_stats(birth: NaiveDate, today: NaiveDate) -> LifeStats {
    LifeStats::at(birth, today)
}

pub fn calculate_live_stats(birth: NaiveDate, now: NaiveDateTime) -> LiveStats {
    LiveStats::at(birth, now)
}

/// [`LifeStats`] for today according to `clock`.
pub fn life_stats_now(birth: NaiveDate, clock: &dyn Clock) -> LifeStats {
    LifeStats::at(birth, clock.today())
}

/// [`LiveStats`] for the current instant according to `clock`.
pub fn live_stats_now(birth: NaiveDate, clock: &dyn Clock) -> LiveStats {
    LiveStats::at(birth, clock.now())
}

/// JSON body of the stats endpoint and the `stats` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    /// Birth date as `YYYY-MM-DD`.
    pub birth_date: String,
    /// The "today" the report was computed for, as `YYYY-MM-DD`.
    pub current_date: String,
    /// Always [`TOTAL_WEEKS`]; serialized as `totalWeeksIn90Years`.
    #[serde(rename = "totalWeeksIn90Years")]
    pub total_weeks: u32,
    /// Birthday-aligned weeks lived.
    pub weeks_lived: u32,
    /// `total_weeks - weeks_lived`.
    pub weeks_remaining: u32,
    /// Percent of the grid filled, rounded to two decimals.
    pub percentage_lived: f64,
    /// `days_lived / 365.25`, rounded to two decimals.
    pub years_lived: f64,
    /// Whole days since birth.
    pub days_lived: i64,
    /// Days left of the 90-year span, never negative.
    pub days_remaining: i64,
}

impl StatsReport {
    /// Build the report for `birth` as of `today`. Both dates are assumed already validated.
    pub fn new(birth: NaiveDate, today: NaiveDate) -> Self {
        let s = LifeStats::at(birth, today);
        Self {
            birth_date: birth.format("%Y-%m-%d").to_string(),
            current_date: today.format("%Y-%m-%d").to_string(),
            total_weeks: TOTAL_WEEKS,
            weeks_lived: s.weeks_lived,
            weeks_remaining: s.weeks_remaining,
            percentage_lived: round2(s.percentage_lived),
            years_lived: round2(s.years_lived),
            days_lived: s.days_lived,
            days_remaining: s.days_remaining,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dates/stats.rs"]
mod tests;
