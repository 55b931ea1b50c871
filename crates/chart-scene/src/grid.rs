// File: crates/chart-scene/src/grid.rs
// Summary: Tick position helpers for numeric (1/2/5 steps) and calendar-aware date axes.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::types::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

/// Upper bound on ticks produced for one axis.
const MAX_TICKS: f64 = 10_000.0;

/// 1970-01-01 was a Thursday; weekly ticks are shifted to land on Mondays.
const MONDAY_OFFSET_MS: f64 = 4.0 * MS_PER_DAY;

const FIXED_TIME_STEPS: &[f64] = &[
    MS_PER_SECOND,
    2.0 * MS_PER_SECOND,
    5.0 * MS_PER_SECOND,
    10.0 * MS_PER_SECOND,
    15.0 * MS_PER_SECOND,
    30.0 * MS_PER_SECOND,
    MS_PER_MINUTE,
    2.0 * MS_PER_MINUTE,
    5.0 * MS_PER_MINUTE,
    10.0 * MS_PER_MINUTE,
    15.0 * MS_PER_MINUTE,
    30.0 * MS_PER_MINUTE,
    MS_PER_HOUR,
    2.0 * MS_PER_HOUR,
    3.0 * MS_PER_HOUR,
    6.0 * MS_PER_HOUR,
    12.0 * MS_PER_HOUR,
    MS_PER_DAY,
    2.0 * MS_PER_DAY,
    7.0 * MS_PER_DAY,
];

const MONTH_STEPS: &[u32] = &[1, 2, 3, 6];
const YEAR_MULTIPLIERS: &[u32] = &[1, 2, 5];

/// Nominal month length, only used to compare against the target step.
const NOMINAL_MONTH_MS: f64 = 30.0 * MS_PER_DAY;

#[derive(Clone, Copy, Debug, PartialEq)]
enum TimeStep {
    Fixed(f64),
    Months(u32),
}

/// Ticks on a 1/2/5 × 10ⁿ step, all within `[start, end]`. Roughly `count` of them.
pub fn numeric_ticks(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !end.is_finite() || start > end {
        return Vec::new();
    }
    if start == end {
        return vec![start];
    }
    let step = nice_step((end - start) / count as f64);
    if step == 0.0 {
        return vec![start, end];
    }
    aligned_ticks(start, end, step, 0.0)
}

/// Date ticks for a millisecond interval, stepping by fixed units up to a week and
/// by calendar months/years beyond that (UTC).
pub fn date_ticks(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !end.is_finite() || start > end {
        return Vec::new();
    }
    if start == end {
        return vec![start];
    }
    match time_step((end - start) / count as f64) {
        TimeStep::Fixed(step) => {
            let offset = if step == 7.0 * MS_PER_DAY { MONDAY_OFFSET_MS } else { 0.0 };
            aligned_ticks(start, end, step, offset)
        }
        TimeStep::Months(months) => month_ticks(start, end, months),
    }
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

fn time_step(target: f64) -> TimeStep {
    if let Some(&s) = FIXED_TIME_STEPS.iter().find(|&&s| s >= target) {
        return TimeStep::Fixed(s);
    }
    if let Some(&m) = MONTH_STEPS.iter().find(|&&m| f64::from(m) * NOMINAL_MONTH_MS >= target) {
        return TimeStep::Months(m);
    }
    let mut decade = 1u32;
    loop {
        for &mult in YEAR_MULTIPLIERS {
            let years = mult * decade;
            if f64::from(years) * 12.0 * NOMINAL_MONTH_MS >= target || decade >= 100_000 {
                return TimeStep::Months(years * 12);
            }
        }
        decade *= 10;
    }
}

/// Multiples of `step` (shifted by `offset`) inside `[start, end]`.
fn aligned_ticks(start: f64, end: f64, step: f64, offset: f64) -> Vec<f64> {
    let first = ((start - offset) / step).ceil();
    let last = ((end - offset) / step).floor();
    let n = last - first;
    if !n.is_finite() || n < 0.0 {
        return Vec::new();
    }
    let n = n.min(MAX_TICKS) as u64;
    (0..=n)
        .map(|i| {
            let v = offset + (first + i as f64) * step;
            // avoid "-0" labels
            if v == 0.0 { 0.0 } else { v }
        })
        .collect()
}

fn month_ticks(start: f64, end: f64, months: u32) -> Vec<f64> {
    let Some(dt) = DateTime::<Utc>::from_timestamp_millis(start.floor() as i64) else {
        return Vec::new();
    };
    let step = i64::from(months);
    let mut idx = i64::from(dt.year()) * 12 + i64::from(dt.month0());
    let rem = idx.rem_euclid(step);
    if rem != 0 {
        idx += step - rem;
    }

    let mut out = Vec::new();
    while let Some(t) = month_start_ms(idx) {
        if t > end || out.len() as f64 >= MAX_TICKS {
            break;
        }
        if t >= start {
            out.push(t);
        }
        idx += step;
    }
    out
}

/// Midnight UTC on the first day of absolute month `idx` (`year * 12 + month0`).
fn month_start_ms(idx: i64) -> Option<f64> {
    let year = i32::try_from(idx.div_euclid(12)).ok()?;
    let month = u32::try_from(idx.rem_euclid(12)).ok()? + 1;
    let date = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc_ms(y: i32, m: u32, d: u32) -> f64 {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp_millis() as f64
    }

    #[test]
    fn nice_step_rounds_to_one_two_five() {
        assert_eq!(nice_step(0.9), 1.0);
        assert_eq!(nice_step(1.7), 2.0);
        assert_eq!(nice_step(4.0), 5.0);
        assert_eq!(nice_step(8_598.0), 10_000.0);
        assert_eq!(nice_step(0.0), 0.0);
    }

    #[test]
    fn numeric_ticks_stay_inside_interval() {
        let ticks = numeric_ticks(26_220.0, 112_200.0, 10);
        assert_eq!(ticks.first().copied(), Some(30_000.0));
        assert_eq!(ticks.last().copied(), Some(110_000.0));
        assert_eq!(ticks.len(), 9);
    }

    #[test]
    fn numeric_ticks_do_not_emit_negative_zero() {
        let ticks = numeric_ticks(-1.0, 1.0, 4);
        let zero = ticks.iter().find(|v| **v == 0.0).expect("zero tick");
        assert!(zero.is_sign_positive());
    }

    #[test]
    fn time_step_picks_months_for_quarter_year_spans() {
        assert_eq!(time_step(25.0 * MS_PER_DAY), TimeStep::Months(1));
        assert_eq!(time_step(80.0 * MS_PER_DAY), TimeStep::Months(3));
        assert_eq!(time_step(3.0 * MS_PER_DAY), TimeStep::Fixed(7.0 * MS_PER_DAY));
        assert_eq!(time_step(400.0 * MS_PER_DAY), TimeStep::Months(24));
    }

    #[test]
    fn month_ticks_land_on_first_of_month() {
        let ticks = date_ticks(utc_ms(2022, 5, 25), utc_ms(2023, 2, 8), 10);
        assert_eq!(ticks.len(), 9);
        assert_eq!(ticks[0], utc_ms(2022, 6, 1));
        assert_eq!(ticks[8], utc_ms(2023, 2, 1));
    }

    #[test]
    fn quarter_ticks_align_to_calendar_quarters() {
        let ticks = month_ticks(utc_ms(2022, 2, 10), utc_ms(2023, 1, 1), 3);
        assert_eq!(ticks, vec![utc_ms(2022, 4, 1), utc_ms(2022, 7, 1), utc_ms(2022, 10, 1), utc_ms(2023, 1, 1)]);
    }

    #[test]
    fn weekly_ticks_fall_on_mondays() {
        let ticks = date_ticks(utc_ms(2024, 1, 1), utc_ms(2024, 2, 1), 6);
        assert!(!ticks.is_empty());
        for t in ticks {
            let dt = DateTime::<Utc>::from_timestamp_millis(t as i64).unwrap();
            assert_eq!(dt.weekday(), chrono::Weekday::Mon);
        }
    }
}
