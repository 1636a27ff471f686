use crate::models::CounterState;
use chrono::{DateTime, NaiveDate, Utc};

pub fn apply_click(state: &mut CounterState) {
    apply_click_at(state, Utc::now());
}

/// Records one click at `now`: bumps the global score, the UTC day bucket and
/// the update timestamp.
pub fn apply_click_at(state: &mut CounterState, now: DateTime<Utc>) {
    state.global_score = state.global_score.saturating_add(1);

    let day = state
        .daily_stats
        .entry(date_key(now.date_naive()))
        .or_insert(0);
    *day = day.saturating_add(1);

    state.last_updated = now.timestamp_millis();
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn two_clicks_same_day() {
        let mut state = CounterState::zero(0);
        let now = at(2026, 1, 5, 9);
        apply_click_at(&mut state, now);
        apply_click_at(&mut state, now + Duration::minutes(3));

        assert_eq!(state.global_score, 2);
        assert_eq!(state.daily_stats.len(), 1);
        assert_eq!(state.daily_stats["2026-01-05"], 2);
        assert_eq!(
            state.last_updated,
            (now + Duration::minutes(3)).timestamp_millis()
        );
    }

    #[test]
    fn day_bucket_follows_utc_boundary() {
        let mut state = CounterState::zero(0);
        apply_click_at(&mut state, at(2026, 1, 5, 23));
        apply_click_at(&mut state, at(2026, 1, 6, 0));
        apply_click_at(&mut state, at(2026, 1, 6, 1));

        assert_eq!(state.daily_stats["2026-01-05"], 1);
        assert_eq!(state.daily_stats["2026-01-06"], 2);
        assert_eq!(state.global_score, 3);
    }

    #[test]
    fn daily_totals_never_exceed_global_score() {
        let mut state = CounterState::zero(0);
        state.global_score = 10;
        let start = at(2026, 3, 1, 12);
        for offset in 0..25 {
            apply_click_at(&mut state, start + Duration::hours(offset * 5));
            let sum: u64 = state.daily_stats.values().sum();
            assert!(sum <= state.global_score);
        }
        let sum: u64 = state.daily_stats.values().sum();
        assert_eq!(sum, 25);
        assert_eq!(state.global_score, 35);
    }

    #[test]
    fn date_key_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
        assert_eq!(date_key(date), "2026-02-03");
    }
}
