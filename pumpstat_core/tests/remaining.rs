// Scenario coverage for the remaining-time formatter, including the
// strict-greater-than-one unit holes.
use chrono::TimeDelta;
use pumpstat_core::remaining_time_string;
use rstest::rstest;

#[rstest]
fn multi_day_durations_show_days_and_remainder_hours() {
    let delta = TimeDelta::days(2) + TimeDelta::hours(3) + TimeDelta::minutes(10);
    assert_eq!(remaining_time_string(delta), "2d 3h");
    assert_eq!(remaining_time_string(TimeDelta::days(2)), "2d 0h");
    assert_eq!(remaining_time_string(TimeDelta::hours(49)), "2d 1h");
}

#[rstest]
fn single_day_falls_to_remainder_hours_not_days() {
    // One day fails the days > 1 check; five remainder hours pass hours > 1.
    let delta = TimeDelta::days(1) + TimeDelta::hours(5);
    assert_eq!(remaining_time_string(delta), "5h");
}

#[rstest]
fn hour_durations_show_whole_hours_only() {
    assert_eq!(remaining_time_string(TimeDelta::hours(2)), "2h");
    assert_eq!(
        remaining_time_string(TimeDelta::hours(5) + TimeDelta::minutes(59)),
        "5h"
    );
}

#[rstest]
fn single_hour_falls_to_remainder_minutes() {
    // 1h 59m fails hours > 1 and renders the minutes remainder, not "119m".
    assert_eq!(
        remaining_time_string(TimeDelta::hours(1) + TimeDelta::minutes(59)),
        "59m"
    );
    // Same hole one level up: 1d 1h 30m collapses all the way to minutes.
    let delta = TimeDelta::days(1) + TimeDelta::hours(1) + TimeDelta::minutes(30);
    assert_eq!(remaining_time_string(delta), "30m");
}

#[rstest]
fn minute_durations_render_verbatim() {
    assert_eq!(remaining_time_string(TimeDelta::minutes(45)), "45m");
    assert_eq!(remaining_time_string(TimeDelta::zero()), "0m");
}

#[test]
fn elapsed_durations_keep_their_sign() {
    assert_eq!(remaining_time_string(TimeDelta::minutes(-5)), "-5m");
    // Sub-minute underrun truncates toward zero.
    assert_eq!(remaining_time_string(TimeDelta::seconds(-30)), "0m");
}
