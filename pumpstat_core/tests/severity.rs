// Boundary exactness for the three classifiers: closed upper bounds belong
// to the stricter tier.
use chrono::TimeDelta;
use pumpstat_core::{Severity, battery_severity, expiry_severity, reservoir_severity};
use rstest::rstest;

#[rstest]
fn reservoir_boundaries_belong_to_stricter_tier() {
    assert_eq!(reservoir_severity(Some(10.0)), Severity::Critical);
    assert_eq!(reservoir_severity(Some(10.01)), Severity::Warning);
    assert_eq!(reservoir_severity(Some(30.0)), Severity::Warning);
    assert_eq!(reservoir_severity(Some(30.01)), Severity::Normal);
}

#[rstest]
fn battery_boundaries_belong_to_stricter_tier() {
    assert_eq!(battery_severity(Some(10)), Severity::Critical);
    assert_eq!(battery_severity(Some(11)), Severity::Warning);
    assert_eq!(battery_severity(Some(20)), Severity::Warning);
    assert_eq!(battery_severity(Some(21)), Severity::Normal);
}

#[rstest]
fn expiry_boundaries_belong_to_stricter_tier() {
    assert_eq!(expiry_severity(Some(TimeDelta::hours(8))), Severity::Critical);
    assert_eq!(
        expiry_severity(Some(TimeDelta::hours(8) + TimeDelta::seconds(1))),
        Severity::Warning
    );
    assert_eq!(expiry_severity(Some(TimeDelta::hours(24))), Severity::Warning);
    assert_eq!(
        expiry_severity(Some(TimeDelta::hours(24) + TimeDelta::minutes(1))),
        Severity::Normal
    );
}

#[test]
fn absent_readings_are_neutral() {
    assert_eq!(reservoir_severity(None), Severity::Neutral);
    assert_eq!(battery_severity(None), Severity::Neutral);
    assert_eq!(expiry_severity(None), Severity::Neutral);
}

// Malformed upstream values are not sanitized; they ride the same tables.
#[test]
fn out_of_range_readings_pass_through_the_tables() {
    assert_eq!(reservoir_severity(Some(-3.0)), Severity::Critical);
    assert_eq!(battery_severity(Some(-1)), Severity::Critical);
    assert_eq!(battery_severity(Some(250)), Severity::Normal);
    assert_eq!(expiry_severity(Some(TimeDelta::minutes(-5))), Severity::Critical);
}
