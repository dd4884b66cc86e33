#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // We fuzz JSON decoding of stored targets and telemetry snapshots and
    // ensure it never panics and rejects invalids gracefully.
    match pumpstat_models::target_from_json(data) {
        Ok(target) => {
            // Ensure validate() does not panic
            let _ = target.validate();
        }
        Err(_e) => {
            // parse error is acceptable
        }
    }
    let _ = pumpstat_models::telemetry_from_json(data);
});
