//! Property-test case budget shared by the arbor suites.
//!
//! `ARBOR_PBT_CASES` scales every proptest suite at once; CI raises it for
//! nightly runs and developers lower it for quick local loops.

use std::env;

/// Environment variable overriding the number of cases per property.
pub const ARBOR_PBT_CASES_ENV_KEY: &str = "ARBOR_PBT_CASES";

/// Returns the number of cases each property should run.
///
/// Falls back to `default_cases` when the variable is unset, and logs a
/// warning before falling back when it is not a positive integer.
///
/// # Examples
///
/// ```
/// use arbor_test_support::property::case_count;
///
/// assert!(case_count(64) > 0);
/// ```
#[must_use]
pub fn case_count(default_cases: u32) -> u32 {
    let Ok(raw) = env::var(ARBOR_PBT_CASES_ENV_KEY) else {
        return default_cases;
    };
    match raw.trim().parse::<u32>() {
        Ok(cases) if cases > 0 => cases,
        _ => {
            tracing::warn!(
                env = ARBOR_PBT_CASES_ENV_KEY,
                raw = %raw,
                default_cases,
                "ignoring invalid property-test case override",
            );
            default_cases
        }
    }
}
