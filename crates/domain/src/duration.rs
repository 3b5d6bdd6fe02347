use regex::Regex;
use std::sync::OnceLock;

static DURATION_PATTERN: OnceLock<Regex> = OnceLock::new();

fn duration_pattern() -> &'static Regex {
    DURATION_PATTERN.get_or_init(|| {
        Regex::new(r"(\d+)\s*(days?|d|hours?|hrs?|h|minutes?|mins?|m|seconds?|secs?|s)")
            .expect("Duration pattern to be valid")
    })
}

/// Parses a free-text duration expression like "2 min 30 sec" into a total
/// number of seconds. Every non-overlapping `<integer> <unit>` occurrence
/// contributes to the sum; text between occurrences is ignored, so
/// "abc 5 xyz min" still parses to 300. Returns `None` when nothing matches
/// or the total is zero, in which case the caller must reject the request
/// instead of scheduling a zero-delay reminder.
pub fn parse_duration(text: &str) -> Option<u64> {
    let mut total: u64 = 0;
    for caps in duration_pattern().captures_iter(text) {
        let amount: u64 = match caps[1].parse() {
            Ok(amount) => amount,
            Err(_) => continue,
        };
        let seconds_per_unit = match &caps[2] {
            unit if unit.starts_with('d') => 86_400,
            unit if unit.starts_with('h') => 3_600,
            unit if unit.starts_with('m') => 60,
            _ => 1,
        };
        total = total.saturating_add(amount.saturating_mul(seconds_per_unit));
    }

    if total == 0 {
        None
    } else {
        Some(total)
    }
}
