use regex::Regex;
use std::sync::LazyLock;

/// Placeholder emitted when a measurement holds no parseable time.
pub const UNKNOWN_VALUE: &str = "???";

static TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+\.[0-9]+) s").expect("time pattern is valid"));

/// Extract the numeric part of a seconds measurement such as `7.010 s`.
///
/// Anything without a decimal seconds value (timeouts, empty cells, bare
/// integers) yields [`UNKNOWN_VALUE`], which is carried through to the
/// rendered output instead of aborting the run.
pub fn time_value(s: &str) -> String {
    match TIME.captures(s) {
        Some(caps) => caps[1].to_string(),
        None => UNKNOWN_VALUE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_value_plain() {
        assert_eq!(time_value("7.010 s"), "7.010");
        assert_eq!(time_value("28.395 s"), "28.395");
    }

    #[test]
    fn test_time_value_embedded() {
        assert_eq!(time_value("mean of 12.5 s over 10 runs"), "12.5");
    }

    #[test]
    fn test_time_value_integer_is_unknown() {
        // Counts like "8" have no decimal point and are not times.
        assert_eq!(time_value("8"), UNKNOWN_VALUE);
        assert_eq!(time_value("8 s"), UNKNOWN_VALUE);
    }

    #[test]
    fn test_time_value_no_unit_is_unknown() {
        assert_eq!(time_value(r"75.31 \%"), UNKNOWN_VALUE);
        assert_eq!(time_value("7.010"), UNKNOWN_VALUE);
    }

    #[test]
    fn test_time_value_empty_is_unknown() {
        assert_eq!(time_value(""), UNKNOWN_VALUE);
    }

    #[test]
    fn test_time_value_unknown_is_fixed_point() {
        assert_eq!(time_value(UNKNOWN_VALUE), UNKNOWN_VALUE);
    }
}
