use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("time input is empty")]
    Empty,

    #[error("invalid time {input:?}: expected HH:MM or whole minutes")]
    InvalidNumber { input: String },

    #[error("time {input:?} overflows the minute range")]
    Overflow { input: String },
}

/// Parses either `"HH:MM"` or a plain minute count into minutes since midnight.
///
/// Hours are not capped at 23, so `"25:00"` parses to 1500.
pub fn parse_time(input: &str) -> Result<u32, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }

    let invalid = || TimeParseError::InvalidNumber {
        input: input.to_string(),
    };

    match trimmed.split_once(':') {
        Some((hours, minutes)) => {
            let hours: u32 = hours.trim().parse().map_err(|_| invalid())?;
            let minutes: u32 = minutes.trim().parse().map_err(|_| invalid())?;

            hours
                .checked_mul(60)
                .and_then(|total| total.checked_add(minutes))
                .ok_or_else(|| TimeParseError::Overflow {
                    input: input.to_string(),
                })
        }
        None => trimmed.parse().map_err(|_| invalid()),
    }
}

pub fn format_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::{format_time, parse_time, TimeParseError};

    #[test]
    fn parses_clock_notation() {
        assert_eq!(parse_time("01:15"), Ok(75));
        assert_eq!(parse_time("08:30"), Ok(510));
        assert_eq!(parse_time("00:00"), Ok(0));
    }

    #[test]
    fn parses_plain_minutes() {
        assert_eq!(parse_time("75"), Ok(75));
        assert_eq!(parse_time(" 1439 "), Ok(1439));
    }

    #[test]
    fn hours_are_not_wrapped_at_midnight() {
        assert_eq!(parse_time("25:00"), Ok(1500));
        assert_eq!(format_time(1500), "25:00");
    }

    #[test]
    fn formats_with_zero_padding() {
        assert_eq!(format_time(75), "01:15");
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(1439), "23:59");
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_time(""), Err(TimeParseError::Empty));
        assert_eq!(parse_time("   "), Err(TimeParseError::Empty));
        assert!(matches!(
            parse_time("ab:cd"),
            Err(TimeParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_time("08:30:00"),
            Err(TimeParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_time("-5"),
            Err(TimeParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_time("noon"),
            Err(TimeParseError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn rejects_hours_that_overflow() {
        assert!(matches!(
            parse_time("4294967295:00"),
            Err(TimeParseError::Overflow { .. })
        ));
    }
}
