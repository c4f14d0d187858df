//! Filename synthesis and validation
//!
//! Suggested names are `{trial}_{subject}_{electrode}_{timestamp}`, with the
//! timestamp in `YYYY-MM-DD_HH-MM-SS` so names sort chronologically and carry
//! no characters that file systems reject.

use crate::recording::RecordingInfo;
use chrono::NaiveDateTime;

/// chrono format string for the timestamp suffix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Characters a file name may not contain.
pub const ILLEGAL_CHARACTERS: [char; 14] = [
    '/', '\n', '\r', '\t', '\0', '`', '?', '*', '\\', '<', '>', '|', '"', ':',
];

/// Format a timestamp for use in a file name.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Build the suggested file name (no extension) for a recording at `at`.
pub fn suggested_filename(info: &RecordingInfo, at: NaiveDateTime) -> String {
    format!(
        "{}_{}_{}_{}",
        info.trial,
        info.subject,
        info.electrode,
        format_timestamp(at)
    )
}

/// True when `name` is non-empty and free of illegal characters.
pub fn is_valid_filename(name: &str) -> bool {
    !name.is_empty() && !name.contains(ILLEGAL_CHARACTERS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_suggested_filename_example() {
        let info = RecordingInfo::new(3, "P1", "Fz");
        assert_eq!(
            suggested_filename(&info, at(10, 0, 0)),
            "3_P1_Fz_2024-01-01_10-00-00"
        );
    }

    #[test]
    fn test_timestamp_is_zero_padded() {
        assert_eq!(format_timestamp(at(9, 5, 7)), "2024-01-01_09-05-07");
    }

    #[test]
    fn test_valid_filenames() {
        assert!(is_valid_filename("3_P1_Fz_2024-01-01_10-00-00.png"));
        assert!(is_valid_filename("drawing with spaces.svg"));
        assert!(is_valid_filename("ünïcødé.jpg"));
    }

    #[test]
    fn test_invalid_filenames() {
        assert!(!is_valid_filename(""));
        for c in ILLEGAL_CHARACTERS {
            let name = format!("bad{}name.png", c);
            assert!(!is_valid_filename(&name), "accepted {:?}", name);
        }
    }
}
