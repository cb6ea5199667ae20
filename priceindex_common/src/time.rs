//! Display time zone conversion.
//!
//! All market times are rendered in China Standard Time regardless of the
//! host's local zone, as `YYYY/MM/DD HH:MM:SS` on a 24-hour clock.
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Zone every timestamp is displayed in (UTC+8, no DST).
pub const DISPLAY_TZ: Tz = chrono_tz::Asia::Shanghai;

const DISPLAY_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Render `instant` in the display time zone.
pub fn format_display_time(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&DISPLAY_TZ).format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn renders_shanghai_offset() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 10, 14, 30, 0).unwrap();
        assert_eq!(format_display_time(instant), "2024/01/10 22:30:00");
    }

    #[test]
    fn rolls_over_midnight() {
        let instant = Utc.with_ymd_and_hms(2023, 12, 31, 20, 5, 9).unwrap();
        assert_eq!(format_display_time(instant), "2024/01/01 04:05:09");
    }

    #[test]
    fn formatting_is_stable() {
        let instant = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        assert_eq!(format_display_time(instant), format_display_time(instant));
        assert_eq!(format_display_time(instant), "2024/07/01 08:00:00");
    }
}
