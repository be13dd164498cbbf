use chrono::{DateTime, Local, Utc};

/// Timestamp as shown in the history panel, in the user's local time.
pub fn history_time_string(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_hours_minutes_seconds() {
        let ts = Utc.with_ymd_and_hms(2026, 8, 7, 14, 30, 5).unwrap();
        let formatted = history_time_string(&ts);
        // Local offset varies by machine; the shape does not.
        assert_eq!(formatted.len(), 8);
        assert_eq!(formatted.as_bytes()[2], b':');
        assert_eq!(formatted.as_bytes()[5], b':');
    }
}
