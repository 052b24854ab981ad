use chrono::{DateTime, Utc};
use plugtrace_types::TraceRecord;
use serde::{Deserialize, Serialize};

/// Start offset given to every node when the batch spans no time
pub const DEGENERATE_START_OFFSET: f64 = 0.0;

/// Width given to every node when the batch spans no time
pub const DEGENERATE_WIDTH: f64 = 100.0;

/// Time span covered by a batch: earliest start to latest end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimelineWindow {
    /// `None` for an empty batch
    pub fn of(records: &[TraceRecord]) -> Option<Self> {
        let start = records.iter().map(|r| r.created_on).min()?;
        let end = records.iter().map(TraceRecord::ended_on).max()?;
        Some(Self { start, end })
    }

    pub fn total_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }

    /// True when the window has no positive length to divide by
    pub fn is_degenerate(&self) -> bool {
        self.total_ms() <= 0
    }

    /// Position of `record` on the 0–100 axis of this window
    pub fn place(&self, record: &TraceRecord) -> Placement {
        let total = self.total_ms();
        if total <= 0 {
            return Placement::DEGENERATE;
        }

        let total = total as f64;
        let offset_ms = (record.created_on - self.start).num_milliseconds() as f64;
        let start = (offset_ms / total * 100.0).clamp(0.0, 100.0);
        let width = (record.duration.as_millis() as f64 / total * 100.0).min(100.0 - start);

        Placement {
            start_offset_percent: start,
            width_percent: width.max(0.0),
        }
    }
}

/// Horizontal position of one bar, in percent of the window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub start_offset_percent: f64,
    pub width_percent: f64,
}

impl Placement {
    pub const DEGENERATE: Placement = Placement {
        start_offset_percent: DEGENERATE_START_OFFSET,
        width_percent: DEGENERATE_WIDTH,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugtrace_testing::record;

    #[test]
    fn test_window_spans_earliest_start_to_latest_end() {
        let records = vec![
            record("late-short", 0, 50, 10),
            record("early-long", 0, 0, 200),
        ];

        let window = TimelineWindow::of(&records).unwrap();
        assert_eq!(window.total_ms(), 200);
        assert!(!window.is_degenerate());
        assert_eq!(TimelineWindow::of(&[]), None);
    }

    #[test]
    fn test_place_proportionally() {
        let records = vec![record("a", 0, 0, 100), record("b", 1, 50, 100)];
        let window = TimelineWindow::of(&records).unwrap();

        let a = window.place(&records[0]);
        let b = window.place(&records[1]);

        assert_eq!(a.start_offset_percent, 0.0);
        assert!((a.width_percent - 100.0 / 150.0 * 100.0).abs() < 1e-9);
        assert!((b.start_offset_percent - 50.0 / 150.0 * 100.0).abs() < 1e-9);
        assert!(b.start_offset_percent + b.width_percent <= 100.0 + 1e-9);
    }

    #[test]
    fn test_zero_span_uses_fallback() {
        let records = vec![record("a", 0, 0, 0), record("b", 1, 0, 0)];
        let window = TimelineWindow::of(&records).unwrap();

        assert!(window.is_degenerate());
        assert_eq!(window.place(&records[0]), Placement::DEGENERATE);
        assert_eq!(window.place(&records[1]), Placement::DEGENERATE);
    }
}
