use std::fmt;

use chrono::Timelike;

use crate::error::TimeError;

/// Wall-clock snapshot with second resolution.
///
/// Values are always in range: hour `0..=23`, minute `0..=59`, second `0..=59`.
/// A fresh snapshot replaces the previous one on every refresh; it is never
/// mutated in place.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Midnight, `00:00:00`.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0, second: 0 };

    /// Creates a snapshot, rejecting out-of-range fields.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour", hour, 23));
        }
        if minute > 59 {
            return Err(TimeError::new("minute", minute, 59));
        }
        if second > 59 {
            return Err(TimeError::new("second", second, 59));
        }
        Ok(Self { hour: hour as u8, minute: minute as u8, second: second as u8 })
    }

    /// Builds a snapshot from any chrono time value.
    ///
    /// chrono reports a leap second as `second == 59` with nanoseconds past
    /// one billion; the extra second is dropped so the snapshot stays in range.
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        Self {
            hour: t.hour().min(23) as u8,
            minute: t.minute().min(59) as u8,
            second: t.second().min(59) as u8,
        }
    }

    #[inline]
    pub const fn hour(self) -> u32 {
        self.hour as u32
    }

    #[inline]
    pub const fn minute(self) -> u32 {
        self.minute as u32
    }

    #[inline]
    pub const fn second(self) -> u32 {
        self.second as u32
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

// ── sources ───────────────────────────────────────────────────────────────

/// On-demand observation of the current wall-clock time.
///
/// Implementations must not fail: a source that cannot reach a clock should
/// return a fixed value rather than panic.
pub trait TimeSource {
    fn now(&self) -> TimeOfDay;
}

/// Local system time through `chrono::Local`.
#[derive(Debug, Copy, Clone, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::from_timelike(&chrono::Local::now())
    }
}

/// Source that always reports the same time. Useful for previews.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FixedTime(pub TimeOfDay);

impl TimeSource for FixedTime {
    fn now(&self) -> TimeOfDay {
        self.0
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> TimeOfDay {
        (**self).now()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Box<T> {
    fn now(&self) -> TimeOfDay {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_accepts_bounds() {
        let t = TimeOfDay::new(23, 59, 59).unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (23, 59, 59));
        assert_eq!(TimeOfDay::new(0, 0, 0).unwrap(), TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn new_rejects_out_of_range_fields() {
        assert_eq!(TimeOfDay::new(24, 0, 0).unwrap_err().field, "hour");
        assert_eq!(TimeOfDay::new(0, 60, 0).unwrap_err().field, "minute");
        assert_eq!(TimeOfDay::new(0, 0, 60).unwrap_err().field, "second");
    }

    #[test]
    fn error_message_names_field_and_range() {
        let err = TimeOfDay::new(0, 75, 0).unwrap_err();
        assert_eq!(err.to_string(), "invalid minute: 75 (expected 0..=59)");
    }

    // ── chrono ────────────────────────────────────────────────────────────

    #[test]
    fn from_timelike_copies_fields() {
        let nt = NaiveTime::from_hms_opt(14, 7, 33).unwrap();
        let t = TimeOfDay::from_timelike(&nt);
        assert_eq!((t.hour(), t.minute(), t.second()), (14, 7, 33));
    }

    #[test]
    fn from_timelike_folds_leap_second() {
        let nt = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).unwrap();
        let t = TimeOfDay::from_timelike(&nt);
        assert_eq!(t.second(), 59);
    }

    #[test]
    fn local_clock_is_in_range() {
        let t = LocalClock.now();
        assert!(t.hour() <= 23 && t.minute() <= 59 && t.second() <= 59);
    }

    // ── display / sources ─────────────────────────────────────────────────

    #[test]
    fn display_is_24_hour_padded() {
        assert_eq!(TimeOfDay::new(7, 3, 9).unwrap().to_string(), "07:03:09");
    }

    fn sample<S: TimeSource>(source: S) -> TimeOfDay {
        source.now()
    }

    #[test]
    fn fixed_time_forwards_through_references_and_boxes() {
        let t = TimeOfDay::new(3, 0, 0).unwrap();
        let fixed = FixedTime(t);
        assert_eq!(sample(&fixed), t);
        let boxed: Box<dyn TimeSource> = Box::new(fixed);
        assert_eq!(sample(boxed), t);
    }
}
