use crate::time::TimeOfDay;

/// Formats `time` as a 12-hour readout, e.g. `"07:05:09 PM"`.
///
/// Midnight reads `12:00:00 AM` and noon `12:00:00 PM`.
pub fn format_12h(time: TimeOfDay) -> String {
    let h = time.hour();
    let meridiem = if h < 12 { "AM" } else { "PM" };
    let h12 = match h % 12 {
        0 => 12,
        n => n,
    };
    format!("{h12:02}:{:02}:{:02} {meridiem}", time.minute(), time.second())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(h: u32, m: u32, s: u32) -> String {
        format_12h(TimeOfDay::new(h, m, s).unwrap())
    }

    #[test]
    fn midnight_and_noon_read_twelve() {
        assert_eq!(fmt(0, 5, 9), "12:05:09 AM");
        assert_eq!(fmt(12, 0, 0), "12:00:00 PM");
    }

    #[test]
    fn afternoon_hours_wrap() {
        assert_eq!(fmt(13, 1, 2), "01:01:02 PM");
        assert_eq!(fmt(23, 59, 59), "11:59:59 PM");
    }

    #[test]
    fn morning_hours_are_zero_padded() {
        assert_eq!(fmt(9, 30, 0), "09:30:00 AM");
        assert_eq!(fmt(11, 59, 59), "11:59:59 AM");
    }
}
