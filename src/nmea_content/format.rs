//! Field renderers shared by the sentence serializers.

/// `hhmmss.sss`
pub fn time(time: &time::Time) -> String {
    format!(
        "{:02}{:02}{:02}.{:03}",
        time.hour(),
        time.minute(),
        time.second(),
        time.millisecond()
    )
}

/// `ddmmyy`
pub fn date(date: &time::Date) -> String {
    format!(
        "{:02}{:02}{:02}",
        date.day(),
        u8::from(date.month()),
        date.year().rem_euclid(100)
    )
}

/// A decimal with a fixed number of fractional digits.
pub fn decimal(value: f32, places: usize) -> String {
    format!("{value:.places$}")
}

/// Renders a present value, or an empty field for [`None`].
pub fn optional<T>(value: Option<T>, render: impl FnOnce(T) -> String) -> String {
    value.map(render).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use time::macros::{date, time};

    #[test]
    fn test_time() {
        assert_eq!(super::time(&time!(4:11:39)), "041139.000");
        assert_eq!(super::time(&time!(16:00:12.710)), "160012.710");
        assert_eq!(super::time(&time!(23:59:59.9999)), "235959.999");
    }

    #[test]
    fn test_date() {
        assert_eq!(super::date(&date!(2013 - 04 - 22)), "220413");
        assert_eq!(super::date(&date!(1994 - 11 - 19)), "191194");
        assert_eq!(super::date(&date!(2000 - 01 - 01)), "010100");
    }

    #[test]
    fn test_decimal() {
        assert_eq!(super::decimal(0.6, 1), "0.6");
        assert_eq!(super::decimal(54.7, 2), "54.70");
        assert_eq!(super::decimal(0.0, 2), "0.00");
        assert_eq!(super::optional(None::<f32>, |v| super::decimal(v, 1)), "");
        assert_eq!(super::optional(Some(2.5f32), |v| super::decimal(v, 1)), "2.5");
    }
}
