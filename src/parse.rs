use nom::{
    Parser,
    character::complete::{char, digit1},
    combinator::{all_consuming, opt},
    sequence::preceded,
};

use crate::{
    Error, Result,
    parsing::{decimal, fixed_digits},
};

type NomError<'a> = nom::error::Error<&'a str>;

/// Trait for parsing typed values from a single NMEA 0183 field.
///
/// The framing layer has already split the sentence, so implementations see
/// exactly one raw field and must consume all of it. Implementations are
/// provided for unsigned integers, floats, `String`, `Option<T>` (empty field
/// means [`None`]), [`time::Time`] and [`time::Date`]; the enumerations in
/// [`nmea_content`](crate::nmea_content) implement it too.
///
/// Errors are reported without a field index; callers that know the position
/// attach it with [`Error::at`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::NmeaField;
///
/// assert_eq!(u8::parse_field("42"), Ok(42));
/// assert_eq!(Option::<u8>::parse_field(""), Ok(None));
/// assert_eq!(Option::<f32>::parse_field("0.0"), Ok(Some(0.0)));
/// assert!(u8::parse_field("4 2").is_err());
/// ```
///
/// # Implementing for Custom Types
///
/// ```rust
/// use nmea0183_codec::{Error, NmeaField, Result};
///
/// struct Prn(u8);
///
/// impl NmeaField for Prn {
///     const KIND: &'static str = "satellite PRN";
///
///     fn parse_field(raw: &str) -> Result<Self> {
///         let prn = u8::parse_field(raw)?;
///         if (1..=32).contains(&prn) {
///             Ok(Prn(prn))
///         } else {
///             Err(Error::Range {
///                 kind: Self::KIND,
///                 got: prn.into(),
///                 max: 32.0,
///                 index: None,
///             })
///         }
///     }
/// }
///
/// assert!(Prn::parse_field("14").is_ok());
/// assert!(Prn::parse_field("99").is_err());
/// ```
pub trait NmeaField: Sized {
    /// Name of the value used in error messages.
    const KIND: &'static str;

    /// Parses one complete raw field.
    fn parse_field(raw: &str) -> Result<Self>;
}

macro_rules! impl_uints_type {
    ($($t:ty),*) => ($(
        impl NmeaField for $t {
            const KIND: &'static str = "integer";

            fn parse_field(raw: &str) -> Result<Self> {
                let (_, digits) = all_consuming(digit1::<_, NomError>)
                    .parse(raw)
                    .map_err(|_| Error::format(Self::KIND, raw))?;

                digits.parse().map_err(|_| {
                    Error::range(
                        Self::KIND,
                        digits.parse().unwrap_or(f64::INFINITY),
                        <$t>::MAX as f64,
                    )
                })
            }
        }
    )*)
}

impl_uints_type!(u8, u16, u32);

macro_rules! impl_float_type {
    ($($t:ty),*) => ($(
        impl NmeaField for $t {
            const KIND: &'static str = "decimal";

            fn parse_field(raw: &str) -> Result<Self> {
                let (_, number) = all_consuming(decimal::<NomError>)
                    .parse(raw)
                    .map_err(|_| Error::format(Self::KIND, raw))?;

                let value: $t = number.parse().map_err(|_| Error::format(Self::KIND, raw))?;
                if !value.is_finite() {
                    return Err(Error::range(Self::KIND, f64::from(value), <$t>::MAX.into()));
                }

                Ok(value)
            }
        }
    )*)
}

impl_float_type!(f32, f64);

impl NmeaField for String {
    const KIND: &'static str = "text";

    fn parse_field(raw: &str) -> Result<Self> {
        Ok(raw.to_owned())
    }
}

impl<T: NmeaField> NmeaField for Option<T> {
    const KIND: &'static str = T::KIND;

    fn parse_field(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            Ok(None)
        } else {
            T::parse_field(raw).map(Some)
        }
    }
}

/// `hhmmss` with an optional fraction of any length, e.g. `041139.000`.
impl NmeaField for time::Time {
    const KIND: &'static str = "time";

    fn parse_field(raw: &str) -> Result<Self> {
        let (_, (hour, minute, second, fraction)) = all_consuming((
            fixed_digits::<NomError, _>(2u8),
            fixed_digits(2u8),
            fixed_digits(2u8),
            opt(preceded(char('.'), digit1)),
        ))
        .parse(raw)
        .map_err(|_| Error::format(Self::KIND, raw))?;

        let nanosecond = fraction.map(fraction_nanos).unwrap_or_default();

        time::Time::from_hms_nano(hour as u8, minute as u8, second as u8, nanosecond)
            .map_err(|_| Error::format(Self::KIND, raw))
    }
}

/// `ddmmyy`; two-digit years from 69 on are read as 19xx, earlier ones as 20xx.
impl NmeaField for time::Date {
    const KIND: &'static str = "date";

    fn parse_field(raw: &str) -> Result<Self> {
        let (_, (day, month, year)) = all_consuming((
            fixed_digits::<NomError, _>(2u8),
            fixed_digits(2u8),
            fixed_digits(2u8),
        ))
        .parse(raw)
        .map_err(|_| Error::format(Self::KIND, raw))?;

        let year = match year {
            69..=99 => 1900 + year as i32,
            _ => 2000 + year as i32,
        };

        calendar_date(year, month, day).ok_or_else(|| Error::format(Self::KIND, raw))
    }
}

/// Builds a date from calendar parts, rejecting impossible combinations.
pub(crate) fn calendar_date(year: i32, month: u32, day: u32) -> Option<time::Date> {
    let month = time::Month::try_from(u8::try_from(month).ok()?).ok()?;
    time::Date::from_calendar_date(year, month, u8::try_from(day).ok()?).ok()
}

/// Reads up to nine fractional digits as nanoseconds, padding on the right.
fn fraction_nanos(digits: &str) -> u32 {
    digits
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(9)
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}
