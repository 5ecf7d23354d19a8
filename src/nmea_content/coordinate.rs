use nom::{Parser, character::complete::space0, combinator::all_consuming, sequence::terminated};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result, nmea_content::CardinalPoint, parsing::unsigned_decimal};

/// Which of the two geographic axes a coordinate lies on.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// North/South, bounded by ±90°
    Latitude,
    /// East/West, bounded by ±180°
    Longitude,
}

impl Axis {
    /// Largest magnitude allowed on this axis, in degrees.
    pub const fn max(self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }

    /// Number of degree digits in the wire `ddmm.mm` / `dddmm.mm` form.
    pub const fn degree_width(self) -> usize {
        match self {
            Axis::Latitude => 2,
            Axis::Longitude => 3,
        }
    }

    /// The cardinal points of the positive and negative hemispheres.
    pub const fn cardinal_points(self) -> (CardinalPoint, CardinalPoint) {
        match self {
            Axis::Latitude => (CardinalPoint::North, CardinalPoint::South),
            Axis::Longitude => (CardinalPoint::East, CardinalPoint::West),
        }
    }

    const fn kind(self) -> &'static str {
        match self {
            Axis::Latitude => "latitude",
            Axis::Longitude => "longitude",
        }
    }
}

/// A coordinate in signed decimal degrees.
///
/// Negative values are South or West. The magnitude never exceeds the bound
/// of the [`Axis`]; construction fails with [`Error::Range`] instead of
/// clamping.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::nmea_content::{Axis, CardinalPoint, LatLong};
///
/// let latitude = LatLong::parse_dm("3110.2908N", Axis::Latitude).unwrap();
/// assert!((latitude.value() - 31.171513).abs() < 1e-6);
/// assert_eq!(latitude.cardinal_point(), CardinalPoint::North);
/// assert_eq!(latitude.to_dm(), "3110.2908");
///
/// let longitude = LatLong::parse_dm("00630.3372 W", Axis::Longitude).unwrap();
/// assert!(longitude.value() < 0.0);
/// assert_eq!(longitude.to_dm(), "00630.3372");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLong {
    value: f64,
    axis: Axis,
}

impl LatLong {
    /// Creates a coordinate from signed decimal degrees.
    pub fn new(value: f64, axis: Axis) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::format(axis.kind(), &value.to_string()));
        }
        if value.abs() > axis.max() {
            return Err(Error::range(axis.kind(), value, axis.max()));
        }

        Ok(LatLong { value, axis })
    }

    /// Shorthand for [`LatLong::new`] on the latitude axis.
    pub fn latitude(value: f64) -> Result<Self> {
        Self::new(value, Axis::Latitude)
    }

    /// Shorthand for [`LatLong::new`] on the longitude axis.
    pub fn longitude(value: f64) -> Result<Self> {
        Self::new(value, Axis::Longitude)
    }

    /// Parses the wire degree-minute form followed by a cardinal letter,
    /// e.g. `3150.7238N` or `3150.7238 N`.
    ///
    /// The letter must belong to `axis`: `N`/`S` for latitude, `E`/`W` for
    /// longitude.
    pub fn parse_dm(raw: &str, axis: Axis) -> Result<Self> {
        let split = raw
            .char_indices()
            .next_back()
            .map(|(at, _)| raw.split_at(at))
            .ok_or_else(|| Error::format(axis.kind(), raw))?;

        let (number, cardinal) = split;
        let (_, number) = all_consuming(terminated(
            unsigned_decimal::<nom::error::Error<&str>>,
            space0,
        ))
        .parse(number)
        .map_err(|_| Error::format(axis.kind(), raw))?;

        Self::from_dm_fields(number, cardinal, axis)
    }

    /// Parses the two wire fields of a coordinate: the `ddmm.mmmm` number and
    /// its cardinal letter.
    pub fn from_dm_fields(number: &str, cardinal: &str, axis: Axis) -> Result<Self> {
        let (positive, negative) = axis.cardinal_points();
        let cardinal = CardinalPoint::parse(cardinal)?;
        if cardinal != positive && cardinal != negative {
            return Err(Error::unrecognized("cardinal point", cardinal.as_str()));
        }

        let (_, number) = all_consuming(unsigned_decimal::<nom::error::Error<&str>>)
            .parse(number)
            .map_err(|_| Error::format(axis.kind(), number))?;
        let dm: f64 = number
            .parse()
            .ok()
            .filter(|dm: &f64| dm.is_finite())
            .ok_or_else(|| Error::format(axis.kind(), number))?;

        let degrees = (dm / 100.0).floor();
        let minutes = dm - degrees * 100.0;
        let value = degrees + minutes / 60.0;

        if value > axis.max() {
            return Err(Error::range(axis.kind(), value, axis.max()));
        }

        Ok(LatLong {
            value: if cardinal == negative { -value } else { value },
            axis,
        })
    }

    /// Signed decimal degrees.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The axis this coordinate lies on.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Hemisphere of the coordinate; [`CardinalPoint::Absent`] for exactly 0.
    pub fn cardinal_point(&self) -> CardinalPoint {
        let (positive, negative) = self.axis.cardinal_points();
        if self.value == 0.0 {
            CardinalPoint::Absent
        } else if self.value < 0.0 {
            negative
        } else {
            positive
        }
    }

    /// Whole degrees (carrying the sign) and the non-negative minutes.
    pub fn dm(&self) -> (i32, f64) {
        let degrees = if self.value >= 0.0 {
            self.value.floor()
        } else {
            self.value.ceil()
        };
        let minutes = (self.value.abs() - degrees.abs()) * 60.0;

        (degrees as i32, minutes)
    }

    /// Whole degrees, whole minutes and the remaining seconds.
    ///
    /// Minutes are truncated, not rounded; fine for display, not for a
    /// round trip through the wire form.
    pub fn dms(&self) -> (i32, u32, f64) {
        let (degrees, minutes) = self.dm();
        let whole_minutes = minutes.floor();
        let seconds = (minutes - whole_minutes) * 60.0;

        (degrees, whole_minutes as u32, seconds)
    }

    /// Human readable `dd° mm' ss.ssssss"`.
    pub fn to_dms_string(&self) -> String {
        let (degrees, minutes, seconds) = self.dms();
        format!("{degrees}° {minutes}' {seconds:.6}\"")
    }

    /// The wire `ddmm.mmmm` (or `dddmm.mmmm`) form, without the cardinal letter.
    ///
    /// Minutes keep at most six fractional digits and trailing zeros are
    /// dropped. A value of exactly 0 is an omitted coordinate and renders empty.
    pub fn to_dm(&self) -> String {
        if self.value == 0.0 {
            return String::new();
        }

        let magnitude = self.value.abs();
        let mut degrees = magnitude.floor();
        let mut minutes = ((magnitude - degrees) * 60.0 * 1e6).round() / 1e6;
        if minutes >= 60.0 {
            degrees += 1.0;
            minutes -= 60.0;
        }

        let dm = format!(
            "{:0width$}{minutes:09.6}",
            degrees as u32,
            width = self.axis.degree_width()
        );
        let (whole, fraction) = dm.split_once('.').unwrap_or((dm.as_str(), ""));
        match fraction.trim_end_matches('0') {
            "" => whole.to_owned(),
            fraction => format!("{whole}.{fraction}"),
        }
    }
}
