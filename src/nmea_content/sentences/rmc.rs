#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Frame, NmeaField, Result,
    nmea_content::{
        Axis, CardinalPoint, DataValid, LatLong, PositioningMode, Sentence, format,
        sentence::{coordinate, coordinate_fields, field},
    },
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 1112
///         |         | |       | |        |  |   |   |    |  | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RMC {
    /// Originating frame
    pub frame: Frame,
    /// Fix time in UTC
    pub fix_time: Option<time::Time>,
    /// Status Mode Indicator
    pub status: DataValid,
    /// Latitude
    pub latitude: Option<LatLong>,
    /// Longitude
    pub longitude: Option<LatLong>,
    /// Speed over ground in knots
    pub speed_over_ground: Option<f32>,
    /// Course over ground in degrees
    pub course_over_ground: Option<f32>,
    /// Fix date in UTC
    pub fix_date: Option<time::Date>,
    /// Magnetic variation in degrees, negative when West
    pub magnetic_variation: Option<f32>,
    /// FAA Mode Indicator
    pub mode: PositioningMode,
}

impl RMC {
    /// Whether the receiver flags the fix as valid.
    pub fn is_valid(&self) -> bool {
        self.status == DataValid::Valid
    }

    /// Fix date and time, when both are present.
    pub fn datetime(&self) -> Option<time::PrimitiveDateTime> {
        Some(time::PrimitiveDateTime::new(self.fix_date?, self.fix_time?))
    }
}

impl Sentence for RMC {
    const SENTENCE_TYPE: &'static str = "RMC";
    const FIELD_COUNT: usize = 12;

    fn extract(frame: Frame) -> Result<Self> {
        Ok(RMC {
            fix_time: field(&frame, 0)?,
            status: field(&frame, 1)?,
            latitude: coordinate(&frame, 2, Axis::Latitude)?,
            longitude: coordinate(&frame, 4, Axis::Longitude)?,
            speed_over_ground: field(&frame, 6)?,
            course_over_ground: field(&frame, 7)?,
            fix_date: field(&frame, 8)?,
            magnetic_variation: magnetic_variation(&frame, 9)?,
            mode: field(&frame, 11)?,
            frame,
        })
    }

    fn fields(&self) -> Vec<String> {
        let [latitude, north_south] = coordinate_fields(self.latitude);
        let [longitude, east_west] = coordinate_fields(self.longitude);

        let (variation, direction) = match self.magnetic_variation {
            Some(variation) if variation < 0.0 => (format::decimal(-variation, 1), "W"),
            Some(variation) => (format::decimal(variation, 1), "E"),
            None => (String::new(), ""),
        };

        vec![
            format::optional(self.fix_time.as_ref(), format::time),
            self.status.to_string(),
            latitude,
            north_south,
            longitude,
            east_west,
            format::optional(self.speed_over_ground, |speed| format::decimal(speed, 2)),
            format::optional(self.course_over_ground, |course| format::decimal(course, 2)),
            format::optional(self.fix_date.as_ref(), format::date),
            variation,
            direction.to_owned(),
            self.mode.to_string(),
        ]
    }

    fn frame(&self) -> &Frame {
        &self.frame
    }
}

/// Magnetic variation in the field pair `index`, `index + 1`, signed by its
/// E/W letter.
fn magnetic_variation(frame: &Frame, index: usize) -> Result<Option<f32>> {
    let value: Option<f32> = field(frame, index)?;
    let direction: Option<CardinalPoint> = field(frame, index + 1)?;

    match (value, direction) {
        (None, None | Some(CardinalPoint::Absent)) => Ok(None),
        (Some(value), Some(CardinalPoint::East)) => Ok(Some(value)),
        (Some(value), Some(CardinalPoint::West)) => Ok(Some(-value)),
        (Some(_), None | Some(CardinalPoint::Absent)) => {
            Err(Error::format(CardinalPoint::KIND, "").at(index + 1))
        }
        (None, Some(_)) => Err(Error::format(f32::KIND, "").at(index)),
        (Some(_), Some(direction)) => {
            Err(Error::unrecognized(CardinalPoint::KIND, direction.as_str()).at(index + 1))
        }
    }
}
