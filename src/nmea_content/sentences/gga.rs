#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Frame, Result,
    nmea_content::{
        Axis, LatLong, QualityIndicator, Sentence, format,
        sentence::{coordinate, coordinate_fields, field},
    },
};

/// Highest DGPS reference station identifier.
const MAX_STATION_ID: u16 = 1023;

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// Every field that may be null on the wire is an [`Option`]; `0.0` on the
/// wire is `Some(0.0)`, never [`None`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GGA {
    /// Originating frame
    pub frame: Frame,
    /// Fix time in UTC
    pub fix_time: Option<time::Time>,
    /// Latitude
    pub latitude: Option<LatLong>,
    /// Longitude
    pub longitude: Option<LatLong>,
    /// GPS Quality Indicator
    pub fix_quality: QualityIndicator,
    /// Number of satellites in use
    pub satellite_count: u8,
    /// Horizontal Dilution of Precision
    pub hdop: Option<f32>,
    /// Altitude above/below mean sea level (geoid) in meters
    pub altitude: Option<f32>,
    /// Geoidal separation in meters, the difference between the WGS-84 earth
    /// ellipsoid and mean sea level (geoid)
    pub geoidal_separation: Option<f32>,
    /// Age of Differential GPS data in seconds, null when DGPS is not used
    pub age_of_dgps: Option<f32>,
    /// Differential reference station ID, 0000-1023
    pub ref_station_id: Option<u16>,
}

impl GGA {
    /// Whether the receiver reports a position fix.
    pub fn has_fix(&self) -> bool {
        self.fix_quality != QualityIndicator::Invalid
    }
}

impl Sentence for GGA {
    const SENTENCE_TYPE: &'static str = "GGA";
    const FIELD_COUNT: usize = 14;
    const FIXED_FIELDS: &'static [(usize, &'static str)] = &[(9, "M"), (11, "M")];

    fn extract(frame: Frame) -> Result<Self> {
        let gga = GGA {
            fix_time: field(&frame, 0)?,
            latitude: coordinate(&frame, 1, Axis::Latitude)?,
            longitude: coordinate(&frame, 3, Axis::Longitude)?,
            fix_quality: field(&frame, 5)?,
            satellite_count: field(&frame, 6)?,
            hdop: field(&frame, 7)?,
            altitude: field(&frame, 8)?,
            geoidal_separation: field(&frame, 10)?,
            age_of_dgps: field(&frame, 12)?,
            ref_station_id: field(&frame, 13)?,
            frame,
        };

        if let Some(id) = gga.ref_station_id
            && id > MAX_STATION_ID
        {
            return Err(Error::range("station id", id.into(), MAX_STATION_ID.into()).at(13));
        }

        Ok(gga)
    }

    fn fields(&self) -> Vec<String> {
        let [latitude, north_south] = coordinate_fields(self.latitude);
        let [longitude, east_west] = coordinate_fields(self.longitude);

        vec![
            format::optional(self.fix_time.as_ref(), format::time),
            latitude,
            north_south,
            longitude,
            east_west,
            self.fix_quality.to_string(),
            format!("{:02}", self.satellite_count),
            format::optional(self.hdop, |hdop| format::decimal(hdop, 1)),
            format::optional(self.altitude, |altitude| format!("{altitude:06.1}")),
            String::new(),
            format::optional(self.geoidal_separation, |separation| {
                format::decimal(separation, 1)
            }),
            String::new(),
            format::optional(self.age_of_dgps, |age| format::decimal(age, 1)),
            format::optional(self.ref_station_id, |id| format!("{id:04}")),
        ]
    }

    fn frame(&self) -> &Frame {
        &self.frame
    }
}
