#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Frame, Result,
    nmea_content::{
        Axis, DataValid, LatLong, PositioningMode, Sentence, format,
        sentence::{coordinate, coordinate_fields, field},
    },
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GLL {
    /// Originating frame
    pub frame: Frame,
    /// Latitude
    pub latitude: Option<LatLong>,
    /// Longitude
    pub longitude: Option<LatLong>,
    /// Fix time in UTC
    pub fix_time: Option<time::Time>,
    /// Status Mode Indicator
    pub status: DataValid,
    /// FAA Mode Indicator
    pub mode: PositioningMode,
}

impl GLL {
    /// Whether the receiver flags the position as valid.
    pub fn is_valid(&self) -> bool {
        self.status == DataValid::Valid
    }
}

impl Sentence for GLL {
    const SENTENCE_TYPE: &'static str = "GLL";
    const FIELD_COUNT: usize = 7;

    fn extract(frame: Frame) -> Result<Self> {
        Ok(GLL {
            latitude: coordinate(&frame, 0, Axis::Latitude)?,
            longitude: coordinate(&frame, 2, Axis::Longitude)?,
            fix_time: field(&frame, 4)?,
            status: field(&frame, 5)?,
            mode: field(&frame, 6)?,
            frame,
        })
    }

    fn fields(&self) -> Vec<String> {
        let [latitude, north_south] = coordinate_fields(self.latitude);
        let [longitude, east_west] = coordinate_fields(self.longitude);

        vec![
            latitude,
            north_south,
            longitude,
            east_west,
            format::optional(self.fix_time.as_ref(), format::time),
            self.status.to_string(),
            self.mode.to_string(),
        ]
    }

    fn frame(&self) -> &Frame {
        &self.frame
    }
}
