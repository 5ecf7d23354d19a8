#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Frame, Result,
    nmea_content::{PositioningMode, Sentence, format, sentence::field},
};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8 9
///          |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct VTG {
    /// Originating frame
    pub frame: Frame,
    /// Course over ground (true) in degrees
    pub course_over_ground: Option<f32>,
    /// Course over ground (magnetic) in degrees
    pub course_over_ground_magnetic: Option<f32>,
    /// Speed over ground in knots
    pub speed_over_ground_knots: Option<f32>,
    /// Speed over ground in kilometers per hour
    pub speed_over_ground_kph: Option<f32>,
    /// FAA Mode Indicator
    pub mode: PositioningMode,
}

impl Sentence for VTG {
    const SENTENCE_TYPE: &'static str = "VTG";
    const FIELD_COUNT: usize = 9;
    const FIXED_FIELDS: &'static [(usize, &'static str)] = &[(1, "T"), (3, "M"), (5, "N"), (7, "K")];

    fn extract(frame: Frame) -> Result<Self> {
        Ok(VTG {
            course_over_ground: field(&frame, 0)?,
            course_over_ground_magnetic: field(&frame, 2)?,
            speed_over_ground_knots: field(&frame, 4)?,
            speed_over_ground_kph: field(&frame, 6)?,
            mode: field(&frame, 8)?,
            frame,
        })
    }

    fn fields(&self) -> Vec<String> {
        let one_decimal = |value: Option<f32>| format::optional(value, |v| format::decimal(v, 1));

        vec![
            one_decimal(self.course_over_ground),
            String::new(),
            one_decimal(self.course_over_ground_magnetic),
            String::new(),
            one_decimal(self.speed_over_ground_knots),
            String::new(),
            one_decimal(self.speed_over_ground_kph),
            String::new(),
            self.mode.to_string(),
        ]
    }

    fn frame(&self) -> &Frame {
        &self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_vtg_parsing() {
        let line = "$GPVTG,0.0,T,,M,0.0,N,0.1,K,A*0C";
        let vtg = VTG::parse(line).unwrap();

        assert_eq!(vtg.course_over_ground, Some(0.0));
        assert_eq!(vtg.course_over_ground_magnetic, None);
        assert_eq!(vtg.speed_over_ground_knots, Some(0.0));
        assert_eq!(vtg.speed_over_ground_kph, Some(0.1));
        assert_eq!(vtg.mode, PositioningMode::Autonomous);

        assert_eq!(vtg.serialize(), line);
    }

    #[test]
    fn test_vtg_without_fix() {
        let line = "$GPVTG,,T,,M,,N,,K,N*2C";
        let vtg = VTG::parse(line).unwrap();

        assert_eq!(vtg.course_over_ground, None);
        assert_eq!(vtg.course_over_ground_magnetic, None);
        assert_eq!(vtg.speed_over_ground_knots, None);
        assert_eq!(vtg.speed_over_ground_kph, None);
        assert_eq!(vtg.mode, PositioningMode::NotValid);

        assert_eq!(vtg.serialize(), line);
    }

    #[test]
    fn test_vtg_fixed_fields() {
        let valid = ["0.0", "T", "", "M", "0.0", "N", "0.1", "K", "A"];

        for index in [1, 3, 5, 7] {
            let mut fields = valid;
            fields[index] = "x";

            let err = VTG::decode(Frame::new("GPVTG", fields)).unwrap_err();
            assert!(
                matches!(err, Error::FixedFieldMismatch { index: i, .. } if i == index),
                "{err}"
            );
        }
    }
}
