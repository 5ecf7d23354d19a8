#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Frame, Result,
    nmea_content::{Sentence, format, sentence::field},
};

const METERS_PER_FOOT: f32 = 0.3048;
const METERS_PER_FATHOM: f32 = 1.8288;

/// DBT - Depth below transducer
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dbt_depth_below_transducer>
///
/// ```text
///         1   2 3   4 5   6
///         |   | |   | |   |
///  $--DBT,x.x,f,x.x,M,x.x,F*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct DBT {
    /// Originating frame
    pub frame: Frame,
    /// Water depth in feet
    pub depth_feet: Option<f32>,
    /// Water depth in meters
    pub depth_meters: Option<f32>,
    /// Water depth in fathoms
    pub depth_fathoms: Option<f32>,
}

impl DBT {
    /// Depth in meters from the most direct unit available.
    pub fn depth(&self) -> Option<f32> {
        self.depth_meters
            .or(self.depth_feet.map(|feet| feet * METERS_PER_FOOT))
            .or(self.depth_fathoms.map(|fathoms| fathoms * METERS_PER_FATHOM))
    }
}

impl Sentence for DBT {
    const SENTENCE_TYPE: &'static str = "DBT";
    const FIELD_COUNT: usize = 6;
    const FIXED_FIELDS: &'static [(usize, &'static str)] = &[(1, "f"), (3, "M"), (5, "F")];

    fn extract(frame: Frame) -> Result<Self> {
        Ok(DBT {
            depth_feet: field(&frame, 0)?,
            depth_meters: field(&frame, 2)?,
            depth_fathoms: field(&frame, 4)?,
            frame,
        })
    }

    fn fields(&self) -> Vec<String> {
        [self.depth_feet, self.depth_meters, self.depth_fathoms]
            .into_iter()
            .flat_map(|depth| {
                [
                    format::optional(depth, |depth| format::decimal(depth, 1)),
                    String::new(),
                ]
            })
            .collect()
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
    fn test_dbt_parsing() {
        let lines = [
            "$GPDBT,108.3,f,33.0,M,18.1,F*04",
            "$SDDBT,108.3,f,33.0,M,18.1,F*04",
        ];

        for line in lines {
            let dbt = DBT::parse(line).unwrap();
            assert_eq!(dbt.depth_feet, Some(108.3));
            assert_eq!(dbt.depth_meters, Some(33.0));
            assert_eq!(dbt.depth_fathoms, Some(18.1));
            assert_eq!(dbt.depth(), Some(33.0));
            assert_eq!(dbt.serialize(), line);
        }
    }

    #[test]
    fn test_dbt_depth_fallback() {
        let feet_only = DBT::decode(Frame::new("SDDBT", ["10.0", "f", "", "M", "", "F"])).unwrap();
        assert!((feet_only.depth().unwrap() - 3.048).abs() < 1e-5);

        let fathoms_only =
            DBT::decode(Frame::new("SDDBT", ["", "f", "", "M", "2.0", "F"])).unwrap();
        assert!((fathoms_only.depth().unwrap() - 3.6576).abs() < 1e-5);

        let empty = DBT::decode(Frame::new("SDDBT", ["", "f", "", "M", "", "F"])).unwrap();
        assert_eq!(empty.depth(), None);
    }

    #[test]
    fn test_dbt_unit_letters() {
        let err = DBT::decode(Frame::new("SDDBT", ["108.3", "F", "33.0", "M", "18.1", "F"]))
            .unwrap_err();
        assert!(matches!(err, Error::FixedFieldMismatch { index: 1, .. }), "{err}");
    }
}
