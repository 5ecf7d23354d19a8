#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Frame, Result,
    nmea_content::{FixStatus, Mode, Sentence, format, sentence::field},
};

/// Number of satellite channels reported by GSA.
pub const CHANNELS: usize = 12;

/// Wire index of the first satellite channel.
const FIRST_CHANNEL_FIELD: usize = 2;

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                        14 15  16  17
///         | | |                         |  |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x*hh<CR><LF>
/// ```
///
/// Channel `n` (1-based on the wire) lives in `satellites[n - 1]`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSA {
    /// Originating frame
    pub frame: Frame,
    /// Selection mode
    pub selection_mode: Mode,
    /// Fix mode
    pub fix_status: FixStatus,
    /// PRN of the satellite used on each channel
    pub satellites: [Option<u8>; CHANNELS],
    /// Position Dilution of Precision
    pub pdop: Option<f32>,
    /// Horizontal Dilution of Precision
    pub hdop: Option<f32>,
    /// Vertical Dilution of Precision
    pub vdop: Option<f32>,
}

impl GSA {
    /// The satellite used on the 1-based `channel`, if any.
    pub fn satellite_on_channel(&self, channel: usize) -> Option<u8> {
        channel
            .checked_sub(1)
            .and_then(|slot| self.satellites.get(slot))
            .copied()
            .flatten()
    }

    /// PRNs of all satellites used in the fix, in channel order.
    pub fn used_satellites(&self) -> heapless::Vec<u8, CHANNELS> {
        self.satellites.iter().flatten().copied().collect()
    }
}

impl Sentence for GSA {
    const SENTENCE_TYPE: &'static str = "GSA";
    const FIELD_COUNT: usize = 17;

    fn extract(frame: Frame) -> Result<Self> {
        let mut satellites = [None; CHANNELS];
        for (slot, satellite) in satellites.iter_mut().enumerate() {
            *satellite = field(&frame, FIRST_CHANNEL_FIELD + slot)?;
        }

        Ok(GSA {
            selection_mode: field(&frame, 0)?,
            fix_status: field(&frame, 1)?,
            satellites,
            pdop: field(&frame, 14)?,
            hdop: field(&frame, 15)?,
            vdop: field(&frame, 16)?,
            frame,
        })
    }

    fn fields(&self) -> Vec<String> {
        let mut fields = Vec::with_capacity(Self::FIELD_COUNT);
        fields.push(self.selection_mode.to_string());
        fields.push(self.fix_status.to_string());
        fields.extend(
            self.satellites
                .iter()
                .map(|prn| format::optional(*prn, |prn| format!("{prn:02}"))),
        );
        for dop in [self.pdop, self.hdop, self.vdop] {
            fields.push(format::optional(dop, |dop| format::decimal(dop, 2)));
        }
        fields
    }

    fn frame(&self) -> &Frame {
        &self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gsa_parsing() {
        let line = "$GPGSA,A,3,14,06,16,31,23,,,,,,,,1.66,1.42,0.84*0F";
        let gsa = GSA::parse(line).unwrap();

        assert_eq!(gsa.selection_mode, Mode::Automatic);
        assert_eq!(gsa.fix_status, FixStatus::Fix3D);
        assert_eq!(
            gsa.satellites,
            [
                Some(14),
                Some(6),
                Some(16),
                Some(31),
                Some(23),
                None,
                None,
                None,
                None,
                None,
                None,
                None
            ]
        );
        assert_eq!(gsa.pdop, Some(1.66));
        assert_eq!(gsa.hdop, Some(1.42));
        assert_eq!(gsa.vdop, Some(0.84));

        assert_eq!(gsa.serialize(), line);
    }

    #[test]
    fn test_gsa_channels() {
        let gsa = GSA::parse("$GPGSA,A,3,14,06,16,31,23,,,,,,,,1.66,1.42,0.84*0F").unwrap();

        assert_eq!(gsa.satellite_on_channel(0), None);
        assert_eq!(gsa.satellite_on_channel(1), Some(14));
        assert_eq!(gsa.satellite_on_channel(5), Some(23));
        assert_eq!(gsa.satellite_on_channel(6), None);
        assert_eq!(gsa.satellite_on_channel(12), None);
        assert_eq!(gsa.satellite_on_channel(13), None);

        assert_eq!(gsa.used_satellites().as_slice(), &[14, 6, 16, 31, 23]);
    }

    #[test]
    fn test_gsa_sparse_channels() {
        let mut fields = [""; 17];
        fields[0] = "M";
        fields[1] = "2";
        fields[3] = "07";
        fields[13] = "32";

        let gsa = GSA::decode(Frame::new("GPGSA", fields)).unwrap();
        assert_eq!(gsa.selection_mode, Mode::Manual);
        assert_eq!(gsa.fix_status, FixStatus::Fix2D);
        assert_eq!(gsa.satellite_on_channel(2), Some(7));
        assert_eq!(gsa.satellite_on_channel(12), Some(32));
        assert_eq!(gsa.used_satellites().as_slice(), &[7, 32]);
        assert_eq!(gsa.pdop, None);
        assert_eq!(gsa.serialize(), Frame::new("GPGSA", fields).encode());
    }
}
