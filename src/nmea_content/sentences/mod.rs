mod dbt;
mod gga;
mod gll;
mod gsa;
mod rmc;
mod txt;
mod vtg;
mod zda;

pub use dbt::DBT;
pub use gga::GGA;
pub use gll::GLL;
pub use gsa::GSA;
pub use rmc::RMC;
pub use txt::TXT;
pub use vtg::VTG;
pub use zda::ZDA;

use crate::{Frame, nmea_content::Sentence};

/// A unified enum representing all supported NMEA 0183 sentence types.
///
/// Each variant wraps the corresponding strongly-typed struct. This is what
/// the [`Registry`](crate::nmea_content::Registry) hands back for a
/// dispatched frame.
///
/// ## Example Usage
///
/// ```rust
/// use nmea0183_codec::nmea_content::{NmeaSentence, Registry};
///
/// let registry = Registry::standard();
/// let sentence = registry.parse("$GPZDA,201530.000,04,07,2002,00,00*50").unwrap();
///
/// match &sentence {
///     NmeaSentence::ZDA(zda) => {
///         assert!(zda.time.is_some());
///         assert!(zda.date.is_some());
///         assert!(zda.local_zone.is_some());
///     }
///     _ => unreachable!(),
/// }
///
/// assert_eq!(sentence.serialize(), "$GPZDA,201530.000,04,07,2002,00,00*50");
/// ```
///
/// ## Supported Sentence Types
///
/// | Variant      | Sentence Type                                           | Description                      |
/// |--------------|---------------------------------------------------------|----------------------------------|
/// | DBT([`DBT`]) | Depth Below Transducer                                  | Water depth measurements         |
/// | GGA([`GGA`]) | Global Positioning System Fix Data                      | GPS position and fix quality     |
/// | GLL([`GLL`]) | Geographic Position - Latitude/Longitude                | Latitude/longitude with time     |
/// | GSA([`GSA`]) | GPS DOP and active satellites                           | Satellite constellation info     |
/// | RMC([`RMC`]) | Recommended Minimum Navigation Information              | Essential navigation data        |
/// | TXT([`TXT`]) | Text Transmission                                       | Receiver status messages         |
/// | VTG([`VTG`]) | Track made good and Ground speed                        | Velocity information             |
/// | ZDA([`ZDA`]) | Time & Date - UTC, day, month, year and local time zone | UTC time and date with time zone |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum NmeaSentence {
    /// Depth Below Transducer
    DBT(DBT),
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// Geographic Position - Latitude/Longitude
    GLL(GLL),
    /// GPS DOP and active satellites
    GSA(GSA),
    /// Recommended Minimum Navigation Information
    RMC(RMC),
    /// Text Transmission
    TXT(TXT),
    /// Track made good and Ground speed
    VTG(VTG),
    /// Time & Date - UTC, day, month, year and local time zone
    ZDA(ZDA),
}

impl NmeaSentence {
    /// The frame the sentence was decoded from.
    pub fn frame(&self) -> &Frame {
        match self {
            NmeaSentence::DBT(s) => s.frame(),
            NmeaSentence::GGA(s) => s.frame(),
            NmeaSentence::GLL(s) => s.frame(),
            NmeaSentence::GSA(s) => s.frame(),
            NmeaSentence::RMC(s) => s.frame(),
            NmeaSentence::TXT(s) => s.frame(),
            NmeaSentence::VTG(s) => s.frame(),
            NmeaSentence::ZDA(s) => s.frame(),
        }
    }

    /// Talker and sentence kind, e.g. `GPGGA`.
    pub fn type_id(&self) -> &str {
        self.frame().type_id()
    }

    /// Builds the outbound frame from the typed fields.
    pub fn to_frame(&self) -> Frame {
        match self {
            NmeaSentence::DBT(s) => s.to_frame(),
            NmeaSentence::GGA(s) => s.to_frame(),
            NmeaSentence::GLL(s) => s.to_frame(),
            NmeaSentence::GSA(s) => s.to_frame(),
            NmeaSentence::RMC(s) => s.to_frame(),
            NmeaSentence::TXT(s) => s.to_frame(),
            NmeaSentence::VTG(s) => s.to_frame(),
            NmeaSentence::ZDA(s) => s.to_frame(),
        }
    }

    /// The complete wire string, checksum included.
    pub fn serialize(&self) -> String {
        self.to_frame().encode()
    }
}

macro_rules! impl_from_sentence {
    ($($variant:ident),*) => ($(
        impl From<$variant> for NmeaSentence {
            fn from(sentence: $variant) -> Self {
                NmeaSentence::$variant(sentence)
            }
        }
    )*)
}

impl_from_sentence!(DBT, GGA, GLL, GSA, RMC, TXT, VTG, ZDA);
