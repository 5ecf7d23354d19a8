//! # NMEA 0183 Content
//!
//! Typed views over decoded [`Frame`](crate::Frame)s: the small closed
//! vocabularies shared by several sentences, the coordinate model, the
//! [`Sentence`] contract with its concrete sentences, and the [`Registry`]
//! that dispatches frames to them.

use crate::{Error, NmeaField, Result};

/// Declares a closed set of wire tokens as a field-less enum.
///
/// Generates `parse`, `as_str`, `VARIANTS`, `Display`, `FromStr` and the
/// [`NmeaField`] impl. `parse` is the exact inverse of `as_str`.
macro_rules! parsable_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident($kind:literal) {
            $(
                $(#[$variant_meta:meta])*
                $token:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Every member, in declaration order.
            pub const VARIANTS: &'static [Self] = &[$(Self::$variant),*];

            /// Parses a wire token, failing on anything outside the set.
            pub fn parse(raw: &str) -> Result<Self> {
                match raw {
                    $($token => Ok(Self::$variant),)*
                    _ => Err(Error::unrecognized($kind, raw)),
                }
            }

            /// The wire token.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse(s)
            }
        }

        impl NmeaField for $name {
            const KIND: &'static str = $kind;

            fn parse_field(raw: &str) -> Result<Self> {
                Self::parse(raw)
            }
        }
    };
}

mod coordinate;
mod format;
mod registry;
mod sentence;
pub mod sentences;

pub use coordinate::{Axis, LatLong};
pub use registry::{Constructor, Registry, RegistryBuilder};
pub use sentence::Sentence;
pub use sentences::{DBT, GGA, GLL, GSA, NmeaSentence, RMC, TXT, VTG, ZDA};

parsable_enum! {
    /// Status of the data carried by GLL and RMC.
    pub enum DataValid("data validity") {
        /// A - Data valid
        "A" => Valid,
        /// V - Data invalid
        "V" => Invalid,
    }
}

parsable_enum! {
    /// Positioning System Mode Indicator (FAA mode)
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_sentence_mixes_and_nmea_variations>
    pub enum PositioningMode("positioning mode") {
        /// A - Autonomous mode
        "A" => Autonomous,
        /// D - Differential Mode
        "D" => Differential,
        /// E - Estimated (dead-reckoning) mode
        "E" => Estimated,
        /// F - RTK Float mode
        "F" => FloatRtk,
        /// M - Manual Input Mode
        "M" => Manual,
        /// N - Data Not Valid
        "N" => NotValid,
        /// P - Precise
        "P" => Precise,
        /// R - RTK Integer mode
        "R" => FixedRtk,
        /// S - Simulated Mode
        "S" => Simulator,
    }
}

parsable_enum! {
    /// Quality of the GPS fix
    pub enum QualityIndicator("quality indicator") {
        /// 0 - Fix not available
        "0" => Invalid,
        /// 1 - GPS fix
        "1" => GnssFix,
        /// 2 - Differential GPS fix
        "2" => DgpsFix,
    }
}

parsable_enum! {
    /// Fix Mode
    pub enum FixStatus("fix status") {
        /// 1 - No fix
        "1" => NoFix,
        /// 2 - 2D Fix
        "2" => Fix2D,
        /// 3 - 3D Fix
        "3" => Fix3D,
    }
}

parsable_enum! {
    /// Selection Mode
    pub enum Mode("selection mode") {
        /// M - Manual, forced to operate in 2D or 3D
        "M" => Manual,
        /// A - Automatic, 2D/3D
        "A" => Automatic,
    }
}

parsable_enum! {
    /// Message type of a TXT sentence.
    pub enum Severity("severity") {
        /// 00 - Error
        "00" => Error,
        /// 01 - Warning
        "01" => Warning,
        /// 02 - Notice
        "02" => Notice,
        /// 07 - User
        "07" => User,
    }
}

parsable_enum! {
    /// Hemisphere of a coordinate.
    ///
    /// `Absent` is the empty token that goes with an omitted (zero) coordinate.
    pub enum CardinalPoint("cardinal point") {
        /// N - North
        "N" => North,
        /// S - South
        "S" => South,
        /// E - East
        "E" => East,
        /// W - West
        "W" => West,
        /// Empty field
        "" => Absent,
    }
}
