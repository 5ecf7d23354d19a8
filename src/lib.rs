//! # NMEA 0183 Codec
//!
//! This library decodes and encodes NMEA 0183 sentences of the form:
//! `$<type>,D1,D2,...,Dn*CC\r\n`
//!
//! It is split in two layers:
//! - Framing: [`Frame`] and [`FrameParser`] check the line grammar and the
//!   XOR checksum and produce the ordered raw fields, whatever the sentence.
//! - Content: [`nmea_content`] turns frames into typed sentences through the
//!   [`Registry`](nmea_content::Registry) dispatcher, and serializes them back.
//!
//! The parser is configurable to handle required, forbidden or optional CRLF
//! line endings; checksums are always required and verified.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_codec::{
//!     Frame, FrameParser, LineEndingMode,
//!     nmea_content::{NmeaSentence, Registry, Sentence},
//! };
//!
//! let parser = FrameParser::builder()
//!     .line_ending_mode(LineEndingMode::Required)
//!     .build();
//! let frame: Frame = parser
//!     .decode("$GPGLL,3110.2908,N,12123.2348,E,041139.000,A,A*59\r\n")
//!     .unwrap();
//! assert_eq!(frame.type_id(), "GPGLL");
//!
//! let registry = Registry::standard();
//! match registry.dispatch(frame).unwrap() {
//!     NmeaSentence::GLL(gll) => {
//!         assert!(gll.is_valid());
//!         assert_eq!(gll.serialize(), "$GPGLL,3110.2908,N,12123.2348,E,041139.000,A,A*59");
//!     }
//!     _ => unreachable!(),
//! }
//! ```

pub mod error;
mod nmea0183;
pub mod nmea_content;
mod parse;
pub mod parsing;

pub use error::{Error, FrameFault, Result};
pub use nmea0183::*;
pub use parse::NmeaField;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
