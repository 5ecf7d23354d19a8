//! # NMEA 0183 Framing
//!
//! This module splits raw NMEA 0183 lines into [`Frame`]s and assembles frames
//! back into wire strings. It handles the standard format:
//! `$<type>,D1,D2,...,Dn*CC[\r\n]`
//!
//! The framing layer knows nothing about individual sentence kinds. It checks
//! the grammar and the checksum, then hands the ordered raw fields on.

mod checksum;

use log::{debug, trace};
use nom::{
    Err, IResult, Parser,
    bytes::complete::{tag, take_until},
    character::complete::{char, hex_digit0},
    combinator::{all_consuming, opt, verify},
    error::{ErrorKind, ParseError},
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use checksum::{checksum, compute_checksum, format_checksum, verify_checksum};

use crate::{
    Error, Result,
    error::FrameFault,
    parsing::consumed,
};

/// Defines how the parser should handle CRLF line endings.
///
/// NMEA 0183 messages end with a carriage return and line feed (`\r\n`) on the
/// wire, but many transports strip them before handing a line over.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineEndingMode {
    /// CRLF line ending is required and must be present.
    ///
    /// Use this mode when parsing raw NMEA log files or serial port data.
    Required,

    /// CRLF line ending is forbidden and must not be present.
    ///
    /// Use this mode when parsing messages from APIs, databases, or other
    /// sources where line endings have been removed.
    Forbidden,

    #[default]
    /// A trailing CRLF is accepted and stripped when present.
    Optional,
}

/// The generic, untyped result of decoding one raw line.
///
/// A frame keeps its fields in wire order; empty fields are kept as empty
/// strings, so `fields().len()` is always the number of commas after the type
/// identifier.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    type_id: String,
    fields: Vec<String>,
    checksum: u8,
}

impl Frame {
    /// Creates a frame from a type identifier and its fields, computing the
    /// checksum.
    ///
    /// Fields must not contain the framing characters `$`, `,` or `*`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_codec::Frame;
    ///
    /// let frame = Frame::new("GPXYZ", ["1", "2", "3"]);
    /// assert_eq!(frame.checksum(), 0x50);
    /// assert_eq!(frame.encode(), "$GPXYZ,1,2,3*50");
    /// ```
    pub fn new<S, I>(type_id: impl Into<String>, fields: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        let mut frame = Frame {
            type_id: type_id.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            checksum: 0,
        };
        frame.checksum = checksum(frame.payload());
        frame
    }

    /// Decodes a line with the default [`FrameParser`] (trailing CRLF optional).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_codec::Frame;
    ///
    /// let frame = Frame::decode("$GPVTG,0.0,T,,M,0.0,N,0.1,K,A*0C").unwrap();
    /// assert_eq!(frame.type_id(), "GPVTG");
    /// assert_eq!(frame.fields().len(), 9);
    /// assert_eq!(frame.field(2), Some(""));
    /// ```
    pub fn decode(line: &str) -> Result<Self> {
        FrameParser::default().decode(line)
    }

    /// Assembles the wire form `$<type>,<fields>*<hh>`, recomputing the checksum.
    ///
    /// No line terminator is appended.
    pub fn encode(&self) -> String {
        let payload = self.payload();
        let encoded = format!("${payload}*{}", compute_checksum(&payload));
        trace!("encoded {encoded}");
        encoded
    }

    /// The text between `$` and `*`.
    pub fn payload(&self) -> String {
        let mut payload = self.type_id.clone();
        for field in &self.fields {
            payload.push(',');
            payload.push_str(field);
        }
        payload
    }

    /// Talker and sentence kind, e.g. `GPGGA`.
    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    /// All fields after the type identifier, in wire order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The field at the zero-based `index`, if there is one.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// The checksum carried by the frame.
    ///
    /// For a decoded frame this is the value found on the wire.
    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// The two-letter talker of a standard five-character identifier.
    ///
    /// Proprietary (`P...`) and other identifiers have no talker.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_codec::Frame;
    ///
    /// let frame = Frame::new("GNGLL", [""; 7]);
    /// assert_eq!(frame.talker(), Some("GN"));
    /// assert_eq!(frame.sentence_type(), "GLL");
    ///
    /// let frame = Frame::new("PUBX", ["00"]);
    /// assert_eq!(frame.talker(), None);
    /// assert_eq!(frame.sentence_type(), "PUBX");
    /// ```
    pub fn talker(&self) -> Option<&str> {
        if self.type_id.len() == 5 && !self.type_id.starts_with('P') {
            self.type_id.get(..2)
        } else {
            None
        }
    }

    /// The sentence kind without its talker, e.g. `GGA`.
    pub fn sentence_type(&self) -> &str {
        match self.talker() {
            Some(_) => self.type_id.get(2..).unwrap_or(&self.type_id),
            None => &self.type_id,
        }
    }
}

/// Decodes raw lines into [`Frame`]s.
///
/// Created with [`FrameParser::builder`]. The parser holds no state between
/// calls and can be shared freely across threads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameParser {
    line_ending_mode: LineEndingMode,
}

impl FrameParser {
    /// Starts configuring a parser.
    pub fn builder() -> FrameParserBuilder {
        FrameParserBuilder::new()
    }

    /// The configured line ending mode.
    pub fn line_ending_mode(&self) -> LineEndingMode {
        self.line_ending_mode
    }

    /// Decodes one line.
    ///
    /// The line must be ASCII, start with `$`, contain exactly one `*` followed
    /// by two hex digits, and carry a non-empty type identifier. Any violation
    /// is reported as [`Error::MalformedFrame`].
    ///
    /// If the checksum does not match, [`Error::ChecksumMismatch`] is returned
    /// with the decoded frame inside it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_codec::{Error, FrameParser, LineEndingMode};
    ///
    /// let parser = FrameParser::builder()
    ///     .line_ending_mode(LineEndingMode::Required)
    ///     .build();
    ///
    /// assert!(parser.decode("$GPXYZ,1,2,3*50\r\n").is_ok());
    /// assert!(matches!(
    ///     parser.decode("$GPXYZ,1,2,3*50"),
    ///     Err(Error::MalformedFrame { .. })
    /// ));
    /// ```
    pub fn decode(&self, line: &str) -> Result<Frame> {
        let fault = |fault| Error::malformed(line, fault);

        if !line.is_ascii() {
            return Err(fault(FrameFault::NonAscii));
        }

        let (sentence, _) = crlf::<nom::error::Error<&str>>(self.line_ending_mode)
            .parse(line)
            .map_err(|_| fault(FrameFault::LineEnding))?;

        let (i, _) = char::<_, nom::error::Error<&str>>('$')
            .parse(sentence)
            .map_err(|_| fault(FrameFault::MissingMarker))?;

        let (cc, payload) = take_until::<_, _, nom::error::Error<&str>>("*")
            .parse(i)
            .map_err(|_| fault(FrameFault::MissingDelimiter))?;

        let (cc, _) = char::<_, nom::error::Error<&str>>('*')
            .parse(cc)
            .map_err(|_| fault(FrameFault::MissingDelimiter))?;
        if cc.contains('*') {
            return Err(fault(FrameFault::MultipleDelimiters));
        }

        let (_, cc) = all_consuming(verify(
            hex_digit0::<_, nom::error::Error<&str>>,
            |digits: &str| digits.len() == 2,
        ))
        .parse(cc)
        .map_err(|_| fault(FrameFault::InvalidChecksum))?;
        let found =
            u8::from_str_radix(cc, 16).map_err(|_| fault(FrameFault::InvalidChecksum))?;

        let mut tokens = payload.split(',');
        let type_id = tokens.next().unwrap_or_default();
        if type_id.is_empty() {
            return Err(fault(FrameFault::MissingTypeId));
        }

        let frame = Frame {
            type_id: type_id.to_owned(),
            fields: tokens.map(str::to_owned).collect(),
            checksum: found,
        };

        let expected = checksum(payload);
        if expected != found {
            debug!(
                "{}: checksum mismatch, computed {expected:02X}, found {found:02X}",
                frame.type_id
            );
            return Err(Error::ChecksumMismatch {
                expected,
                found,
                frame: Box::new(frame),
            });
        }

        trace!("decoded {} with {} fields", frame.type_id, frame.fields.len());
        Ok(frame)
    }
}

/// Configures a [`FrameParser`].
///
/// It uses the builder pattern to allow for flexible configuration of the
/// parser settings.
///
/// ```rust
/// use nmea0183_codec::{FrameParserBuilder, LineEndingMode};
///
/// let strict = FrameParserBuilder::new()
///     .line_ending_mode(LineEndingMode::Required)
///     .build();
/// assert!(strict.decode("$GPXYZ,1,2,3*50\r\n").is_ok());
/// assert!(strict.decode("$GPXYZ,1,2,3*50").is_err()); // (missing CRLF)
///
/// let stripped = FrameParserBuilder::new()
///     .line_ending_mode(LineEndingMode::Forbidden)
///     .build();
/// assert!(stripped.decode("$GPXYZ,1,2,3*50").is_ok());
/// assert!(stripped.decode("$GPXYZ,1,2,3*50\r\n").is_err()); // (CRLF present)
///
/// let lenient = FrameParserBuilder::new().build();
/// assert!(lenient.decode("$GPXYZ,1,2,3*50").is_ok());
/// assert!(lenient.decode("$GPXYZ,1,2,3*50\r\n").is_ok());
/// ```
#[must_use]
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameParserBuilder {
    /// Line ending mode for the parser.
    line_ending_mode: LineEndingMode,
}

impl FrameParserBuilder {
    /// Creates a new builder with the default line ending mode,
    /// [`LineEndingMode::Optional`].
    pub fn new() -> Self {
        FrameParserBuilder::default()
    }

    /// Sets the line ending mode for the parser.
    ///
    /// # Arguments
    ///
    /// * `mode` - The desired line ending mode:
    ///   - [`LineEndingMode::Required`]: Message must end with `\r\n`
    ///   - [`LineEndingMode::Forbidden`]: Message must not end with `\r\n`
    ///   - [`LineEndingMode::Optional`]: A trailing `\r\n` is stripped if present
    pub fn line_ending_mode(mut self, mode: LineEndingMode) -> Self {
        self.line_ending_mode = mode;
        self
    }

    /// Builds the parser with the configured settings.
    pub fn build(self) -> FrameParser {
        FrameParser {
            line_ending_mode: self.line_ending_mode,
        }
    }
}

/// Parses CRLF line endings based on configuration.
///
/// On success the remaining input is the line without its terminator.
fn crlf<'a, E: ParseError<&'a str>>(
    mode: LineEndingMode,
) -> impl Fn(&'a str) -> IResult<&'a str, (), E> {
    move |i: &'a str| {
        let (i, data) = opt(take_until("\r\n")).parse(i)?;

        match (mode, data) {
            (LineEndingMode::Forbidden, Some(_)) | (LineEndingMode::Required, None) => {
                Err(Err::Error(E::from_error_kind(i, ErrorKind::CrLf)))
            }
            (_, Some(data)) => {
                let (_, _) = consumed(tag("\r\n"), ErrorKind::CrLf).parse(i)?;
                Ok((data, ()))
            }
            (_, None) => Ok((i, ())),
        }
    }
}
