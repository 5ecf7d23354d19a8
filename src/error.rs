//! # Error Types
//!
//! This module defines the error types used throughout the NMEA codec.
//!
//! Every error carries the offending raw value and, where one applies, the
//! zero-based index of the field it came from, so a caller can log a precise
//! diagnostic without parsing the sentence again.

use crate::Frame;

/// Holds the result of decoding and encoding functions.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Represents all possible errors that can occur while decoding an NMEA sentence.
///
/// None of these conditions is fatal: a failure on one line never prevents the
/// next line from being decoded.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The line violates the wire grammar `$<type>,<fields...>*<hh>`.
    ///
    /// Not retryable; the caller should drop or report the line.
    #[error("malformed frame ({fault}): {line:?}")]
    MalformedFrame {
        /// The raw line as it was handed to the decoder
        line: String,
        /// The structural violation that was detected
        fault: FrameFault,
    },

    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// The frame was otherwise well formed and is returned to the caller,
    /// who decides whether to trust it (see [`Error::into_frame`]).
    #[error("checksum mismatch: computed {expected:02X}, found {found:02X}")]
    ChecksumMismatch {
        /// The checksum calculated from the sentence content
        expected: u8,
        /// The checksum found after the `*` delimiter
        found: u8,
        /// The decoded frame
        frame: Box<Frame>,
    },

    /// No parser is registered for this type identifier.
    ///
    /// This is an expected outcome for unsupported sentence kinds.
    #[error("no parser registered for sentence {0:?}")]
    UnknownType(String),

    /// The sentence does not carry the number of fields its type requires.
    #[error("{type_id}: got {got} fields, want {want}")]
    FieldCountMismatch {
        /// Type identifier of the offending sentence
        type_id: String,
        /// Number of fields on the wire
        got: usize,
        /// Number of fields the sentence type requires
        want: usize,
    },

    /// A field that the protocol fixes to one literal (a unit marker, usually)
    /// holds something else.
    #[error("{type_id}: fixed field {index} is {got:?}, want {want:?}")]
    FixedFieldMismatch {
        /// Type identifier of the offending sentence
        type_id: String,
        /// Zero-based field index
        index: usize,
        /// Value found on the wire
        got: String,
        /// The required literal
        want: &'static str,
    },

    /// An enumerated field holds a token outside its closed set.
    #[error("unrecognized {kind} {got:?}{}", at(.index))]
    UnrecognizedValue {
        /// Name of the enumeration
        kind: &'static str,
        /// Raw token
        got: String,
        /// Zero-based field index, when known
        index: Option<usize>,
    },

    /// A numeric, time or coordinate field is malformed.
    #[error("malformed {kind} {got:?}{}", at(.index))]
    Format {
        /// What was being parsed
        kind: &'static str,
        /// Raw value
        got: String,
        /// Zero-based field index, when known
        index: Option<usize>,
    },

    /// A numeric or coordinate value is outside its domain.
    #[error("{kind} {got} is out of range (limit {max}){}", at(.index))]
    Range {
        /// What was being parsed
        kind: &'static str,
        /// The rejected value
        got: f64,
        /// The magnitude bound
        max: f64,
        /// Zero-based field index, when known
        index: Option<usize>,
    },
}

/// Structural violations reported through [`Error::MalformedFrame`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FrameFault {
    /// NMEA sentences must be ASCII-only for the checksum to be meaningful.
    #[error("non-ASCII input")]
    NonAscii,
    /// The line terminator does not match the configured [`LineEndingMode`](crate::LineEndingMode).
    #[error("unexpected line ending")]
    LineEnding,
    /// The line does not start with `$`.
    #[error("missing '$' marker")]
    MissingMarker,
    /// There is no `*` checksum delimiter.
    #[error("missing '*' delimiter")]
    MissingDelimiter,
    /// There is more than one `*` checksum delimiter.
    #[error("more than one '*' delimiter")]
    MultipleDelimiters,
    /// The checksum is not exactly two hexadecimal digits.
    #[error("checksum is not two hex digits")]
    InvalidChecksum,
    /// The sentence has no type identifier.
    #[error("missing type identifier")]
    MissingTypeId,
}

impl Error {
    /// Attaches a field index to a value error that does not carry one yet.
    ///
    /// Sentence parsers call this on every leaf error so the caller learns
    /// which wire field was at fault. Other variants are returned untouched.
    pub fn at(self, position: usize) -> Self {
        match self {
            Error::UnrecognizedValue {
                kind,
                got,
                index: None,
            } => Error::UnrecognizedValue {
                kind,
                got,
                index: Some(position),
            },
            Error::Format {
                kind,
                got,
                index: None,
            } => Error::Format {
                kind,
                got,
                index: Some(position),
            },
            Error::Range {
                kind,
                got,
                max,
                index: None,
            } => Error::Range {
                kind,
                got,
                max,
                index: Some(position),
            },
            other => other,
        }
    }

    /// Recovers the decoded frame from a [`Error::ChecksumMismatch`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_codec::Frame;
    ///
    /// let err = Frame::decode("$GPTXT,01,01,02,ANTSTATUS=OK*3C").unwrap_err();
    /// let frame = err.into_frame().unwrap();
    /// assert_eq!(frame.fields()[3], "ANTSTATUS=OK");
    /// ```
    pub fn into_frame(self) -> Option<Frame> {
        match self {
            Error::ChecksumMismatch { frame, .. } => Some(*frame),
            _ => None,
        }
    }

    /// The zero-based field index the error refers to, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            Error::FixedFieldMismatch { index, .. } => Some(*index),
            Error::UnrecognizedValue { index, .. }
            | Error::Format { index, .. }
            | Error::Range { index, .. } => *index,
            _ => None,
        }
    }

    pub(crate) fn unrecognized(kind: &'static str, got: &str) -> Self {
        Error::UnrecognizedValue {
            kind,
            got: got.to_owned(),
            index: None,
        }
    }

    pub(crate) fn format(kind: &'static str, got: &str) -> Self {
        Error::Format {
            kind,
            got: got.to_owned(),
            index: None,
        }
    }

    pub(crate) fn range(kind: &'static str, got: f64, max: f64) -> Self {
        Error::Range {
            kind,
            got,
            max,
            index: None,
        }
    }

    pub(crate) fn malformed(line: &str, fault: FrameFault) -> Self {
        Error::MalformedFrame {
            line: line.to_owned(),
            fault,
        }
    }
}

fn at(index: &Option<usize>) -> String {
    match index {
        Some(index) => format!(" at field {index}"),
        None => String::new(),
    }
}
