use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Frame, Result,
    nmea_content::{Severity, Sentence, sentence::field},
};

/// TXT - Text transmission
///
/// ```text
///         1  2  3  4
///         |  |  |  |
///  $--TXT,xx,xx,xx,c--c*hh<CR><LF>
/// ```
///
/// Receivers use it for free-form notices; many report antenna and firmware
/// state as `KEY=VALUE` words, which [`TXT::env`] collects.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct TXT {
    /// Originating frame
    pub frame: Frame,
    /// Total number of messages in this transmission
    pub total: u8,
    /// Number of this message
    pub number: u8,
    /// Message type
    pub severity: Severity,
    /// Message text
    pub text: String,
}

impl TXT {
    /// `KEY=VALUE` words of the text, keyed by `KEY`.
    pub fn env(&self) -> BTreeMap<String, String> {
        self.text
            .split_whitespace()
            .filter_map(|word| word.split_once('='))
            .map(|(key, value)| (key.to_owned(), value.to_owned()))
            .collect()
    }

    /// The `ANTSTATUS` value, if the text reports one.
    pub fn antenna_status(&self) -> Option<String> {
        self.env().remove("ANTSTATUS")
    }
}

impl Sentence for TXT {
    const SENTENCE_TYPE: &'static str = "TXT";
    const FIELD_COUNT: usize = 4;

    fn extract(frame: Frame) -> Result<Self> {
        Ok(TXT {
            total: field(&frame, 0)?,
            number: field(&frame, 1)?,
            severity: field(&frame, 2)?,
            text: field(&frame, 3)?,
            frame,
        })
    }

    fn fields(&self) -> Vec<String> {
        vec![
            format!("{:02}", self.total),
            format!("{:02}", self.number),
            self.severity.to_string(),
            self.text.clone(),
        ]
    }

    fn frame(&self) -> &Frame {
        &self.frame
    }
}
