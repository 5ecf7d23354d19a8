use std::collections::HashMap;

use log::debug;

use crate::{
    Error, Frame, Result,
    nmea_content::{
        DBT, GGA, GLL, GSA, NmeaSentence, RMC, TXT, VTG, ZDA,
        sentence::{Sentence, construct},
    },
};

/// Builds a typed sentence from a frame.
pub type Constructor = fn(Frame) -> Result<NmeaSentence>;

/// An immutable mapping from type identifier (`GPGGA`) to the constructor of
/// its typed sentence.
///
/// A registry is assembled once with [`RegistryBuilder`] and then only read,
/// so a shared reference can be used from any number of threads.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::{Error, nmea_content::{NmeaSentence, Registry}};
///
/// let registry = Registry::standard();
///
/// let sentence = registry.parse("$GPTXT,01,01,02,ANTSTATUS=OK*3B").unwrap();
/// assert!(matches!(sentence, NmeaSentence::TXT(_)));
///
/// let unknown = registry.parse("$GPXYZ,1,2,3*50");
/// assert_eq!(unknown, Err(Error::UnknownType("GPXYZ".to_owned())));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    constructors: HashMap<String, Constructor>,
}

impl Registry {
    /// Creates an empty builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Every sentence of this crate under the `GP` talker.
    pub fn standard() -> Self {
        Self::builder().standard_sentences("GP").build()
    }

    /// Whether a constructor is registered for `type_id`.
    pub fn contains(&self, type_id: &str) -> bool {
        self.constructors.contains_key(type_id)
    }

    /// The registered type identifiers, in no particular order.
    pub fn type_ids(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// Hands `frame` to the constructor registered for its type identifier.
    pub fn dispatch(&self, frame: Frame) -> Result<NmeaSentence> {
        let Some(constructor) = self.constructors.get(frame.type_id()) else {
            debug!("no constructor registered for {}", frame.type_id());
            return Err(Error::UnknownType(frame.type_id().to_owned()));
        };

        constructor(frame).inspect_err(|err| debug!("sentence rejected: {err}"))
    }

    /// Decodes a raw line with the default frame parser and dispatches it.
    pub fn parse(&self, line: &str) -> Result<NmeaSentence> {
        self.dispatch(Frame::decode(line)?)
    }
}

/// Collects constructors for a [`Registry`].
///
/// Registering a type identifier twice keeps the last constructor.
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    constructors: HashMap<String, Constructor>,
}

impl RegistryBuilder {
    /// Creates a builder with no constructors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `constructor` for the full type identifier `type_id`.
    pub fn register(mut self, type_id: impl Into<String>, constructor: Constructor) -> Self {
        self.constructors.insert(type_id.into(), constructor);
        self
    }

    /// Registers sentence `S` under `talker`, e.g. `GN` for `GNGLL`.
    pub fn register_sentence<S: Sentence>(self, talker: &str) -> Self {
        self.register(format!("{talker}{}", S::SENTENCE_TYPE), construct::<S>)
    }

    /// Registers every sentence of this crate under `talker`.
    pub fn standard_sentences(self, talker: &str) -> Self {
        self.register_sentence::<DBT>(talker)
            .register_sentence::<GGA>(talker)
            .register_sentence::<GLL>(talker)
            .register_sentence::<GSA>(talker)
            .register_sentence::<RMC>(talker)
            .register_sentence::<TXT>(talker)
            .register_sentence::<VTG>(talker)
            .register_sentence::<ZDA>(talker)
    }

    /// Freezes the collected constructors into a [`Registry`].
    pub fn build(self) -> Registry {
        Registry {
            constructors: self.constructors,
        }
    }
}
