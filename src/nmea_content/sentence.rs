use crate::{
    Error, Frame, NmeaField, Result,
    nmea_content::{Axis, LatLong, NmeaSentence},
};

/// The contract every concrete sentence type implements.
///
/// A sentence type is described mostly by data: its type (without talker),
/// the exact number of fields it carries, and the fields whose value the
/// protocol fixes to one literal. [`Sentence::decode`] checks all of that
/// before [`Sentence::extract`] reads the typed fields, so a decoded sentence
/// always satisfies its layout.
///
/// [`Sentence::fields`] is the inverse of `extract`: it renders the typed
/// fields back to raw strings with the precision and padding used on the wire.
/// Fixed fields may be left empty there; [`Sentence::to_frame`] writes the
/// literals in.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::nmea_content::{GLL, Sentence};
///
/// let line = "$GPGLL,3110.2908,N,12123.2348,E,041139.000,A,A*59";
/// let gll = GLL::parse(line).unwrap();
/// assert!(gll.is_valid());
/// assert_eq!(gll.serialize(), line);
/// ```
pub trait Sentence: Sized + Into<NmeaSentence> {
    /// Sentence kind without talker, e.g. `GGA`.
    const SENTENCE_TYPE: &'static str;

    /// Number of fields after the type identifier.
    const FIELD_COUNT: usize;

    /// `(index, literal)` pairs that must match exactly.
    const FIXED_FIELDS: &'static [(usize, &'static str)] = &[];

    /// Reads the typed fields from a frame whose layout has been checked.
    fn extract(frame: Frame) -> Result<Self>;

    /// Renders the typed fields in wire order.
    fn fields(&self) -> Vec<String>;

    /// The frame the sentence was decoded from.
    ///
    /// Only its type identifier is used when serializing; the fields always
    /// come from [`Sentence::fields`]. Sentences built in code take theirs
    /// from [`Sentence::outbound_frame`].
    fn frame(&self) -> &Frame;

    /// An empty frame carrying `talker` and this sentence type, for sentences
    /// assembled in code rather than decoded.
    fn outbound_frame(talker: &str) -> Frame {
        Frame::new(format!("{talker}{}", Self::SENTENCE_TYPE), Vec::<String>::new())
    }

    /// Checks the layout of `frame`, then extracts the sentence.
    fn decode(frame: Frame) -> Result<Self> {
        check_layout::<Self>(&frame)?;
        Self::extract(frame)
    }

    /// Decodes a raw line with the default frame parser.
    fn parse(line: &str) -> Result<Self> {
        Self::decode(Frame::decode(line)?)
    }

    /// Builds the outbound frame, keeping the type identifier of the
    /// originating frame.
    fn to_frame(&self) -> Frame {
        let mut fields = self.fields();
        for &(index, literal) in Self::FIXED_FIELDS {
            if let Some(field) = fields.get_mut(index) {
                literal.clone_into(field);
            }
        }

        Frame::new(self.frame().type_id(), fields)
    }

    /// The complete wire string, checksum included.
    fn serialize(&self) -> String {
        self.to_frame().encode()
    }
}

fn check_layout<S: Sentence>(frame: &Frame) -> Result<()> {
    if frame.fields().len() != S::FIELD_COUNT {
        return Err(Error::FieldCountMismatch {
            type_id: frame.type_id().to_owned(),
            got: frame.fields().len(),
            want: S::FIELD_COUNT,
        });
    }

    if frame.sentence_type() != S::SENTENCE_TYPE {
        return Err(Error::UnknownType(frame.type_id().to_owned()));
    }

    for &(index, want) in S::FIXED_FIELDS {
        let got = frame.field(index).unwrap_or_default();
        if got != want {
            return Err(Error::FixedFieldMismatch {
                type_id: frame.type_id().to_owned(),
                index,
                got: got.to_owned(),
                want,
            });
        }
    }

    Ok(())
}

/// Parses the field at `index`, tagging any error with its position.
pub(crate) fn field<T: NmeaField>(frame: &Frame, index: usize) -> Result<T> {
    T::parse_field(frame.field(index).unwrap_or_default()).map_err(|err| err.at(index))
}

/// Parses the coordinate held in the field pair `index`, `index + 1`.
///
/// Two empty fields are an omitted coordinate; a single empty one is malformed.
pub(crate) fn coordinate(frame: &Frame, index: usize, axis: Axis) -> Result<Option<LatLong>> {
    let number = frame.field(index).unwrap_or_default();
    let cardinal = frame.field(index + 1).unwrap_or_default();

    match (number.is_empty(), cardinal.is_empty()) {
        (true, true) => Ok(None),
        (true, false) => Err(Error::format("coordinate", number).at(index)),
        (false, true) => Err(Error::format("cardinal point", cardinal).at(index + 1)),
        (false, false) => LatLong::from_dm_fields(number, cardinal, axis)
            .map(Some)
            .map_err(|err| match err {
                Error::UnrecognizedValue { .. } => err.at(index + 1),
                err => err.at(index),
            }),
    }
}

/// Renders an optional coordinate as its number and cardinal fields.
pub(crate) fn coordinate_fields(coordinate: Option<LatLong>) -> [String; 2] {
    match coordinate {
        Some(coordinate) => [
            coordinate.to_dm(),
            coordinate.cardinal_point().as_str().to_owned(),
        ],
        None => [String::new(), String::new()],
    }
}

/// Generic constructor used by the registry.
pub(crate) fn construct<S: Sentence>(frame: Frame) -> Result<NmeaSentence> {
    S::decode(frame).map(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nmea_content::{DBT, GGA, GSA, PositioningMode, TXT, VTG};

    #[test]
    fn test_field_count_gate() {
        let frame = Frame::new("GPVTG", ["0.0", "T", "", "M", "0.0", "N", "0.1", "K"]);
        assert_eq!(
            VTG::decode(frame),
            Err(Error::FieldCountMismatch {
                type_id: "GPVTG".to_owned(),
                got: 8,
                want: 9,
            })
        );

        let frame = Frame::new("GPTXT", ["01", "01", "02", "ANTSTATUS=OK", ""]);
        assert!(matches!(
            TXT::decode(frame),
            Err(Error::FieldCountMismatch { got: 5, want: 4, .. })
        ));
    }

    #[test]
    fn test_fixed_field_mismatch() {
        let frame = Frame::new("GPVTG", ["0.0", "T", "", "X", "0.0", "N", "0.1", "K", "A"]);
        assert_eq!(
            VTG::decode(frame),
            Err(Error::FixedFieldMismatch {
                type_id: "GPVTG".to_owned(),
                index: 3,
                got: "X".to_owned(),
                want: "M",
            })
        );

        let frame = Frame::new("GPDBT", ["108.3", "F", "33.0", "M", "18.1", "F"]);
        assert!(matches!(
            DBT::decode(frame),
            Err(Error::FixedFieldMismatch { index: 1, .. })
        ));
    }

    #[test]
    fn test_wrong_sentence_type() {
        let frame = Frame::new("GPDPT", ["108.3", "f", "33.0", "M", "18.1", "F"]);
        assert_eq!(
            DBT::decode(frame),
            Err(Error::UnknownType("GPDPT".to_owned()))
        );
    }

    #[test]
    fn test_field_errors_carry_index() {
        let frame = Frame::new(
            "GPGGA",
            [
                "015540.000", "3150.68378", "N", "11711.93139", "E", "9", "17", "0.6", "0051.6",
                "M", "0.0", "M", "", "",
            ],
        );
        assert_eq!(
            GGA::decode(frame),
            Err(Error::UnrecognizedValue {
                kind: "quality indicator",
                got: "9".to_owned(),
                index: Some(5),
            })
        );

        let frame = Frame::new(
            "GPGSA",
            [
                "A", "3", "14", "06", "x", "", "", "", "", "", "", "", "", "", "", "", "",
            ],
        );
        assert!(matches!(
            GSA::decode(frame),
            Err(Error::Format { index: Some(4), .. })
        ));
    }

    #[test]
    fn test_coordinate_pairs() {
        let frame = Frame::new("GPXYZ", ["3110.2908", "N", "", "", "", "E", "3110.2908", "E"]);

        let latitude = coordinate(&frame, 0, Axis::Latitude).unwrap().unwrap();
        assert_eq!(latitude.to_dm(), "3110.2908");

        assert_eq!(coordinate(&frame, 2, Axis::Longitude), Ok(None));

        assert!(matches!(
            coordinate(&frame, 4, Axis::Longitude),
            Err(Error::Format { index: Some(4), .. })
        ));

        assert!(matches!(
            coordinate(&frame, 6, Axis::Latitude),
            Err(Error::UnrecognizedValue { index: Some(7), .. })
        ));
    }

    #[test]
    fn test_outbound_sentence() {
        let frame = VTG::outbound_frame("GP");
        assert_eq!(frame.type_id(), "GPVTG");
        assert!(frame.fields().is_empty());

        let vtg = VTG {
            frame,
            course_over_ground: Some(0.0),
            course_over_ground_magnetic: None,
            speed_over_ground_knots: Some(0.0),
            speed_over_ground_kph: Some(0.1),
            mode: PositioningMode::Autonomous,
        };
        assert_eq!(vtg.serialize(), "$GPVTG,0.0,T,,M,0.0,N,0.1,K,A*0C");

        let dbt = DBT {
            frame: DBT::outbound_frame("SD"),
            depth_feet: None,
            depth_meters: Some(33.0),
            depth_fathoms: None,
        };
        assert!(dbt.serialize().starts_with("$SDDBT,,f,33.0,M,,F*"));
    }

    #[test]
    fn test_coordinate_fields() {
        assert_eq!(coordinate_fields(None), ["", ""]);

        let longitude = LatLong::from_dm_fields("00630.3372", "W", Axis::Longitude).unwrap();
        assert_eq!(coordinate_fields(Some(longitude)), ["00630.3372", "W"]);

        let zero = LatLong::latitude(0.0).unwrap();
        assert_eq!(coordinate_fields(Some(zero)), ["", ""]);
    }
}
