use crate::{Error, Frame, FrameParser, LineEndingMode, error::FrameFault};

fn fault_of(line: &str) -> FrameFault {
    match Frame::decode(line) {
        Err(Error::MalformedFrame { fault, line: raw }) => {
            assert_eq!(raw, line);
            fault
        }
        other => panic!("Unexpected result for {line:?}: {other:?}"),
    }
}

#[test]
fn test_decode_ok() {
    let frame = Frame::decode("$GPGLL,3110.2908,N,12123.2348,E,041139.000,A,A*59").unwrap();

    assert_eq!(frame.type_id(), "GPGLL");
    assert_eq!(frame.talker(), Some("GP"));
    assert_eq!(frame.sentence_type(), "GLL");
    assert_eq!(
        frame.fields(),
        ["3110.2908", "N", "12123.2348", "E", "041139.000", "A", "A"]
    );
    assert_eq!(frame.checksum(), 0x59);
}

#[test]
fn test_decode_preserves_empty_fields() {
    let frame = Frame::decode("$GPGSA,A,3,14,06,16,31,23,,,,,,,,1.66,1.42,0.84*0F").unwrap();
    assert_eq!(frame.fields().len(), 17);
    assert_eq!(frame.field(7), Some(""));
    assert_eq!(frame.field(13), Some(""));
    assert_eq!(frame.field(16), Some("0.84"));
    assert_eq!(frame.field(17), None);
}

#[test]
fn test_decode_without_fields() {
    let frame = Frame::new("GPXYZ", Vec::<String>::new());
    let line = frame.encode();

    let decoded = Frame::decode(&line).unwrap();
    assert_eq!(decoded.type_id(), "GPXYZ");
    assert!(decoded.fields().is_empty());
    assert_eq!(decoded, frame);
}

#[test]
fn test_decode_lowercase_checksum() {
    let frame = Frame::decode("$GPVTG,0.0,T,,M,0.0,N,0.1,K,A*0c").unwrap();
    assert_eq!(frame.checksum(), 0x0C);
    assert_eq!(frame.encode(), "$GPVTG,0.0,T,,M,0.0,N,0.1,K,A*0C");
}

#[test]
fn test_decode_malformed() {
    let cases = [
        ("GPXYZ,1,2,3*50", FrameFault::MissingMarker),
        ("", FrameFault::MissingMarker),
        ("$GPXYZ,1,2,3", FrameFault::MissingDelimiter),
        ("$GPXYZ,1,2,3*50*50", FrameFault::MultipleDelimiters),
        ("$GPXYZ,1,2,3*5", FrameFault::InvalidChecksum),
        ("$GPXYZ,1,2,3*500", FrameFault::InvalidChecksum),
        ("$GPXYZ,1,2,3*5G", FrameFault::InvalidChecksum),
        ("$GPXYZ,1,2,3*", FrameFault::InvalidChecksum),
        ("$GPXYZ,1,2,3*50\n", FrameFault::InvalidChecksum),
        ("$,1,2,3*0C", FrameFault::MissingTypeId),
        ("$GPXYZ,1,2,3°*50", FrameFault::NonAscii),
    ];

    for (line, expected) in cases {
        assert_eq!(fault_of(line), expected, "{line:?}");
    }
}

#[test]
fn test_decode_checksum_mismatch_returns_frame() {
    let err = Frame::decode("$GPTXT,01,01,02,ANTSTATUS=OK*3C").unwrap_err();

    match &err {
        Error::ChecksumMismatch {
            expected, found, ..
        } => {
            assert_eq!(*expected, 0x3B);
            assert_eq!(*found, 0x3C);
        }
        other => panic!("Unexpected error {other:?}"),
    }

    let frame = err.into_frame().unwrap();
    assert_eq!(frame.type_id(), "GPTXT");
    assert_eq!(frame.fields(), ["01", "01", "02", "ANTSTATUS=OK"]);
    assert_eq!(frame.checksum(), 0x3C);
    assert_eq!(frame.encode(), "$GPTXT,01,01,02,ANTSTATUS=OK*3B");
}

#[test]
fn test_encode_round_trip() {
    let lines = [
        "$GPGLL,3110.2908,N,12123.2348,E,041139.000,A,A*59",
        "$GPVTG,0.0,T,,M,0.0,N,0.1,K,A*0C",
        "$GPTXT,01,01,02,ANTSTATUS=OK*3B",
        "$GPGGA,015540.000,3150.68378,N,11711.93139,E,1,17,0.6,0051.6,M,0.0,M,,*58",
        "$GPRMC,013732.000,A,3150.7238,N,11711.7278,E,0.00,0.00,220413,,,A*68",
        "$GPGSA,A,3,14,06,16,31,23,,,,,,,,1.66,1.42,0.84*0F",
        "$GPZDA,160012.710,11,03,2004,-01,00*7D",
        "$SDDBT,108.3,f,33.0,M,18.1,F*04",
    ];

    for line in lines {
        let frame = Frame::decode(line).unwrap();
        assert_eq!(frame.encode(), line);
        assert_eq!(Frame::decode(&frame.encode()).unwrap(), frame);
    }
}

#[test]
fn test_new_matches_decode() {
    let frame = Frame::new("GPTXT", ["01", "01", "02", "ANTSTATUS=OK"]);
    assert_eq!(frame.payload(), "GPTXT,01,01,02,ANTSTATUS=OK");
    assert_eq!(
        Frame::decode("$GPTXT,01,01,02,ANTSTATUS=OK*3B").unwrap(),
        frame
    );
}

#[test]
fn test_line_ending_modes() {
    let line = "$GPXYZ,1,2,3*50";
    let terminated = "$GPXYZ,1,2,3*50\r\n";

    let cases = [
        (LineEndingMode::Required, false, true),
        (LineEndingMode::Forbidden, true, false),
        (LineEndingMode::Optional, true, true),
    ];

    for (mode, bare_ok, terminated_ok) in cases {
        let parser = FrameParser::builder().line_ending_mode(mode).build();
        assert_eq!(parser.line_ending_mode(), mode);
        assert_eq!(parser.decode(line).is_ok(), bare_ok, "{mode:?}");
        assert_eq!(parser.decode(terminated).is_ok(), terminated_ok, "{mode:?}");
    }

    let parser = FrameParser::builder()
        .line_ending_mode(LineEndingMode::Required)
        .build();
    assert!(matches!(
        parser.decode(line),
        Err(Error::MalformedFrame {
            fault: FrameFault::LineEnding,
            ..
        })
    ));
}
