use nom::{Err, IResult, Parser, error::ErrorKind};

use crate::nmea0183::{LineEndingMode, crlf};

#[test]
fn test_crlf_required() {
    let res: IResult<_, _> = crlf(LineEndingMode::Required).parse("$GPXYZ,1,2,3*50\r\n");
    let (data, _) = res.unwrap();
    assert_eq!(data, "$GPXYZ,1,2,3*50");

    let res: IResult<_, _> = crlf(LineEndingMode::Required).parse("$GPXYZ,1,2,3*50");
    let err = res.unwrap_err();
    if let Err::Error(e) = err {
        assert_eq!(e.code, ErrorKind::CrLf);
    } else {
        panic!("Unexpected error")
    }
}

#[test]
fn test_crlf_forbidden() {
    let res: IResult<_, _> = crlf(LineEndingMode::Forbidden).parse("$GPXYZ,1,2,3*50");
    let (data, _) = res.unwrap();
    assert_eq!(data, "$GPXYZ,1,2,3*50");

    let res: IResult<_, _> = crlf(LineEndingMode::Forbidden).parse("$GPXYZ,1,2,3*50\r\n");
    let err = res.unwrap_err();
    if let Err::Error(e) = err {
        assert_eq!(e.code, ErrorKind::CrLf);
    } else {
        panic!("Unexpected error")
    }
}

#[test]
fn test_crlf_optional() {
    for input in ["$GPXYZ,1,2,3*50", "$GPXYZ,1,2,3*50\r\n"] {
        let res: IResult<_, _> = crlf(LineEndingMode::Optional).parse(input);
        let (data, _) = res.unwrap();
        assert_eq!(data, "$GPXYZ,1,2,3*50");
    }
}

#[test]
fn test_crlf_in_the_middle() {
    for mode in [LineEndingMode::Required, LineEndingMode::Optional] {
        let res: IResult<_, _> = crlf(mode).parse("$GPXYZ,1\r\n,2,3*50\r\n");
        let err = res.unwrap_err();
        if let Err::Error(e) = err {
            assert_eq!(e.code, ErrorKind::CrLf);
        } else {
            panic!("Unexpected error")
        }
    }
}
