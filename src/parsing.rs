//! # Parsing Utilities
//!
//! This module provides the nom combinators shared by the framing layer and the
//! field parsers: complete-consumption checks, fixed-width digit groups and a
//! strict decimal recognizer.

use nom::{
    Err, IResult, Input, Parser, ToUsize,
    branch::alt,
    bytes::complete::take,
    character::complete::{char, digit1, one_of},
    combinator::{opt, recognize, rest_len, verify},
    error::{ErrorKind, ParseError},
    sequence::terminated,
};

/// Ensures that the parser consumes all input.
///
/// Fails with the error kind `e` if anything is left over after `f` succeeds.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::parsing::consumed;
/// use nom::{IResult, Parser, bytes::complete::take, error::ErrorKind};
///
/// let mut parser = consumed(take(3u8), ErrorKind::Count);
/// let result: IResult<_, _> = parser.parse("abc");
/// assert!(result.is_ok());
///
/// let result: IResult<_, _> = parser.parse("abcd");
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    terminated(
        f,
        verify(rest_len, |len| len == &0)
            .or(move |i| Err(Err::Error(nom::error::make_error(i, e)))),
    )
}

/// Takes exactly `count` ASCII digits and reads them as an unsigned number.
///
/// Used for the fixed-width groups of time (`hhmmss`) and date (`ddmmyy`) fields.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::parsing::fixed_digits;
/// use nom::{IResult, Parser};
///
/// let result: IResult<_, _> = fixed_digits(2u8).parse("0411");
/// assert_eq!(result, Ok(("11", 4)));
///
/// let result: IResult<_, u32> = fixed_digits(2u8).parse("4a");
/// assert!(result.is_err());
/// ```
pub fn fixed_digits<'a, E, C>(count: C) -> impl Parser<&'a str, Output = u32, Error = E>
where
    E: ParseError<&'a str>,
    C: ToUsize,
{
    take(count)
        .and_then(consumed(digit1, ErrorKind::Digit))
        .map(|digits: &str| {
            digits
                .bytes()
                .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
        })
}

/// Recognizes a plain decimal number: an optional sign, digits and an optional
/// fractional part.
///
/// Exponents, `inf` and `nan` are not part of the NMEA number grammar and are
/// left unconsumed.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::parsing::decimal;
/// use nom::IResult;
///
/// let result: IResult<_, _> = decimal("-12.5,N");
/// assert_eq!(result, Ok((",N", "-12.5")));
///
/// let result: IResult<_, _> = decimal(".25");
/// assert_eq!(result, Ok(("", ".25")));
///
/// let result: IResult<_, _> = decimal("nan");
/// assert!(result.is_err());
/// ```
pub fn decimal<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, &'a str, E> {
    recognize((opt(one_of("+-")), unsigned_decimal)).parse(i)
}

/// Recognizes an unsigned decimal without sign, as used by the degree-minute
/// coordinate form.
pub fn unsigned_decimal<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, &'a str, E> {
    let whole = (digit1, opt((char('.'), opt(digit1)))).map(|_| ());
    let fraction = (char('.'), digit1).map(|_| ());

    recognize(alt((whole, fraction))).parse(i)
}

#[cfg(test)]
mod tests {
    use nom::{IResult, Parser, combinator::all_consuming};

    use super::*;

    #[test]
    fn test_decimal() {
        let valid = ["0", "0.0", "-1.5", "+2", "12.", ".5", "00630.3372"];
        for input in valid {
            let res: IResult<_, _> = all_consuming(decimal).parse(input);
            assert_eq!(res, Ok(("", input)), "{input}");
        }

        let invalid = ["", "-", ".", "1e5", "inf", "NaN", "1.2.3", " 1", "1,2"];
        for input in invalid {
            let res: IResult<_, _> = all_consuming(decimal).parse(input);
            assert!(res.is_err(), "{input}");
        }
    }

    #[test]
    fn test_decimal_keeps_fraction() {
        let cases = [
            ("0.6", 0.6),
            ("3110.2908", 3110.2908),
            ("-01.25", -1.25),
            ("12.", 12.0),
            (".5", 0.5),
        ];

        for (input, expected) in cases {
            let res: IResult<_, _> = all_consuming(decimal).parse(input);
            let (_, number) = res.unwrap();
            assert_eq!(number, input);
            assert_eq!(number.parse::<f64>(), Ok(expected), "{input}");
        }
    }

    #[test]
    fn test_unsigned_decimal_rejects_sign() {
        let res: IResult<_, _> = all_consuming(unsigned_decimal).parse("3110.2908");
        assert_eq!(res, Ok(("", "3110.2908")));

        let res: IResult<_, _> = all_consuming(unsigned_decimal).parse("-3110.2908");
        assert!(res.is_err());
    }

    #[test]
    fn test_fixed_digits() {
        let res: IResult<_, _> = (fixed_digits(2u8), fixed_digits(2u8), fixed_digits(2u8))
            .parse("041139.000");
        assert_eq!(res, Ok((".000", (4, 11, 39))));

        let res: IResult<_, u32> = fixed_digits(2u8).parse("4");
        assert!(res.is_err());

        let res: IResult<_, u32> = fixed_digits(4u8).parse("20-2");
        assert!(res.is_err());
    }
}
