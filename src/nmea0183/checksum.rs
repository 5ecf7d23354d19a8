//! # Checksum
//!
//! The NMEA 0183 checksum is the XOR of every byte between the `$` prefix and
//! the `*` delimiter, excluding both, written as two uppercase hex digits.

/// Calculates the NMEA 0183 checksum for the given message content.
///
/// `payload` is the text between `$` and `*`, e.g. `GPTXT,01,01,02,ANTSTATUS=OK`.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::checksum;
///
/// assert_eq!(checksum("GPTXT,01,01,02,ANTSTATUS=OK"), 0x3B);
/// assert_eq!(checksum(""), 0);
/// ```
pub fn checksum(payload: impl AsRef<[u8]>) -> u8 {
    payload
        .as_ref()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Renders a checksum as two uppercase, zero-padded hex digits.
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Computes the checksum of `payload` and renders it for the wire.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::compute_checksum;
///
/// assert_eq!(compute_checksum("GPVTG,0.0,T,,M,0.0,N,0.1,K,A"), "0C");
/// ```
pub fn compute_checksum(payload: impl AsRef<[u8]>) -> String {
    format_checksum(checksum(payload))
}

/// Checks a claimed checksum against the payload.
///
/// The claimed value is compared case-insensitively. Anything that is not
/// exactly two hex digits never verifies.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::verify_checksum;
///
/// assert!(verify_checksum("GPVTG,0.0,T,,M,0.0,N,0.1,K,A", "0c"));
/// assert!(!verify_checksum("GPVTG,0.0,T,,M,0.0,N,0.1,K,A", "0D"));
/// assert!(!verify_checksum("GPVTG,0.0,T,,M,0.0,N,0.1,K,A", "C"));
/// ```
pub fn verify_checksum(payload: impl AsRef<[u8]>, claimed: &str) -> bool {
    claimed.len() == 2
        && claimed.bytes().all(|b| b.is_ascii_hexdigit())
        && u8::from_str_radix(claimed, 16).is_ok_and(|claimed| claimed == checksum(payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sentences() {
        let cases = [
            ("GPGLL,3110.2908,N,12123.2348,E,041139.000,A,A", "59"),
            ("GPVTG,0.0,T,,M,0.0,N,0.1,K,A", "0C"),
            ("GPTXT,01,01,02,ANTSTATUS=OK", "3B"),
            ("GPDBT,108.3,f,33.0,M,18.1,F", "04"),
            ("GPXYZ,1,2,3", "50"),
        ];

        for (payload, expected) in cases {
            assert_eq!(compute_checksum(payload), expected, "{payload}");
            assert!(verify_checksum(payload, expected), "{payload}");
            assert!(verify_checksum(payload, &expected.to_lowercase()), "{payload}");
        }
    }

    #[test]
    fn test_format_is_zero_padded_uppercase() {
        assert_eq!(format_checksum(0x0C), "0C");
        assert_eq!(format_checksum(0xAB), "AB");
        assert_eq!(format_checksum(0), "00");
    }

    #[test]
    fn test_verify_rejects_malformed_claims() {
        let payload = "GPXYZ,1,2,3";
        for claimed in ["", "5", "050", "+5", "5G", "zz"] {
            assert!(!verify_checksum(payload, claimed), "{claimed}");
        }
    }
}
