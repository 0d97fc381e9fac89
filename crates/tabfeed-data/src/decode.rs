//! Transport decoding.
//!
//! File bytes arrive as base64 text. The original transport is lenient
//! about padding, so both padded and unpadded standard-alphabet input is
//! accepted. Whether the input is present at all is checked by the
//! pipeline before decoding; an empty string reaching this function is a
//! caller bug, not a decode error.

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use base64::Engine as _;

use crate::error::Result;

/// Decode base64-encoded file data into raw bytes.
pub fn decode_file_data(encoded: &str) -> Result<Vec<u8>> {
    let trimmed = encoded.trim();
    match STANDARD.decode(trimmed) {
        Ok(bytes) => Ok(bytes),
        Err(base64::DecodeError::InvalidPadding) => Ok(STANDARD_NO_PAD.decode(trimmed)?),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;

    #[test]
    fn test_decode_padded() {
        assert_eq!(decode_file_data("YSxiCjEsMg==").unwrap(), b"a,b\n1,2");
    }

    #[test]
    fn test_decode_unpadded() {
        assert_eq!(decode_file_data("YSxiCjEsMg").unwrap(), b"a,b\n1,2");
    }

    #[test]
    fn test_decode_trims_whitespace() {
        assert_eq!(decode_file_data("  YQ==\n").unwrap(), b"a");
    }

    #[test]
    fn test_decode_invalid_byte() {
        let err = decode_file_data("not base64!").unwrap_err();
        assert!(matches!(err, DataError::Decode(_)));
    }
}
