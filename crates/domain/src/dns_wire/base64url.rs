use crate::DomainError;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

/// RFC 8484 `dns` parameter encoding: URL-safe alphabet, no padding on
/// output, padding tolerated on input.
const DOH_B64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub fn encode_b64url(bytes: &[u8]) -> String {
    DOH_B64.encode(bytes)
}

pub fn decode_b64url(encoded: &str) -> Result<Vec<u8>, DomainError> {
    DOH_B64
        .decode(encoded.trim())
        .map_err(|e| DomainError::InvalidBase64(e.to_string()))
}
