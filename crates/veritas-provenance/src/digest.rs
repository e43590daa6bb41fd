use serde::Serialize;

/// Lowercase hex BLAKE3 digest of `bytes`.
///
/// ```
/// let d = veritas_provenance::digest_bytes(b"1850.25 usd");
/// assert_eq!(d.len(), 64);
/// assert_eq!(d, veritas_provenance::digest_bytes(b"1850.25 usd"));
/// ```
pub fn digest_bytes(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

/// Digest of the JSON encoding of `value`.
///
/// Field order follows the struct definition, so equal values give equal digests.
pub fn digest_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let bytes = serde_json::to_vec(value)?;
    Ok(digest_bytes(&bytes))
}
