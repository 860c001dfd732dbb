/// Encode bytes as lowercase hex, two zero-padded digits per byte.
pub fn bytes_to_hex_string(bytes: &[u8]) -> String {
    let encoded = hex::encode(bytes);
    assert_eq!(encoded.len(), bytes.len() * 2);

    encoded
}
