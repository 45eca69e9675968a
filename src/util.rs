use std::fmt;
use crate::errors::*;

/// Hex representation of a buffer of octets (e.g. packed septets).
pub struct HexData<'a>(pub &'a [u8]);
impl<'a> fmt::Display for HexData<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
       for b in self.0.iter() {
           write!(f, "{:02X}", b)?;
       }
       Ok(())
    }
}
impl<'a> HexData<'a> {
    /// Parse a hex string (whitespace is ignored) back into octets.
    pub fn decode(data: &str) -> Gsm7Result<Vec<u8>> {
        let digits = data.chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>();
        if digits.len() % 2 != 0 {
            return Err(Gsm7Error::InvalidHex);
        }
        digits.as_bytes()
            .chunks(2)
            .map(|x| {
                ::std::str::from_utf8(x)
                    .ok()
                    .and_then(|x| u8::from_str_radix(x, 16).ok())
                    .ok_or(Gsm7Error::InvalidHex)
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn hex_display() {
        assert_eq!(HexData(&[0xE8, 0x32, 0x0B]).to_string(), "E8320B");
        assert_eq!(HexData(&[]).to_string(), "");
    }
    #[test]
    fn hex_decode() {
        assert_eq!(HexData::decode("E8 32 9b").unwrap(), vec![0xE8, 0x32, 0x9B]);
        assert!(HexData::decode("E83").unwrap_err().is_invalid_hex());
        assert!(HexData::decode("ZZ").unwrap_err().is_invalid_hex());
        assert!(HexData::decode("é1").unwrap_err().is_invalid_hex());
    }
}
