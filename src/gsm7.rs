//! Converting text to and from GSM 7-bit septets, and packing septets into octets.
//!
//! Encoding happens in two steps: `encode` turns a string into **unpacked** septets (one per
//! byte, with `ESCAPE` inserted before anything taken from the extension table), and
//! `pack_septets` squeezes those into octets for transmission. Decoding is the reverse:
//! `unpack_septets`, then `decode` (or `decode_lossy`).
//!
//! Which tables get used is determined by the `Charset` you pass in; see the `charset` module.

use crate::charset::{Charset, ESCAPE};
use crate::errors::*;

/// Tries to encode a character into the given destination buffer, returning `true` if the
/// character was successfully encoded, and `false` if the character cannot be represented in
/// the given character set.
///
/// The primary table is tried first; characters only found in the extension table are written
/// as an escape septet followed by the extension septet.
pub fn try_encode_char(c: char, cs: &Charset, dest: &mut Vec<u8>) -> bool {
    // The escape character itself can't be sent; it'd be read back as a shift.
    if c == '\u{1b}' {
        return false;
    }
    if let Some(&b) = cs.encoder.get(&c) {
        dest.push(b);
        return true;
    }
    if let Some(&b) = cs.ext_encoder.get(&c) {
        trace!("encoding {:?} as escaped septet {:#04x}", c, b);
        dest.push(ESCAPE);
        dest.push(b);
        return true;
    }
    false
}
/// Encode a string as GSM 7-bit, returning a buffer of **unpacked** septets.
///
/// Fails with `UnencodableChar` on the first character that isn't in either table.
pub fn encode(input: &str, cs: &Charset) -> Gsm7Result<Vec<u8>> {
    let mut ret = Vec::with_capacity(input.len());
    for c in input.chars() {
        if !try_encode_char(c, cs, &mut ret) {
            return Err(Gsm7Error::UnencodableChar(c));
        }
    }
    Ok(ret)
}
/// Work out how many septets `input` would take up, or `None` if it can't be encoded.
pub fn encoded_len(input: &str, cs: &Charset) -> Option<usize> {
    let mut len = 0;
    for c in input.chars() {
        if c == '\u{1b}' {
            return None;
        }
        else if cs.encoder.contains_key(&c) {
            len += 1;
        }
        else if cs.ext_encoder.contains_key(&c) {
            len += 2;
        }
        else {
            return None;
        }
    }
    Some(len)
}
/// Decode a buffer of unpacked septets into a string, failing on anything that has no character
/// assigned to it.
pub fn decode(input: &[u8], cs: &Charset) -> Gsm7Result<String> {
    let mut ret = String::with_capacity(input.len());
    let mut iter = input.iter();
    while let Some(&b) = iter.next() {
        if b == ESCAPE {
            let next = *iter.next().ok_or(Gsm7Error::TruncatedEscape)?;
            let ch = cs.ext_decoder.get(&next)
                .ok_or(Gsm7Error::UnassignedExtSeptet(next))?;
            ret.push(*ch);
        }
        else {
            let ch = cs.decoder.get(&b)
                .ok_or(Gsm7Error::UnassignedSeptet(b))?;
            ret.push(*ch);
        }
    }
    Ok(ret)
}
/// Decode a buffer of unpacked septets into a string.
///
/// This method is lossy, and doesn't complain about stuff that it can't decode:
///
/// - an escaped septet with nothing in the extension table is decoded using the primary table
///   instead, as if the escape wasn't there;
/// - anything else unassigned becomes U+FFFD;
/// - an escaped escape (reserved for a further extension table) is shown as a space;
/// - a trailing escape septet is dropped.
pub fn decode_lossy(input: &[u8], cs: &Charset) -> String {
    let mut ret = String::with_capacity(input.len());
    let mut iter = input.iter();
    while let Some(&b) = iter.next() {
        let (code, ch) = if b == ESCAPE {
            let next = match iter.next() {
                Some(&n) => n,
                None => {
                    warn!("dropping trailing escape septet");
                    break;
                }
            };
            if next == ESCAPE {
                warn!("reserved escape-escape sequence in {} table, using a space", cs.language);
                ret.push(' ');
                continue;
            }
            match cs.ext_decoder.get(&next) {
                Some(&ch) => (next, Some(ch)),
                None => {
                    warn!("extension septet {:#04x} unassigned in {} table, using primary", next, cs.language);
                    (next, cs.decoder.get(&next).cloned())
                }
            }
        }
        else {
            (b, cs.decoder.get(&b).cloned())
        };
        match ch {
            Some(ch) => ret.push(ch),
            None => {
                warn!("septet {:#04x} unassigned in {} table, substituting", code, cs.language);
                ret.push('\u{FFFD}');
            }
        }
    }
    ret
}
fn check_padding(padding: usize) -> Gsm7Result<()> {
    if padding > 6 {
        return Err(Gsm7Error::BadPadding(padding));
    }
    Ok(())
}
/// Pack septets into octets, least significant bit first, after `padding` fill bits.
///
/// The padding is what aligns the septets to a septet boundary after a User Data Header; pass
/// 0 if there isn't one.
pub fn pack_septets(septets: &[u8], padding: usize) -> Gsm7Result<Vec<u8>> {
    check_padding(padding)?;
    let bits = padding + septets.len() * 7;
    let mut ret = vec![0u8; (bits + 7) / 8];
    for (i, s) in septets.iter().enumerate() {
        let pos = padding + i * 7;
        let (idx, shift) = (pos / 8, pos % 8);
        let val = ((s & 0x7F) as u16) << shift;
        ret[idx] |= val as u8;
        if shift > 1 {
            ret[idx + 1] |= (val >> 8) as u8;
        }
    }
    Ok(ret)
}
/// Unpack at most `len` septets from packed octets, skipping `padding` fill bits at the start.
///
/// `len` is needed because a final octet with 7 spare bits is indistinguishable from one holding
/// an extra `@` (septet 0).
pub fn unpack_septets(octets: &[u8], padding: usize, len: usize) -> Gsm7Result<Vec<u8>> {
    check_padding(padding)?;
    let avail = (octets.len() * 8).saturating_sub(padding) / 7;
    let count = ::std::cmp::min(len, avail);
    let mut ret = Vec::with_capacity(count);
    for i in 0..count {
        let pos = padding + i * 7;
        let (idx, shift) = (pos / 8, pos % 8);
        let mut val = (octets[idx] as u16) >> shift;
        if shift > 1 {
            val |= (octets[idx + 1] as u16) << (8 - shift);
        }
        ret.push((val & 0x7F) as u8);
    }
    Ok(ret)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::charset::NationalLanguage;
    #[test]
    fn pack_hellohello() {
        let septets = encode("hellohello", &Charset::default()).unwrap();
        assert_eq!(pack_septets(&septets, 0).unwrap(),
                   vec![0xE8, 0x32, 0x9B, 0xFD, 0x46, 0x97, 0xD9, 0xEC, 0x37]);
    }
    #[test]
    fn pack_with_padding() {
        let septets = encode("hello", &Charset::default()).unwrap();
        let packed = pack_septets(&septets, 1).unwrap();
        assert_eq!(packed, vec![0xD0, 0x65, 0x36, 0xFB, 0x0D]);
        assert_eq!(unpack_septets(&packed, 1, 5).unwrap(), septets);
    }
    #[test]
    fn unpack_all_paddings() {
        let septets: Vec<u8> = (0..23).map(|i| (i * 37 % 128) as u8).collect();
        for padding in 0..7 {
            let packed = pack_septets(&septets, padding).unwrap();
            assert_eq!(unpack_septets(&packed, padding, septets.len()).unwrap(), septets);
        }
    }
    #[test]
    fn unpack_respects_len() {
        let packed = pack_septets(&[0x41; 7], 0).unwrap();
        assert_eq!(packed.len(), 7);
        // 7 octets hold 8 septets' worth of bits.
        assert_eq!(unpack_septets(&packed, 0, 100).unwrap().len(), 8);
        assert_eq!(unpack_septets(&packed, 0, 7).unwrap(), vec![0x41; 7]);
        assert_eq!(unpack_septets(&[], 0, 3).unwrap(), Vec::<u8>::new());
    }
    #[test]
    fn bad_padding() {
        assert!(pack_septets(&[0x41], 7).unwrap_err().is_bad_padding());
        assert!(unpack_septets(&[0x41], 9, 1).unwrap_err().is_bad_padding());
    }
    #[test]
    fn encode_extension() {
        let cs = Charset::default();
        assert_eq!(encode("{", &cs).unwrap(), vec![0x1B, 0x28]);
        assert_eq!(encode("a€", &cs).unwrap(), vec![0x61, 0x1B, 0x65]);
        assert_eq!(encoded_len("a€", &cs), Some(3));
    }
    #[test]
    fn encode_prefers_primary() {
        // CR is in both Gujarati tables.
        let cs = Charset::for_language(NationalLanguage::Gujarati).unwrap();
        assert_eq!(encode("\r", &cs).unwrap(), vec![0x0D]);
        assert_eq!(encode("*", &cs).unwrap(), vec![0x1B, 0x0B]);
        assert_eq!(encode("¡", &cs).unwrap(), vec![0x1B, 0x13]);
    }
    #[test]
    fn encode_failures() {
        let cs = Charset::default();
        match encode("hi ☃", &cs) {
            Err(Gsm7Error::UnencodableChar('☃')) => {},
            x => panic!("unexpected: {:?}", x)
        }
        assert!(encode("\u{1b}", &cs).unwrap_err().is_unencodable_char());
        assert_eq!(encoded_len("☃", &cs), None);
        assert_eq!(encoded_len("\u{1b}", &cs), None);
    }
    #[test]
    fn decode_strict() {
        let cs = Charset::for_language(NationalLanguage::Kannada).unwrap();
        assert_eq!(decode(&[0x61, 0x62, 0x1B, 0x41], &cs).unwrap(), "abA");
        assert!(decode(&[0x00], &cs).unwrap_err().is_unassigned_septet());
        assert!(decode(&[0x1B, 0x7F], &cs).unwrap_err().is_unassigned_ext_septet());
        assert!(decode(&[0x61, 0x1B], &cs).unwrap_err().is_truncated_escape());
    }
    #[test]
    fn decode_lossy_substitutes() {
        let cs = Charset::for_language(NationalLanguage::Kannada).unwrap();
        assert_eq!(decode_lossy(&[0x61, 0x00, 0x62], &cs), "a\u{FFFD}b");
        // No extension character at 0x61, so fall back to the primary table.
        assert_eq!(decode_lossy(&[0x1B, 0x61], &cs), "a");
        assert_eq!(decode_lossy(&[0x61, 0x1B], &cs), "a");
        // Escaped escape is reserved, even though Kannada's extension table lists it.
        assert_eq!(decode_lossy(&[0x61, 0x1B, 0x1B, 0x62], &cs), "a b");
        assert_eq!(decode_lossy(&[0x41, 0x1B, 0x1B, 0x42], &Charset::default()), "A B");
    }
    #[test]
    fn turkish_round_trip() {
        let cs = Charset::for_language(NationalLanguage::Turkish).unwrap();
        let text = "Şişli'de {İstanbul} €5";
        let septets = encode(text, &cs).unwrap();
        assert_eq!(septets.len(), encoded_len(text, &cs).unwrap());
        assert_eq!(decode(&septets, &cs).unwrap(), text);
    }
}
