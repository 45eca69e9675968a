//! Character set tables for the GSM 7-bit alphabet and its national language variants
//! ([3GPP TS 23.038](https://www.3gpp.org/DynaReport/23038.htm)).
//!
//! Every table module (`basic`, `gujarati`, `kannada`, ...) exposes the same four functions:
//!
//! - `new_decoder()`: the primary ("locking shift") table, mapping a septet to a character;
//! - `new_ext_decoder()`: the extension ("single shift") table, used for the septet that follows
//!   an `ESCAPE`;
//! - `new_encoder()` and `new_ext_encoder()`: the inverses of the above.
//!
//! Tables are built on first use and shared for the rest of the process. A missing key means
//! that nothing is assigned at that code point; it doesn't mean "use some default character".
//!
//! When several extension septets decode to the same character, the extension encoder picks the
//! numerically smallest septet.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use num::FromPrimitive;
use crate::errors::*;

/// Mapping from GSM 7-bit septet to character.
pub type Decoder = HashMap<u8, char>;
/// Mapping from character to GSM 7-bit septet.
pub type Encoder = HashMap<char, u8>;

/// The escape septet: the septet after it is looked up in the extension table.
pub const ESCAPE: u8 = 0x1B;

macro_rules! charset_tables {
    ($name:expr, $set:expr, $ext:expr) => {
        /// Returns the mapping table from GSM 7-bit to Unicode.
        pub fn new_decoder() -> &'static $crate::charset::Decoder {
            static TABLE: ::std::sync::OnceLock<$crate::charset::Decoder> = ::std::sync::OnceLock::new();
            TABLE.get_or_init(|| {
                let ret = $set;
                debug!("built {} decoder ({} entries)", $name, ret.len());
                ret
            })
        }
        /// Returns the extension mapping table from GSM 7-bit to Unicode.
        pub fn new_ext_decoder() -> &'static $crate::charset::Decoder {
            static TABLE: ::std::sync::OnceLock<$crate::charset::Decoder> = ::std::sync::OnceLock::new();
            TABLE.get_or_init(|| {
                let ret = $ext;
                debug!("built {} extension decoder ({} entries)", $name, ret.len());
                ret
            })
        }
        /// Returns the mapping table from Unicode to GSM 7-bit.
        pub fn new_encoder() -> &'static $crate::charset::Encoder {
            static TABLE: ::std::sync::OnceLock<$crate::charset::Encoder> = ::std::sync::OnceLock::new();
            TABLE.get_or_init(|| $crate::charset::invert_set(new_decoder()))
        }
        /// Returns the extension mapping table from Unicode to GSM 7-bit.
        ///
        /// Characters reachable from more than one extension septet map to the lowest one.
        pub fn new_ext_encoder() -> &'static $crate::charset::Encoder {
            static TABLE: ::std::sync::OnceLock<$crate::charset::Encoder> = ::std::sync::OnceLock::new();
            TABLE.get_or_init(|| $crate::charset::invert_ext(new_ext_decoder()))
        }
    }
}

pub mod basic;
pub mod gujarati;
pub mod kannada;
pub mod malayalam;
pub mod oriya;
pub mod turkish;

/// Build a decoder from a list of (septet, character) pairs.
pub(crate) fn decoder_from_pairs(pairs: &[(u8, char)]) -> Decoder {
    pairs.iter().cloned().collect()
}
/// Build a decoder from a string of characters, where each character's position is its septet.
pub(crate) fn decoder_from_str(chars: &str) -> Decoder {
    chars.chars()
        .enumerate()
        .map(|(i, ch)| (i as u8, ch))
        .collect()
}
/// Invert a primary decoder.
///
/// Primary tables never map two septets to the same character, so this is lossless.
pub fn invert_set(dec: &Decoder) -> Encoder {
    let mut ret = Encoder::with_capacity(dec.len());
    for (&k, &v) in dec.iter() {
        ret.insert(v, k);
    }
    ret
}
/// Invert an extension decoder, keeping the lowest septet for characters that appear more than
/// once.
pub fn invert_ext(dec: &Decoder) -> Encoder {
    let mut ret = Encoder::with_capacity(dec.len());
    for (&k, &v) in dec.iter() {
        let lower_exists = ret.get(&v).map(|&ko| ko < k).unwrap_or(false);
        if !lower_exists {
            ret.insert(v, k);
        }
    }
    ret
}

/// National language identifiers, as used in the national language shift information elements
/// of a User Data Header.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, is_enum_variant)]
pub enum NationalLanguage {
    Default = 0,
    Turkish = 1,
    Spanish = 2,
    Portuguese = 3,
    Bengali = 4,
    Gujarati = 5,
    Hindi = 6,
    Kannada = 7,
    Malayalam = 8,
    Oriya = 9,
    Punjabi = 10,
    Tamil = 11,
    Telugu = 12,
    Urdu = 13
}
impl NationalLanguage {
    /// Look up a language by its numeric identifier.
    pub fn from_integer(id: u8) -> Gsm7Result<Self> {
        Self::from_u8(id)
            .ok_or(Gsm7Error::UnknownLanguage(id))
    }
    /// The lowercase name of this language.
    pub fn name(&self) -> &'static str {
        use self::NationalLanguage::*;
        match *self {
            Default => "default",
            Turkish => "turkish",
            Spanish => "spanish",
            Portuguese => "portuguese",
            Bengali => "bengali",
            Gujarati => "gujarati",
            Hindi => "hindi",
            Kannada => "kannada",
            Malayalam => "malayalam",
            Oriya => "oriya",
            Punjabi => "punjabi",
            Tamil => "tamil",
            Telugu => "telugu",
            Urdu => "urdu"
        }
    }
}
impl Default for NationalLanguage {
    fn default() -> Self {
        NationalLanguage::Default
    }
}
impl fmt::Display for NationalLanguage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
impl FromStr for NationalLanguage {
    type Err = Gsm7Error;
    fn from_str(s: &str) -> Gsm7Result<Self> {
        let lower = s.trim().to_lowercase();
        (0..=13)
            .filter_map(NationalLanguage::from_u8)
            .find(|l| l.name() == lower)
            .ok_or_else(|| Gsm7Error::UnknownLanguageName(s.into()))
    }
}

/// The four tables making up one national language character set.
#[derive(Debug, Copy, Clone)]
pub struct Charset {
    pub language: NationalLanguage,
    pub decoder: &'static Decoder,
    pub ext_decoder: &'static Decoder,
    pub encoder: &'static Encoder,
    pub ext_encoder: &'static Encoder
}
impl Charset {
    /// Get the tables for a given language, if this crate has them.
    pub fn for_language(language: NationalLanguage) -> Gsm7Result<Self> {
        use self::NationalLanguage::*;
        let (decoder, ext_decoder, encoder, ext_encoder) = match language {
            Default => (basic::new_decoder(), basic::new_ext_decoder(),
                        basic::new_encoder(), basic::new_ext_encoder()),
            Turkish => (turkish::new_decoder(), turkish::new_ext_decoder(),
                        turkish::new_encoder(), turkish::new_ext_encoder()),
            Gujarati => (gujarati::new_decoder(), gujarati::new_ext_decoder(),
                         gujarati::new_encoder(), gujarati::new_ext_encoder()),
            Kannada => (kannada::new_decoder(), kannada::new_ext_decoder(),
                        kannada::new_encoder(), kannada::new_ext_encoder()),
            Malayalam => (malayalam::new_decoder(), malayalam::new_ext_decoder(),
                          malayalam::new_encoder(), malayalam::new_ext_encoder()),
            Oriya => (oriya::new_decoder(), oriya::new_ext_decoder(),
                      oriya::new_encoder(), oriya::new_ext_encoder()),
            x => return Err(Gsm7Error::UnsupportedLanguage(x))
        };
        Ok(Charset { language, decoder, ext_decoder, encoder, ext_encoder })
    }
}
impl Default for Charset {
    /// The GSM 7-bit default alphabet.
    fn default() -> Self {
        Charset {
            language: NationalLanguage::Default,
            decoder: basic::new_decoder(),
            ext_decoder: basic::new_ext_decoder(),
            encoder: basic::new_encoder(),
            ext_encoder: basic::new_ext_encoder()
        }
    }
}

/// Checks that hold for every table module.
#[cfg(test)]
pub(crate) fn check_tables(dec: &Decoder, ext: &Decoder, enc: &Encoder, ext_enc: &Encoder) {
    assert_eq!(dec.len(), enc.len());
    for (&b, &r) in dec.iter() {
        assert!(b < 0x80, "septet {:#x} out of range", b);
        assert_eq!(enc[&r], b, "primary round trip failed for {:?}", r);
    }
    assert_eq!(dec[&ESCAPE], '\u{1b}');
    for (&b, &r) in ext.iter() {
        assert!(b < 0x80, "extension septet {:#x} out of range", b);
        let lowest = ext.iter()
            .filter(|&(_, &v)| v == r)
            .map(|(&k, _)| k)
            .min()
            .unwrap();
        assert_eq!(ext_enc[&r], lowest, "extension tie-break failed for {:?}", r);
    }
    assert_eq!(ext_enc.len(), ext.values().collect::<::std::collections::HashSet<_>>().len());
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn invert_ext_keeps_lowest() {
        let dec: Decoder = vec![(0x15, '¡'), (0x13, '¡'), (0x14, '^'), (0x18, '*'), (0x0B, '*')]
            .into_iter()
            .collect();
        let enc = invert_ext(&dec);
        assert_eq!(enc.len(), 3);
        assert_eq!(enc[&'¡'], 0x13);
        assert_eq!(enc[&'*'], 0x0B);
        assert_eq!(enc[&'^'], 0x14);
    }
    #[test]
    fn decoder_from_str_is_positional() {
        let dec = decoder_from_str("@£$");
        assert_eq!(dec.len(), 3);
        assert_eq!(dec[&0], '@');
        assert_eq!(dec[&2], '$');
    }
    #[test]
    fn language_ids() {
        assert_eq!(NationalLanguage::from_integer(0).unwrap(), NationalLanguage::Default);
        assert_eq!(NationalLanguage::from_integer(5).unwrap(), NationalLanguage::Gujarati);
        assert_eq!(NationalLanguage::from_integer(13).unwrap(), NationalLanguage::Urdu);
        match NationalLanguage::from_integer(14) {
            Err(Gsm7Error::UnknownLanguage(14)) => {},
            x => panic!("unexpected: {:?}", x)
        }
        assert!(NationalLanguage::Turkish.is_turkish());
    }
    #[test]
    fn language_names() {
        assert_eq!("Kannada".parse::<NationalLanguage>().unwrap(), NationalLanguage::Kannada);
        assert_eq!(" oriya ".parse::<NationalLanguage>().unwrap(), NationalLanguage::Oriya);
        assert_eq!(NationalLanguage::Malayalam.to_string(), "malayalam");
        assert!("klingon".parse::<NationalLanguage>().is_err());
    }
    #[test]
    fn concurrent_first_access() {
        use std::thread;
        let handles = (0..8)
            .map(|_| thread::spawn(|| gujarati::new_ext_encoder() as *const Encoder as usize))
            .collect::<Vec<_>>();
        let tables = handles.into_iter()
            .map(|h| h.join().unwrap() as *const Encoder)
            .collect::<Vec<_>>();
        for &t in tables.iter() {
            assert!(::std::ptr::eq(t, gujarati::new_ext_encoder()));
        }
        assert_eq!(gujarati::new_ext_encoder()[&'¡'], 0x13);
        assert_eq!(gujarati::new_ext_encoder().len(), gujarati::new_ext_decoder().len() - 2);
    }
    #[test]
    fn charset_lookup() {
        let cs = Charset::for_language(NationalLanguage::Gujarati).unwrap();
        assert_eq!(cs.decoder[&0x00], '\u{0a81}');
        assert_eq!(cs.ext_encoder[&'¡'], 0x13);
        assert_eq!(Charset::default().encoder[&'@'], 0x00);
        match Charset::for_language(NationalLanguage::Hindi) {
            Err(Gsm7Error::UnsupportedLanguage(NationalLanguage::Hindi)) => {},
            x => panic!("unexpected: {:?}", x)
        }
    }
}
