//! Error handling.
use std::io;
use crate::charset::NationalLanguage;

#[derive(Fail, Debug, is_enum_variant)]
pub enum Gsm7Error {
    #[fail(display = "Unknown national language identifier: {}", _0)]
    UnknownLanguage(u8),
    #[fail(display = "Unknown national language name: {}", _0)]
    UnknownLanguageName(String),
    #[fail(display = "No character tables available for language: {}", _0)]
    UnsupportedLanguage(NationalLanguage),
    #[fail(display = "Character {:?} cannot be represented in the GSM 7-bit alphabet", _0)]
    UnencodableChar(char),
    #[fail(display = "No character assigned to septet {:#04x}", _0)]
    UnassignedSeptet(u8),
    #[fail(display = "No character assigned to extension septet {:#04x}", _0)]
    UnassignedExtSeptet(u8),
    #[fail(display = "Escape septet at end of input")]
    TruncatedEscape,
    #[fail(display = "Invalid hex string")]
    InvalidHex,
    #[fail(display = "Padding of {} bits is out of range (0-6)", _0)]
    BadPadding(usize),
    #[fail(display = "An I/O error occurred: {}", _0)]
    IoError(#[cause] io::Error)
}
impl From<io::Error> for Gsm7Error {
    fn from(e: io::Error) -> Gsm7Error {
        Gsm7Error::IoError(e)
    }
}
pub type Gsm7Result<T> = Result<T, Gsm7Error>;
