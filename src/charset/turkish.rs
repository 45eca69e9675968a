//! Turkish national language tables (3GPP TS 23.038, A.2.1 and A.3.1).
//!
//! Note that the single shift table swaps the meaning of 0x0D: escaped, it decodes to a line
//! feed rather than a carriage return.

use super::{decoder_from_pairs, decoder_from_str};

charset_tables!("turkish", decoder_from_str(TURKISH_SET), decoder_from_pairs(&TURKISH_EXT));

/// The locking shift table, in string form; a character's position is its septet.
static TURKISH_SET: &str = concat!(
    "@£$¥€éùıòÇ\nĞğ\rÅåΔ_ΦΓΛΩΠΨΣΘΞ\x1bŞşßÉ !\"#¤%&'()*+,-./0123456789:;<=>?",
    "İABCDEFGHIJKLMNOPQRSTUVWXYZÄÖÑÜ§çabcdefghijklmnopqrstuvwxyzäöñüà"
);
static TURKISH_EXT: [(u8, char); 18] = [
    (0x0A, '\u{0c}'),
    (0x0D, '\n'),
    (0x14, '^'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2F, '\\'),
    (0x3C, '['),
    (0x3D, '~'),
    (0x3E, ']'),
    (0x40, '|'),
    (0x47, 'Ğ'),
    (0x49, 'İ'),
    (0x53, 'Ş'),
    (0x63, 'ç'),
    (0x65, '€'),
    (0x67, 'ğ'),
    (0x69, 'ı'),
    (0x73, 'ş')
];

#[cfg(test)]
mod test {
    use super::*;
    use crate::charset::check_tables;
    #[test]
    fn tables_consistent() {
        assert_eq!(new_decoder().len(), TURKISH_SET.chars().count());
        assert_eq!(new_ext_decoder().len(), TURKISH_EXT.len());
        assert_eq!(new_decoder().len(), 128);
        check_tables(new_decoder(), new_ext_decoder(), new_encoder(), new_ext_encoder());
    }
    #[test]
    fn at_sign() {
        assert_eq!(new_decoder()[&0x00], '@');
        assert_eq!(new_encoder()[&'@'], 0x00);
    }
    #[test]
    fn line_endings() {
        assert_eq!(new_decoder()[&0x0A], '\n');
        assert_eq!(new_decoder()[&0x0D], '\r');
        assert_eq!(new_ext_decoder()[&0x0D], '\n');
        assert_eq!(new_ext_encoder()[&'\n'], 0x0D);
        assert_eq!(new_encoder()[&'\n'], 0x0A);
    }
    #[test]
    fn turkish_letters() {
        assert_eq!(new_decoder()[&0x40], 'İ');
        assert_eq!(new_decoder()[&0x60], 'ç');
        assert_eq!(new_encoder()[&'ı'], 0x07);
        assert_eq!(new_ext_encoder()[&'ş'], 0x73);
        assert_eq!(new_ext_encoder()[&'İ'], 0x49);
        assert_eq!(new_ext_encoder().len(), new_ext_decoder().len());
    }
}
