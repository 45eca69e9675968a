//! Gujarati national language locking and single shift tables (3GPP TS 23.038, A.3.5 and
//! A.2.5).
//!
//! The Gujarati letters live in the primary table; the extension table carries the Gujarati
//! digits, the danda marks, the Latin capitals and the usual GSM punctuation.

use super::decoder_from_pairs;

charset_tables!("gujarati", decoder_from_pairs(&GUJARATI_SET), decoder_from_pairs(&GUJARATI_EXT));

static GUJARATI_SET: [(u8, char); 121] = [
    (0x00, '\u{0a81}'),
    (0x01, '\u{0a82}'),
    (0x02, '\u{0a83}'),
    (0x03, '\u{0a85}'),
    (0x04, '\u{0a86}'),
    (0x05, '\u{0a87}'),
    (0x06, '\u{0a88}'),
    (0x07, '\u{0a89}'),
    (0x08, '\u{0a8a}'),
    (0x09, '\u{0a8b}'),
    (0x0A, '\n'),
    (0x0B, '\u{0a8c}'),
    (0x0C, '\u{0a8d}'),
    (0x0D, '\r'),
    (0x0F, '\u{0a8f}'),
    (0x10, '\u{0a90}'),
    (0x11, '\u{0a91}'),
    (0x13, '\u{0a93}'),
    (0x14, '\u{0a94}'),
    (0x15, '\u{0a95}'),
    (0x16, '\u{0a96}'),
    (0x17, '\u{0a97}'),
    (0x18, '\u{0a98}'),
    (0x19, '\u{0a99}'),
    (0x1A, '\u{0a9a}'),
    (0x1B, '\u{1b}'),
    (0x1C, '\u{0a9b}'),
    (0x1D, '\u{0a9c}'),
    (0x1E, '\u{0a9d}'),
    (0x1F, '\u{0a9e}'),
    (0x20, ' '),
    (0x21, '!'),
    (0x22, '\u{0a9f}'),
    (0x23, '\u{0aa0}'),
    (0x24, '\u{0aa1}'),
    (0x25, '\u{0aa2}'),
    (0x26, '\u{0aa3}'),
    (0x27, '\u{0aa4}'),
    (0x28, ')'),
    (0x29, '('),
    (0x2A, '\u{0aa5}'),
    (0x2B, '\u{0aa6}'),
    (0x2C, ','),
    (0x2D, '\u{0aa7}'),
    (0x2E, '.'),
    (0x2F, '\u{0aa8}'),
    (0x30, '0'),
    (0x31, '1'),
    (0x32, '2'),
    (0x33, '3'),
    (0x34, '4'),
    (0x35, '5'),
    (0x36, '6'),
    (0x37, '7'),
    (0x38, '8'),
    (0x39, '9'),
    (0x3A, ':'),
    (0x3B, ';'),
    (0x3D, '\u{0aaa}'),
    (0x3E, '\u{0aab}'),
    (0x3F, '?'),
    (0x40, '\u{0aac}'),
    (0x41, '\u{0aad}'),
    (0x42, '\u{0aae}'),
    (0x43, '\u{0aaf}'),
    (0x44, '\u{0ab0}'),
    (0x46, '\u{0ab2}'),
    (0x47, '\u{0ab3}'),
    (0x49, '\u{0ab5}'),
    (0x4A, '\u{0ab6}'),
    (0x4B, '\u{0ab7}'),
    (0x4C, '\u{0ab8}'),
    (0x4D, '\u{0ab9}'),
    (0x4E, '\u{0abc}'),
    (0x4F, '\u{0abd}'),
    (0x50, '\u{0abe}'),
    (0x51, '\u{0abf}'),
    (0x52, '\u{0ac0}'),
    (0x53, '\u{0ac1}'),
    (0x54, '\u{0ac2}'),
    (0x55, '\u{0ac3}'),
    (0x56, '\u{0ac4}'),
    (0x57, '\u{0ac5}'),
    (0x59, '\u{0ac7}'),
    (0x5A, '\u{0ac8}'),
    (0x5B, '\u{0ac9}'),
    (0x5D, '\u{0acb}'),
    (0x5E, '\u{0acc}'),
    (0x5F, '\u{0acd}'),
    (0x60, '\u{0ad0}'),
    (0x61, 'a'),
    (0x62, 'b'),
    (0x63, 'c'),
    (0x64, 'd'),
    (0x65, 'e'),
    (0x66, 'f'),
    (0x67, 'g'),
    (0x68, 'h'),
    (0x69, 'i'),
    (0x6A, 'j'),
    (0x6B, 'k'),
    (0x6C, 'l'),
    (0x6D, 'm'),
    (0x6E, 'n'),
    (0x6F, 'o'),
    (0x70, 'p'),
    (0x71, 'q'),
    (0x72, 'r'),
    (0x73, 's'),
    (0x74, 't'),
    (0x75, 'u'),
    (0x76, 'v'),
    (0x77, 'w'),
    (0x78, 'x'),
    (0x79, 'y'),
    (0x7A, 'z'),
    (0x7B, '\u{0ae0}'),
    (0x7C, '\u{0ae1}'),
    (0x7D, '\u{0ae2}'),
    (0x7E, '\u{0ae3}'),
    (0x7F, '\u{0af1}')
];
static GUJARATI_EXT: [(u8, char); 72] = [
    (0x00, '@'),
    (0x01, '£'),
    (0x02, '$'),
    (0x03, '¥'),
    (0x04, '¿'),
    (0x05, '"'),
    (0x06, '¤'),
    (0x07, '%'),
    (0x08, '&'),
    (0x09, '\''),
    (0x0A, '\u{0c}'),
    (0x0B, '*'),
    (0x0C, '+'),
    (0x0D, '\r'),
    (0x0E, '-'),
    (0x0F, '/'),
    (0x10, '<'),
    (0x11, '='),
    (0x12, '>'),
    (0x13, '¡'),
    (0x14, '^'),
    (0x15, '¡'),
    (0x16, '_'),
    (0x17, '#'),
    (0x18, '*'),
    (0x19, '\u{0964}'),
    (0x1A, '\u{0965}'),
    (0x1B, '\u{1b}'),
    (0x1C, '\u{0ae6}'),
    (0x1D, '\u{0ae7}'),
    (0x1E, '\u{0ae8}'),
    (0x1F, '\u{0ae9}'),
    (0x20, '\u{0aea}'),
    (0x21, '\u{0aeb}'),
    (0x22, '\u{0aec}'),
    (0x23, '\u{0aed}'),
    (0x24, '\u{0aee}'),
    (0x25, '\u{0aef}'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2F, '\\'),
    (0x3C, '['),
    (0x3D, '~'),
    (0x3E, ']'),
    (0x40, '|'),
    (0x41, 'A'),
    (0x42, 'B'),
    (0x43, 'C'),
    (0x44, 'D'),
    (0x45, 'E'),
    (0x46, 'F'),
    (0x47, 'G'),
    (0x48, 'H'),
    (0x49, 'I'),
    (0x4A, 'J'),
    (0x4B, 'K'),
    (0x4C, 'L'),
    (0x4D, 'M'),
    (0x4E, 'N'),
    (0x4F, 'O'),
    (0x50, 'P'),
    (0x51, 'Q'),
    (0x52, 'R'),
    (0x53, 'S'),
    (0x54, 'T'),
    (0x55, 'U'),
    (0x56, 'V'),
    (0x57, 'W'),
    (0x58, 'X'),
    (0x59, 'Y'),
    (0x5A, 'Z'),
    (0x65, '€')
];

#[cfg(test)]
mod test {
    use super::*;
    use crate::charset::check_tables;
    #[test]
    fn tables_consistent() {
        assert_eq!(new_decoder().len(), GUJARATI_SET.len());
        assert_eq!(new_ext_decoder().len(), GUJARATI_EXT.len());
        check_tables(new_decoder(), new_ext_decoder(), new_encoder(), new_ext_encoder());
    }
    #[test]
    fn inverted_exclamation_uses_lowest_septet() {
        let ext = new_ext_decoder();
        assert_eq!(ext[&0x13], '¡');
        assert_eq!(ext[&0x15], '¡');
        assert_eq!(new_ext_encoder()[&'¡'], 0x13);
        assert_eq!(new_ext_encoder()[&'*'], 0x0B);
        assert_eq!(new_ext_encoder().len(), new_ext_decoder().len() - 2);
    }
    #[test]
    fn letters() {
        assert_eq!(new_decoder()[&0x00], '\u{0a81}');
        assert_eq!(new_encoder()[&'\u{0af1}'], 0x7F);
        assert_eq!(new_ext_decoder()[&0x1C], '\u{0ae6}');
        assert!(new_decoder().get(&0x0E).is_none());
    }
}
