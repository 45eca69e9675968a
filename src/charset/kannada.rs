//! Kannada national language tables.

use super::decoder_from_pairs;

charset_tables!("kannada", decoder_from_pairs(&KANNADA_SET), decoder_from_pairs(&KANNADA_EXT));

static KANNADA_SET: [(u8, char); 121] = [
    (0x01, '\u{0c82}'),
    (0x02, '\u{0c83}'),
    (0x03, '\u{0c85}'),
    (0x04, '\u{0c86}'),
    (0x05, '\u{0c87}'),
    (0x06, '\u{0c88}'),
    (0x07, '\u{0c89}'),
    (0x08, '\u{0c8a}'),
    (0x09, '\u{0c8b}'),
    (0x0A, '\n'),
    (0x0B, '\u{0c8c}'),
    (0x0D, '\r'),
    (0x0E, '\u{0c8e}'),
    (0x0F, '\u{0c8f}'),
    (0x10, '\u{0c90}'),
    (0x12, '\u{0c92}'),
    (0x13, '\u{0c93}'),
    (0x14, '\u{0c94}'),
    (0x15, '\u{0c95}'),
    (0x16, '\u{0c96}'),
    (0x17, '\u{0c97}'),
    (0x18, '\u{0c98}'),
    (0x19, '\u{0c99}'),
    (0x1A, '\u{0c9a}'),
    (0x1B, '\u{1b}'),
    (0x1C, '\u{0c9b}'),
    (0x1D, '\u{0c9c}'),
    (0x1E, '\u{0c9d}'),
    (0x1F, '\u{0c9e}'),
    (0x20, ' '),
    (0x21, '!'),
    (0x22, '\u{0c9f}'),
    (0x23, '\u{0ca0}'),
    (0x24, '\u{0ca1}'),
    (0x25, '\u{0ca2}'),
    (0x26, '\u{0ca3}'),
    (0x27, '\u{0ca4}'),
    (0x28, ')'),
    (0x29, '('),
    (0x2A, '\u{0ca5}'),
    (0x2B, '\u{0ca6}'),
    (0x2C, ','),
    (0x2D, '\u{0ca7}'),
    (0x2E, '.'),
    (0x2F, '\u{0ca8}'),
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
    (0x3D, '\u{0caa}'),
    (0x3E, '\u{0cab}'),
    (0x3F, '?'),
    (0x40, '\u{0cac}'),
    (0x41, '\u{0cad}'),
    (0x42, '\u{0cae}'),
    (0x43, '\u{0caf}'),
    (0x44, '\u{0cb0}'),
    (0x45, '\u{0cb1}'),
    (0x46, '\u{0cb2}'),
    (0x47, '\u{0cb3}'),
    (0x49, '\u{0cb5}'),
    (0x4A, '\u{0cb6}'),
    (0x4B, '\u{0cb7}'),
    (0x4C, '\u{0cb8}'),
    (0x4D, '\u{0cb9}'),
    (0x4E, '\u{0cbc}'),
    (0x4F, '\u{0cbd}'),
    (0x50, '\u{0cbe}'),
    (0x51, '\u{0cbf}'),
    (0x52, '\u{0cc0}'),
    (0x53, '\u{0cc1}'),
    (0x54, '\u{0cc2}'),
    (0x55, '\u{0cc3}'),
    (0x56, '\u{0cc4}'),
    (0x58, '\u{0cc6}'),
    (0x59, '\u{0cc7}'),
    (0x5A, '\u{0cc8}'),
    (0x5C, '\u{0cca}'),
    (0x5D, '\u{0ccb}'),
    (0x5E, '\u{0ccc}'),
    (0x5F, '\u{0ccd}'),
    (0x60, '\u{0cd5}'),
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
    (0x7B, '\u{0cd6}'),
    (0x7C, '\u{0ce0}'),
    (0x7D, '\u{0ce1}'),
    (0x7E, '\u{0ce2}'),
    (0x7F, '\u{0ce3}')
];
static KANNADA_EXT: [(u8, char); 75] = [
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
    (0x1C, '\u{0ce6}'),
    (0x1D, '\u{0ce7}'),
    (0x1E, '\u{0ce8}'),
    (0x1F, '\u{0ce9}'),
    (0x20, '\u{0cea}'),
    (0x21, '\u{0ceb}'),
    (0x22, '\u{0cec}'),
    (0x23, '\u{0ced}'),
    (0x24, '\u{0cee}'),
    (0x25, '\u{0cef}'),
    (0x26, '\u{0cde}'),
    (0x27, '\u{0cf1}'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2A, '\u{0cf2}'),
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
        assert_eq!(new_decoder().len(), KANNADA_SET.len());
        assert_eq!(new_ext_decoder().len(), KANNADA_EXT.len());
        check_tables(new_decoder(), new_ext_decoder(), new_encoder(), new_ext_encoder());
    }
    #[test]
    fn latin_lowercase() {
        assert_eq!(new_decoder()[&0x61], 'a');
        assert_eq!(new_encoder()[&'a'], 0x61);
        assert_eq!(new_ext_decoder()[&0x41], 'A');
    }
    #[test]
    fn gaps() {
        assert!(new_decoder().get(&0x00).is_none());
        assert!(new_decoder().get(&0x0C).is_none());
        assert_eq!(new_ext_decoder()[&0x26], '\u{0cde}');
        assert_eq!(new_ext_encoder()[&'¡'], 0x13);
    }
}
