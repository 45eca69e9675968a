//! Oriya national language tables.

use super::decoder_from_pairs;

charset_tables!("oriya", decoder_from_pairs(&ORIYA_SET), decoder_from_pairs(&ORIYA_EXT));

static ORIYA_SET: [(u8, char); 117] = [
    (0x00, '\u{0b01}'),
    (0x01, '\u{0b02}'),
    (0x02, '\u{0b03}'),
    (0x03, '\u{0b05}'),
    (0x04, '\u{0b06}'),
    (0x05, '\u{0b07}'),
    (0x06, '\u{0b08}'),
    (0x07, '\u{0b09}'),
    (0x08, '\u{0b0a}'),
    (0x09, '\u{0b0b}'),
    (0x0A, '\n'),
    (0x0B, '\u{0b0c}'),
    (0x0D, '\r'),
    (0x0F, '\u{0b0f}'),
    (0x10, '\u{0b10}'),
    (0x13, '\u{0b13}'),
    (0x14, '\u{0b14}'),
    (0x15, '\u{0b15}'),
    (0x16, '\u{0b16}'),
    (0x17, '\u{0b17}'),
    (0x18, '\u{0b18}'),
    (0x19, '\u{0b19}'),
    (0x1A, '\u{0b1a}'),
    (0x1B, '\u{1b}'),
    (0x1C, '\u{0b1b}'),
    (0x1D, '\u{0b1c}'),
    (0x1E, '\u{0b1d}'),
    (0x1F, '\u{0b1e}'),
    (0x20, ' '),
    (0x21, '!'),
    (0x22, '\u{0b1f}'),
    (0x23, '\u{0b20}'),
    (0x24, '\u{0b21}'),
    (0x25, '\u{0b22}'),
    (0x26, '\u{0b23}'),
    (0x27, '\u{0b24}'),
    (0x28, ')'),
    (0x29, '('),
    (0x2A, '\u{0b25}'),
    (0x2B, '\u{0b26}'),
    (0x2C, ','),
    (0x2D, '\u{0b27}'),
    (0x2E, '.'),
    (0x2F, '\u{0b28}'),
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
    (0x3D, '\u{0b2a}'),
    (0x3E, '\u{0b2b}'),
    (0x3F, '?'),
    (0x40, '\u{0b2c}'),
    (0x41, '\u{0b2d}'),
    (0x42, '\u{0b2e}'),
    (0x43, '\u{0b2f}'),
    (0x44, '\u{0b30}'),
    (0x46, '\u{0b32}'),
    (0x47, '\u{0b33}'),
    (0x49, '\u{0b35}'),
    (0x4A, '\u{0b36}'),
    (0x4B, '\u{0b37}'),
    (0x4C, '\u{0b38}'),
    (0x4D, '\u{0b39}'),
    (0x4E, '\u{0b3c}'),
    (0x4F, '\u{0b3d}'),
    (0x50, '\u{0b3e}'),
    (0x51, '\u{0b3f}'),
    (0x52, '\u{0b40}'),
    (0x53, '\u{0b41}'),
    (0x54, '\u{0b42}'),
    (0x55, '\u{0b43}'),
    (0x56, '\u{0b44}'),
    (0x59, '\u{0b47}'),
    (0x5A, '\u{0b48}'),
    (0x5D, '\u{0b4b}'),
    (0x5E, '\u{0b4c}'),
    (0x5F, '\u{0b4d}'),
    (0x60, '\u{0b56}'),
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
    (0x7B, '\u{0b57}'),
    (0x7C, '\u{0b60}'),
    (0x7D, '\u{0b61}'),
    (0x7E, '\u{0b62}'),
    (0x7F, '\u{0b63}')
];
static ORIYA_EXT: [(u8, char); 77] = [
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
    (0x1C, '\u{0b66}'),
    (0x1D, '\u{0b67}'),
    (0x1E, '\u{0b68}'),
    (0x1F, '\u{0b69}'),
    (0x20, '\u{0b6a}'),
    (0x21, '\u{0b6b}'),
    (0x22, '\u{0b6c}'),
    (0x23, '\u{0b6d}'),
    (0x24, '\u{0b6e}'),
    (0x25, '\u{0b6f}'),
    (0x26, '\u{0b5c}'),
    (0x27, '\u{0b5d}'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2A, '\u{0b5f}'),
    (0x2B, '\u{0b70}'),
    (0x2C, '\u{0b71}'),
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
        assert_eq!(new_decoder().len(), ORIYA_SET.len());
        assert_eq!(new_ext_decoder().len(), ORIYA_EXT.len());
        check_tables(new_decoder(), new_ext_decoder(), new_encoder(), new_ext_encoder());
    }
    #[test]
    fn sparse_primary() {
        assert_eq!(new_decoder().len(), 117);
        assert_eq!(new_encoder().len(), 117);
        assert_eq!(new_decoder()[&0x00], '\u{0b01}');
        for b in [0x0Cu8, 0x0E, 0x11, 0x12, 0x3C].iter() {
            assert!(new_decoder().get(b).is_none());
        }
    }
    #[test]
    fn extension() {
        assert_eq!(new_ext_decoder()[&0x27], '\u{0b5d}');
        assert_eq!(new_ext_encoder()[&'¡'], 0x13);
        assert_eq!(new_ext_encoder()[&'\\'], 0x2F);
    }
}
