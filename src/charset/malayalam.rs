//! Malayalam national language tables.
//!
//! The extension table additionally carries the Malayalam number signs at 0x26 onwards.

use super::decoder_from_pairs;

charset_tables!("malayalam", decoder_from_pairs(&MALAYALAM_SET), decoder_from_pairs(&MALAYALAM_EXT));

static MALAYALAM_SET: [(u8, char); 121] = [
    (0x01, '\u{0d02}'),
    (0x02, '\u{0d03}'),
    (0x03, '\u{0d05}'),
    (0x04, '\u{0d06}'),
    (0x05, '\u{0d07}'),
    (0x06, '\u{0d08}'),
    (0x07, '\u{0d09}'),
    (0x08, '\u{0d0a}'),
    (0x09, '\u{0d0b}'),
    (0x0A, '\n'),
    (0x0B, '\u{0d0c}'),
    (0x0D, '\r'),
    (0x0E, '\u{0d0e}'),
    (0x0F, '\u{0d0f}'),
    (0x10, '\u{0d10}'),
    (0x12, '\u{0d12}'),
    (0x13, '\u{0d13}'),
    (0x14, '\u{0d14}'),
    (0x15, '\u{0d15}'),
    (0x16, '\u{0d16}'),
    (0x17, '\u{0d17}'),
    (0x18, '\u{0d18}'),
    (0x19, '\u{0d19}'),
    (0x1A, '\u{0d1a}'),
    (0x1B, '\u{1b}'),
    (0x1C, '\u{0d1b}'),
    (0x1D, '\u{0d1c}'),
    (0x1E, '\u{0d1d}'),
    (0x1F, '\u{0d1e}'),
    (0x20, ' '),
    (0x21, '!'),
    (0x22, '\u{0d1f}'),
    (0x23, '\u{0d20}'),
    (0x24, '\u{0d21}'),
    (0x25, '\u{0d22}'),
    (0x26, '\u{0d23}'),
    (0x27, '\u{0d24}'),
    (0x28, ')'),
    (0x29, '('),
    (0x2A, '\u{0d25}'),
    (0x2B, '\u{0d26}'),
    (0x2C, ','),
    (0x2D, '\u{0d27}'),
    (0x2E, '.'),
    (0x2F, '\u{0d28}'),
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
    (0x3D, '\u{0d2a}'),
    (0x3E, '\u{0d2b}'),
    (0x3F, '?'),
    (0x40, '\u{0d2c}'),
    (0x41, '\u{0d2d}'),
    (0x42, '\u{0d2e}'),
    (0x43, '\u{0d2f}'),
    (0x44, '\u{0d30}'),
    (0x45, '\u{0d31}'),
    (0x46, '\u{0d32}'),
    (0x47, '\u{0d33}'),
    (0x48, '\u{0d34}'),
    (0x49, '\u{0d35}'),
    (0x4A, '\u{0d36}'),
    (0x4B, '\u{0d37}'),
    (0x4C, '\u{0d38}'),
    (0x4D, '\u{0d39}'),
    (0x4F, '\u{0d3d}'),
    (0x50, '\u{0d3e}'),
    (0x51, '\u{0d3f}'),
    (0x52, '\u{0d40}'),
    (0x53, '\u{0d41}'),
    (0x54, '\u{0d42}'),
    (0x55, '\u{0d43}'),
    (0x56, '\u{0d44}'),
    (0x58, '\u{0d46}'),
    (0x59, '\u{0d47}'),
    (0x5A, '\u{0d48}'),
    (0x5C, '\u{0d4a}'),
    (0x5D, '\u{0d4b}'),
    (0x5E, '\u{0d4c}'),
    (0x5F, '\u{0d4d}'),
    (0x60, '\u{0d57}'),
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
    (0x7B, '\u{0d60}'),
    (0x7C, '\u{0d61}'),
    (0x7D, '\u{0d62}'),
    (0x7E, '\u{0d63}'),
    (0x7F, '\u{0d79}')
];
static MALAYALAM_EXT: [(u8, char); 84] = [
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
    (0x1C, '\u{0d66}'),
    (0x1D, '\u{0d67}'),
    (0x1E, '\u{0d68}'),
    (0x1F, '\u{0d69}'),
    (0x20, '\u{0d6a}'),
    (0x21, '\u{0d6b}'),
    (0x22, '\u{0d6c}'),
    (0x23, '\u{0d6d}'),
    (0x24, '\u{0d6e}'),
    (0x25, '\u{0d6f}'),
    (0x26, '\u{0d70}'),
    (0x27, '\u{0d71}'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2A, '\u{0d72}'),
    (0x2B, '\u{0d73}'),
    (0x2C, '\u{0d74}'),
    (0x2D, '\u{0d75}'),
    (0x2E, '\u{0d7a}'),
    (0x2F, '\\'),
    (0x30, '\u{0d7b}'),
    (0x31, '\u{0d7c}'),
    (0x32, '\u{0d7d}'),
    (0x33, '\u{0d7e}'),
    (0x34, '\u{0d7f}'),
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
