//! The GSM 7-bit default alphabet and its extension table.
//!
//! This is what you get when a message doesn't declare a national language.

use super::{decoder_from_pairs, decoder_from_str};

charset_tables!("default", decoder_from_str(BASIC_SET), decoder_from_pairs(&BASIC_EXT));

static BASIC_SET: &str = concat!(
    "@£$¥èéùìòÇ\nØø\rÅåΔ_ΦΓΛΩΠΨΣΘΞ\x1bÆæßÉ !\"#¤%&'()*+,-./0123456789:;<=>?",
    "¡ABCDEFGHIJKLMNOPQRSTUVWXYZÄÖÑÜ§¿abcdefghijklmnopqrstuvwxyzäöñüà"
);
static BASIC_EXT: [(u8, char); 10] = [
    (0x0A, '\u{0c}'),
    (0x14, '^'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2F, '\\'),
    (0x3C, '['),
    (0x3D, '~'),
    (0x3E, ']'),
    (0x40, '|'),
    (0x65, '\u{20AC}')
];
