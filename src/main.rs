//! Line-oriented GSM 7-bit converter.
//!
//! `gsm7-charset encode [language]` reads lines of text on stdin and prints them as packed
//! septets in hex; `gsm7-charset decode [language]` does the opposite.

#[macro_use] extern crate log;
#[macro_use] extern crate derive_is_enum_variant;

use std::env;
use std::io::prelude::*;
use std::process;
use gsm7_charset::charset::{Charset, NationalLanguage};
use gsm7_charset::errors::*;
use gsm7_charset::gsm7;
use gsm7_charset::util::HexData;

/// Padding character for a final octet with 7 spare bits.
const CR: u8 = 0x0D;

#[derive(Debug, Copy, Clone, PartialEq, Eq, is_enum_variant)]
enum Mode {
    Encode,
    Decode
}
fn usage() -> ! {
    eprintln!("usage: gsm7-charset <encode|decode> [language]");
    process::exit(2);
}
/// Add CR padding so the receiver can tell where the septets end (TS 23.038 6.1.2.1.1).
///
/// A final octet with 7 spare bits gets a CR in them; text ending in CR on an octet boundary
/// gets a second CR.
fn add_cr_padding(septets: &mut Vec<u8>) {
    let on_boundary_with_cr = septets.len() % 8 == 0 && septets.last() == Some(&CR);
    if septets.len() % 8 == 7 || on_boundary_with_cr {
        septets.push(CR);
    }
}
/// Undo `add_cr_padding`.
///
/// Text of 8n+1 septets that really ends in two CRs comes back with only one.
fn strip_cr_padding(septets: &mut Vec<u8>) {
    let len = septets.len();
    let padded = match len % 8 {
        0 => septets.last() == Some(&CR),
        1 => len >= 2 && septets[len - 2..] == [CR, CR],
        _ => false
    };
    if padded {
        septets.pop();
    }
}
fn encode_line(ln: &str, cs: &Charset) -> Gsm7Result<String> {
    let mut septets = gsm7::encode(ln, cs)?;
    add_cr_padding(&mut septets);
    let packed = gsm7::pack_septets(&septets, 0)?;
    Ok(HexData(&packed).to_string())
}
fn decode_line(ln: &str, cs: &Charset) -> Gsm7Result<String> {
    let packed = HexData::decode(ln)?;
    let mut septets = gsm7::unpack_septets(&packed, 0, ::std::usize::MAX)?;
    strip_cr_padding(&mut septets);
    gsm7::decode(&septets, cs)
}
fn run(mode: Mode, cs: Charset) -> Gsm7Result<()> {
    let stdin = ::std::io::stdin();
    let lock = stdin.lock();
    for ln in lock.lines() {
        let ln = ln?;
        let res = if mode.is_encode() {
            encode_line(&ln, &cs)
        }
        else {
            decode_line(ln.trim(), &cs)
        };
        match res {
            Ok(out) => println!("{}", out),
            Err(e) => eprintln!("error: {}", e)
        }
    }
    Ok(())
}
fn main() {
    if let Err(e) = env_logger::init() {
        eprintln!("failed to initialise logging: {}", e);
    }
    let args = env::args().skip(1).collect::<Vec<_>>();
    let mode = match args.get(0).map(String::as_str) {
        Some("encode") => Mode::Encode,
        Some("decode") => Mode::Decode,
        _ => usage()
    };
    let lang = match args.get(1) {
        Some(l) => l.parse::<NationalLanguage>(),
        None => Ok(NationalLanguage::Default)
    };
    let cs = match lang.and_then(Charset::for_language) {
        Ok(cs) => cs,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    };
    info!("mode: {:?}, tables: {}", mode, cs.language);
    if let Err(e) = run(mode, cs) {
        error!("gsm7-charset failed: {}", e);
        process::exit(1);
    }
}
