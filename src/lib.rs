//! The `gsm7-charset` library provides the character tables of the GSM 7-bit alphabet
//! ([3GPP TS 23.038](https://www.3gpp.org/DynaReport/23038.htm)): the default alphabet, plus the
//! Gujarati, Kannada, Malayalam, Oriya and Turkish national language tables.
//!
//! The tables themselves live in the `charset` module, one submodule per language, each with the
//! same four accessors (`new_decoder`, `new_ext_decoder`, `new_encoder`, `new_ext_encoder`). If
//! you just want to turn text into septets and back, look at the `gsm7` module, which takes a
//! `charset::Charset` picked by `NationalLanguage`.
//!
//! Framing the septets into an SMS PDU is left up to you.

#[macro_use] extern crate log;
#[macro_use] extern crate failure_derive;
#[macro_use] extern crate derive_is_enum_variant;
#[macro_use] extern crate num_derive;

pub use crate::errors::Gsm7Result;

pub mod errors;
pub mod charset;
pub mod gsm7;
pub mod util;
