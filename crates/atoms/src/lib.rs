//! Interned strings used for identifier names, token lexemes and literal
//! sources.
//!
//! Frequently occurring words are part of a static set generated at build
//! time and can be matched with [`js_word!`]. Any other string is interned
//! dynamically on conversion.

include!(concat!(env!("OUT_DIR"), "/js_word.rs"));
