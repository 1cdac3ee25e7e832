//! Converts tokens and AST nodes to and from ESTree-style JSON.
//!
//! The value model in `ast` knows nothing about JSON; everything format
//! specific lives here. [`JsonEmitter`] has one function per type,
//! [`node_from_value`] and [`token_from_value`] read documents back and run
//! every collection through the same structural checks as the `try_set_*`
//! setters.

pub use self::{
    config::EstreeConfig,
    de::{node_from_value, token_from_value},
    ser::JsonEmitter,
};

mod config;
mod de;
mod ser;
