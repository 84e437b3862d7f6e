extern crate rand;
extern crate zeroize;

/// This is the library that composes the usable alphabet from the selected character
/// classes and the ambiguous glyph exclusion.
pub mod charset;
/// This is the library part that turns a configuration into a finished password or
/// passphrase, it implements the engine that callers talk to.
pub mod generator;
/// This is the library that handles passphrase generation, based on a fixed list of
/// memorable english words.
pub mod passphrase;
/// This is the library that wraps the operating system's entropy source and implements
/// the Fisher-Yates shuffle on top of it.
pub mod random;

pub(crate) mod error;

pub use crate::{
    error::{Error, Result},
    generator::{generate, generate_with, GeneratedSecret, GenerationConfig, Mode},
};

#[cfg(test)]
#[path = "tests/test_helpers.rs"]
pub(crate) mod test_helpers;
