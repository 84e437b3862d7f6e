use std::sync::OnceLock;

use crate::{
    error::Result,
    generator::{GeneratedSecret, Mode},
    random::SecureRandom,
};

static WORDLIST: &str = include_str!("wordlists/memorable.wordlist");

static WORDS: OnceLock<Vec<&'static str>> = OnceLock::new();

/// Number of words in a passphrase.
const WORD_COUNT: usize = 4;

/// Symbols a passphrase can end with.
const TRAILING_SYMBOLS: [char; 8] = ['!', '@', '#', '$', '%', '^', '&', '*'];

/// The embedded word list, parsed the first time it is needed and immutable after that.
fn words() -> &'static [&'static str] {
    WORDS.get_or_init(|| {
        WORDLIST
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    })
}

/// Generates a passphrase of four capitalized words joined by `-`, followed by a number
/// below 100 and one trailing symbol, for example `Ember-Cargo-Tiger-Pilot7!`.
pub fn memorable_passphrase(rng: &mut dyn SecureRandom) -> Result<GeneratedSecret> {
    memorable_from_words(rng, words())
}

/// The worker behind [`memorable_passphrase`], taking the word list as a parameter so
/// tests can run it against a known list.
pub(crate) fn memorable_from_words(
    rng: &mut dyn SecureRandom,
    words: &[&str],
) -> Result<GeneratedSecret> {
    let mut secret = String::new();

    for i in 0..WORD_COUNT {
        if i > 0 {
            secret.push('-');
        }
        let word = words[rng.next_bounded(words.len() as u32)? as usize];
        secret.push_str(&capitalize(word));
    }

    let number = rng.next_bounded(100)?;
    secret.push_str(&number.to_string());

    let symbol = TRAILING_SYMBOLS[rng.next_bounded(TRAILING_SYMBOLS.len() as u32)? as usize];
    secret.push(symbol);

    Ok(GeneratedSecret {
        secret,
        mode: Mode::Memorable,
    })
}

/// Uppercases the first letter and leaves the rest of the word unchanged.
fn capitalize(word: &str) -> String {
    word[0..1].to_ascii_uppercase() + &word[1..]
}

#[cfg(test)]
#[path = "tests/passphrase.rs"]
mod passphrase;
