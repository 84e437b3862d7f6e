use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    charset::{self, CharacterClass},
    error::Result,
    passphrase,
    random::{self, OsEntropy, SecureRandom},
};

/// Length used when the caller does not ask for a specific one.
pub const DEFAULT_LENGTH: usize = 15;
/// Shortest length callers are expected to request.
pub const MIN_LENGTH: usize = 12;
/// Longest length callers are expected to request.
pub const MAX_LENGTH: usize = 128;

/// Which generation mode produced a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Random,
    Memorable,
}

/// A freshly generated password or passphrase. The buffer is wiped when the value is
/// dropped; ownership passes to the caller, nothing is kept inside the library.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct GeneratedSecret {
    pub secret: String,
    #[zeroize(skip)]
    pub mode: Mode,
}

/// Everything the engine needs to produce one secret.
///
/// When `memorable` is set the other fields are ignored, the two modes are mutually
/// exclusive. `length` must be positive; [`MIN_LENGTH`] and [`MAX_LENGTH`] are the
/// bounds callers are expected to enforce before handing the value over.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Character classes the password draws from, each guaranteed to appear.
    pub classes: Vec<CharacterClass>,
    /// Drop the glyphs in [`charset::AMBIGUOUS_GLYPHS`] from every draw.
    pub exclude_ambiguous: bool,
    /// Number of characters in a random mode password.
    pub length: usize,
    /// Generate a word based passphrase instead of a character password.
    pub memorable: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            classes: CharacterClass::ALL.to_vec(),
            exclude_ambiguous: false,
            length: DEFAULT_LENGTH,
            memorable: false,
        }
    }
}

/// Generates one secret according to `config`, drawing from the operating system's
/// entropy source.
pub fn generate(config: &GenerationConfig) -> Result<GeneratedSecret> {
    generate_with(&mut OsEntropy, config)
}

/// Same as [`generate`] but with a caller supplied random source. Dispatches between the
/// two modes and holds no state of its own.
pub fn generate_with(
    rng: &mut dyn SecureRandom,
    config: &GenerationConfig,
) -> Result<GeneratedSecret> {
    if config.memorable {
        passphrase::memorable_passphrase(rng)
    } else {
        random_password(rng, config)
    }
}

/// Samples `config.length` characters uniformly from the combined alphabet, repairs
/// class coverage and shuffles the result.
fn random_password(
    rng: &mut dyn SecureRandom,
    config: &GenerationConfig,
) -> Result<GeneratedSecret> {
    let alphabet = charset::build(&config.classes, config.exclude_ambiguous)?.into_bytes();

    let mut password = Vec::with_capacity(config.length);
    for _ in 0..config.length {
        let idx = rng.next_bounded(alphabet.len() as u32)? as usize;
        password.push(alphabet[idx]);
    }

    repair_coverage(rng, &mut password, config)?;
    random::shuffle(rng, &mut password)?;

    Ok(GeneratedSecret {
        secret: String::from_utf8(password)?,
        mode: Mode::Random,
    })
}

/// Overwrites one character for every selected class that did not appear in the sampled
/// password. The class with ordinal `n` among the selected classes, in canonical order,
/// claims position `n`; classes whose position lies beyond the end of the password are
/// left unrepaired. The replacement is drawn from the class's own alphabet, never from
/// the combined one, and honors the ambiguous glyph exclusion.
fn repair_coverage(
    rng: &mut dyn SecureRandom,
    password: &mut [u8],
    config: &GenerationConfig,
) -> Result<()> {
    let selected: Vec<CharacterClass> = CharacterClass::ALL
        .into_iter()
        .filter(|class| config.classes.contains(class))
        .collect();

    for (position, class) in selected.into_iter().enumerate() {
        if position >= password.len() {
            break;
        }
        if password.iter().any(|&b| class.contains(b as char)) {
            continue;
        }
        let pool = class.usable_alphabet(config.exclude_ambiguous);
        let pool = pool.as_bytes();
        let idx = rng.next_bounded(pool.len() as u32)? as usize;
        password[position] = pool[idx];
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/generator.rs"]
mod generator;
