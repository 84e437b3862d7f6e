use std::string;

/// A enum that contains the different types of errors that the library returns as part of Result's.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// No usable characters remain after class selection and ambiguous glyph exclusion.
    /// The caller can recover by selecting a different set of classes.
    EmptyAlphabet,
    /// A bounded draw was requested with a bound of zero. This is a defect in the engine,
    /// not in the caller's configuration.
    InvalidBound,
    /// The operating system's entropy source could not be read. The library never falls
    /// back to a weaker generator, the caller decides how to surface this.
    Entropy(rand::Error),
    Utf8(string::FromUtf8Error),
}

impl From<rand::Error> for Error {
    fn from(err: rand::Error) -> Self {
        Self::Entropy(err)
    }
}

impl From<string::FromUtf8Error> for Error {
    fn from(err: string::FromUtf8Error) -> Self {
        Self::Utf8(err)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::EmptyAlphabet => write!(f, "no usable characters in the selected classes"),
            Self::InvalidBound => write!(f, "bound must be greater than zero"),
            Self::Entropy(err) => write!(f, "entropy source unavailable: {err}"),
            Self::Utf8(err) => write!(f, "{err}"),
        }
    }
}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;
