//! Password composition: alphabet building and sampling.

pub mod charset;
mod generate;

use std::fmt;

use thiserror::Error;
use zeroize::Zeroizing;

pub use charset::{Alphabet, CharClass, ClassFlags};
pub use generate::{generate, generate_batch};

/// Shortest length the form accepts.
pub const MIN_LENGTH: usize = 4;
/// Longest length the form accepts.
pub const MAX_LENGTH: usize = 25;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid input: cannot draw {length} character(s) from an empty alphabet")]
    InvalidInput { length: usize },
}

/// A validated generation request.
///
/// Only the form builds these, after the length and class checks pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRequest {
    pub length: usize,
    pub flags: ClassFlags,
}

/// Generated password. Wiped from memory on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<String> for Password {
    fn from(s: String) -> Self {
        Password(Zeroizing::new(s))
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}
