//! Password form state: length field, class toggles, result.
//!
//! Front ends own a [`Form`] and drive it; the engine in [`crate::pass`] never
//! sees anything the form has not validated.

mod validate;

use rand::Rng;
use thiserror::Error;

use crate::pass::{self, CharClass, charset, ClassFlags, Password, PasswordRequest};

pub use validate::{ValidationError, validate_length};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0}")]
    Invalid(#[from] ValidationError),
    #[error("Select at least one character type")]
    NoClasses,
    #[error(transparent)]
    Engine(#[from] pass::Error),
}

/// Last generated password with the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub password: Password,
    pub request: PasswordRequest,
}

impl Generated {
    /// Alphabet size the password was drawn from.
    pub fn pool_size(&self) -> usize {
        charset::size(self.request.flags)
    }
}

#[derive(Debug, Clone)]
pub struct Form {
    length: String,
    touched: bool,
    flags: ClassFlags,
    result: Option<Generated>,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            length: String::new(),
            touched: false,
            flags: ClassFlags::FORM_DEFAULT,
            result: None,
        }
    }
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length_input(&self) -> &str {
        &self.length
    }

    /// Replace the length field. Marks the field as touched.
    pub fn set_length(&mut self, input: &str) {
        self.length = input.trim().to_owned();
        self.touched = true;
    }

    /// Field error, shown only once the user has interacted with the field.
    pub fn length_error(&self) -> Option<ValidationError> {
        if !self.touched {
            return None;
        }
        validate_length(&self.length).err()
    }

    pub fn flags(&self) -> ClassFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: ClassFlags) {
        self.flags = flags;
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.flags.toggle(class);
    }

    /// Whether the generate action is enabled.
    pub fn can_generate(&self) -> bool {
        self.request().is_ok()
    }

    /// Build the engine request, or the reason generation is disabled.
    pub fn request(&self) -> Result<PasswordRequest, SubmitError> {
        let length = validate_length(&self.length)?;
        if !self.flags.any() {
            return Err(SubmitError::NoClasses);
        }
        Ok(PasswordRequest {
            length,
            flags: self.flags,
        })
    }

    /// Generate a password if the gate is open.
    ///
    /// A closed gate never reaches the engine. The previous result is kept
    /// when submission is refused.
    pub fn submit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Password, SubmitError> {
        self.touched = true;
        let request = self.request()?;
        let password = pass::generate(&request, rng)?;
        let generated = self.result.insert(Generated { password, request });
        Ok(&generated.password)
    }

    pub fn password(&self) -> Option<&Password> {
        self.result.as_ref().map(|g| &g.password)
    }

    /// Last result. Later edits to the flags or length do not change it.
    pub fn result(&self) -> Option<&Generated> {
        self.result.as_ref()
    }

    #[cfg(test)]
    pub fn is_generated(&self) -> bool {
        self.result.is_some()
    }

    /// Back to process-start state: empty length, no result, lowercase only.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
