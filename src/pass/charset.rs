//! Character classes and alphabet building for password generation.

use std::fmt;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+";

/// One of the four selectable character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharClass {
    /// All classes in alphabet order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    /// Literal character set contributed by this class.
    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Uppercase => "Include uppercase letters",
            CharClass::Lowercase => "Include lowercase",
            CharClass::Digits => "Include numbers",
            CharClass::Symbols => "Include symbols",
        }
    }
}

/// Which character classes contribute to the alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassFlags {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl ClassFlags {
    pub const NONE: ClassFlags = ClassFlags {
        lowercase: false,
        uppercase: false,
        digits: false,
        symbols: false,
    };

    pub const ALL: ClassFlags = ClassFlags {
        lowercase: true,
        uppercase: true,
        digits: true,
        symbols: true,
    };

    /// State the form starts in and returns to on reset.
    pub const FORM_DEFAULT: ClassFlags = ClassFlags {
        lowercase: true,
        uppercase: false,
        digits: false,
        symbols: false,
    };

    #[cfg(test)]
    pub fn only(class: CharClass) -> Self {
        let mut flags = Self::NONE;
        flags.set(class, true);
        flags
    }

    pub fn get(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Digits => self.digits,
            CharClass::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        match class {
            CharClass::Uppercase => self.uppercase = enabled,
            CharClass::Lowercase => self.lowercase = enabled,
            CharClass::Digits => self.digits = enabled,
            CharClass::Symbols => self.symbols = enabled,
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.set(class, !self.get(class));
    }

    pub fn any(&self) -> bool {
        self.lowercase || self.uppercase || self.digits || self.symbols
    }

    /// Enabled classes in alphabet order.
    pub fn enabled(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(move |c| self.get(*c))
    }
}

/// Ordered pool of candidate characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    #[cfg(test)]
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Build the character pool from the enabled classes.
pub fn build(flags: ClassFlags) -> Alphabet {
    let mut chars = Vec::with_capacity(size(flags));
    for class in flags.enabled() {
        chars.extend(class.chars().chars());
    }
    Alphabet(chars)
}

/// Pool size for the given flags (for entropy calculation).
pub fn size(flags: ClassFlags) -> usize {
    flags.enabled().map(|c| c.chars().len()).sum()
}
