//! Password generation.

use std::io::{self, Write};

use rand::Rng;
use zeroize::Zeroize;

use super::{Alphabet, Error, Password, PasswordRequest, charset};

/// Draw `length` characters uniformly and independently, with replacement.
///
/// An empty alphabet is only an error when at least one character is asked for.
pub fn sample<R: Rng + ?Sized>(
    alphabet: &Alphabet,
    length: usize,
    rng: &mut R,
) -> Result<String, Error> {
    if length == 0 {
        return Ok(String::new());
    }
    if alphabet.is_empty() {
        return Err(Error::InvalidInput { length });
    }

    let chars = alphabet.as_slice();
    Ok((0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect())
}

/// Generate a single password for a validated request.
pub fn generate<R: Rng + ?Sized>(
    request: &PasswordRequest,
    rng: &mut R,
) -> Result<Password, Error> {
    let alphabet = charset::build(request.flags);
    log::debug!(
        "generating {} char(s) from a {}-char alphabet",
        request.length,
        alphabet.len()
    );
    sample(&alphabet, request.length, rng).map(Password::from)
}

/// Write `count` newline-terminated passwords to `out`.
///
/// The alphabet is built once; the line buffer is wiped between passwords.
pub fn generate_batch<R: Rng + ?Sized, W: Write>(
    request: &PasswordRequest,
    count: usize,
    rng: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let alphabet = charset::build(request.flags);
    let mut buf = String::with_capacity(request.length * 4 + 1);

    for _ in 0..count {
        let mut pass = sample(&alphabet, request.length, rng)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        buf.push_str(&pass);
        buf.push('\n');
        pass.zeroize();

        let written = out.write_all(buf.as_bytes());
        buf.zeroize();
        written?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{CharClass, ClassFlags};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn sample_has_exact_length_and_members_only() {
        let alphabet = charset::build(ClassFlags::ALL);
        let mut rng = rng();
        for length in [1, 4, 13, 25, 200] {
            let pass = sample(&alphabet, length, &mut rng).unwrap();
            assert_eq!(pass.chars().count(), length);
            assert!(pass.chars().all(|c| alphabet.contains(c)));
        }
    }

    #[test]
    fn zero_length_is_empty_for_any_alphabet() {
        let mut rng = rng();
        let alphabet = charset::build(ClassFlags::only(CharClass::Symbols));
        assert_eq!(sample(&alphabet, 0, &mut rng).unwrap(), "");
        assert_eq!(sample(&Alphabet::default(), 0, &mut rng).unwrap(), "");
    }

    #[test]
    fn empty_alphabet_with_length_is_invalid_input() {
        let mut rng = rng();
        let err = sample(&Alphabet::default(), 10, &mut rng).unwrap_err();
        assert_eq!(err, Error::InvalidInput { length: 10 });
    }

    #[test]
    fn lowercase_only_eight_chars() {
        let request = PasswordRequest {
            length: 8,
            flags: ClassFlags::FORM_DEFAULT,
        };
        let pass = generate(&request, &mut rng()).unwrap();
        assert_eq!(pass.len(), 8);
        assert!(pass.as_str().chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn uppercase_and_digits_four_chars() {
        let request = PasswordRequest {
            length: 4,
            flags: ClassFlags {
                uppercase: true,
                digits: true,
                ..ClassFlags::NONE
            },
        };
        let pass = generate(&request, &mut rng()).unwrap();
        assert_eq!(pass.len(), 4);
        assert!(
            pass.as_str()
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn draws_cover_the_whole_alphabet() {
        // 10 digits over 2,000 draws: every digit should show up.
        let alphabet = charset::build(ClassFlags::only(CharClass::Digits));
        let pass = sample(&alphabet, 2_000, &mut rng()).unwrap();
        let mut counts = [0usize; 10];
        for c in pass.chars() {
            counts[c.to_digit(10).unwrap() as usize] += 1;
        }
        assert!(counts.iter().all(|&n| n > 100), "{counts:?}");
    }

    #[test]
    fn batch_writes_one_line_per_password() {
        let request = PasswordRequest {
            length: 12,
            flags: ClassFlags::ALL,
        };
        let mut out = Vec::new();
        generate_batch(&request, 5, &mut rng(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.chars().count() == 12));
    }

    #[test]
    fn batch_with_no_classes_fails() {
        let request = PasswordRequest {
            length: 6,
            flags: ClassFlags::NONE,
        };
        let mut out = Vec::new();
        let err = generate_batch(&request, 3, &mut rng(), &mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(out.is_empty());
    }
}
