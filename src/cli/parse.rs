use thiserror::Error;

use super::CliFlags;
use crate::pass::{CharClass, ClassFlags};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-u" | "--urandom" => flags.urandom = true,
            "-b" | "--board" => flags.clipboard = true,
            "-d" | "--default" => flags.default = true,
            "--save" => flags.save = true,
            "-L" | "--lowercase" => flags.enable(CharClass::Lowercase),
            "-U" | "--uppercase" => flags.enable(CharClass::Uppercase),
            "-D" | "--digits" => flags.enable(CharClass::Digits),
            "-S" | "--symbols" => flags.enable(CharClass::Symbols),
            "-a" | "--all" => flags.classes = Some(ClassFlags::ALL),
            "-l" | "--length" => {
                // Range checks belong to the form; keep the raw text.
                let value = iter
                    .next()
                    .ok_or_else(|| ParseError::MissingValue(arg.clone()))?;
                flags.length = Some(value.clone());
            }
            "-n" | "--number" => {
                let value = iter
                    .next()
                    .ok_or_else(|| ParseError::MissingValue(arg.clone()))?;
                let count = value
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| ParseError::InvalidNumber(value.clone()))?;
                flags.number = Some(count);
            }
            other => return Err(ParseError::UnknownArg(other.to_owned())),
        }
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passform")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_arguments_gives_defaults() {
        let flags = parse(&args(&[])).unwrap();
        assert!(!flags.help && !flags.clipboard && !flags.urandom);
        assert!(flags.length.is_none() && flags.number.is_none());
        assert!(flags.classes.is_none());
    }

    #[test]
    fn class_flags_select_exactly_those_classes() {
        let flags = parse(&args(&["-U", "--digits"])).unwrap();
        assert_eq!(
            flags.classes,
            Some(ClassFlags {
                uppercase: true,
                digits: true,
                ..ClassFlags::NONE
            })
        );

        let flags = parse(&args(&["--all"])).unwrap();
        assert_eq!(flags.classes, Some(ClassFlags::ALL));
    }

    #[test]
    fn length_is_kept_raw() {
        let flags = parse(&args(&["-l", "3", "-n", "5"])).unwrap();
        assert_eq!(flags.length.as_deref(), Some("3"));
        assert_eq!(flags.number, Some(5));
    }

    #[test]
    fn switches_are_recognised() {
        let flags = parse(&args(&["-q", "-u", "-b", "-d", "--save", "-v", "-h"])).unwrap();
        assert!(flags.quiet && flags.urandom && flags.clipboard);
        assert!(flags.default && flags.save && flags.version && flags.help);
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse(&args(&["-n", "many"])).unwrap_err(),
            ParseError::InvalidNumber("many".into())
        );
        assert_eq!(
            parse(&args(&["-n", "0"])).unwrap_err(),
            ParseError::InvalidNumber("0".into())
        );
        assert_eq!(
            parse(&args(&["--length"])).unwrap_err(),
            ParseError::MissingValue("--length".into())
        );
        assert_eq!(
            parse(&args(&["--hex"])).unwrap_err(),
            ParseError::UnknownArg("--hex".into())
        );
    }
}
