//! Settings file persistence.
//!
//! One comma-separated line:
//! `length,number,lowercase,uppercase,digits,symbols,urandom`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;

const FIELD_COUNT: usize = 7;

pub fn save(path: &Path, settings: &Settings) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let flags = settings.flags;
    let data = format!(
        "{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        flags.lowercase,
        flags.uppercase,
        flags.digits,
        flags.symbols,
        settings.use_urandom,
    );

    file.write_all(data.as_bytes())?;
    Ok(())
}

/// Fill `settings` from `path`. A missing or malformed file is rewritten
/// with whatever `settings` holds on entry.
pub fn load(path: &Path, settings: &mut Settings) -> std::io::Result<()> {
    if !path.exists() {
        log::debug!("no settings at {}, writing defaults", path.display());
        return save(path, settings);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if parts.len() != FIELD_COUNT {
        log::warn!(
            "settings at {} has {} field(s), expected {FIELD_COUNT}; rewriting defaults",
            path.display(),
            parts.len()
        );
        return save(path, settings);
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    settings.number_of_passwords = parts[1]
        .parse()
        .ok()
        .filter(|n: &usize| *n > 0)
        .unwrap_or(settings.number_of_passwords);
    settings.flags.lowercase = parts[2].parse().unwrap_or(settings.flags.lowercase);
    settings.flags.uppercase = parts[3].parse().unwrap_or(settings.flags.uppercase);
    settings.flags.digits = parts[4].parse().unwrap_or(settings.flags.digits);
    settings.flags.symbols = parts[5].parse().unwrap_or(settings.flags.symbols);
    settings.use_urandom = parts[6].parse().unwrap_or(settings.use_urandom);

    Ok(())
}

/// `$PASSFORM_SETTINGS`, else `$HOME/.config/passform/settings`.
pub fn default_path() -> PathBuf {
    if let Some(path) = env::var_os("PASSFORM_SETTINGS") {
        return PathBuf::from(path);
    }
    let home = env::var_os("HOME").unwrap_or_else(|| ".".into());
    PathBuf::from(home).join(".config/passform/settings")
}
