//! CLI context - bundles settings, flags, form and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::{Zeroize, Zeroizing};

use super::{CliFlags, prompts, quiet};
use crate::form::Form;
use crate::pass::{self, PasswordRequest};
use crate::rng::{Generator, Source};
use crate::settings::{self, Settings};
use crate::tui::print_help;

/// Why the CLI stopped before finishing normally.
#[derive(Debug)]
pub enum Exit {
    /// Early exit, not an error.
    Done,
    /// Bad arguments or a closed generate gate.
    Usage(String),
    /// Output could not be produced.
    Failed(String),
}

pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    pub form: Form,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    /// Parse command-line arguments and load saved defaults.
    pub fn new(args: Vec<String>) -> Result<Self, super::ParseError> {
        let flags = super::parse(&args)?;
        quiet::set(flags.quiet);

        let settings = if flags.default {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                log::warn!("settings load failed: {e}");
                prompts::warn(&format!("Failed to load settings: {e}"));
                Settings::default()
            })
        };

        Ok(Self::with_settings(flags, settings))
    }

    pub fn with_settings(flags: CliFlags, settings: Settings) -> Self {
        Self {
            settings,
            flags,
            form: Form::new(),
            clipboard: None,
        }
    }

    pub fn run(&mut self) -> Result<(), Exit> {
        self.handle_info_flags()?;
        let request = self.apply_flags()?;
        self.handle_save();
        self.handle_clipboard()?;
        self.generate_output(&request)
    }

    fn handle_info_flags(&self) -> Result<(), Exit> {
        if self.flags.help {
            print_help();
            return Err(Exit::Done);
        }
        if self.flags.version {
            println!("passform {}", env!("CARGO_PKG_VERSION"));
            return Err(Exit::Done);
        }
        Ok(())
    }

    /// Fill the form from flags over settings and pass it through the gate.
    pub fn apply_flags(&mut self) -> Result<PasswordRequest, Exit> {
        let length = self
            .flags
            .length
            .clone()
            .unwrap_or_else(|| self.settings.pass_length.to_string());
        self.form.set_length(&length);

        if let Some(classes) = self.flags.classes {
            self.settings.flags = classes;
        }
        self.form.set_flags(self.settings.flags);

        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }
        if self.flags.urandom {
            self.settings.use_urandom = true;
        }

        let request = self
            .form
            .request()
            .map_err(|e| Exit::Usage(e.to_string()))?;
        // Persist the accepted length, never a rejected one.
        self.settings.pass_length = request.length;
        Ok(request)
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        let path = settings::default_path();
        match self.settings.save_to(&path) {
            Ok(()) => prompts::settings_saved(&path.display().to_string()),
            Err(e) => prompts::warn(&format!("Failed to save settings: {e}")),
        }
    }

    fn handle_clipboard(&mut self) -> Result<(), Exit> {
        if !self.flags.clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(c) => self.clipboard = Some(c),
            Err(e) => {
                log::debug!("clipboard unavailable: {e}");
                if !prompts::clipboard_fallback_prompt() {
                    return Err(Exit::Done);
                }
            }
        }
        Ok(())
    }

    /// Generate passwords to the clipboard or stdout.
    pub fn generate_output(&mut self, request: &PasswordRequest) -> Result<(), Exit> {
        let count = self.settings.number_of_passwords;
        let mut rng = Generator::new(Source::from_urandom_flag(self.settings.use_urandom));

        if let Some(ctx) = self.clipboard.as_mut() {
            let mut buf = Zeroizing::new(Vec::new());
            pass::generate_batch(request, count, &mut rng, &mut *buf)
                .map_err(|e| Exit::Failed(e.to_string()))?;

            let mut passwords = String::from_utf8_lossy(&buf).trim_end().to_owned();
            match ctx.set_contents(passwords.clone()) {
                Ok(()) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied(count);
                }
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
            passwords.zeroize();
            return Ok(());
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        pass::generate_batch(request, count, &mut rng, &mut out)
            .map_err(|e| Exit::Failed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse;
    use crate::pass::ClassFlags;

    fn context(list: &[&str]) -> Context {
        let args: Vec<String> = std::iter::once("passform")
            .chain(list.iter().copied())
            .map(String::from)
            .collect();
        Context::with_settings(parse(&args).unwrap(), Settings::default())
    }

    #[test]
    fn settings_supply_missing_flags() {
        let mut ctx = context(&[]);
        let request = ctx.apply_flags().unwrap();
        assert_eq!(request.length, 16);
        assert_eq!(request.flags, ClassFlags::FORM_DEFAULT);
    }

    #[test]
    fn explicit_flags_override_settings() {
        let mut ctx = context(&["-l", "4", "-U", "-D", "-n", "3", "-u"]);
        let request = ctx.apply_flags().unwrap();
        assert_eq!(request.length, 4);
        assert_eq!(
            request.flags,
            ClassFlags {
                uppercase: true,
                digits: true,
                ..ClassFlags::NONE
            }
        );
        assert_eq!(ctx.settings.number_of_passwords, 3);
        assert!(ctx.settings.use_urandom);
    }

    #[test]
    fn short_length_stops_before_generation() {
        let mut ctx = context(&["-l", "3"]);
        match ctx.apply_flags() {
            Err(Exit::Usage(msg)) => assert_eq!(msg, "Should be minimum of 4 character"),
            other => panic!("expected usage error, got {other:?}"),
        }
        assert!(!ctx.form.is_generated());
    }

    #[test]
    fn no_classes_closes_the_gate() {
        let mut ctx = context(&["-l", "10"]);
        ctx.settings.flags = ClassFlags::NONE;
        assert!(matches!(ctx.apply_flags(), Err(Exit::Usage(_))));
    }

    #[test]
    fn zero_count_is_refused_before_save() {
        let args: Vec<String> = ["passform", "-n", "0", "--save"]
            .into_iter()
            .map(String::from)
            .collect();
        match Context::new(args) {
            Err(e) => assert_eq!(e, crate::cli::ParseError::InvalidNumber("0".into())),
            Ok(_) => panic!("zero count accepted"),
        }
    }

    #[test]
    fn version_exits_early() {
        assert!(matches!(context(&["-v"]).run(), Err(Exit::Done)));
    }
}
