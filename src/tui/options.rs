use std::io;

use copypasta::{ClipboardContext, ClipboardProvider};

use crate::form::Form;
use crate::rng::Generator;
use crate::terminal::{clear, reset_terminal};

use super::{CLASS_ROWS, enter_prompt, get_editable_input, print_form, print_help, read_line};

use LoopAction::*;
pub enum LoopAction {
    Break,
    Continue,
}

/// Interactive form loop. Returns when the user quits, or with the error
/// when the terminal can no longer be read.
pub fn gen_form_menu(rng: &mut Generator) -> io::Result<()> {
    form_loop(rng, read_line)
}

fn form_loop<F>(rng: &mut Generator, mut next_line: F) -> io::Result<()>
where
    F: FnMut(&str, &str) -> io::Result<Option<String>>,
{
    reset_terminal();
    let mut form = Form::new();
    let mut notice: Option<String> = None;

    let result = loop {
        clear();
        print_form(&form, rng.source(), notice.as_deref());
        notice = None;

        let input = match next_line(enter_prompt(), "") {
            Ok(Some(s)) => s,
            Ok(None) => continue,
            Err(e) => break Err(e),
        };
        let choice = input.trim();

        let action = match choice.parse::<usize>() {
            Ok(num) => menu_options(num, &mut form, &mut notice),
            Err(_) => command_options(choice, &mut form, rng, &mut notice),
        };
        if let Break = action {
            break Ok(());
        }
    };

    clear();
    result
}

fn menu_options(choice: usize, form: &mut Form, notice: &mut Option<String>) -> LoopAction {
    match choice {
        1 => {
            let current = form.length_input().to_owned();
            if let Some(len) = get_editable_input("Password length", &current) {
                form.set_length(&len);
            }
        }
        n @ 2..=5 => form.toggle(CLASS_ROWS[n - 2]),
        _ => *notice = Some("Invalid selection".to_owned()),
    }
    Continue
}

fn command_options(
    choice: &str,
    form: &mut Form,
    rng: &mut Generator,
    notice: &mut Option<String>,
) -> LoopAction {
    match choice {
        // Disabled while the gate is closed; the form shows why.
        "" => {
            if form.can_generate()
                && let Err(e) = form.submit(rng)
            {
                log::error!("generation failed: {e}");
                *notice = Some(e.to_string());
            }
        }
        "r" => form.reset(),
        "c" => *notice = Some(copy_result(form)),
        "h" | "help" => {
            clear();
            print_help();
            let _ = get_editable_input("Press Enter to return", "");
        }
        "q" | "e" => return Break,
        _ => *notice = Some("Invalid selection".to_owned()),
    }
    Continue
}

fn copy_result(form: &Form) -> String {
    let Some(pass) = form.password() else {
        return "Nothing to copy yet".to_owned();
    };
    let copied = ClipboardContext::new()
        .and_then(|mut ctx| ctx.set_contents(pass.as_str().to_owned()));
    match copied {
        Ok(()) => "*** COPIED TO CLIPBOARD ***".to_owned(),
        Err(e) => {
            log::warn!("clipboard copy failed: {e}");
            format!("Clipboard error: {e}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Source;

    #[test]
    fn unreadable_terminal_ends_the_loop() {
        let mut rng = Generator::new(Source::Os);
        let mut calls = 0;
        let result = form_loop(&mut rng, |_, _| {
            calls += 1;
            Err(io::Error::new(io::ErrorKind::Unsupported, "not a terminal"))
        });
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::Unsupported);
        assert_eq!(calls, 1);
    }

    #[test]
    fn cancel_redraws_and_quit_returns() {
        let mut rng = Generator::new(Source::Os);
        let mut script = vec![Some("q".to_owned()), None].into_iter().rev();
        let mut calls = 0;
        let result = form_loop(&mut rng, |_, _| {
            calls += 1;
            Ok(script.next().flatten())
        });
        assert!(result.is_ok());
        assert_eq!(calls, 2);
    }
}
