use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Line editor state: text plus a 0-based cursor in chars.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LineBuffer {
    chars: Vec<char>,
    cursor: usize,
}

/// What a key press did to the line.
#[derive(Debug, PartialEq, Eq)]
pub enum Edit {
    Continue,
    Submit,
    Cancel,
    Interrupt,
}

impl LineBuffer {
    pub fn new(initial: &str) -> Self {
        let chars: Vec<char> = initial.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn apply(&mut self, key: KeyEvent) -> Edit {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Edit::Interrupt,
            KeyCode::Char('q') if ctrl => return Edit::Cancel,
            KeyCode::Char('u') if ctrl => {
                self.chars.clear();
                self.cursor = 0;
            }
            KeyCode::Esc => return Edit::Cancel,
            KeyCode::Enter => return Edit::Submit,
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.chars.remove(self.cursor);
            }
            KeyCode::Delete if self.cursor < self.chars.len() => {
                self.chars.remove(self.cursor);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.chars.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            KeyCode::Char(c) if !ctrl => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Edit::Continue
    }
}

/// Read one line in raw mode, pre-filled with `initial_value`.
/// Returns `None` on Esc / Ctrl+Q, `Err` when there is no terminal to read.
pub fn read_line(prompt: &str, initial_value: &str) -> io::Result<Option<String>> {
    let mut line = LineBuffer::new(initial_value);
    let mut drawn_len = line.chars.len();

    let mut guard = RawModeGuard::new()?;

    print!("{prompt}: {}", line.text());
    flush();

    let outcome = loop {
        let key = match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => key,
            Ok(_) => continue,
            Err(e) => {
                guard.release();
                println!();
                return Err(e);
            }
        };

        match line.apply(key) {
            Edit::Continue => {}
            Edit::Interrupt => {
                // process::exit skips destructors
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            done => break done,
        }

        print!("\r{prompt}: {}", " ".repeat(drawn_len + 1));
        print!("\r{prompt}: {}", line.text());
        print!("\x1b[{}G", prompt.chars().count() + 3 + line.cursor());
        flush();
        drawn_len = line.chars.len();
    };

    guard.release();
    println!();
    match outcome {
        Edit::Cancel => Ok(None),
        _ => Ok(Some(line.text())),
    }
}

/// [`read_line`] for secondary prompts: a terminal failure reads as cancel.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    read_line(prompt, initial_value).ok().flatten()
}
