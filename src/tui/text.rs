use crate::form::{Form, Generated};
use crate::pass::CharClass;
use crate::rng::Source;
use crate::terminal::{
    BOLD, DIM, GREEN, RED, RESET, box_bottom, box_line, box_line_center, box_opt, box_top,
    calculate_entropy, entropy_strength, print_rule,
};

/// Checkbox rows in on-screen order, numbered from 2.
pub const CLASS_ROWS: [CharClass; 4] = [
    CharClass::Lowercase,
    CharClass::Uppercase,
    CharClass::Digits,
    CharClass::Symbols,
];

pub fn enter_prompt() -> &'static str {
    "Enter option (or press Enter to generate)"
}

pub fn print_form(form: &Form, source: Source, notice: Option<&str>) {
    box_top("Password Generator");
    box_line("");

    let length = form.length_input();
    let shown = if length.is_empty() {
        format!("{DIM}Ex. 8{RESET}")
    } else {
        length.to_owned()
    };
    box_line(&format!("  1) Password Length: {shown}"));
    if let Some(err) = form.length_error() {
        box_line(&format!("     {RED}{err}{RESET}"));
    }
    box_line("");

    for (i, class) in CLASS_ROWS.iter().enumerate() {
        let mark = if form.flags().get(*class) { "x" } else { " " };
        box_line(&format!("  {}) [{mark}] {}", i + 2, class.label()));
    }

    print_rule();
    match form.request() {
        Ok(_) => box_line(&format!("  Enter) {BOLD}Generate Password{RESET}")),
        Err(e) => box_line(&format!("  {DIM}Enter) Generate Password (disabled: {e}){RESET}")),
    }
    box_line("  r) Reset   c) Copy   h) Help   q) Quit");
    box_bottom();

    if let Some(generated) = form.result() {
        let (size, bits) = result_strength(generated);
        println!();
        box_top("Result");
        box_line(&format!("{BOLD}{GREEN}{}{RESET}", generated.password.as_str()));
        box_line(&format!(
            "{bits:.1} bits ({}) • {size} chars • {}",
            entropy_strength(bits),
            source.name()
        ));
        box_bottom();
    }

    if let Some(msg) = notice {
        println!();
        box_line_center(msg);
    }
    println!();
}

/// Pool size and entropy bits of a shown result.
pub fn result_strength(generated: &Generated) -> (usize, f64) {
    let size = generated.pool_size();
    (size, calculate_entropy(generated.password.len(), size))
}

pub fn print_help() {
    box_top("passform");
    box_line_center("Password generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: run without arguments to open the form.");
    box_line("  2) Client: pass flags (e.g. -l 12 -U -D) to print");
    box_line("     passwords without the form.");
    box_line("");
    box_line("USAGE:");
    box_line("  passform [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password, 4 to 25 (default: 16)");
    box_opt("  -n, --number <N>", "How many to generate (default: 1)");
    box_opt("  -L, --lowercase", "Include a-z");
    box_opt("  -U, --uppercase", "Include A-Z");
    box_opt("  -D, --digits", "Include 0-9");
    box_opt("  -S, --symbols", "Include !@#$%^&*()_+");
    box_opt("  -a, --all", "Include every class");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress warnings and confirmations");
    box_line("");
    box_line(" Settings:");
    box_opt("  -d, --default", "Ignore saved defaults");
    box_opt("      --save", "Save length, number, classes and source as defaults");
    box_opt("  -u, --urandom", "Use the OS CSPRNG instead of the hardware source");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passform -l 8            One lowercase password");
    box_line("  passform -l 4 -U -D      Uppercase letters and digits");
    box_line("  passform -a -l 25 -n 5   Five 25-char passwords");
    box_line("");
    box_bottom();
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::ClassFlags;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn strength_ignores_checkboxes_changed_after_generation() {
        let mut form = Form::new();
        form.set_length("8");
        form.submit(&mut StdRng::seed_from_u64(3)).unwrap();
        form.set_flags(ClassFlags::ALL);

        let (size, bits) = result_strength(form.result().unwrap());
        assert_eq!(size, 26);
        assert!((bits - 37.6).abs() < 0.05, "got {bits}");
    }
}
