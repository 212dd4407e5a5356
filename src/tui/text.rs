use passforge::entropy::EntropySource;
use passforge::form::{Form, Level, Notice};
use passforge::pass::{CharacterClass, GenerationRequest, MAX_LENGTH, MIN_LENGTH, charset};

use crate::terminal::{
    BOLD, BOX_WIDTH, DIM, RESET, box_bottom, box_line, box_line_center, box_opt, box_top,
    print_error, print_rule, print_success,
};

const LABEL_COL: usize = 12;

fn checkbox(form: &Form, class: CharacterClass) -> String {
    let mark = if form.classes().contains(class) { 'x' } else { ' ' };
    format!("[{mark}] {class}")
}

fn labeled(label: &str, value: &str) -> String {
    format!("{label:<LABEL_COL$}{value}")
}

fn entropy_summary(request: &GenerationRequest) -> String {
    let pool = request.classes.pool_len();
    let bits = charset::entropy_bits(request.length, pool);
    format!(
        "{:.1} bits ({}), pool of {} chars",
        bits,
        charset::strength(bits),
        pool
    )
}

pub fn print_form(form: &Form, source: EntropySource, notice: Option<&Notice>) {
    box_top("Password Generator");
    box_line_center("Generate a secure password with customizable options.");
    print_rule();

    box_line(&labeled(
        "Length",
        &format!("{BOLD}{}{RESET}  {DIM}({MIN_LENGTH}-{MAX_LENGTH}){RESET}", form.length()),
    ));
    box_line("");
    for pair in CharacterClass::ALL.chunks(2) {
        let row = pair
            .iter()
            .map(|&class| format!("{:<24}", checkbox(form, class)))
            .collect::<String>();
        box_line(row.trim_end());
    }
    print_rule();

    match form.password().zip(form.generated_request()) {
        Some((password, generated)) => {
            let inner = BOX_WIDTH - 4;
            let chars: Vec<char> = password.chars().collect();
            box_line("Password");
            for chunk in chars.chunks(inner) {
                box_line(&format!("{BOLD}{}{RESET}", chunk.iter().collect::<String>()));
            }
            box_line("");

            box_line(&labeled("Entropy", &entropy_summary(generated)));
        }
        None => box_line(&format!("{DIM}Press Enter to generate a password{RESET}")),
    }
    box_line(&labeled("Source", source.name()));
    box_bottom();

    match notice {
        Some(n) if n.level == Level::Error => print_error(&n.message),
        Some(n) => print_success(&n.message),
        None => println!(),
    }
    println!(
        "{DIM}[Enter] generate  [c] copy  [l] length  [1-4] classes  [u] source  [h] help  [q] quit{RESET}"
    );
}

pub fn print_help() {
    box_top("passforge");
    box_line_center("Password generator");
    box_line("");
    box_line("KEYS:");
    box_opt("  Enter", "Generate a new password");
    box_opt("  c", "Copy the password to the clipboard");
    box_opt("  l", "Set the length (4 to 64)");
    box_opt("  1", "Toggle uppercase letters (A-Z)");
    box_opt("  2", "Toggle lowercase letters (a-z)");
    box_opt("  3", "Toggle numbers (0-9)");
    box_opt("  4", "Toggle symbols");
    box_opt("  u", "Switch the random source");
    box_opt("  q, Esc", "Quit");
    box_line("");
    box_line("RANDOM SOURCES:");
    for source in [EntropySource::Thread, EntropySource::Os] {
        box_opt(&format!("  {}", source.name()), source.info());
    }
    box_line("");
    box_line("Every enabled class appears at least once in each password.");
    box_line("Run `passforge --help` for one-shot command-line use.");
    box_bottom();
    println!();
    println!("{DIM}Press any key to return{RESET}");
}

#[cfg(test)]
mod tests {
    use passforge::pass::CharacterClassSet;

    use super::*;

    #[test]
    fn entropy_summary_is_plain_ascii() {
        let request = GenerationRequest::new(64, CharacterClassSet::all());
        let summary = entropy_summary(&request);
        assert!(summary.is_ascii(), "{summary}");
        assert!(summary.ends_with("pool of 91 chars"));
        assert!(summary.contains("(Very Strong)"));
    }

    #[test]
    fn entropy_summary_follows_the_given_request() {
        let digits = CharacterClassSet::none().with(CharacterClass::Numbers);
        let summary = entropy_summary(&GenerationRequest::new(4, digits));
        assert!(summary.starts_with("13.3 bits (Weak)"), "{summary}");
        assert!(summary.ends_with("pool of 10 chars"));
    }
}
