//! Line-oriented interactive session.

use std::io::{self, BufRead, Write};

use vidminok_names::NameMorpher;
use vidminok_parser::{PhraseMorpher, TextMode};
use vidminok_protocol::Case;

const EXIT_WORDS: [&str; 2] = ["вихід", "exit"];
const YES_WORDS: [&str; 4] = ["т", "так", "y", "yes"];

fn is_exit(answer: &str) -> bool {
    EXIT_WORDS.contains(&answer)
}

/// Prints `prompt` and reads one trimmed line. `None` on end of input.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    names: &mut NameMorpher,
    phrases: &PhraseMorpher,
) -> io::Result<()> {
    writeln!(output, "--- Український універсальний відмінювач ---")?;
    writeln!(output, "1 - Відмінювання ПІБ")?;
    writeln!(output, "2 - Відмінювання речень / посад")?;
    writeln!(output, "Введіть 'вихід' або 'exit' для завершення.")?;

    loop {
        let Some(mode) = ask(&mut input, &mut output, "\nОберіть режим (1/2): ")? else {
            break;
        };
        let mode = mode.to_lowercase();
        if is_exit(&mode) {
            return Ok(());
        }
        if mode != "1" && mode != "2" {
            writeln!(output, "Невірний режим. Будь ласка, введіть 1 або 2.")?;
            continue;
        }

        writeln!(output, "\nДоступні відмінки:")?;
        for case in Case::ALL {
            writeln!(output, "  {:<5} - {}", case.code(), case.label())?;
        }
        let Some(code) = ask(&mut input, &mut output, "\nОберіть відмінок (напр., 'gent'): ")? else {
            break;
        };
        let code = code.to_lowercase();
        if is_exit(&code) {
            return Ok(());
        }
        let case: Case = match code.parse() {
            Ok(case) => case,
            Err(_) => {
                writeln!(output, "Невірний код відмінка. Спробуйте ще раз.")?;
                continue;
            }
        };

        let result = if mode == "1" {
            let Some(full_name) = ask(&mut input, &mut output, "Введіть ПІБ (Прізвище Ім'я По-батькові): ")? else {
                break;
            };
            if full_name.is_empty() {
                continue;
            }
            names.inflect_name(&full_name, case)
        } else {
            let Some(text) = ask(&mut input, &mut output, "Введіть речення або посаду: ")? else {
                break;
            };
            if text.is_empty() {
                continue;
            }
            let answer = ask(&mut input, &mut output, "Це посада? (так/ні, Enter=ні): ")?.unwrap_or_default();
            let mode = if YES_WORDS.contains(&answer.to_lowercase().as_str()) {
                TextMode::Position
            } else {
                TextMode::Sentence
            };
            phrases.inflect_text(&text, case, mode)
        };

        match result {
            Ok(inflected) => writeln!(output, "-> {} відмінок: {}", case.label(), inflected)?,
            Err(err) => writeln!(output, "Помилка: {}", err)?,
        }
    }

    writeln!(output, "\nЗавершення роботи.")?;
    Ok(())
}
