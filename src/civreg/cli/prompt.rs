//! Line-based prompts with retry.
//!
//! Each `ask_*` method writes its prompt, reads one line and runs it through a
//! core validator. A recoverable failure prints a short notice and asks again;
//! end of input surfaces as an `Io` error with `UnexpectedEof`.

use civreg::error::{RegistryError, Result};
use civreg::model::{Category, LicenseType};
use civreg::validation::{parse_date, validate_category, validate_license_type};
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

pub const OPTION_PROMPT: &str = "Digite a sua opção: ";
const DATE_PROMPT: &str = "Digite a data em formato numérico \"dd/mm/aaaa\" ou \"dd-mm-aaaa\": ";
const CATEGORY_PROMPT: &str = "Digite a categoria da CNH (A/B/C/D/E): ";
const LICENSE_TYPE_INTRO: [&str; 2] = [
    "Digite \"PPD\" caso a carteira seja do tipo permissão para dirigir.",
    "Digite \"Definitiva\" caso a carteira seja do tipo definitiva.",
];

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line without its line ending.
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Asks for a date. `context` names the field and is shown once; only the
    /// format prompt repeats after a bad answer.
    pub fn ask_date(&mut self, context: &str) -> Result<NaiveDate> {
        write!(self.output, "{}", context)?;
        self.retry(&[], DATE_PROMPT, parse_date)
    }

    pub fn ask_category(&mut self) -> Result<Category> {
        self.retry(&[], CATEGORY_PROMPT, validate_category)
    }

    pub fn ask_license_type(&mut self) -> Result<LicenseType> {
        self.retry(&LICENSE_TYPE_INTRO, OPTION_PROMPT, validate_license_type)
    }

    /// Shows numbered options and asks until one in `allowed` is typed.
    pub fn ask_choice(&mut self, options: &[&str], allowed: RangeInclusive<u8>) -> Result<u8> {
        self.retry(options, OPTION_PROMPT, |line| {
            line.parse::<u8>()
                .ok()
                .filter(|n| allowed.contains(n) && line.bytes().all(|b| b.is_ascii_digit()))
                .ok_or_else(|| RegistryError::InvalidChoice(line.to_string()))
        })
    }

    fn retry<T, F>(&mut self, intro: &[&str], prompt: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> Result<T>,
    {
        loop {
            for line in intro {
                writeln!(self.output, "{}", line)?;
            }
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_recoverable() => {
                    tracing::debug!(input = %answer, error = %err, "rejected input");
                    writeln!(self.output, "{}", retry_notice(&err))?;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

fn retry_notice(err: &RegistryError) -> &'static str {
    match err {
        RegistryError::InvalidFormat(_) => "Formato de data inválido!",
        _ => "Opção inválida!",
    }
}
