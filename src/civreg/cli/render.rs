use civreg::api::{CmdMessage, MessageLevel};
use civreg::error::RegistryError;
use civreg::model::{Citizen, Record};
use civreg::registry::render_table;
use colored::Colorize;
use std::io::{self, Write};

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// Reports a recoverable failure (e.g. an unknown national ID).
pub(super) fn print_failure<W: Write>(out: &mut W, err: &RegistryError) -> io::Result<()> {
    print_messages(out, &[CmdMessage::error(err.to_string())])
}

pub(super) fn print_details<W: Write>(out: &mut W, records: &[Citizen]) -> io::Result<()> {
    for record in records {
        writeln!(out, "{}", record.detail())?;
    }
    Ok(())
}

pub(super) fn print_table<W: Write>(out: &mut W, title: &str, records: &[Citizen]) -> io::Result<()> {
    writeln!(out, "\n{}", title)?;
    write!(out, "{}", render_table(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use civreg::model::Person;

    fn pedro() -> Citizen {
        Person::new(
            "Pedro",
            "29137219371",
            NaiveDate::from_ymd_opt(1987, 11, 23).unwrap(),
        )
        .into()
    }

    #[test]
    fn messages_keep_their_text() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_messages(
            &mut out,
            &[
                CmdMessage::success("Cadastro realizado com sucesso."),
                CmdMessage::warning("Operação interrompida."),
            ],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Cadastro realizado com sucesso.\nOperação interrompida.\n"
        );
    }

    #[test]
    fn failure_uses_error_text() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_failure(&mut out, &RegistryError::NotFound("1".into())).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "O CPF 1 não foi encontrado no registro.\n"
        );
    }

    #[test]
    fn table_has_title_and_rows() {
        let mut out = Vec::new();
        print_table(&mut out, "Listagem:", &[pedro()]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\nListagem:\n"));
        assert!(text.contains(&pedro().summary()));
    }

    #[test]
    fn details_one_per_record() {
        let mut out = Vec::new();
        print_details(&mut out, &[pedro()]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", pedro().detail()));
    }
}
