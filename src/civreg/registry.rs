//! Operations over the registry sequence: lookup by national ID,
//! alphabetical ordering and table rendering.
//!
//! The registry is a plain slice of [`Citizen`] owned by the caller. Nothing
//! here keeps an index or mutates the slice; lookups are linear scans.

use crate::error::{RegistryError, Result};
use crate::model::{summary_row, Citizen, Record};
use crate::model::{LICENSE_WIDTH, NAME_WIDTH, NATIONAL_ID_WIDTH};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Width of the `|` and space decorations around the three columns.
const TABLE_DECORATION_WIDTH: usize = 10;

/// Returns the position of the first record with exactly this national ID.
pub fn find_index<R: Record>(national_id: &str, records: &[R]) -> Result<usize> {
    records
        .iter()
        .position(|record| record.national_id() == national_id)
        .ok_or_else(|| RegistryError::NotFound(national_id.to_string()))
}

/// Comparison key for alphabetical listings: the name lower-cased, decomposed
/// (NFD) and stripped of combining marks, so `Édson` sorts as `edson`.
pub fn sort_key<R: Record + ?Sized>(record: &R) -> String {
    normalize_name(record.name())
}

fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Returns a copy of `records` ordered by [`sort_key`]. Records with equal keys
/// keep their relative order.
pub fn sorted_by_name(records: &[Citizen]) -> Vec<Citizen> {
    let mut keyed: Vec<(String, &Citizen)> = records
        .iter()
        .map(|record| (sort_key(record), record))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    keyed.into_iter().map(|(_, record)| record.clone()).collect()
}

/// Renders records as a bordered table, one [`Record::summary`] row each.
pub fn render_table<R: Record>(records: &[R]) -> String {
    let rule = table_rule();
    let mut out = String::new();

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&table_header());
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for record in records {
        out.push_str(&record.summary());
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

fn table_header() -> String {
    summary_row("NOME", "CPF", "NÚMERO DE REGISTRO")
}

fn table_rule() -> String {
    "-".repeat(NAME_WIDTH + NATIONAL_ID_WIDTH + LICENSE_WIDTH + TABLE_DECORATION_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Driver, LicenseDetails, LicenseType, Person};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn person(name: &str, id: &str) -> Citizen {
        Person::new(name, id, date(2000, 1, 1)).into()
    }

    fn driver(name: &str, id: &str) -> Citizen {
        Driver::new_at(
            Person::new(name, id, date(2000, 1, 1)),
            LicenseDetails {
                number: format!("CNH-{}", id),
                category: Category::A,
                issue_date: date(2022, 1, 1),
                license_type: LicenseType::Definitive,
            },
            date(2024, 1, 1),
        )
        .into()
    }

    fn names(records: &[Citizen]) -> Vec<&str> {
        records.iter().map(|r| r.name()).collect()
    }

    #[test]
    fn find_index_returns_position() {
        let records = vec![person("A", "1"), driver("B", "2"), person("C", "3")];
        assert_eq!(find_index("2", &records).unwrap(), 1);
        assert_eq!(find_index("3", &records).unwrap(), 2);
    }

    #[test]
    fn find_index_returns_first_duplicate() {
        let records = vec![person("A", "1"), person("B", "7"), driver("C", "7")];
        assert_eq!(find_index("7", &records).unwrap(), 1);
    }

    #[test]
    fn find_index_uses_exact_equality() {
        let records = vec![person("A", "123")];
        assert!(matches!(
            find_index(" 123", &records),
            Err(RegistryError::NotFound(_))
        ));
        assert!(matches!(
            find_index("12", &records),
            Err(RegistryError::NotFound(_))
        ));
    }

    #[test]
    fn find_index_on_empty_registry() {
        let records: Vec<Citizen> = Vec::new();
        match find_index("1", &records) {
            Err(RegistryError::NotFound(id)) => assert_eq!(id, "1"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn sort_key_strips_accents_and_case() {
        assert_eq!(sort_key(&person("Édson", "1")), "edson");
        assert_eq!(sort_key(&person("JOÃO", "1")), "joao");
        assert_eq!(sort_key(&person("Lúcia", "1")), "lucia");
        assert_eq!(sort_key(&person("Çarla", "1")), "carla");
    }

    #[test]
    fn sorted_by_name_ignores_accents_and_case() {
        let records = vec![
            person("Júlia", "1"),
            driver("João", "2"),
            person("ana", "3"),
            driver("Édson", "4"),
        ];

        let sorted = sorted_by_name(&records);
        assert_eq!(names(&sorted), vec!["ana", "Édson", "João", "Júlia"]);
    }

    #[test]
    fn sorted_by_name_leaves_input_untouched() {
        let records = vec![person("Zé", "1"), person("Ana", "2")];
        let before = records.clone();

        let _ = sorted_by_name(&records);
        assert_eq!(records, before);
    }

    #[test]
    fn sorted_by_name_is_stable() {
        let records = vec![
            person("Jose", "1"),
            person("Ana", "2"),
            driver("José", "3"),
            person("JOSE", "4"),
        ];

        let sorted = sorted_by_name(&records);
        let ids: Vec<&str> = sorted.iter().map(|r| r.national_id()).collect();
        assert_eq!(ids, vec!["2", "1", "3", "4"]);
    }

    #[test]
    fn sorted_by_name_keeps_display_names() {
        let sorted = sorted_by_name(&[person("Édson", "1")]);
        assert_eq!(sorted[0].name(), "Édson");
    }

    #[test]
    fn render_table_layout() {
        let records = vec![person("Pedro", "29137219371"), driver("Ana", "1")];
        let table = render_table(&records);
        let lines: Vec<&str> = table.lines().collect();

        let rule = "-".repeat(75);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], rule);
        assert_eq!(
            lines[1],
            format!(
                "| NOME{} | CPF{} | NÚMERO DE REGISTRO{} |",
                " ".repeat(28),
                " ".repeat(8),
                " ".repeat(4)
            )
        );
        assert_eq!(lines[2], rule);
        assert_eq!(lines[3], records[0].summary());
        assert_eq!(lines[4], records[1].summary());
        assert_eq!(lines[5], rule);
        assert!(table.ends_with('\n'));
    }

    #[test]
    fn render_table_without_records() {
        let records: Vec<Citizen> = Vec::new();
        assert_eq!(render_table(&records).lines().count(), 4);
    }
}
