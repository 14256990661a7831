//! Field edits on an existing record.
//!
//! [`run`] locates the record and hands a working copy to the caller's edit
//! function. The copy replaces the stored record only when the edit returns
//! `Ok`, so a failed edit leaves the registry as it was.
//!
//! Edits are typed per variant: [`PersonEdit`] applies to any record, while
//! [`DriverEdit`] needs a `&mut Driver`, which only a `Citizen::Licensed`
//! match (or [`Citizen::as_driver_mut`]) yields.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Category, Citizen, Driver, LicenseType, Person};
use crate::registry::find_index;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonEdit {
    Name(String),
    NationalId(String),
    BirthDate(NaiveDate),
}

impl PersonEdit {
    pub fn apply(self, person: &mut Person) {
        match self {
            PersonEdit::Name(name) => person.set_name(name),
            PersonEdit::NationalId(id) => person.set_national_id(id),
            PersonEdit::BirthDate(date) => person.set_birth_date(date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverEdit {
    Person(PersonEdit),
    LicenseNumber(String),
    Category(Category),
    IssueDate(NaiveDate),
    LicenseType(LicenseType),
}

impl DriverEdit {
    pub fn apply(self, driver: &mut Driver) {
        match self {
            DriverEdit::Person(PersonEdit::Name(name)) => driver.set_name(name),
            DriverEdit::Person(PersonEdit::NationalId(id)) => driver.set_national_id(id),
            DriverEdit::Person(PersonEdit::BirthDate(date)) => driver.set_birth_date(date),
            DriverEdit::LicenseNumber(number) => driver.set_license_number(number),
            DriverEdit::Category(category) => driver.set_category(category),
            DriverEdit::IssueDate(date) => driver.set_issue_date(date),
            DriverEdit::LicenseType(license_type) => driver.set_license_type(license_type),
        }
    }
}

impl From<PersonEdit> for DriverEdit {
    fn from(edit: PersonEdit) -> Self {
        DriverEdit::Person(edit)
    }
}

pub fn run<F>(records: &mut [Citizen], national_id: &str, edit: F) -> Result<CmdResult>
where
    F: FnOnce(&mut Citizen) -> Result<()>,
{
    let index = find_index(national_id, records)?;
    let mut working = records[index].clone();
    edit(&mut working)?;
    records[index] = working;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(
        "Operação de edição de registro concluída.",
    ));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use crate::model::Record;
    use crate::seed::fixtures::RegistryFixture;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn edits_person_fields() {
        let mut records = RegistryFixture::new().with_person("Ana", "1").build();

        run(&mut records, "1", |citizen| {
            if let Citizen::Unlicensed(person) = citizen {
                PersonEdit::Name("Ana Clara".into()).apply(person);
            }
            Ok(())
        })
        .unwrap();

        assert_eq!(records[0].name(), "Ana Clara");
    }

    #[test]
    fn edits_driver_license_fields() {
        let mut records = RegistryFixture::new().with_driver("Bia", "2").build();

        let result = run(&mut records, "2", |citizen| {
            if let Some(driver) = citizen.as_driver_mut() {
                DriverEdit::Category(Category::D).apply(driver);
                DriverEdit::LicenseType(LicenseType::Provisional).apply(driver);
            }
            Ok(())
        })
        .unwrap();

        let driver = records[0].as_driver().unwrap();
        assert_eq!(driver.category(), Category::D);
        assert_eq!(driver.license_type(), LicenseType::Provisional);
        assert_eq!(
            result.messages[0].content,
            "Operação de edição de registro concluída."
        );
    }

    #[test]
    fn issue_date_edit_recomputes_expiry() {
        let mut records = RegistryFixture::new().with_driver("Bia", "2").build();
        let born = records[0].birth_date();
        let years = crate::model::validity_years(born, crate::model::today());

        run(&mut records, "2", |citizen| {
            if let Citizen::Licensed(driver) = citizen {
                DriverEdit::IssueDate(date(2023, 4, 10)).apply(driver);
            }
            Ok(())
        })
        .unwrap();

        let driver = records[0].as_driver().unwrap();
        assert_eq!(driver.issue_date(), date(2023, 4, 10));
        assert_eq!(driver.expiry_date(), date(2023 + years as i32, 4, 10));
    }

    #[test]
    fn person_edit_applies_to_driver() {
        let mut records = RegistryFixture::new().with_driver("Bia", "2").build();

        run(&mut records, "2", |citizen| {
            if let Some(driver) = citizen.as_driver_mut() {
                DriverEdit::from(PersonEdit::NationalId("22".into())).apply(driver);
            }
            Ok(())
        })
        .unwrap();

        assert_eq!(records[0].national_id(), "22");
    }

    #[test]
    fn edits_only_the_first_match() {
        let mut records = RegistryFixture::new()
            .with_person("Ana", "7")
            .with_person("Bia", "7")
            .build();

        run(&mut records, "7", |citizen| {
            citizen.set_name("Alterada");
            Ok(())
        })
        .unwrap();

        assert_eq!(records[0].name(), "Alterada");
        assert_eq!(records[1].name(), "Bia");
    }

    #[test]
    fn failed_edit_leaves_record_unchanged() {
        let mut records = RegistryFixture::new().with_person("Ana", "1").build();
        let before = records.clone();

        let result = run(&mut records, "1", |citizen| {
            citizen.set_name("Parcial");
            Err(RegistryError::InvalidChoice("9".into()))
        });

        assert!(matches!(result, Err(RegistryError::InvalidChoice(_))));
        assert_eq!(records, before);
    }

    #[test]
    fn missing_record_is_not_found() {
        let mut records = RegistryFixture::new().with_person("Ana", "1").build();
        let result = run(&mut records, "404", |_| Ok(()));
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
    }
}
