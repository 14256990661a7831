//! # Records
//!
//! The registry holds two kinds of record: an unlicensed [`Person`] and a
//! licensed [`Driver`]. Both share the [`Record`] capability set (the common
//! getters plus `summary` and `detail` rendering); [`Citizen`] is the sum type
//! stored in the registry.
//!
//! ## Derived expiry date
//!
//! A driver's expiry date is never set directly. It is recomputed from the
//! issue date whenever the driver is constructed, the issue date is written, or
//! the birth date is written:
//!
//! ```text
//! expiry = issue + validity_years(age)
//! age    = whole years from birth date to the evaluation date ("today")
//! ```
//!
//! Age is measured against the day of the write, not the issue date, so the
//! same issue date can yield a different expiry when re-entered years later.
//!
//! ## Variant-specific setters
//!
//! License setters live on `Driver` only. Code holding a `Citizen` reaches them
//! by matching `Citizen::Licensed` or calling [`Citizen::as_driver_mut`]; a
//! `Person` has no such methods, so the misuse cannot compile.

use chrono::{Local, Months, NaiveDate};
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Column widths of the summary row.
pub const NAME_WIDTH: usize = 32;
pub const NATIONAL_ID_WIDTH: usize = 11;
pub const LICENSE_WIDTH: usize = 22;

/// Marker shown in place of license data for unlicensed citizens.
pub const NOT_LICENSED: &str = "Não possui habilitação";

const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    A,
    B,
    C,
    D,
    E,
}

impl Category {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' => Some(Category::A),
            'B' => Some(Category::B),
            'C' => Some(Category::C),
            'D' => Some(Category::D),
            'E' => Some(Category::E),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Category::A => 'A',
            Category::B => 'B',
            Category::C => 'C',
            Category::D => 'D',
            Category::E => 'E',
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenseType {
    /// Probationary permit (PPD)
    Provisional,
    Definitive,
}

impl LicenseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseType::Provisional => "PPD",
            LicenseType::Definitive => "DEFINITIVA",
        }
    }
}

impl fmt::Display for LicenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The capabilities shared by every registry record.
pub trait Record {
    fn name(&self) -> &str;
    fn national_id(&self) -> &str;
    fn birth_date(&self) -> NaiveDate;

    /// Fixed-width table row: `| name | national id | license |`.
    fn summary(&self) -> String;

    /// Every field, dates as `dd/mm/yyyy`, across two lines.
    fn detail(&self) -> String;
}

/// Current local date, used as the evaluation date for age brackets.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Number of years a license stays valid for someone born on `birth_date`,
/// judged on `evaluation_date`.
pub fn validity_years(birth_date: NaiveDate, evaluation_date: NaiveDate) -> u32 {
    let age = evaluation_date.years_since(birth_date).unwrap_or(0);
    if age < 50 {
        10
    } else if age < 69 {
        5
    } else {
        3
    }
}

/// Adds whole years, landing on 28 February when 29 February has no
/// counterpart in the target year.
fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_add_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MAX)
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Left-justifies `text` in a cell `width` columns wide. Longer text is kept
/// whole.
pub(crate) fn pad_cell(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

pub(crate) fn summary_row(name: &str, national_id: &str, license: &str) -> String {
    format!(
        "| {} | {} | {} |",
        pad_cell(name, NAME_WIDTH),
        pad_cell(national_id, NATIONAL_ID_WIDTH),
        pad_cell(license, LICENSE_WIDTH)
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    national_id: String,
    birth_date: NaiveDate,
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        national_id: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            national_id: national_id.into(),
            birth_date,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_national_id(&mut self, national_id: impl Into<String>) {
        self.national_id = national_id.into();
    }

    pub fn set_birth_date(&mut self, birth_date: NaiveDate) {
        self.birth_date = birth_date;
    }

    /// First detail line. The birth-date label differs between the two
    /// record kinds.
    fn identity_line(&self, birth_label: &str) -> String {
        format!(
            "NOME: {} | CPF: {} | {}: {}",
            self.name,
            self.national_id,
            birth_label,
            format_date(self.birth_date)
        )
    }
}

impl Record for Person {
    fn name(&self) -> &str {
        &self.name
    }

    fn national_id(&self) -> &str {
        &self.national_id
    }

    fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    fn summary(&self) -> String {
        summary_row(&self.name, &self.national_id, NOT_LICENSED)
    }

    fn detail(&self) -> String {
        format!(
            "{}\n{}",
            self.identity_line("DATA DE NASCIMENTO"),
            NOT_LICENSED.to_uppercase()
        )
    }
}

/// License data supplied when registering a driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseDetails {
    pub number: String,
    pub category: Category,
    pub issue_date: NaiveDate,
    pub license_type: LicenseType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    person: Person,
    license: LicenseDetails,
    expiry_date: NaiveDate,
}

impl Driver {
    pub fn new(person: Person, license: LicenseDetails) -> Self {
        Self::new_at(person, license, today())
    }

    /// Builds a driver judging the age bracket on `evaluation_date`.
    pub fn new_at(person: Person, license: LicenseDetails, evaluation_date: NaiveDate) -> Self {
        let mut driver = Self {
            person,
            expiry_date: license.issue_date,
            license,
        };
        driver.recompute_expiry(evaluation_date);
        driver
    }

    fn recompute_expiry(&mut self, evaluation_date: NaiveDate) {
        let years = validity_years(self.person.birth_date, evaluation_date);
        self.expiry_date = add_years(self.license.issue_date, years);
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn license_number(&self) -> &str {
        &self.license.number
    }

    pub fn category(&self) -> Category {
        self.license.category
    }

    pub fn issue_date(&self) -> NaiveDate {
        self.license.issue_date
    }

    pub fn license_type(&self) -> LicenseType {
        self.license.license_type
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.person.set_name(name);
    }

    pub fn set_national_id(&mut self, national_id: impl Into<String>) {
        self.person.set_national_id(national_id);
    }

    pub fn set_birth_date(&mut self, birth_date: NaiveDate) {
        self.set_birth_date_at(birth_date, today());
    }

    pub fn set_birth_date_at(&mut self, birth_date: NaiveDate, evaluation_date: NaiveDate) {
        self.person.set_birth_date(birth_date);
        self.recompute_expiry(evaluation_date);
    }

    pub fn set_license_number(&mut self, number: impl Into<String>) {
        self.license.number = number.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.license.category = category;
    }

    pub fn set_issue_date(&mut self, issue_date: NaiveDate) {
        self.set_issue_date_at(issue_date, today());
    }

    pub fn set_issue_date_at(&mut self, issue_date: NaiveDate, evaluation_date: NaiveDate) {
        self.license.issue_date = issue_date;
        self.recompute_expiry(evaluation_date);
    }

    pub fn set_license_type(&mut self, license_type: LicenseType) {
        self.license.license_type = license_type;
    }
}

impl Record for Driver {
    fn name(&self) -> &str {
        self.person.name()
    }

    fn national_id(&self) -> &str {
        self.person.national_id()
    }

    fn birth_date(&self) -> NaiveDate {
        self.person.birth_date()
    }

    fn summary(&self) -> String {
        summary_row(
            self.person.name(),
            self.person.national_id(),
            &self.license.number,
        )
    }

    fn detail(&self) -> String {
        format!(
            "{}\nNÚMERO DE REGISTRO: {} | CATEGORIA: {} | DATA DE EMISSÃO: {} | DATA DE VALIDADE: {} | Tipo de carteira: {}",
            self.person.identity_line("DATA DO NASCIMENTO"),
            self.license.number,
            self.license.category,
            format_date(self.license.issue_date),
            format_date(self.expiry_date),
            self.license.license_type
        )
    }
}

/// A registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Citizen {
    Unlicensed(Person),
    Licensed(Driver),
}

impl Citizen {
    pub fn is_licensed(&self) -> bool {
        matches!(self, Citizen::Licensed(_))
    }

    pub fn as_driver(&self) -> Option<&Driver> {
        match self {
            Citizen::Licensed(driver) => Some(driver),
            Citizen::Unlicensed(_) => None,
        }
    }

    pub fn as_driver_mut(&mut self) -> Option<&mut Driver> {
        match self {
            Citizen::Licensed(driver) => Some(driver),
            Citizen::Unlicensed(_) => None,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Citizen::Unlicensed(person) => person.set_name(name),
            Citizen::Licensed(driver) => driver.set_name(name),
        }
    }

    pub fn set_national_id(&mut self, national_id: impl Into<String>) {
        match self {
            Citizen::Unlicensed(person) => person.set_national_id(national_id),
            Citizen::Licensed(driver) => driver.set_national_id(national_id),
        }
    }

    pub fn set_birth_date(&mut self, birth_date: NaiveDate) {
        match self {
            Citizen::Unlicensed(person) => person.set_birth_date(birth_date),
            Citizen::Licensed(driver) => driver.set_birth_date(birth_date),
        }
    }

    fn record(&self) -> &dyn Record {
        match self {
            Citizen::Unlicensed(person) => person,
            Citizen::Licensed(driver) => driver,
        }
    }
}

impl Record for Citizen {
    fn name(&self) -> &str {
        self.record().name()
    }

    fn national_id(&self) -> &str {
        self.record().national_id()
    }

    fn birth_date(&self) -> NaiveDate {
        self.record().birth_date()
    }

    fn summary(&self) -> String {
        self.record().summary()
    }

    fn detail(&self) -> String {
        self.record().detail()
    }
}

impl From<Person> for Citizen {
    fn from(person: Person) -> Self {
        Citizen::Unlicensed(person)
    }
}

impl From<Driver> for Citizen {
    fn from(driver: Driver) -> Self {
        Citizen::Licensed(driver)
    }
}
