//! Demo records loaded into a fresh session.
//!
//! Seed values go through the same validators as typed input, so a bad entry
//! surfaces as an error instead of a half-built record.

use crate::error::Result;
use crate::model::{Citizen, Driver, LicenseDetails, Person};
use crate::validation::{parse_date, validate_category, validate_license_type};

struct SeedLicense {
    number: &'static str,
    category: &'static str,
    issue_date: &'static str,
    license_type: &'static str,
}

struct SeedRecord {
    name: &'static str,
    national_id: &'static str,
    birth_date: &'static str,
    license: Option<SeedLicense>,
}

const DEMO_RECORDS: [SeedRecord; 7] = [
    SeedRecord {
        name: "João",
        national_id: "12345678901",
        birth_date: "01/01/2000",
        license: Some(SeedLicense {
            number: "11111111111",
            category: "B",
            issue_date: "01/01/2022",
            license_type: "DEFINITIVA",
        }),
    },
    SeedRecord {
        name: "Maria",
        national_id: "98765432109",
        birth_date: "01/01/2005",
        license: Some(SeedLicense {
            number: "22222222222",
            category: "A",
            issue_date: "01/01/2023",
            license_type: "DEFINITIVA",
        }),
    },
    SeedRecord {
        name: "Pedro",
        national_id: "29137219371",
        birth_date: "23/11/1987",
        license: None,
    },
    SeedRecord {
        name: "José",
        national_id: "61823689126",
        birth_date: "28/02/1995",
        license: Some(SeedLicense {
            number: "44444444444",
            category: "E",
            issue_date: "20/11/2019",
            license_type: "PPD",
        }),
    },
    SeedRecord {
        name: "Lúcia",
        national_id: "68236812735",
        birth_date: "29/02/1992",
        license: Some(SeedLicense {
            number: "55555555555",
            category: "B",
            issue_date: "17/03/2020",
            license_type: "PPD",
        }),
    },
    SeedRecord {
        name: "Júlia",
        national_id: "02713290372",
        birth_date: "25/12/2003",
        license: None,
    },
    SeedRecord {
        name: "Eduardo",
        national_id: "76914609219",
        birth_date: "31/07/1953",
        license: Some(SeedLicense {
            number: "77777777777",
            category: "A",
            issue_date: "11/09/2020",
            license_type: "DEFINITIVA",
        }),
    },
];

/// Builds the seven demo records, drivers evaluated against today.
pub fn demo_records() -> Result<Vec<Citizen>> {
    DEMO_RECORDS.iter().map(build).collect()
}

fn build(seed: &SeedRecord) -> Result<Citizen> {
    let person = Person::new(seed.name, seed.national_id, parse_date(seed.birth_date)?);
    let Some(license) = &seed.license else {
        return Ok(person.into());
    };

    let details = LicenseDetails {
        number: license.number.to_string(),
        category: validate_category(license.category)?,
        issue_date: parse_date(license.issue_date)?,
        license_type: validate_license_type(license.license_type)?,
    };
    Ok(Driver::new(person, details).into())
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Category, LicenseType};
    use chrono::NaiveDate;

    /// Builds registries for tests, drivers evaluated on 2024-06-15.
    pub struct RegistryFixture {
        pub records: Vec<Citizen>,
    }

    impl Default for RegistryFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RegistryFixture {
        pub fn new() -> Self {
            Self {
                records: Vec::new(),
            }
        }

        pub fn evaluation_date() -> NaiveDate {
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        }

        pub fn with_person(mut self, name: &str, national_id: &str) -> Self {
            let birth = NaiveDate::from_ymd_opt(1990, 5, 20).unwrap();
            self.records
                .push(Person::new(name, national_id, birth).into());
            self
        }

        pub fn with_driver(mut self, name: &str, national_id: &str) -> Self {
            let birth = NaiveDate::from_ymd_opt(1985, 3, 10).unwrap();
            let license = LicenseDetails {
                number: format!("9{}", national_id),
                category: Category::B,
                issue_date: NaiveDate::from_ymd_opt(2021, 8, 1).unwrap(),
                license_type: LicenseType::Definitive,
            };
            let driver = Driver::new_at(
                Person::new(name, national_id, birth),
                license,
                Self::evaluation_date(),
            );
            self.records.push(driver.into());
            self
        }

        pub fn with_demo_records(mut self) -> Self {
            self.records.extend(demo_records().unwrap());
            self
        }

        pub fn build(self) -> Vec<Citizen> {
            self.records
        }
    }
}
