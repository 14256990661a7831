//! # API Facade
//!
//! [`RegistryApi`] owns the session's registry and is the single entry point
//! for clients. Each method dispatches to a command in [`crate::commands`] and
//! returns its [`CmdResult`]; the facade holds no business logic of its own and
//! performs no I/O.
//!
//! The registry lives only as long as the facade: nothing is written to disk.

use crate::commands;
use crate::error::Result;
use crate::model::Citizen;
use crate::seed;

#[derive(Debug, Default)]
pub struct RegistryApi {
    records: Vec<Citizen>,
}

impl RegistryApi {
    pub fn new(records: Vec<Citizen>) -> Self {
        Self { records }
    }

    /// A registry pre-loaded with the demo records.
    pub fn with_seed() -> Result<Self> {
        Ok(Self::new(seed::demo_records()?))
    }

    pub fn register(&mut self, citizen: Citizen) -> CmdResult {
        commands::create::run(&mut self.records, citizen)
    }

    pub fn find(&self, national_id: &str) -> Result<CmdResult> {
        commands::view::run(&self.records, national_id)
    }

    pub fn edit<F>(&mut self, national_id: &str, edit: F) -> Result<CmdResult>
    where
        F: FnOnce(&mut Citizen) -> Result<()>,
    {
        commands::edit::run(&mut self.records, national_id, edit)
    }

    pub fn delete(&mut self, national_id: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.records, national_id)
    }

    pub fn list(&self, order: ListOrder) -> CmdResult {
        commands::list::run(&self.records, order)
    }

    pub fn records(&self) -> &[Citizen] {
        &self.records
    }
}

pub use commands::edit::{DriverEdit, PersonEdit};
pub use commands::{CmdMessage, CmdResult, ListOrder, MessageLevel};
