use crate::commands::{CmdResult, ListOrder};
use crate::model::Citizen;
use crate::registry::sorted_by_name;

pub fn run(records: &[Citizen], order: ListOrder) -> CmdResult {
    let listed = match order {
        ListOrder::Insertion => records.to_vec(),
        ListOrder::Alphabetical => sorted_by_name(records),
    };
    CmdResult::default().with_listed(listed)
}
