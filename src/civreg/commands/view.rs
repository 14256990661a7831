use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Citizen;
use crate::registry::find_index;

pub fn run(records: &[Citizen], national_id: &str) -> Result<CmdResult> {
    let index = find_index(national_id, records)?;

    let mut result = CmdResult::default().with_listed(vec![records[index].clone()]);
    result.add_message(CmdMessage::success(format!(
        "CPF encontrado!\nListagem completa do cidadão de CPF {}:",
        national_id
    )));
    Ok(result)
}
