use crate::commands::{CmdMessage, CmdResult};
use crate::model::Citizen;

pub fn run(records: &mut Vec<Citizen>, citizen: Citizen) -> CmdResult {
    records.push(citizen);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Cadastro realizado com sucesso."));
    result
}
