use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Citizen;
use crate::registry::find_index;

/// Removes the first record with this national ID. Asking for confirmation is
/// up to the caller.
pub fn run(records: &mut Vec<Citizen>, national_id: &str) -> Result<CmdResult> {
    let index = find_index(national_id, records)?;
    records.remove(index);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Operação concluida. O registro do cidadão de CPF {} foi deletado.",
        national_id
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use crate::model::Record;
    use crate::seed::fixtures::RegistryFixture;

    #[test]
    fn removes_matching_record() {
        let mut records = RegistryFixture::new()
            .with_person("Ana", "1")
            .with_driver("Bia", "2")
            .with_person("Carla", "3")
            .build();

        let result = run(&mut records, "2").unwrap();

        let names: Vec<&str> = records.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Ana", "Carla"]);
        assert_eq!(
            result.messages[0].content,
            "Operação concluida. O registro do cidadão de CPF 2 foi deletado."
        );
    }

    #[test]
    fn removes_only_first_duplicate() {
        let mut records = RegistryFixture::new()
            .with_person("Ana", "7")
            .with_person("Bia", "7")
            .build();

        run(&mut records, "7").unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "Bia");
    }

    #[test]
    fn missing_record_leaves_registry_intact() {
        let mut records = RegistryFixture::new().with_person("Ana", "1").build();

        let result = run(&mut records, "9");

        assert!(matches!(result, Err(RegistryError::NotFound(_))));
        assert_eq!(records.len(), 1);
    }
}
