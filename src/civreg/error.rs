use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Formato de data inválido: {0:?}")]
    InvalidFormat(String),

    #[error("Opção inválida: {0:?}")]
    InvalidChoice(String),

    #[error("O CPF {0} não foi encontrado no registro.")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RegistryError {
    /// Whether the shell should re-prompt rather than abort.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RegistryError::InvalidFormat(_)
                | RegistryError::InvalidChoice(_)
                | RegistryError::NotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failures_are_recoverable() {
        assert!(RegistryError::InvalidFormat("x".into()).is_recoverable());
        assert!(RegistryError::InvalidChoice("x".into()).is_recoverable());
        assert!(RegistryError::NotFound("1".into()).is_recoverable());
    }

    #[test]
    fn io_failures_are_not_recoverable() {
        let err = RegistryError::from(std::io::Error::from(std::io::ErrorKind::UnexpectedEof));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn not_found_names_the_national_id() {
        assert_eq!(
            RegistryError::NotFound("29137219371".into()).to_string(),
            "O CPF 29137219371 não foi encontrado no registro."
        );
    }
}
