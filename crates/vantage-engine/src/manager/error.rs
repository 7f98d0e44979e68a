use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ManagerError {
    #[error("a rendering sensor named '{0}' already exists")]
    DuplicateName(String),
}
