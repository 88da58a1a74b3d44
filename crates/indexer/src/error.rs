use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Malformed registry rows: {0}")]
    Parse(#[from] serde_json::Error),
}
