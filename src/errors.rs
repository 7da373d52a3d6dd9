use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SelectError {
    #[error("OutOfRange rank {k} can't be satisfied by {len} element(s)")]
    OutOfRange { k: usize, len: usize },
}

#[derive(Error, Debug, PartialEq)]
pub enum RegistryError {
    #[error("InvalidKey id must not be blank")]
    InvalidKey,
    #[error("KeyNotFound id doesnt exists")]
    KeyNotFound,
}

#[derive(Error, Debug, PartialEq)]
pub enum DemoError {
    #[error("Select couldn't compute the kth smallest")]
    Select(#[from] SelectError),
    #[error("Registry couldn't populate the registry")]
    Registry(#[from] RegistryError),
    #[error("Render couldn't render the report: {0}")]
    Render(String),
}
