use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("unknown render variant: {0}")]
    UnknownVariant(String),
    #[error("unknown library tab: {0}")]
    UnknownTab(String),
    #[error("environment parameter {0} must be finite")]
    NonFiniteEnvironmentParam(&'static str),
}
