use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Task service error taxonomy. Every variant carries a stable code of the
/// form `ERR_TASK_00NN` that clients match on.
///
/// `System`, `Network`, `Unauthorized`, and `Timeout` exist for API-contract
/// completeness; nothing in this service raises them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid uri parameters")]
    InvalidParameters,

    #[error("invalid request payload")]
    InvalidPayload,

    #[error("system error")]
    System,

    #[error("network error")]
    Network,

    #[error("unauthorized")]
    Unauthorized,

    #[error("service timeout")]
    Timeout,

    #[error("data not found")]
    NotFound,

    #[error("wrong task ID")]
    WrongId,

    #[error("task name not match")]
    NameMismatch,
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidParameters => "ERR_TASK_0001",
            Error::InvalidPayload => "ERR_TASK_0002",
            Error::System => "ERR_TASK_0003",
            Error::Network => "ERR_TASK_0004",
            Error::Unauthorized => "ERR_TASK_0005",
            Error::Timeout => "ERR_TASK_0006",
            Error::NotFound => "ERR_TASK_0007",
            Error::WrongId => "ERR_TASK_0008",
            Error::NameMismatch => "ERR_TASK_0009",
        }
    }
}

// Wire shape is `{"errorCode": ..., "message": ...}`.
impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ErrorResponse", 2)?;
        state.serialize_field("errorCode", self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
