use std::{error, fmt::Display, rc::Rc};

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum AppError {
    #[error("JSON {0}")]
    Json(String),
    #[error("Search service responded with status {0}")]
    Status(u16),
    #[error("System error {0}")]
    SystemError(#[from] SystemError),
    #[error("No element with id `{0}` on the page")]
    MissingElement(String),
    #[error("Element `{0}` is not the expected kind of element")]
    WrongElement(String),
}

/// This error type implements From's for the non cloneable transport errors and keeps them behind an Rc
/// so results can be handed around the UI freely
#[derive(Clone, Debug)]
pub enum SystemError {
    Message(String),
    #[cfg(all(feature = "native", not(feature = "csr")))]
    ReqwestError(Rc<reqwest::Error>),
    #[cfg(feature = "csr")]
    GlooError(Rc<gloo_net::Error>),
    Anyhow(Rc<anyhow::Error>),
}

impl From<anyhow::Error> for SystemError {
    fn from(value: anyhow::Error) -> Self {
        Self::Anyhow(Rc::new(value))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(value: anyhow::Error) -> Self {
        Self::SystemError(value.into())
    }
}

#[cfg(all(feature = "native", not(feature = "csr")))]
impl From<reqwest::Error> for SystemError {
    fn from(value: reqwest::Error) -> Self {
        Self::ReqwestError(Rc::new(value))
    }
}

#[cfg(all(feature = "native", not(feature = "csr")))]
impl From<reqwest::Error> for AppError {
    fn from(value: reqwest::Error) -> Self {
        Self::SystemError(value.into())
    }
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for SystemError {
    fn from(value: gloo_net::Error) -> Self {
        Self::GlooError(Rc::new(value))
    }
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for AppError {
    fn from(value: gloo_net::Error) -> Self {
        Self::SystemError(value.into())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value.to_string())
    }
}

impl Display for SystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemError::Message(message) => write!(f, "{}", message),
            #[cfg(all(feature = "native", not(feature = "csr")))]
            SystemError::ReqwestError(reqwest) => write!(f, "{}", reqwest),
            #[cfg(feature = "csr")]
            SystemError::GlooError(g) => write!(f, "{}", g),
            SystemError::Anyhow(anyhow) => write!(f, "{}", anyhow),
        }
    }
}

impl error::Error for SystemError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SystemError::Message(_) => None,
            #[cfg(all(feature = "native", not(feature = "csr")))]
            SystemError::ReqwestError(reqwest) => Some(reqwest.as_ref()),
            #[cfg(feature = "csr")]
            SystemError::GlooError(gloo) => Some(gloo.as_ref()),
            SystemError::Anyhow(anyhow) => Some(anyhow.root_cause()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod test {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn error_types() {
        let err: AppError = anyhow::anyhow!("connection reset").into();
        assert!(matches!(err, AppError::SystemError(SystemError::Anyhow(_))));
        assert_eq!(err.to_string(), "System error connection reset");
        assert!(err.source().is_some());

        let err: AppError = serde_json::from_str::<Vec<u32>>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::Json(_)));

        assert_eq!(
            AppError::Status(502).to_string(),
            "Search service responded with status 502"
        );
    }
}
