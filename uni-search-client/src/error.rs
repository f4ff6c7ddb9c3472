// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

/// Non-success status returned by the directory service.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub endpoint: String,
    pub code: u16,
    pub canonical_reason: Option<String>,
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}", self.code)?;
        if let Some(reason) = &self.canonical_reason {
            write!(f, " {}", reason)?;
        }
        write!(f, "' from API endpoint '{}'", self.endpoint)?;
        match &self.message {
            Some(message) => write!(f, ": {}", message),
            None => Ok(()),
        }
    }
}

impl std::error::Error for ApiError {}

/// Any failure of a single search: transport, status, or body decoding.
#[derive(Debug)]
pub enum Error {
    Reqwest(reqwest::Error),
    SerdeJson(serde_json::Error),
    Api(ApiError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Reqwest(err) => write!(f, "{}", err),
            Self::SerdeJson(err) => write!(f, "{}", err),
            Self::Api(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Reqwest(err) => Some(err),
            Self::SerdeJson(err) => Some(err),
            Self::Api(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Reqwest(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::SerdeJson(err)
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}
