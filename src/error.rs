// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure taxonomy surfaced to the presentation layer. Nothing here is
/// fatal: every path degrades to an observable state plus a safe default.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad user input, rejected before touching any collaborator.
    #[error("{0}")]
    Validation(String),
    /// A transaction-store or preference-store call failed.
    #[error("store error: {0}")]
    Store(String),
    /// Malformed persisted payload or API body.
    #[error("decode error: {0}")]
    Decode(String),
    /// Unreachable endpoint, non-2xx status, or transport failure.
    #[error("network error: {0}")]
    Network(String),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Error::Store(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Error::Decode(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Error::Network(msg.into())
    }
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        Error::Store(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Network(e.to_string())
    }
}
