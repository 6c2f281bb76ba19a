// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures around the persisted stats file. None of them are fatal.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("could not read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed stats in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not write {}: {source}", path.display())]
    Unwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("invalid menu choice '{0}'")]
    InvalidChoice(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("invalid feedback choice '{0}'")]
    InvalidChoice(String),
}

/// Reasons a prompt could not produce a line of input.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("interrupted")]
    Interrupted,

    #[error("console input closed")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] io::Error),
}
