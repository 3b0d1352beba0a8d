//! Error types for the worker registry.

use crate::registry::domain::WorkerKey;
use thiserror::Error;

/// Result type for worker registry operations.
pub type WorkerRegistryResult<T> = Result<T, WorkerRegistryError>;

/// Errors returned by the worker registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkerRegistryError {
    /// No live worker matches the address.
    #[error("no worker registered for {0}")]
    NotFound(WorkerKey),

    /// Registry state was poisoned by a panicking thread.
    #[error("worker registry lock poisoned")]
    LockPoisoned,
}

/// Error returned while parsing worker names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown worker name: {0}")]
pub struct ParseWorkerNameError(pub String);
