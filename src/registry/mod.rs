//! Directory of addressable worker contexts.
//!
//! A worker is an execution context bound to a browser tab or frame,
//! addressed by `(name, tab)` and owning the bridge to that context. The
//! registry is an explicit object with injected lifetime; components
//! receive it rather than reaching for ambient state. Tab teardown is
//! signalled by an external lifecycle collaborator; the registry performs
//! no polling of its own.

pub mod domain;
pub mod error;
pub mod service;

pub use domain::{TabId, Worker, WorkerKey, WorkerName};
pub use error::{ParseWorkerNameError, WorkerRegistryError, WorkerRegistryResult};
pub use service::WorkerRegistry;
