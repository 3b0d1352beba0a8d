//! Bridge orchestration services.

mod message_bridge;

pub use message_bridge::{
    DEFAULT_REQUEST_TIMEOUT, FnResponder, MessageBridge, RequestResponder, responder_fn,
};
