//! Data contracts shared between the server-rendered pages and the wasm UI.
//!
//! Everything here is plain serde data: the JSON returned by the ticket
//! endpoints and the `data-props` payloads embedded in island host elements.

pub mod dashboards;
pub mod domain;
pub mod shared;
