//! Presentation adapter: game state out, actions in.
//!
//! - `model`: the serializable `ViewModel` renderers draw from
//! - `request`: decoding of inbound action requests
//!
//! Neither half contains game rules or mutates a `GameState`.

pub mod model;
pub mod request;

pub use model::{SolvedGroupView, TileView, ViewModel};
pub use request::{ActionRequest, RequestError};
