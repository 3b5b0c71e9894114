//! Decoding inbound requests into actions.
//!
//! Requests arrive as an action name plus an optional tile ID, the way an
//! HTML form posts them (`POST /select-tile` with `id=7`) or the way a
//! terminal user types them (`select-tile 7`). A leading `/` is accepted so
//! HTTP paths decode directly.

use thiserror::Error;

use crate::core::action::Action;
use crate::core::tile::TileId;

/// Reasons a request does not decode to an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("unknown action {0:?}")]
    UnknownAction(String),

    #[error("select-tile needs a tile id")]
    MissingTileId,

    #[error("invalid tile id {0:?}")]
    InvalidTileId(String),
}

/// Decoder for inbound action requests.
pub struct ActionRequest;

impl ActionRequest {
    /// Decode an action name and optional tile ID.
    ///
    /// ```
    /// use funnections::core::{Action, TileId};
    /// use funnections::view::ActionRequest;
    ///
    /// assert_eq!(
    ///     ActionRequest::decode("/select-tile", Some("7")),
    ///     Ok(Action::SelectTile(TileId(7)))
    /// );
    /// assert_eq!(ActionRequest::decode("submit", None), Ok(Action::Submit));
    /// ```
    pub fn decode(name: &str, id: Option<&str>) -> Result<Action, RequestError> {
        let name = name.trim().trim_start_matches('/');
        match name.to_ascii_lowercase().as_str() {
            "" | "view" => Ok(Action::View),
            "select-tile" | "select" => {
                let raw = id.ok_or(RequestError::MissingTileId)?.trim();
                raw.parse::<u32>()
                    .map(|id| Action::SelectTile(TileId(id)))
                    .map_err(|_| RequestError::InvalidTileId(raw.to_owned()))
            }
            "submit" => Ok(Action::Submit),
            "shuffle" => Ok(Action::Shuffle),
            "deselect-all" | "deselect" => Ok(Action::DeselectAll),
            _ => Err(RequestError::UnknownAction(name.to_owned())),
        }
    }

    /// Decode a whitespace-separated command line such as `select-tile 7`.
    pub fn parse_line(line: &str) -> Result<Action, RequestError> {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or("");
        Self::decode(name, parts.next())
    }
}
