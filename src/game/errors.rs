use thiserror::Error;

/// Errors raised by the collaborators around the game core.
///
/// Blocked moves, wrong puzzle answers and unknown actions are ordinary game
/// outcomes and never show up here.
#[derive(Debug, Error)]
pub enum GameError {
    /// Wrapper around terminal IO errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The input source ran dry before the session reached an ending.
    #[error("input closed before the game ended")]
    InputClosed,

    /// Returned when looking up a room by a name the graph does not contain.
    #[error("room not found: {0}")]
    UnknownRoom(String),

    /// A start position that does not name a room in the graph.
    #[error("room id {id} out of range (graph has {len} rooms)")]
    InvalidRoomId { id: usize, len: usize },
}
