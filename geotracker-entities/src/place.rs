use crate::geo::Position;

/// A named place found by the place search.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub display_name: String,
    pub pos: Position,
}
