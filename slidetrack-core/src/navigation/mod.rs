//! Navigation: turns prev/next/jump requests into committed track moves.

/// Move resolution and commit
pub mod navigator;
/// Requests, directions and results
pub mod types;

pub use navigator::Navigator;
pub use types::{Direction, MoveRequest, MoveResult};
