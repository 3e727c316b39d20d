//! Touch/mouse gesture interpretation

/// Gesture state machine
pub mod classifier;
/// Samples, deltas and intents
pub mod types;

pub use classifier::{GestureClassifier, GestureState};
pub use types::{
    AxisLock, DragUpdate, GestureIntent, GestureSummary, PointerDelta,
    PointerSample, PointerSource,
};
