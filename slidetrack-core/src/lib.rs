//! # Slidetrack Core
//!
//! Navigation and gesture-interpretation engine for carousels built from
//! fixed-width slides laid out on a horizontal track.
//!
//! ## Overview
//!
//! - **Track model**: slide count, per-page bounds, and the clone padding
//!   that makes infinite mode loop seamlessly
//! - **Navigator**: turns prev/next/jump requests into a committed index,
//!   offset and duration under plain, rewind and infinite rules
//! - **Gesture classifier**: locks a pointer drag to scroll or swipe and
//!   turns it into a navigation intent
//! - **Slider**: owns the state and drives an injected [`render::Renderer`]
//!   and [`events::EventBus`]
//!
//! The engine does not render and does not own a display loop. The host
//! forwards input events and applies the offsets it gets back.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for configuration and result types
//!
//! ## Examples
//!
//! ```
//! use slidetrack_core::{
//!     config::{Layout, SliderConfig},
//!     events::EventBus,
//!     render::NullRenderer,
//!     slider::Slider,
//! };
//!
//! let config = SliderConfig {
//!     infinite: 1,
//!     ..SliderConfig::default()
//! };
//! let mut slider = Slider::setup(
//!     4,
//!     config,
//!     Layout::new(300.0, 300.0),
//!     NullRenderer,
//!     EventBus::new(),
//! )?;
//!
//! slider.prev().expect("slide exists");
//! slider.on_transition_complete();
//! assert_eq!(slider.real_index(), 3);
//! # Ok::<(), slidetrack_core::error::SliderError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Static configuration and layout
pub mod config;

/// Error types
pub mod error;

/// Lifecycle notifications and observers
pub mod events;

/// Pointer gesture classification
pub mod gesture;

/// Move resolution
pub mod navigation;

/// Host rendering and geometry capabilities
pub mod render;

/// Reentrancy guard for layout resyncs
pub mod reset_guard;

/// Owning slider facade
pub mod slider;

/// Track model and clone bookkeeping
pub mod track;

pub use config::{Layout, SliderConfig};
pub use error::{ConfigError, NavigationWarning, SliderError};
pub use events::{EventBus, SliderEvent, SliderObserver};
pub use gesture::{GestureIntent, PointerSample};
pub use navigation::{Direction, MoveRequest, MoveResult};
pub use render::{Control, GeometryProbe, Renderer};
pub use slider::{GestureEnd, Slider};
pub use track::{CloneBoundary, TrackState};
