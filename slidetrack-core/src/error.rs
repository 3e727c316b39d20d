use thiserror::Error;

/// Invalid static configuration. Raised synchronously by setup; the slider
/// is never constructed when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Zero real slides.
    #[error("slider has no slides")]
    NoSlides,

    /// Clone padding at least as large as the real slide count.
    #[error(
        "infinite count {infinite} must be smaller than the slide count \
         {slides}"
    )]
    InfiniteOverlap {
        /// Configured clones per side.
        infinite: usize,
        /// Real slide count.
        slides: usize,
    },

    /// `initial_index` does not address a real slide.
    #[error("initial index {index} is outside the {slides} available slides")]
    InitialIndexOutOfRange {
        /// Configured initial index.
        index: usize,
        /// Real slide count.
        slides: usize,
    },

    /// Steps of zero slides.
    #[error("slides_to_scroll must be at least 1")]
    ZeroSlidesToScroll,

    /// Fixed slide width that is zero, negative or not finite.
    #[error("fixed slide width must be positive, got {slide_width_px}px")]
    InvalidSlideWidth {
        /// Rejected width.
        slide_width_px: f32,
    },

    /// Measured frame or slide width that is zero, negative or not finite.
    #[error(
        "invalid layout: frame {frame_width_px}px, slide {slide_width_px}px"
    )]
    InvalidLayout {
        /// Measured frame width.
        frame_width_px: f32,
        /// Measured or fixed slide width.
        slide_width_px: f32,
    },
}

/// Fatal slider error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SliderError {
    /// Setup rejected the configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Non-fatal navigation anomaly. The slider keeps its prior state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationWarning {
    /// The resolved target index has no slide on the padded track.
    #[error("slide not found: index {index} in a track of {len} slides")]
    SlideNotFound {
        /// Resolved padded index.
        index: isize,
        /// Padded track length.
        len: usize,
    },
}

/// Result of slider setup.
pub type Result<T> = std::result::Result<T, SliderError>;
