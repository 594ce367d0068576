//! Error type shared by the page components.

/// Errors raised by folio components.
///
/// Every variant except the preference/IO ones is a construction-time or
/// navigation precondition violation; nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// Typing animator built without phrases.
    #[error("typing animator needs at least one phrase")]
    EmptyPhrases,

    /// Carousel built without slides.
    #[error("carousel needs at least one slide")]
    NoSlides,

    /// Slide and indicator counts differ.
    #[error("carousel has {slides} slides but {indicators} indicators")]
    IndicatorMismatch { slides: usize, indicators: usize },

    /// Navigation to a slide that does not exist.
    #[error("slide {index} out of range (carousel has {len} slides)")]
    SlideOutOfRange { index: usize, len: usize },

    /// Filter name not carried by any filter button.
    #[error("unknown project filter: {0}")]
    UnknownFilter(String),

    /// Site content failed validation.
    #[error("invalid site content: {0}")]
    Content(String),

    /// Preference could not be encoded or decoded.
    #[error("preference error: {0}")]
    Preference(String),

    /// Run interrupted by the user.
    #[error("run cancelled")]
    Cancelled,

    /// Underlying IO failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
