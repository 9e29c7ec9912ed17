//! Content errors

use thiserror::Error;

/// Errors raised while loading or editing page content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize content: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hero needs exactly {expected} stats, got {actual}")]
    HeroStats { expected: usize, actual: usize },

    #[error("duplicate feature id '{0}'")]
    DuplicateFeature(String),

    #[error("step {position} is numbered '{number}', expected '{expected}'")]
    StepNumber {
        position: usize,
        number: String,
        expected: String,
    },

    #[error("expected exactly one featured testimonial, found {0}")]
    FeaturedTestimonials(usize),

    #[error("testimonial {id} has rating {rating}, expected 1 to 5")]
    Rating { id: u32, rating: u8 },

    #[error("navigation link '{0}' does not point at an in-page anchor")]
    NavigationLink(String),

    #[error("footer column '{0}' has no links")]
    EmptyFooterColumn(String),

    #[error("{0} must not be empty")]
    Missing(&'static str),

    #[error("unsupported language '{0}'")]
    UnsupportedLanguage(String),
}

/// Result type for content operations
pub type Result<T> = std::result::Result<T, ContentError>;
