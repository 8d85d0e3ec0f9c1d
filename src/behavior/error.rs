use thiserror::Error;

/// Why a controller (or one of its items) could not be wired to the markup.
/// Callers log these and carry on; none of them reach the visitor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttachError {
    #[error("missing required element `{0}`")]
    MissingElement(&'static str),
    #[error("carousel track contains no slides")]
    NoSlides,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_selector() {
        let err = AttachError::MissingElement(".faq-answer");
        assert_eq!(err.to_string(), "missing required element `.faq-answer`");
        assert_eq!(AttachError::NoSlides.to_string(), "carousel track contains no slides");
    }
}
