//! Error handling and exit codes.

use folio_core::constants::exit_codes;
use folio_core::error::FolioError;

/// Invalid combination of command-line settings.
#[derive(Debug, thiserror::Error)]
#[error("invalid configuration: {0}")]
pub struct ConfigError(pub String);

/// Map a page error to its exit code.
pub fn handle_error(err: &FolioError) -> i32 {
    match err {
        FolioError::EmptyPhrases
        | FolioError::NoSlides
        | FolioError::IndicatorMismatch { .. }
        | FolioError::Content(_) => exit_codes::ERROR_CONTENT,
        FolioError::Cancelled => exit_codes::ERROR_CANCELED,
        FolioError::SlideOutOfRange { .. }
        | FolioError::UnknownFilter(_)
        | FolioError::Preference(_)
        | FolioError::Io(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for an application error, looking through added context.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(folio) = err.downcast_ref::<FolioError>() {
        return handle_error(folio);
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return exit_codes::ERROR_CONFIG;
    }
    exit_codes::ERROR_GENERIC
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&FolioError::Cancelled), 130);
        assert_eq!(handle_error(&FolioError::EmptyPhrases), 5);
        assert_eq!(handle_error(&FolioError::Content("bad".into())), 5);
        assert_eq!(handle_error(&FolioError::UnknownFilter("x".into())), 1);
    }

    #[test]
    fn exit_code_sees_through_context() {
        let err = Err::<(), _>(FolioError::NoSlides)
            .context("loading content")
            .unwrap_err();
        assert_eq!(exit_code(&err), exit_codes::ERROR_CONTENT);
    }

    #[test]
    fn config_and_unknown_errors() {
        let err = anyhow::Error::new(ConfigError("step".into()));
        assert_eq!(exit_code(&err), exit_codes::ERROR_CONFIG);
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), exit_codes::ERROR_GENERIC);
    }
}
