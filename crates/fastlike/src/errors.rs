//! Error handling and exit codes.

use fastlike_core::constants::exit_codes;
use fastlike_core::LikeError;

/// Exit code for a matching error.
pub fn handle_error(err: &LikeError) -> i32 {
    match err {
        LikeError::Encoding { .. } => exit_codes::ERROR_ENCODING,
        LikeError::EmptyPattern | LikeError::Config(_) => exit_codes::ERROR_CONFIG,
        LikeError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
        LikeError::Transform(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any application error; errors that did not come from
/// matching (I/O, for instance) map to the generic code.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let code = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<LikeError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error);
    u8::try_from(code).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn error_codes() {
        assert_eq!(
            handle_error(&LikeError::Encoding {
                character: '#',
                position: 0
            }),
            5
        );
        assert_eq!(handle_error(&LikeError::EmptyPattern), 4);
        assert_eq!(handle_error(&LikeError::Config("bad".into())), 4);
        assert_eq!(
            handle_error(&LikeError::Mismatch {
                line: 1,
                expected: 2,
                actual: 3
            }),
            3
        );
    }

    #[test]
    fn exit_code_looks_through_context() {
        let err = Err::<(), _>(LikeError::EmptyPattern)
            .context("parsing pattern")
            .unwrap_err();
        assert_eq!(exit_code(&err), 4);
    }

    #[test]
    fn foreign_errors_are_generic() {
        let err = anyhow::anyhow!("disk on fire");
        assert_eq!(exit_code(&err), 1);
    }
}
