//! The extra-depth wrapping constructor.

use causetrace_error::{internal, Cause, Error};

/// Wrap `cause` in a new error carrying `message`.
///
/// Construction goes through the process-wide hook owned by
/// `causetrace-error`, which captures with one extra level of skip so
/// the recorded frames start at the caller of `wrap`, not at this
/// bridging call.
///
/// [`causetrace_error::init`] must have run first; wrapping through an
/// uninstalled hook panics.
pub fn wrap(message: impl Into<String>, cause: impl Into<Cause>) -> Error {
    internal::constructor()(message.into(), Some(cause.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_joins_messages() {
        causetrace_error::init();
        let a = Error::new("a");
        let b = wrap("b", a);
        assert_eq!(b.to_string(), "b: a");
    }

    #[test]
    fn test_wrap_does_not_mutate_the_cause() {
        causetrace_error::init();
        let a = Error::new("a");
        let before = a.to_string();
        let b = wrap("b", a);
        match b.cause() {
            Some(Cause::Detailed(inner)) => assert_eq!(inner.to_string(), before),
            _ => panic!("expected a detailed cause"),
        }
    }

    #[test]
    fn test_wrap_plain_cause() {
        causetrace_error::init();
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = wrap("write state", Cause::plain(io));
        assert_eq!(err.to_string(), "write state: denied");
    }
}
