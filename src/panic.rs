use std::any::Any;
use std::fmt;

use crate::Error;

/// A panic caught by one of the adapters, with its payload.
///
/// The payload is whatever was passed to `panic!`, [`std::panic::panic_any`] or
/// [`raise`](crate::raise). String payloads are available through
/// [`message`](Self::message); anything else through [`downcast_ref`](Self::downcast_ref).
pub struct Panic {
    payload: Box<dyn Any + Send>,
}

impl Panic {
    /// Wraps a payload as returned by [`std::panic::catch_unwind`].
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        Panic { payload }
    }

    /// The panic message, when the payload is a string or a crate [`Error`].
    pub fn message(&self) -> Option<&str> {
        if let Some(s) = self.payload.downcast_ref::<&'static str>() {
            Some(s)
        } else if let Some(s) = self.payload.downcast_ref::<String>() {
            Some(s.as_str())
        } else {
            self.payload.downcast_ref::<Error>().map(Error::message)
        }
    }

    /// Whether the payload is a `T`.
    ///
    /// ```rust
    /// use fallible::from_try;
    ///
    /// let panic = from_try(|| -> u32 { std::panic::panic_any(7_u8) }).unwrap_failure();
    /// assert!(panic.is::<u8>());
    /// assert!(!panic.is::<String>());
    /// ```
    pub fn is<T: Any>(&self) -> bool {
        self.payload.is::<T>()
    }

    /// The payload as a `T`, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Takes the payload out as a `T`, or gives the `Panic` back unchanged.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        self.payload
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(Panic::new)
    }

    /// The raw payload, for handing to [`std::panic::resume_unwind`] or similar.
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Continues unwinding with the original payload.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => f.debug_tuple("Panic").field(&message).finish(),
            None => f.debug_tuple("Panic").field(&format_args!("..")).finish(),
        }
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "panicked: {message}"),
            None => f.write_str("panicked with a non-string payload"),
        }
    }
}

impl std::error::Error for Panic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_str_and_string() {
        assert_eq!(Panic::new(Box::new("static")).message(), Some("static"));
        assert_eq!(Panic::new(Box::new("owned".to_string())).message(), Some("owned"));
    }

    #[test]
    fn test_message_from_crate_error() {
        let panic = Panic::new(Box::new(Error::Assertion {
            message: "bad state".to_string(),
        }));
        assert_eq!(panic.message(), Some("bad state"));
        assert_eq!(panic.to_string(), "panicked: bad state");
    }

    #[test]
    fn test_non_string_payload() {
        let panic = Panic::new(Box::new(42_u8));
        assert_eq!(panic.message(), None);
        assert!(panic.is::<u8>());
        assert_eq!(panic.downcast_ref::<u8>(), Some(&42));
        assert_eq!(panic.to_string(), "panicked with a non-string payload");
        assert_eq!(format!("{panic:?}"), "Panic(..)");
    }

    #[test]
    fn test_downcast() {
        let panic = Panic::new(Box::new(7_i64));
        let panic = panic.downcast::<String>().expect_err("payload is not a String");
        assert_eq!(panic.downcast::<i64>().ok(), Some(7));
    }

    #[test]
    fn test_resume_keeps_payload() {
        let caught = std::panic::catch_unwind(|| Panic::new(Box::new(5_u32)).resume());
        let payload = caught.expect_err("resume must unwind");
        assert_eq!(payload.downcast_ref::<u32>(), Some(&5));
    }
}
