//! The error returned when a typed error query targets the wrong arm.
use core::fmt::{self, Display};

/// Typed error extraction failed.
///
/// Returned by [`Result::get_error`](crate::Result::get_error) and
/// [`Status::get_error`](crate::Status::get_error). This signals a query for
/// the wrong error arm, not a domain failure.
///
/// # Examples
///
/// ```
/// use operation_result::{ErrorMismatch, OneOf2, Result2};
///
/// let result: Result2<(), u16, &str> = Result2::failure(OneOf2::First(404));
/// let mismatch = result.get_error::<&str, _>().unwrap_err();
/// assert!(matches!(mismatch, ErrorMismatch::OtherArm { .. }));
/// assert!(mismatch.requested().ends_with("str"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorMismatch {
    /// The outcome is a success and holds no error.
    Succeeded { requested: &'static str },
    /// The outcome holds an error of another type.
    OtherArm { requested: &'static str },
}

impl ErrorMismatch {
    #[inline]
    pub(crate) fn succeeded<X>() -> Self {
        Self::Succeeded { requested: core::any::type_name::<X>() }
    }

    #[inline]
    pub(crate) fn other_arm<X>() -> Self {
        Self::OtherArm { requested: core::any::type_name::<X>() }
    }

    /// Name of the error type that was requested.
    #[must_use]
    #[inline]
    pub fn requested(&self) -> &'static str {
        match self {
            Self::Succeeded { requested } | Self::OtherArm { requested } => *requested,
        }
    }
}

impl Display for ErrorMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded { requested } => {
                write!(f, "requested error of type `{requested}` from a successful outcome")
            },
            Self::OtherArm { requested } => {
                write!(f, "stored error is not of type `{requested}`")
            },
        }
    }
}

impl core::error::Error for ErrorMismatch {}
