//! Success and error tags.
//!
//! A tag records the *intent* of an operation (succeed with a value, fail with
//! an error) without committing to a concrete [`Result`](crate::Result) or
//! [`Status`](crate::Status) type. The target type is picked at the return
//! boundary through [`From`] or [`Lift`](crate::Lift).
//!
//! # Examples
//!
//! ```
//! use operation_result::{error, ok, Result, ERROR};
//!
//! fn parse(input: &str) -> Result<u8, &'static str> {
//!     match input.parse::<u8>() {
//!         Ok(value) => ok(value).into(),
//!         Err(_) => error("not a number").into(),
//!     }
//! }
//!
//! fn lookup(key: u8) -> Result<&'static str> {
//!     if key == 1 {
//!         ok("one").into()
//!     } else {
//!         ERROR.into()
//!     }
//! }
//!
//! assert!(parse("7").is_success());
//! assert!(lookup(2).is_error());
//! ```

/// Marker for a successful outcome, optionally carrying the success value.
///
/// `SuccessTag` with no type argument is the untyped marker; its only value is
/// [`OK`].
#[must_use]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SuccessTag<T = ()>(pub(crate) T);

/// Marker for a failed outcome, optionally carrying the error value.
///
/// `ErrorTag` with no type argument is the untyped marker; its only value is
/// [`ERROR`].
#[must_use]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ErrorTag<E = ()>(pub(crate) E);

/// The shared untyped success marker.
pub const OK: SuccessTag = SuccessTag(());

/// The shared untyped error marker.
pub const ERROR: ErrorTag = ErrorTag(());

impl<T> SuccessTag<T> {
    /// Consumes the tag, returning the carried value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<E> ErrorTag<E> {
    /// Consumes the tag, returning the carried error.
    #[inline]
    pub fn into_inner(self) -> E {
        self.0
    }
}

/// Returns the untyped success marker.
///
/// Converts into any [`Status`](crate::Status) and into [`Result<()>`](crate::Result).
///
/// # Examples
///
/// ```
/// use operation_result::{success, Status, OK};
///
/// assert_eq!(success(), OK);
/// let status: Status<&str> = success().into();
/// assert!(status.is_success());
/// ```
#[inline]
pub const fn success() -> SuccessTag {
    OK
}

/// Wraps `value` in a success marker.
///
/// # Examples
///
/// ```
/// use operation_result::{ok, Result};
///
/// let result: Result<i32, String> = ok(42).into();
/// assert_eq!(result.value(), Some(&42));
/// ```
#[inline]
pub const fn ok<T>(value: T) -> SuccessTag<T> {
    SuccessTag(value)
}

/// Returns the untyped error marker.
///
/// Converts into [`Result<T>`](crate::Result) and [`Status`](crate::Status),
/// the types that carry no error payload.
///
/// # Examples
///
/// ```
/// use operation_result::{failure, Result};
///
/// let result: Result<i32> = failure().into();
/// assert!(result.is_error());
/// assert_eq!(result.value_or_default(), 0);
/// ```
#[inline]
pub const fn failure() -> ErrorTag {
    ERROR
}

/// Wraps `error` in an error marker.
///
/// # Examples
///
/// ```
/// use operation_result::{error, Status};
///
/// let status: Status<&str> = error("disk full").into();
/// assert_eq!(status.error(), Some(&"disk full"));
/// ```
#[inline]
pub const fn error<E>(error: E) -> ErrorTag<E> {
    ErrorTag(error)
}
