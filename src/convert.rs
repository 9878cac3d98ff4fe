//! Conversions into and out of [`Result`] and [`Status`].
//!
//! - Tags convert with [`From`] when the error type matches exactly, and with
//!   [`Lift`] into any arm of a multi-error union.
//! - Both types convert to `bool` (`is_success`) and to and from
//!   [`core::result::Result`], so `?` works after [`Result::into_std`].
use core::result::Result as StdResult;

use crate::one_of::{ErrorArm, Itself};
use crate::result::Result;
use crate::status::Status;
use crate::tags::{ErrorTag, SuccessTag};

/// Converts a tag into a concrete outcome type.
///
/// Unlike [`Into`], `Lift` can route an error tag into the matching arm of a
/// [`OneOf2`](crate::OneOf2) or [`OneOf3`](crate::OneOf3). `I` is the arm
/// index and is inferred.
///
/// # Examples
///
/// ```
/// use operation_result::{error, ok, Lift, Result2};
///
/// fn read(id: u8) -> Result2<u8, u16, &'static str> {
///     match id {
///         0 => error(404_u16).lift(),
///         1 => error("Invalid Operation").lift(),
///         _ => ok(id).lift(),
///     }
/// }
///
/// assert!(read(0).has_error::<u16, _>());
/// assert!(read(1).has_error::<&str, _>());
/// assert_eq!(read(7).value(), Some(&7));
/// ```
pub trait Lift<Target, I> {
    /// Converts this tag into `Target`.
    fn lift(self) -> Target;
}

impl<T, E> Lift<Result<T, E>, Itself> for SuccessTag<T> {
    #[inline]
    fn lift(self) -> Result<T, E> {
        Result::Success(self.0)
    }
}

impl<T, E, X, I> Lift<Result<T, E>, I> for ErrorTag<X>
where
    E: ErrorArm<X, I>,
{
    #[inline]
    fn lift(self) -> Result<T, E> {
        Result::Failure(<E as ErrorArm<X, I>>::inject(self.0))
    }
}

impl<E> Lift<Status<E>, Itself> for SuccessTag {
    #[inline]
    fn lift(self) -> Status<E> {
        Status::Success
    }
}

impl<E, X, I> Lift<Status<E>, I> for ErrorTag<X>
where
    E: ErrorArm<X, I>,
{
    #[inline]
    fn lift(self) -> Status<E> {
        Status::Failure(<E as ErrorArm<X, I>>::inject(self.0))
    }
}

impl<T, E> From<SuccessTag<T>> for Result<T, E> {
    #[inline]
    fn from(tag: SuccessTag<T>) -> Self {
        Self::Success(tag.0)
    }
}

impl<T, E> From<ErrorTag<E>> for Result<T, E> {
    #[inline]
    fn from(tag: ErrorTag<E>) -> Self {
        Self::Failure(tag.0)
    }
}

impl<E> From<SuccessTag> for Status<E> {
    #[inline]
    fn from(_: SuccessTag) -> Self {
        Self::Success
    }
}

impl<E> From<ErrorTag<E>> for Status<E> {
    #[inline]
    fn from(tag: ErrorTag<E>) -> Self {
        Self::Failure(tag.0)
    }
}

impl<T, E> From<Result<T, E>> for bool {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result.is_success()
    }
}

impl<T, E> From<&Result<T, E>> for bool {
    #[inline]
    fn from(result: &Result<T, E>) -> Self {
        result.is_success()
    }
}

impl<E> From<Status<E>> for bool {
    #[inline]
    fn from(status: Status<E>) -> Self {
        status.is_success()
    }
}

impl<E> From<&Status<E>> for bool {
    #[inline]
    fn from(status: &Status<E>) -> Self {
        status.is_success()
    }
}

impl<T, E> From<StdResult<T, E>> for Result<T, E> {
    #[inline]
    fn from(result: StdResult<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for StdResult<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result.into_std()
    }
}

impl<E> From<StdResult<(), E>> for Status<E> {
    #[inline]
    fn from(result: StdResult<(), E>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(error) => Self::Failure(error),
        }
    }
}

impl<E> From<Status<E>> for StdResult<(), E> {
    #[inline]
    fn from(status: Status<E>) -> Self {
        status.into_std()
    }
}

impl<T, E> Result<T, E> {
    /// Converts into a [`core::result::Result`].
    ///
    /// # Examples
    ///
    /// ```
    /// use operation_result::{error, Result};
    ///
    /// fn load() -> Result<u32, &'static str> {
    ///     error("missing").into()
    /// }
    ///
    /// fn run() -> core::result::Result<u32, &'static str> {
    ///     let value = load().into_std()?;
    ///     Ok(value + 1)
    /// }
    ///
    /// assert_eq!(run(), Err("missing"));
    /// ```
    #[inline]
    pub fn into_std(self) -> StdResult<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<E> Status<E> {
    /// Converts into a [`core::result::Result`] with a unit success value.
    #[inline]
    pub fn into_std(self) -> StdResult<(), E> {
        match self {
            Self::Success => Ok(()),
            Self::Failure(error) => Err(error),
        }
    }
}
