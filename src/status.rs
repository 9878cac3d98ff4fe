//! Outcome of an operation that produces no value.
//!
//! [`Status<E>`] is the value-less sibling of [`Result`](crate::Result): it
//! records whether the operation succeeded and, if not, why.
//!
//! # Examples
//!
//! ```
//! use operation_result::{error, success, Lift, Status, Status2};
//!
//! fn flush(dirty: bool) -> Status {
//!     if dirty { operation_result::ERROR.into() } else { success().into() }
//! }
//!
//! fn save(attempt: u8) -> Status2<u16, &'static str> {
//!     match attempt {
//!         0 => success().lift(),
//!         1 => error(503_u16).lift(),
//!         _ => error("quota exceeded").lift(),
//!     }
//! }
//!
//! assert!(flush(false).is_success());
//! assert!(save(1).has_error::<u16, _>());
//! ```
use core::hash::{Hash, Hasher};
use core::result::Result as StdResult;

use crate::equality::{self, Branch};
use crate::mismatch::ErrorMismatch;
use crate::one_of::{ErrorArm, OneOf2, OneOf3};

/// Success, or failure with an error of type `E`.
#[must_use]
#[derive(Clone, Copy, Debug)]
pub enum Status<E = ()> {
    /// The operation succeeded.
    Success,
    /// The operation failed with an error.
    Failure(E),
}

/// Status that can fail with one of two error types.
pub type Status2<E1, E2> = Status<OneOf2<E1, E2>>;

/// Status that can fail with one of three error types.
pub type Status3<E1, E2, E3> = Status<OneOf3<E1, E2, E3>>;

impl<E> Status<E> {
    /// Creates a successful status.
    #[inline]
    pub const fn success() -> Self {
        Self::Success
    }

    /// Creates a failed status holding `error`.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if the operation succeeded.
    #[must_use]
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns `true` if the operation failed.
    #[must_use]
    #[inline]
    pub const fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// Returns the error, if any.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Success => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Consumes the status, returning the error, if any.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns `true` if the status failed with an error of type `X`.
    ///
    /// See [`Result::has_error`](crate::Result::has_error) for how the arm
    /// index `I` is picked.
    #[must_use]
    #[inline]
    pub fn has_error<X, I>(&self) -> bool
    where
        E: ErrorArm<X, I>,
    {
        match self {
            Self::Success => false,
            Self::Failure(error) => <E as ErrorArm<X, I>>::project(error).is_some(),
        }
    }

    /// Returns the error as type `X`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorMismatch::Succeeded`] on a successful status and
    /// [`ErrorMismatch::OtherArm`] if a different error type is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use operation_result::{error, ErrorMismatch, Lift, Status3};
    ///
    /// let status: Status3<i32, &str, bool> = error(false).lift();
    /// assert_eq!(status.get_error::<bool, _>(), Ok(&false));
    /// assert!(matches!(
    ///     status.get_error::<i32, _>(),
    ///     Err(ErrorMismatch::OtherArm { .. })
    /// ));
    /// ```
    #[inline]
    pub fn get_error<X, I>(&self) -> StdResult<&X, ErrorMismatch>
    where
        E: ErrorArm<X, I>,
    {
        match self {
            Self::Success => Err(ErrorMismatch::succeeded::<X>()),
            Self::Failure(error) => <E as ErrorArm<X, I>>::project(error)
                .ok_or_else(ErrorMismatch::other_arm::<X>),
        }
    }

    #[inline]
    pub(crate) fn branch(&self) -> Branch<'_, (), E> {
        match self {
            Self::Success => Branch::Success(&()),
            Self::Failure(error) => Branch::Failure(error),
        }
    }
}

impl<E: PartialEq> PartialEq for Status<E> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        equality::branches_eq(self.branch(), other.branch())
    }
}

impl<E: Eq> Eq for Status<E> {}

impl<E> Hash for Status<E> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        equality::hash_branch(self.branch(), state)
    }
}
