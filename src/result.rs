//! Outcome of an operation that produces a value.
//!
//! [`Result<T, E>`] is either a success carrying `T` or a failure carrying `E`.
//! The error type defaults to `()`, which gives the error-less `Result<T>`.
//! Results with several error types use a closed union as `E`, spelled through
//! the [`Result2`] and [`Result3`] aliases.
//!
//! # Examples
//!
//! ```
//! use operation_result::{error, ok, Lift, Result, Result2};
//!
//! fn divide(a: i32, b: i32) -> Result<i32, &'static str> {
//!     if b == 0 {
//!         return error("division by zero").into();
//!     }
//!     Result::success(a / b)
//! }
//!
//! fn fetch(id: u32) -> Result2<String, u16, &'static str> {
//!     match id {
//!         0 => error(404_u16).lift(),
//!         1 => error("Invalid Operation").lift(),
//!         _ => ok(format!("item {id}")).lift(),
//!     }
//! }
//!
//! let quotient = divide(9, 3);
//! if quotient.is_success() {
//!     assert_eq!(quotient.value(), Some(&3));
//! }
//!
//! assert!(fetch(0).has_error::<u16, _>());
//! assert_eq!(fetch(1).get_error::<&str, _>(), Ok(&"Invalid Operation"));
//! ```
use core::hash::{Hash, Hasher};
use core::result::Result as StdResult;

use crate::equality::{self, Branch};
use crate::mismatch::ErrorMismatch;
use crate::one_of::{ErrorArm, OneOf2, OneOf3};

/// Success with a value of type `T`, or failure with an error of type `E`.
///
/// Equality is structural per state: two successes compare their values, two
/// failures compare their errors, and a success never equals a failure.
#[must_use]
#[derive(Clone, Copy, Debug)]
pub enum Result<T, E = ()> {
    /// The operation succeeded with a value.
    Success(T),
    /// The operation failed with an error.
    Failure(E),
}

/// Result that can fail with one of two error types.
pub type Result2<T, E1, E2> = Result<T, OneOf2<E1, E2>>;

/// Result that can fail with one of three error types.
pub type Result3<T, E1, E2, E3> = Result<T, OneOf3<E1, E2, E3>>;

impl<T, E> Result<T, E> {
    /// Creates a successful result holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use operation_result::Result;
    ///
    /// let result = Result::<i32>::success(1);
    /// assert!(result.is_success());
    /// assert_eq!(result.value(), Some(&1));
    /// ```
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed result holding `error`.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if the operation succeeded.
    #[must_use]
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the operation failed.
    #[must_use]
    #[inline]
    pub const fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success value, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a copy of the success value, or `T::default()` on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use operation_result::{Result, ERROR};
    ///
    /// let result: Result<i32> = ERROR.into();
    /// assert_eq!(result.value_or_default(), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn value_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.value().cloned().unwrap_or_default()
    }

    /// Consumes the result, returning the success value, if any.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the error, if any.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Consumes the result, returning the error, if any.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Splits the result into its `(value, error)` pair.
    ///
    /// Exactly one side of the pair is `Some`.
    ///
    /// # Examples
    ///
    /// ```
    /// use operation_result::{error, Result};
    ///
    /// let result: Result<i32, &str> = error("Invalid Operation").into();
    /// let (value, err) = result.into_parts();
    /// assert_eq!(value, None);
    /// assert_eq!(err, Some("Invalid Operation"));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_parts(self) -> (Option<T>, Option<E>) {
        match self {
            Self::Success(value) => (Some(value), None),
            Self::Failure(error) => (None, Some(error)),
        }
    }

    /// Returns `true` if the result failed with an error of type `X`.
    ///
    /// The arm index `I` is inferred when `X` names a single arm; pass it
    /// explicitly (`has_error::<u16, Second>()`) when two arms share a type.
    ///
    /// # Examples
    ///
    /// ```
    /// use operation_result::{error, Lift, Result3};
    ///
    /// let result: Result3<(), u16, &str, char> = error('x').lift();
    /// assert!(result.has_error::<char, _>());
    /// assert!(!result.has_error::<u16, _>());
    /// ```
    #[must_use]
    #[inline]
    pub fn has_error<X, I>(&self) -> bool
    where
        E: ErrorArm<X, I>,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(error) => <E as ErrorArm<X, I>>::project(error).is_some(),
        }
    }

    /// Returns the error as type `X`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorMismatch::Succeeded`] if the result is a success and
    /// [`ErrorMismatch::OtherArm`] if a different error type is stored.
    #[inline]
    pub fn get_error<X, I>(&self) -> StdResult<&X, ErrorMismatch>
    where
        E: ErrorArm<X, I>,
    {
        match self {
            Self::Success(_) => Err(ErrorMismatch::succeeded::<X>()),
            Self::Failure(error) => <E as ErrorArm<X, I>>::project(error)
                .ok_or_else(ErrorMismatch::other_arm::<X>),
        }
    }

    #[inline]
    pub(crate) fn branch(&self) -> Branch<'_, T, E> {
        match self {
            Self::Success(value) => Branch::Success(value),
            Self::Failure(error) => Branch::Failure(error),
        }
    }
}

impl<T: PartialEq, E: PartialEq> PartialEq for Result<T, E> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        equality::branches_eq(self.branch(), other.branch())
    }
}

impl<T: Eq, E: Eq> Eq for Result<T, E> {}

impl<T: Hash, E> Hash for Result<T, E> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        equality::hash_branch(self.branch(), state)
    }
}
