//! Closed error unions for results that can fail in more than one way.
//!
//! [`OneOf2`] and [`OneOf3`] hold exactly one error out of a fixed set of
//! types. The [`ErrorArm`] trait lets generic code inject an error into the set
//! and ask whether a given arm is populated. The arm index (`I`) is a marker
//! type that the compiler infers whenever the requested error type appears in
//! only one arm.
//!
//! # Examples
//!
//! ```
//! use operation_result::{ErrorArm, OneOf2};
//!
//! let err: OneOf2<u16, &str> = ErrorArm::inject("timeout");
//! assert_eq!(ErrorArm::<&str, _>::project(&err), Some(&"timeout"));
//! assert_eq!(ErrorArm::<u16, _>::project(&err), None);
//!
//! match err {
//!     OneOf2::First(code) => println!("status {code}"),
//!     OneOf2::Second(message) => println!("{message}"),
//! }
//! ```
use core::fmt::{self, Display};

/// Arm index for a plain (non-union) error type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Itself {}

/// Arm index of the first error type of a union.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum First {}

/// Arm index of the second error type of a union.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Second {}

/// Arm index of the third error type of a union.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Third {}

/// An error set that can hold an error of type `X` in the arm indexed by `I`.
///
/// Every type is its own single-arm error set (`I = Itself`), so results with
/// one error type answer the same queries as results with several.
pub trait ErrorArm<X, I>: Sized {
    /// Wraps `error` in this error set.
    fn inject(error: X) -> Self;

    /// Returns the error if this arm is populated.
    fn project(&self) -> Option<&X>;
}

impl<E> ErrorArm<E, Itself> for E {
    #[inline]
    fn inject(error: E) -> Self {
        error
    }

    #[inline]
    fn project(&self) -> Option<&E> {
        Some(self)
    }
}

/// One error out of two possible types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OneOf2<A, B> {
    /// An error of the first type.
    First(A),
    /// An error of the second type.
    Second(B),
}

/// One error out of three possible types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OneOf3<A, B, C> {
    /// An error of the first type.
    First(A),
    /// An error of the second type.
    Second(B),
    /// An error of the third type.
    Third(C),
}

macro_rules! impl_error_arm {
    ($union:ident<$($param:ident),+>, $arm:ident: $ty:ident => $index:ident) => {
        impl<$($param),+> ErrorArm<$ty, $index> for $union<$($param),+> {
            #[inline]
            fn inject(error: $ty) -> Self {
                Self::$arm(error)
            }

            #[inline]
            fn project(&self) -> Option<&$ty> {
                match self {
                    Self::$arm(error) => Some(error),
                    _ => None,
                }
            }
        }
    };
}

impl_error_arm!(OneOf2<A, B>, First: A => First);
impl_error_arm!(OneOf2<A, B>, Second: B => Second);
impl_error_arm!(OneOf3<A, B, C>, First: A => First);
impl_error_arm!(OneOf3<A, B, C>, Second: B => Second);
impl_error_arm!(OneOf3<A, B, C>, Third: C => Third);

impl<A: Display, B: Display> Display for OneOf2<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First(error) => Display::fmt(error, f),
            Self::Second(error) => Display::fmt(error, f),
        }
    }
}

impl<A: Display, B: Display, C: Display> Display for OneOf3<A, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First(error) => Display::fmt(error, f),
            Self::Second(error) => Display::fmt(error, f),
            Self::Third(error) => Display::fmt(error, f),
        }
    }
}

impl<A, B> core::error::Error for OneOf2<A, B>
where
    A: core::error::Error + 'static,
    B: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::First(error) => Some(error),
            Self::Second(error) => Some(error),
        }
    }
}

impl<A, B, C> core::error::Error for OneOf3<A, B, C>
where
    A: core::error::Error + 'static,
    B: core::error::Error + 'static,
    C: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::First(error) => Some(error),
            Self::Second(error) => Some(error),
            Self::Third(error) => Some(error),
        }
    }
}
