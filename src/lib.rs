//! Result and status values that carry success or failure without panics or
//! output parameters.
//!
//! An operation returns a [`Result<T, E>`] (success with a value) or a
//! [`Status<E>`] (success without a value). Return values are usually built
//! from tags: [`ok`], [`error`], [`success`] and [`failure`] record the intent
//! and convert into the concrete return type at the return boundary.
//!
//! # Examples
//!
//! ## Value or error
//!
//! ```
//! use operation_result::{error, ok, Result};
//!
//! fn get_result_or_error(arg: i32) -> Result<i32, &'static str> {
//!     match arg {
//!         1 => Result::success(arg),
//!         2 => ok(arg).into(),
//!         _ => error("Invalid Operation").into(),
//!     }
//! }
//!
//! let result = get_result_or_error(2);
//! if bool::from(&result) {
//!     assert_eq!(result.value(), Some(&2));
//! }
//!
//! let (value, err) = get_result_or_error(3).into_parts();
//! assert_eq!(value, None);
//! assert_eq!(err, Some("Invalid Operation"));
//! ```
//!
//! ## Several error types
//!
//! ```
//! use operation_result::{error, Lift, OneOf2, Result2};
//!
//! fn get_result_or_errors(arg: i32) -> Result2<i32, i32, &'static str> {
//!     match arg {
//!         3 => error(404_i32).lift(),
//!         4 => error("Invalid Operation").lift(),
//!         _ => Result2::success(arg),
//!     }
//! }
//!
//! let not_found = get_result_or_errors(3);
//! assert!(not_found.has_error::<i32, _>());
//! assert_eq!(not_found.get_error::<i32, _>(), Ok(&404));
//!
//! match get_result_or_errors(4).into_error() {
//!     Some(OneOf2::Second(message)) => assert_eq!(message, "Invalid Operation"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! ## Status
//!
//! ```
//! use operation_result::{error, success, Status};
//!
//! fn delete(id: u32) -> Status<&'static str> {
//!     if id == 0 { error("no such record").into() } else { success().into() }
//! }
//!
//! assert!(delete(1).is_success());
//! assert_eq!(delete(0).error(), Some(&"no such record"));
//! ```
#![no_std]

/// Conversions between tags, outcome types, `bool` and `core::result::Result`
pub mod convert;
/// Shared comparison and hashing routines
mod equality;
/// The typed error extraction failure
pub mod mismatch;
/// Closed unions over several error types
pub mod one_of;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Outcome type that carries a value
pub mod result;
/// Outcome type that carries no value
pub mod status;
/// Success and error tags with their factory functions
pub mod tags;

/// Tracing events for outcomes (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod trace;

pub use convert::Lift;
pub use mismatch::ErrorMismatch;
pub use one_of::{ErrorArm, First, Itself, OneOf2, OneOf3, Second, Third};
pub use result::{Result, Result2, Result3};
pub use status::{Status, Status2, Status3};
pub use tags::{error, failure, ok, success, ErrorTag, SuccessTag, ERROR, OK};
