//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use operation_result::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Factories**: [`ok`], [`error`], [`success`], [`failure`]
//! - **Constants**: [`OK`], [`ERROR`]
//! - **Traits**: [`Lift`], [`ErrorArm`]
//! - **Types**: [`Status`], [`Status2`], [`Status3`], [`OneOf2`], [`OneOf3`]
//!
//! [`Result`](crate::Result) and its aliases are left out so that a glob import
//! does not shadow `core::result::Result`; import them by name.
//!
//! # Examples
//!
//! ```
//! use operation_result::prelude::*;
//! use operation_result::Result2;
//!
//! fn parse_port(input: &str) -> Result2<u16, u8, &'static str> {
//!     if input.is_empty() {
//!         return error("empty input").lift();
//!     }
//!     match input.parse::<u16>() {
//!         Ok(port) => ok(port).lift(),
//!         Err(_) => error(1_u8).lift(),
//!     }
//! }
//!
//! assert_eq!(parse_port("8080").value(), Some(&8080));
//! assert!(parse_port("").has_error::<&str, _>());
//! ```

pub use crate::convert::Lift;
pub use crate::one_of::{ErrorArm, OneOf2, OneOf3};
pub use crate::status::{Status, Status2, Status3};
pub use crate::tags::{error, failure, ok, success, ERROR, OK};
