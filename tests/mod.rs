pub mod one_of;
pub mod tags;

#[cfg(feature = "tracing")]
pub mod trace;
