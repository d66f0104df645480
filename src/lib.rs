//! Optional values that serialize as plain `null`
//!
//! Two containers with the same read-only surface:
//!
//! - [`Opt`] keeps the value inline next to a presence flag.
//! - [`Ptr`] keeps a handle to a heap allocation and hands out copies.
//!
//! Both encode a present value as the wrapped type's own JSON and an absent
//! one as `null`, so a consumer that can decode `T` can decode either.

pub mod codec;
pub mod config;
pub mod must;
pub mod opt;
pub mod ptr;

pub use must::{must, must_zero, try_record};
pub use opt::Opt;
pub use ptr::{Ptr, Shared};
