#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod allocator;
pub mod buffer;
pub mod error;
pub mod frame;
pub mod types;

#[cfg(feature = "alloc")]
pub mod heap;

// Re-exports
pub use allocator::*;
pub use buffer::*;
pub use error::*;
pub use frame::*;
pub use types::*;

#[cfg(feature = "alloc")]
pub use heap::*;
