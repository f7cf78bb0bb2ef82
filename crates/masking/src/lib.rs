#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg_hide))]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//!
//! Wrappers keeping payment details out of `Debug` output and logs.
//!
//! A value placed in a [`Secret`] or a [`StrongSecret`] is formatted through a masking
//! [`Strategy`] and can only be read back with [`PeekInterface::peek`]. [`StrongSecret`]
//! additionally wipes its value on drop and compares in constant time.
//!

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub use zeroize::Zeroize as ZeroizableSecret;

mod secret;
mod strategy;
mod strong_secret;

pub use secret::Secret;
pub use strategy::{Strategy, WithType};
pub use strong_secret::{StrongEq, StrongSecret};

#[cfg(feature = "serde")]
mod serde;
#[cfg(feature = "serde")]
pub use crate::serde::SerializableSecret;

/// Read access to the value held by a masking wrapper.
pub trait PeekInterface<S> {
    /// Borrow the wrapped value.
    fn peek(&self) -> &S;
}
