use std::{fmt, marker::PhantomData};

use subtle::ConstantTimeEq;

use crate::{PeekInterface, Strategy, WithType, ZeroizableSecret};

/// Like [`crate::Secret`], but the value is zeroized when dropped and equality runs in constant
/// time. Used for card numbers and security codes.
pub struct StrongSecret<S, M = WithType>
where
    S: ZeroizableSecret,
{
    value: S,
    strategy: PhantomData<fn() -> M>,
}

impl<S: ZeroizableSecret, M> StrongSecret<S, M> {
    /// Wrap `value`.
    pub fn new(value: S) -> Self {
        Self {
            value,
            strategy: PhantomData,
        }
    }
}

impl<S: ZeroizableSecret, M> PeekInterface<S> for StrongSecret<S, M> {
    fn peek(&self) -> &S {
        &self.value
    }
}

impl<S: ZeroizableSecret, M> From<S> for StrongSecret<S, M> {
    fn from(value: S) -> Self {
        Self::new(value)
    }
}

impl<S: ZeroizableSecret + Clone, M> Clone for StrongSecret<S, M> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<S: ZeroizableSecret + Default, M> Default for StrongSecret<S, M> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: ZeroizableSecret + StrongEq, M> PartialEq for StrongSecret<S, M> {
    fn eq(&self, other: &Self) -> bool {
        self.value.strong_eq(&other.value)
    }
}

impl<S: ZeroizableSecret + StrongEq, M> Eq for StrongSecret<S, M> {}

impl<S: ZeroizableSecret, M: Strategy<S>> fmt::Debug for StrongSecret<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        M::fmt(&self.value, f)
    }
}

impl<S: ZeroizableSecret, M> Drop for StrongSecret<S, M> {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// Equality whose running time does not depend on where two values first differ.
pub trait StrongEq {
    /// Compare in constant time.
    fn strong_eq(&self, other: &Self) -> bool;
}

impl StrongEq for String {
    fn strong_eq(&self, other: &Self) -> bool {
        bool::from(self.as_bytes().ct_eq(other.as_bytes()))
    }
}
