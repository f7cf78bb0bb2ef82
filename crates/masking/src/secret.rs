use std::{fmt, marker::PhantomData};

use crate::{PeekInterface, Strategy, WithType};

/// Value whose `Debug` output is produced by the masking strategy `M`.
///
/// ```
/// use std::fmt;
///
/// use masking::{PeekInterface, Secret, Strategy};
///
/// enum LastFour {}
///
/// impl<T: AsRef<str>> Strategy<T> for LastFour {
///     fn fmt(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         let value = value.as_ref();
///         let hidden = value.len().saturating_sub(4);
///         write!(f, "{}{}", "*".repeat(hidden), value.get(hidden..).unwrap_or_default())
///     }
/// }
///
/// let account: Secret<String, LastFour> = Secret::new("12345678".to_string());
/// assert_eq!(format!("{account:?}"), "****5678");
/// assert_eq!(account.peek(), "12345678");
/// ```
pub struct Secret<S, M = WithType>
where
    M: Strategy<S>,
{
    value: S,
    strategy: PhantomData<fn() -> M>,
}

impl<S, M> Secret<S, M>
where
    M: Strategy<S>,
{
    /// Wrap `value`.
    pub fn new(value: S) -> Self {
        Self {
            value,
            strategy: PhantomData,
        }
    }
}

impl<S, M: Strategy<S>> PeekInterface<S> for Secret<S, M> {
    fn peek(&self) -> &S {
        &self.value
    }
}

impl<S, M: Strategy<S>> From<S> for Secret<S, M> {
    fn from(value: S) -> Self {
        Self::new(value)
    }
}

impl<S: Clone, M: Strategy<S>> Clone for Secret<S, M> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<S: Default, M: Strategy<S>> Default for Secret<S, M> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: PartialEq, M: Strategy<S>> PartialEq for Secret<S, M> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<S: Eq, M: Strategy<S>> Eq for Secret<S, M> {}

impl<S, M: Strategy<S>> fmt::Debug for Secret<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        M::fmt(&self.value, f)
    }
}
