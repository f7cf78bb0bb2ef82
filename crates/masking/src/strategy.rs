use std::{any, fmt};

/// How a masked value renders in `Debug` output.
///
/// Strategies are implemented on uninhabited enums and only ever used as a type parameter.
pub trait Strategy<T> {
    /// Write the masked form of `value`.
    fn fmt(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Hides the value entirely and names its type, e.g. `*** alloc::string::String ***`.
pub enum WithType {}

impl<T> Strategy<T> for WithType {
    fn fmt(_: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*** {} ***", any::type_name::<T>())
    }
}
