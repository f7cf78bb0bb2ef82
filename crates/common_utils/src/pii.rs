//! Personal Identifiable Information protection.

use std::fmt;

use masking::{Strategy, WithType};

use crate::consts::UPI_VPA_SEPARATOR;

/// Strategy for masking a UPI virtual payment address
#[derive(Debug)]
pub enum UpiVpaMaskingStrategy {}

impl<T> Strategy<T> for UpiVpaMaskingStrategy
where
    T: AsRef<str> + fmt::Debug,
{
    /// Masks the local part of `username@bank`, leaving the handle visible.
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();
        match val_str.split_once(UPI_VPA_SEPARATOR) {
            Some((user, handle)) => write!(f, "{}@{}", "*".repeat(user.chars().count()), handle),
            None => WithType::fmt(val, f),
        }
    }
}
