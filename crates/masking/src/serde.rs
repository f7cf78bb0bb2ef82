//! `serde` support: wrapped values serialize as the plain value for the submit collaborator.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};

use crate::{PeekInterface, Secret, Strategy, StrongSecret, ZeroizableSecret};

/// Opt-in marker for values whose wrapper may be serialized in the clear.
pub trait SerializableSecret: Serialize {}

impl SerializableSecret for String {}

impl<S, M> Serialize for Secret<S, M>
where
    S: SerializableSecret,
    M: Strategy<S>,
{
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        self.peek().serialize(serializer)
    }
}

impl<'de, S, M> Deserialize<'de> for Secret<S, M>
where
    S: DeserializeOwned,
    M: Strategy<S>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        S::deserialize(deserializer).map(Self::new)
    }
}

impl<S, M> Serialize for StrongSecret<S, M>
where
    S: SerializableSecret + ZeroizableSecret,
{
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        self.peek().serialize(serializer)
    }
}

impl<'de, S, M> Deserialize<'de> for StrongSecret<S, M>
where
    S: DeserializeOwned + ZeroizableSecret,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        S::deserialize(deserializer).map(Self::new)
    }
}
