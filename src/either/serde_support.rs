//! Serde support, in the externally tagged form of [`Alternative`]:
//! `{"Left": value}` or `{"Right": value}`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Either;
use crate::Alternative;
use crate::storage::Slot;

impl<L: Serialize, R: Serialize, S: Slot<L, R>> Serialize for Either<L, R, S> {
    fn serialize<Z>(&self, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        Z: Serializer,
    {
        self.as_alternative().serialize(serializer)
    }
}

impl<'de, L, R, S> Deserialize<'de> for Either<L, R, S>
where
    L: Deserialize<'de>,
    R: Deserialize<'de>,
    S: Slot<L, R>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Alternative::<L, R>::deserialize(deserializer).map(Self::from)
    }
}
