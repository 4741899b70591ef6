//! `serde` support: a builder serializes as the plain string it represents.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{StringBuilder, SyncStringBuilder};

impl Serialize for StringBuilder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StringBuilder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::from_text(&text))
    }
}

impl Serialize for SyncStringBuilder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // snapshot first: the serializer may write back into `self`
        let text = self.to_string();
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for SyncStringBuilder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        StringBuilder::deserialize(deserializer).map(Into::into)
    }
}
