//! Serialization and Deserialization for markup trees.
//!
//! A raw node serializes as a `{ data, range, children }` record. Identities are not serialized: deserialized nodes
//! are new standalone values and receive fresh identities. Every node is checked against the same invariants as
//! when it is constructed, but violations are reported as errors instead of panics.

use serde::{
    de::Error as _,
    ser::{SerializeStruct, Serializer},
    Deserialize, Deserializer, Serialize,
};

use crate::{
    markup::Markup,
    raw::{RawMarkup, RawMarkupData},
    SourceRange,
};

struct ChildrenOf<'a>(&'a RawMarkup);

impl Serialize for ChildrenOf<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.children())
    }
}

impl Serialize for RawMarkup {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut record = serializer.serialize_struct("RawMarkup", 3)?;
        record.serialize_field("data", self.data())?;
        record.serialize_field("range", &self.range())?;
        record.serialize_field("children", &ChildrenOf(self))?;
        record.end()
    }
}

#[derive(Deserialize)]
#[serde(rename = "RawMarkup")]
struct RawMarkupRecord {
    data:     RawMarkupData,
    #[serde(default)]
    range:    Option<SourceRange>,
    #[serde(default)]
    children: Vec<RawMarkup>,
}

impl<'de> Deserialize<'de> for RawMarkup {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let RawMarkupRecord { data, range, children } = RawMarkupRecord::deserialize(deserializer)?;
        let kind = data.kind();
        RawMarkup::try_new(data, range, children)
            .map_err(|message| D::Error::custom(format_args!("invalid {:?} node: {}", kind, message)))
    }
}

/// Positioned nodes serialize as the subtree they are the root of.
impl Serialize for Markup {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Markup {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawMarkup::deserialize(deserializer).map(Markup::new_root)
    }
}
