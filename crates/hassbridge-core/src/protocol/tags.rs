//! Tag normalization.
//!
//! Both accepted shapes end up as a list of `key:value` strings. Every emitted
//! tag contains exactly one `:`; a single bad entry rejects the whole set so
//! no partially tagged metric is ever sent.

use std::collections::BTreeMap;

use crate::error::{BridgeError, Result};
use crate::protocol::statsd::find_framing_char;

/// Tags as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagSet {
    /// `{key: value}` pairs. Key order is the emission order.
    Mapping(BTreeMap<String, String>),
    /// Entries expected to already be `key:value`.
    Sequence(Vec<String>),
}

impl Default for TagSet {
    fn default() -> Self {
        TagSet::Sequence(Vec::new())
    }
}

impl TagSet {
    /// Flatten into `key:value` strings, failing on the first malformed entry.
    pub fn normalize(&self) -> Result<Vec<String>> {
        let tags: Vec<String> = match self {
            TagSet::Mapping(m) => m.iter().map(|(k, v)| format!("{k}:{v}")).collect(),
            TagSet::Sequence(s) => s.clone(),
        };
        for tag in &tags {
            check_tag(tag)?;
        }
        Ok(tags)
    }
}

/// A tag is valid when splitting on `:` yields exactly two parts and nothing
/// in it would split the tag section on the wire.
pub fn check_tag(tag: &str) -> Result<()> {
    if tag.split(':').count() != 2 || find_framing_char(tag).is_some() {
        return Err(BridgeError::InvalidTag(tag.to_string()));
    }
    Ok(())
}
