//! Static outline model: the authored tree of section titles and links.
//!
//! The outline is read-only data, authored once (typically generated by a
//! documentation tool) and never mutated at runtime. Runtime expansion state
//! lives in [`crate::index::TreeIndex`], not here.

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::instrument;

use crate::errors::NavResult;

/// One entry in the authored outline.
///
/// `link == None` together with children denotes a pure grouping entry:
/// expandable in a rendered tree, but not directly navigable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    /// Display label of the section or page
    pub label: String,
    /// Navigation target, None for grouping entries
    pub link: Option<String>,
    /// Ordered sub-entries, None for leaves
    pub children: Option<Vec<OutlineEntry>>,
}

impl OutlineEntry {
    /// Leaf entry pointing at a single page.
    pub fn page(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: Some(link.into()),
            children: None,
        }
    }

    /// Navigable entry with sub-entries.
    pub fn section(
        label: impl Into<String>,
        link: impl Into<String>,
        children: Vec<OutlineEntry>,
    ) -> Self {
        Self {
            label: label.into(),
            link: Some(link.into()),
            children: Some(children),
        }
    }

    /// Grouping entry: expandable but not navigable.
    pub fn group(label: impl Into<String>, children: Vec<OutlineEntry>) -> Self {
        Self {
            label: label.into(),
            link: None,
            children: Some(children),
        }
    }

    /// Whether the entry can be expanded at all.
    pub fn is_expandable(&self) -> bool {
        self.children.is_some()
    }
}

impl fmt::Display for OutlineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.link {
            Some(link) => write!(f, "{} ({})", self.label, link),
            None => write!(f, "{}", self.label),
        }
    }
}

// The wire format is the generated triple `[label, link-or-null,
// children-or-null]`, so entries (de)serialize as a 3-element sequence
// rather than a map.
impl Serialize for OutlineEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.label)?;
        tuple.serialize_element(&self.link)?;
        tuple.serialize_element(&self.children)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for OutlineEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = OutlineEntry;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a [label, link, children] triple")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let label = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let link = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let children = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(2, &self))?;
                if seq.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(4, &self));
                }
                Ok(OutlineEntry {
                    label,
                    link,
                    children,
                })
            }
        }

        deserializer.deserialize_seq(EntryVisitor)
    }
}

/// The static, authored tree of documentation section titles and links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outline {
    entries: Vec<OutlineEntry>,
}

impl Outline {
    pub fn new(entries: Vec<OutlineEntry>) -> Self {
        Self { entries }
    }

    /// Parse an outline from its serialized triple format.
    #[instrument(level = "debug", skip(json))]
    pub fn from_json_str(json: &str) -> NavResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize back into the triple format.
    pub fn to_json_string(&self) -> NavResult<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    pub fn entries(&self) -> &[OutlineEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up an entry by its index-path from the top level.
    ///
    /// An empty path addresses no entry (the outline itself is not an entry).
    pub fn entry_at(&self, path: &[usize]) -> Option<&OutlineEntry> {
        let (&first, rest) = path.split_first()?;
        let mut entry = self.entries.get(first)?;
        for &i in rest {
            entry = entry.children.as_ref()?.get(i)?;
        }
        Some(entry)
    }

    /// The ordered children sitting at an index-path.
    ///
    /// The empty path addresses the top level; for leaves the result is None.
    pub fn children_at(&self, path: &[usize]) -> Option<&[OutlineEntry]> {
        if path.is_empty() {
            return Some(&self.entries);
        }
        self.entry_at(path)?.children.as_deref()
    }

    /// Breadcrumb search for a target link, see [`find_path`].
    pub fn find_path(&self, target: &str) -> Option<Vec<usize>> {
        find_path(target, &self.entries)
    }
}

/// Depth-first pre-order search for the entry whose link equals `target`.
///
/// Returns the sequence of child indices from the top level down to the
/// matching entry. The first match in document order wins; once an entry
/// matches, later siblings are never explored, even if they would match
/// deeper in the tree.
#[instrument(level = "trace", skip(entries))]
pub fn find_path(target: &str, entries: &[OutlineEntry]) -> Option<Vec<usize>> {
    for (i, entry) in entries.iter().enumerate() {
        if entry.link.as_deref() == Some(target) {
            return Some(vec![i]);
        }
        if let Some(children) = &entry.children {
            if let Some(mut rest) = find_path(target, children) {
                let mut path = Vec::with_capacity(rest.len() + 1);
                path.push(i);
                path.append(&mut rest);
                return Some(path);
            }
        }
    }
    None
}
