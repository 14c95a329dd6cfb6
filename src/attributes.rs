//! Attribute lookup for a single tag.
use std::collections::BTreeMap;

/// The attributes of one start tag, keyed by attribute name.
///
/// Names and values are decoded from UTF-8 lossily. Lookups by name are the only thing the
/// interpreters need, so iteration order is simply alphabetical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrMap {
    attrs: BTreeMap<String, String>,
}

impl AttrMap {
    /// Collect the attributes of a tag.
    ///
    /// `attrs` is the tokenizer's attribute cursor: each item is one `(name, value)` pair and the
    /// end of the iterator means no attributes remain. If a name repeats, the last value wins.
    /// When `has_attributes` is false the cursor is not touched at all and the map is empty.
    pub fn build<I, K, V>(has_attributes: bool, attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<[u8]>,
        V: AsRef<[u8]>,
    {
        let mut map = AttrMap::default();
        if !has_attributes {
            return map;
        }

        for (name, value) in attrs {
            map.attrs.insert(
                String::from_utf8_lossy(name.as_ref()).into_owned(),
                String::from_utf8_lossy(value.as_ref()).into_owned(),
            );
        }

        map
    }

    /// The value of the attribute `name`, or `""` if the tag does not carry it.
    pub fn get(&self, name: &str) -> &str {
        self.attrs.get(name).map_or("", String::as_str)
    }

    /// Whether the tag carries the attribute `name`, even with an empty value (`<div itemscope>`).
    pub fn contains(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Whether the tag has no attributes at all.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Number of distinct attribute names.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Iterate over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<[u8]>, V: AsRef<[u8]>> FromIterator<(K, V)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        AttrMap::build(true, iter)
    }
}

#[cfg(test)]
mod tests {
    use super::AttrMap;

    #[test]
    fn no_attributes_skips_the_cursor() {
        let map = AttrMap::build(false, [("href", "ignored")]);
        assert!(map.is_empty());
        assert_eq!(map.get("href"), "");
    }

    #[test]
    fn last_occurrence_wins() {
        let map: AttrMap = [("content", "a"), ("name", "n"), ("content", "b")]
            .into_iter()
            .collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("content"), "b");
        assert_eq!(map.get("name"), "n");
    }

    #[test]
    fn valueless_attribute_is_present() {
        let map: AttrMap = [("itemscope", ""), ("itemtype", "http://schema.org/Offer")]
            .into_iter()
            .collect();
        assert!(map.contains("itemscope"));
        assert!(!map.contains("itemprop"));
        assert_eq!(map.get("itemscope"), "");
    }
}
