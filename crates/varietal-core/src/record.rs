use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::value::Value;

/// An object whose unset attributes fall back to a parent record.
///
/// Generated variants are built with [`Record::derive`], so each one stores
/// only the attributes it overrides and shares the rest of the template. A
/// record never writes through to its parent.
#[derive(Clone, Default)]
pub struct Record {
    fields: IndexMap<String, Value>,
    parent: Option<Rc<Record>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delegating clone: an empty layer on top of `parent`.
    pub fn derive(parent: &Rc<Record>) -> Self {
        Self {
            fields: IndexMap::new(),
            parent: Some(Rc::clone(parent)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Looks `key` up on this layer, then on every parent in turn.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut layer = self;
        loop {
            if let Some(value) = layer.fields.get(key) {
                return Some(value);
            }
            match &layer.parent {
                Some(parent) => layer = parent,
                None => return None,
            }
        }
    }

    /// Value of an attribute slot, `Null` when no layer defines it.
    pub fn slot(&self, key: &str) -> Value {
        self.get(key).cloned().unwrap_or_default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Attributes stored on this layer only.
    pub fn own_fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    pub fn parent(&self) -> Option<&Rc<Record>> {
        self.parent.as_ref()
    }

    /// Number of layers, this one included.
    pub fn depth(&self) -> usize {
        self.layers().len()
    }

    /// Visible attribute names, in the order they were first defined.
    pub fn keys(&self) -> Vec<String> {
        self.to_fields().into_keys().collect()
    }

    pub fn len(&self) -> usize {
        self.to_fields().len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers().iter().all(|layer| layer.fields.is_empty())
    }

    /// All visible attributes, root layer first, overrides applied in place.
    pub fn to_fields(&self) -> IndexMap<String, Value> {
        let mut fields = IndexMap::new();
        for layer in self.layers().into_iter().rev() {
            for (key, value) in &layer.fields {
                fields.insert(key.clone(), value.clone());
            }
        }
        fields
    }

    /// Detached single-layer copy of the visible attributes.
    pub fn flatten(&self) -> Record {
        Record {
            fields: self.to_fields(),
            parent: None,
        }
    }

    fn layers(&self) -> Vec<&Record> {
        let mut layers = Vec::new();
        let mut layer = Some(self);
        while let Some(current) = layer {
            layers.push(current);
            layer = current.parent.as_deref();
        }
        layers
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.to_fields() == other.to_fields()
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.to_fields().iter()).finish()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.to_fields();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (key, value) in &fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            parent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn woody() -> Rc<Record> {
        Rc::new(Record::new().with("name", "Woody").with("age", 2))
    }

    #[test]
    fn derived_record_delegates_unset_attributes() {
        let base = woody();
        let mut variant = Record::derive(&base);
        variant.set("name", "Buzz");

        assert_eq!(variant.slot("name"), Value::text("Buzz"));
        assert_eq!(variant.slot("age"), Value::Int(2));
        assert_eq!(variant.own_fields().len(), 1);
        assert_eq!(variant.depth(), 2);
    }

    #[test]
    fn derived_record_never_touches_parent() {
        let base = woody();
        let mut variant = Record::derive(&base);
        variant.set("age", 7);

        assert_eq!(base.slot("age"), Value::Int(2));
        assert_eq!(Rc::strong_count(&base), 2);
    }

    #[test]
    fn keys_keep_first_definition_order() {
        let base = woody();
        let mut variant = Record::derive(&base);
        variant.set("toy", "cowboy");
        variant.set("name", "Buzz");

        assert_eq!(variant.keys(), vec!["name", "age", "toy"]);
    }

    #[test]
    fn equality_compares_visible_attributes() {
        let base = woody();
        let variant = Record::derive(&base);
        assert_eq!(variant, *base);
        assert_eq!(variant.flatten().depth(), 1);
    }

    #[test]
    fn missing_slot_is_null() {
        assert_eq!(Record::new().slot("missing"), Value::Null);
        assert!(Record::new().is_empty());
    }
}
