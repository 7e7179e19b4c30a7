use indexmap::map::{IndexMap, IntoIter, Iter};

use super::Value;

/// An insertion-ordered mapping of field names to [`Value`]s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object {
    key_value_list: IndexMap<String, Value>,
}

impl Object {
    /// Create a new Object value with a fixed number of
    /// preallocated slots for field-value pairs
    pub fn with_capacity(size: usize) -> Self {
        Self {
            key_value_list: IndexMap::with_capacity(size),
        }
    }

    /// Add a new field with a value
    ///
    /// If there is already a field with the same name, the old value is
    /// replaced (keeping the original position) and returned.
    pub fn add_field<K: Into<String>>(&mut self, k: K, value: Value) -> Option<Value> {
        self.key_value_list.insert(k.into(), value)
    }

    /// Check if the object already contains a field with the given name
    pub fn contains_field(&self, f: &str) -> bool {
        self.key_value_list.contains_key(f)
    }

    /// Get a iterator over all field value pairs
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.key_value_list.iter()
    }

    /// Get the current number of fields
    pub fn field_count(&self) -> usize {
        self.key_value_list.len()
    }

    /// Indicates whether this [`Object`] has no fields.
    pub fn is_empty(&self) -> bool {
        self.key_value_list.is_empty()
    }

    /// Get the value for a given field
    pub fn get_field_value(&self, key: &str) -> Option<&Value> {
        self.key_value_list.get(key)
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.key_value_list.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Self::Object(o)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Object {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
    {
        let iter = iter.into_iter();
        let mut ret = Self::with_capacity(iter.size_hint().0);
        for (k, v) in iter {
            _ = ret.add_field(k, v);
        }
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::{Object, Value};

    #[test]
    fn keeps_insertion_order() {
        let obj: Object = [("b", Value::scalar(1)), ("a", Value::scalar(2))]
            .into_iter()
            .collect();

        let keys = obj.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn replaces_duplicate_field_in_place() {
        let mut obj = Object::with_capacity(2);
        assert_eq!(obj.add_field("a", Value::scalar(1)), None);
        assert_eq!(obj.add_field("b", Value::scalar(2)), None);
        assert_eq!(obj.add_field("a", Value::scalar(3)), Some(Value::scalar(1)));

        assert_eq!(obj.field_count(), 2);
        assert!(obj.contains_field("a"));
        assert_eq!(obj.get_field_value("a"), Some(&Value::scalar(3)));
        assert_eq!(obj.iter().next().map(|(k, _)| k.as_str()), Some("a"));
    }
}
