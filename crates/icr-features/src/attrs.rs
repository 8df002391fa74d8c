//! Generic attribute mapping.
//!
//! Source datasets arrive with arbitrary column sets; the filters inspect
//! them by name before anything is typed.  Keys are stored lowercased so all
//! lookups are case-insensitive, and whole-name reliance is avoided where
//! sources version their columns (`f_system` vs `f_system_2020`).  Storage
//! is a flat `Vec` — feature tables have a few dozen
//! columns at most, so a linear scan beats hashing.

/// One attribute value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Num(f64),
    Text(String),
    Null,
}

impl Value {
    /// Parse a raw CSV cell: empty → `Null`, numeric → `Num`, else `Text`.
    pub fn parse(cell: &str) -> Value {
        let cell = cell.trim();
        if cell.is_empty() {
            return Value::Null;
        }
        match cell.parse::<f64>() {
            Ok(n) => Value::Num(n),
            Err(_) => Value::Text(cell.to_string()),
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Attribute name → value mapping with case-insensitive lookup.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttrMap {
    entries: Vec<(String, Value)>,
}

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute.  The key is lowercased; later inserts with the
    /// same key shadow earlier ones on lookup (first match wins is avoided
    /// by never inserting duplicates from a CSV header).
    pub fn insert(&mut self, name: &str, value: Value) {
        self.entries.push((name.to_ascii_lowercase(), value));
    }

    /// Case-insensitive exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let name = name.to_ascii_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v)
    }

    pub fn get_num(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_num)
    }

    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_text)
    }

    /// First attribute whose *name contains* `substr` (case-insensitive).
    ///
    /// The road functional-system column is located this way: source data
    /// carries it under varying names (`f_system`, `F_SYSTEM_2020` and so
    /// on).
    pub fn find_containing(&self, substr: &str) -> Option<(&str, &Value)> {
        let substr = substr.to_ascii_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| k.contains(&substr))
            .map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Value)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut map = AttrMap::new();
        for (k, v) in iter {
            map.insert(&k, v);
        }
        map
    }
}
