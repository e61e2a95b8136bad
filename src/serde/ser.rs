use bstr::ByteSlice;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::{Any, Container, Key, NestedView, Value};

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Number(number) => number.serialize(serializer),
            Value::String(string) => {
                if let Ok(string) = string.to_str() {
                    serializer.serialize_str(string)
                } else {
                    serializer.serialize_bytes(string)
                }
            }
            Value::Container(container) => container.serialize(serializer),
            Value::Opaque(..) => serializer.serialize_unit(),
        }
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Key::Index(index) => serializer.serialize_u64(*index as u64),
            Key::Name(name) => {
                if let Ok(name) = name.to_str() {
                    serializer.serialize_str(name)
                } else {
                    serializer.serialize_bytes(name)
                }
            }
        }
    }
}

impl Serialize for Container {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries = self.entries();

        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(entries.len()))?;

            for (_, value) in entries.iter() {
                seq.serialize_element(value)?;
            }

            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(entries.len()))?;

            for (key, value) in entries.iter() {
                map.serialize_entry(key, value)?;
            }

            map.end()
        }
    }
}

impl Serialize for NestedView {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.materialize().serialize(serializer)
    }
}

impl Serialize for Any {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Any::Value(value) => value.serialize(serializer),
            Any::View(view) => view.serialize(serializer),
        }
    }
}
