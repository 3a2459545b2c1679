use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::lenient::reference_id_of;

/// Foreign reference that the backend sends either as a bare id or as a
/// populated object. The id is always kept; a display name is kept when
/// the object carries one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntityRef {
    pub id: String,
    pub name: Option<String>,
}

impl EntityRef {
    pub fn from_value(value: &Value) -> Self {
        let name = value.as_object().and_then(|map| {
            ["name", "companyName", "dealerName", "title"]
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str))
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        });
        Self {
            id: reference_id_of(value),
            name,
        }
    }

    /// Name if known, otherwise the id
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

impl<'de> Deserialize<'de> for EntityRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().map(EntityRef::from_value).unwrap_or_default())
    }
}
