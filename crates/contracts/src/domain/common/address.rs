use serde::{Deserialize, Serialize};

use super::lenient::string_lenient;

/// Postal address sub-object shared by clients, organizations and dealer slots
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    #[serde(deserialize_with = "string_lenient")]
    pub street: String,
    #[serde(deserialize_with = "string_lenient")]
    pub city: String,
    #[serde(deserialize_with = "string_lenient")]
    pub state: String,
    #[serde(deserialize_with = "string_lenient")]
    pub zip_code: String,
    #[serde(deserialize_with = "string_lenient")]
    pub country: String,
}

impl Address {
    /// Single-line rendering, skipping empty parts
    pub fn one_line(&self) -> String {
        [
            self.street.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.zip_code.as_str(),
            self.country.as_str(),
        ]
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }

    pub fn is_empty(&self) -> bool {
        self.one_line().is_empty()
    }
}

/// Company details attached to a client account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Company {
    #[serde(deserialize_with = "string_lenient")]
    pub name: String,
    #[serde(deserialize_with = "string_lenient")]
    pub registration_number: String,
    #[serde(deserialize_with = "string_lenient")]
    pub tax_id: String,
    #[serde(deserialize_with = "string_lenient")]
    pub website: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line_skips_blank_parts() {
        let address = Address {
            street: "12 Main St".into(),
            city: "Springfield".into(),
            state: " ".into(),
            zip_code: String::new(),
            country: "US".into(),
        };
        assert_eq!(address.one_line(), "12 Main St, Springfield, US");
        assert!(Address::default().is_empty());
    }
}
