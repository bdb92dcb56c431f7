//! Request and response shapes, annotated with the schema examples that show
//! up in the generated documentation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An item as submitted by clients.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Item {
    /// Display name of the item.
    #[schemars(extend("example" = "Foo"))]
    pub name: String,
    /// Optional free-form description.
    #[schemars(extend("example" = "A very nice Item"))]
    pub description: Option<String>,
    /// Net price.
    #[schemars(extend("example" = 35.4))]
    pub price: f64,
    /// Optional tax amount.
    #[schemars(extend("example" = 3.2))]
    pub tax: Option<f64>,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            name: "Foo".into(),
            description: Some("A very nice Item".into()),
            price: 35.4,
            tax: Some(3.2),
        }
    }
}

/// The greeting returned from the root endpoint.
#[derive(Clone, Debug, Serialize, JsonSchema)]
pub struct Greeting {
    /// Fixed welcome message.
    pub message: String,
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            message: "Hello World".into(),
        }
    }
}

/// A named entry in the fixed item list.
#[derive(Clone, Debug, Serialize, JsonSchema)]
pub struct ItemName {
    pub name: String,
}

/// Echo envelope returned from the item update endpoint.
#[derive(Clone, Debug, Serialize, JsonSchema)]
pub struct ItemUpdate {
    /// The id taken from the request path.
    pub item_id: u64,
    /// The item exactly as submitted.
    pub item: Item,
}

/// A reference to an item by id.
#[derive(Clone, Debug, Serialize, JsonSchema)]
pub struct ItemRef {
    pub item_id: String,
}

/// Search result page for the new-items endpoint.
///
/// `q` is left out of the JSON entirely when the caller did not supply one.
#[derive(Clone, Debug, Serialize, JsonSchema)]
pub struct ItemSearch {
    /// The matching items.
    pub items: Vec<ItemRef>,
    /// The query string, echoed back when supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

/// A named entry in the fixed user list.
#[derive(Clone, Debug, Serialize, JsonSchema)]
pub struct UserName {
    pub name: String,
}

/// A resolved entry of the user directory.
#[derive(Clone, Debug, Serialize, JsonSchema)]
pub struct UserRecord {
    /// The short id the user was looked up by.
    pub id: String,
    /// Display name of the user.
    pub name: String,
}

/// Success envelope for the user lookup endpoint.
#[derive(Clone, Debug, Serialize, JsonSchema)]
pub struct UserLookup {
    /// Always `"success"`.
    pub status: String,
    /// The resolved user.
    pub data: UserRecord,
}

impl UserLookup {
    /// Build the success envelope for a resolved directory entry.
    pub fn success(id: &str, name: &str) -> Self {
        Self {
            status: "success".to_owned(),
            data: UserRecord {
                id: id.to_owned(),
                name: name.to_owned(),
            },
        }
    }
}

/// Error envelope shared by all failure responses.
#[derive(Clone, Debug, Serialize, JsonSchema)]
pub struct ErrorReply {
    /// Always `"error"`.
    pub status: String,
    /// Human-readable reason.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_search_omits_absent_q() {
        let page = ItemSearch {
            items: vec![],
            q: None,
        };

        let value = serde_json::to_value(&page).unwrap();
        assert!(value.get("q").is_none());
    }

    #[test]
    fn item_search_echoes_q() {
        let page = ItemSearch {
            items: vec![],
            q: Some("wand".to_owned()),
        };

        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["q"], "wand");
    }

    #[test]
    fn item_body_roundtrips_without_optionals() {
        let item: Item = serde_json::from_str(r#"{"name":"wand","price":9.75}"#).unwrap();
        assert_eq!(item.name, "wand");
        assert_eq!(item.description, None);
        assert_eq!(item.tax, None);
    }
}
