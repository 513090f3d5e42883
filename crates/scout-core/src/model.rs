//! Listing pages and detail records as served by the remote API.

use serde::{Deserialize, Serialize};

/// One page of the item listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Item ids on this page, in listing order.
    #[serde(rename = "result", default)]
    pub item_ids: Vec<i64>,
    /// Present when another page follows.
    #[serde(rename = "token", default)]
    pub continuation_token: Option<String>,
}

impl Page {
    pub fn new(item_ids: Vec<i64>, continuation_token: Option<&str>) -> Self {
        Self {
            item_ids,
            continuation_token: continuation_token.map(str::to_string),
        }
    }

    /// Continuation token, treating an empty string as "last page".
    pub fn next_token(&self) -> Option<&str> {
        self.continuation_token
            .as_deref()
            .filter(|t| !t.is_empty())
    }
}

/// Full detail record for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub age: i64,
    #[serde(rename = "number")]
    pub phone_number: String,
    #[serde(rename = "photo", default)]
    pub photo_url: String,
    #[serde(default)]
    pub bio: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_decodes_with_and_without_token() {
        let page: Page = serde_json::from_str(r#"{"result":[1,2,3],"token":"b2"}"#).unwrap();
        assert_eq!(page.item_ids, vec![1, 2, 3]);
        assert_eq!(page.next_token(), Some("b2"));

        let last: Page = serde_json::from_str(r#"{"result":[4]}"#).unwrap();
        assert_eq!(last.next_token(), None);

        let empty: Page = serde_json::from_str(r#"{"result":[],"token":""}"#).unwrap();
        assert!(empty.item_ids.is_empty());
        assert_eq!(empty.next_token(), None);
    }

    #[test]
    fn record_uses_wire_field_names() {
        let json = r#"{"id":1,"name":"bill","age":39,"number":"555-555-5555","photo":"https://appsheettest1.azurewebsites.net/male-16.jpg","bio":"Lorem ipsum"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.name, "bill");
        assert_eq!(record.age, 39);
        assert_eq!(record.phone_number, "555-555-5555");
        assert!(record.photo_url.ends_with("male-16.jpg"));

        let out = serde_json::to_value(&record).unwrap();
        assert_eq!(out["number"], "555-555-5555");
        assert!(out.get("phone_number").is_none());
    }

    #[test]
    fn record_missing_required_field_fails() {
        let err = serde_json::from_str::<Record>(r#"{"id":1,"name":"bill"}"#);
        assert!(err.is_err());
    }
}
