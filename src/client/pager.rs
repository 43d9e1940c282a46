//! List pagination
//!
//! ARM list endpoints return `{"value": [...], "nextLink": "..."}`. A page is
//! the last one when the link is missing, null or empty.

use super::http::HttpResponse;
use super::predicate::Predicate;
use super::request::Response;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Field names of a list envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub next_link_field: &'static str,
    pub value_field: &'static str,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            next_link_field: "nextLink",
            value_field: "value",
        }
    }
}

/// One decoded page of results
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub items: Vec<Value>,
    pub next_link: Option<String>,
}

impl Pager {
    /// Split a page body into its items and the link to the next page
    pub fn read_page(&self, body: &str) -> Result<Page> {
        if body.trim().is_empty() {
            return Ok(Page::default());
        }

        let envelope: Map<String, Value> =
            serde_json::from_str(body).map_err(Error::decode::<Map<String, Value>>)?;

        let items = match envelope.get(self.value_field) {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        };

        let next_link = envelope
            .get(self.next_link_field)
            .and_then(Value::as_str)
            .filter(|link| !link.is_empty())
            .map(str::to_string);

        Ok(Page { items, next_link })
    }

    /// Body holding every item fetched so far, without a next link
    pub fn merged_body(&self, items: Vec<Value>) -> String {
        let mut envelope = Map::new();
        envelope.insert(self.value_field.to_string(), Value::Array(items));
        Value::Object(envelope).to_string()
    }
}

/// Items of a list operation after every page was fetched
#[derive(Debug, Clone)]
pub struct ListCompleteResult<T> {
    pub latest_http_response: Option<HttpResponse>,
    pub items: Vec<T>,
}

impl<T> Default for ListCompleteResult<T> {
    fn default() -> Self {
        Self {
            latest_http_response: None,
            items: Vec::new(),
        }
    }
}

impl<T> ListCompleteResult<T> {
    /// Keep the items of a merged list response that `predicate` accepts
    pub fn from_response(response: Response<Vec<T>>, predicate: &impl Predicate<T>) -> Self {
        let items = response
            .model
            .unwrap_or_default()
            .into_iter()
            .filter(|item| predicate.matches(item))
            .collect();
        Self {
            latest_http_response: Some(response.http_response),
            items,
        }
    }
}

/// Decode the merged `value` array of a paged response
pub fn decode_values<T: DeserializeOwned>(response: &HttpResponse) -> Result<Vec<T>> {
    #[derive(serde::Deserialize)]
    struct Values<T> {
        #[serde(default = "Vec::new")]
        value: Vec<T>,
    }

    if response.body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let values: Values<T> = serde_json::from_str(&response.body).map_err(Error::decode::<Vec<T>>)?;
    Ok(values.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_items_and_next_link() {
        let page = Pager::default()
            .read_page(r#"{"value":[{"name":"a"},{"name":"b"}],"nextLink":"https://example/next"}"#)
            .unwrap();
        assert_eq!(page.items, vec![json!({"name": "a"}), json!({"name": "b"})]);
        assert_eq!(page.next_link.as_deref(), Some("https://example/next"));
    }

    #[test]
    fn empty_or_null_link_ends_paging() {
        let pager = Pager::default();
        assert!(pager.read_page(r#"{"value":[],"nextLink":""}"#).unwrap().next_link.is_none());
        assert!(pager.read_page(r#"{"value":[],"nextLink":null}"#).unwrap().next_link.is_none());
        assert!(pager.read_page("").unwrap().items.is_empty());
    }

    #[test]
    fn merged_body_has_no_link() {
        let body = Pager::default().merged_body(vec![json!(1), json!(2)]);
        assert_eq!(body, r#"{"value":[1,2]}"#);
    }

    #[test]
    fn rejects_non_object_pages() {
        assert!(Pager::default().read_page("[1,2]").is_err());
    }
}
