//! OData annotations carried alongside ARM response bodies

use super::http::HttpResponse;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OData {
    #[serde(rename = "@odata.context")]
    pub context: Option<String>,
    #[serde(rename = "@odata.count")]
    pub count: Option<i64>,
    #[serde(rename = "@odata.etag")]
    pub etag: Option<String>,
    #[serde(rename = "@odata.id")]
    pub id: Option<String>,
    #[serde(rename = "@odata.nextLink")]
    pub next_link: Option<String>,
    #[serde(rename = "@odata.type")]
    pub type_: Option<String>,
}

impl OData {
    /// Annotations found at the top level of a JSON object body. Anything
    /// that is not an object carries no metadata.
    pub fn from_response(response: &HttpResponse) -> Option<Self> {
        let odata: OData = serde_json::from_str(&response.body).ok()?;
        if odata == OData::default() {
            None
        } else {
            Some(odata)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;
    use reqwest::{Method, StatusCode};
    use url::Url;

    fn response(body: &str) -> HttpResponse {
        HttpResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: body.to_string(),
            method: Method::GET,
            url: Url::parse("https://management.azure.com/x").unwrap(),
        }
    }

    #[test]
    fn reads_annotations() {
        let odata = OData::from_response(&response(
            r#"{"@odata.count": 3, "@odata.nextLink": "next", "value": []}"#,
        ))
        .unwrap();
        assert_eq!(odata.count, Some(3));
        assert_eq!(odata.next_link.as_deref(), Some("next"));
    }

    #[test]
    fn plain_bodies_have_no_annotations() {
        assert!(OData::from_response(&response(r#"{"name": "dms1"}"#)).is_none());
        assert!(OData::from_response(&response("")).is_none());
        assert!(OData::from_response(&response("[1]")).is_none());
    }
}
