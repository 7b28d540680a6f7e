//! Cached resource record.

use serde::{Deserialize, Serialize};

use crate::transport::HttpResponse;

/// A resource representation as last retrieved from the server.
///
/// `entity_tag` and `last_modified` are kept only when the corresponding
/// response header was present. A refresh replaces values wholesale, it
/// never merges old and new metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub location: String,
    pub content_type: Option<String>,
    pub entity: Option<String>,
    pub entity_tag: Option<String>,
    pub last_modified: Option<String>,
}

impl Resource {
    pub fn new(location: &str) -> Self {
        Self {
            location: location.to_string(),
            content_type: None,
            entity: None,
            entity_tag: None,
            last_modified: None,
        }
    }

    /// Overwrite this record from a retrieved response.
    ///
    /// Content type and body are taken together when the response carried an
    /// entity; ETag and Last-Modified are taken when the header is present.
    pub fn refresh_from(&mut self, response: &HttpResponse) {
        if let Some(body) = &response.body {
            self.content_type = response.content_type.clone();
            self.entity = Some(body.clone());
        }
        if let Some(etag) = response.first_header("ETag") {
            self.entity_tag = Some(etag.to_string());
        }
        if let Some(last_modified) = response.first_header("Last-Modified") {
            self.last_modified = Some(last_modified.to_string());
        }
    }
}
