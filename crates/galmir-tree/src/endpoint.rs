use url::Url;

use crate::error::{Result, TreeError};

/// Number of entries requested per page.
pub const PAGE_SIZE: u32 = 50;

/// Builds listing URLs for the remote tree service.
///
/// Every URL is a pure function of the resource id and start index: fixed
/// page size, sorted by organizer order, descending.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
    api_key:  String,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|source| TreeError::InvalidUrl {
            url: base_url.clone(),
            source,
        })?;
        Ok(Self {
            base_url,
            api_key: api_key.into(),
        })
    }

    pub fn folder_children(&self, node_id: &str, start: u64) -> Result<Url> {
        self.build(&format!("/api/v2/node/{node_id}!children"), start, None)
    }

    pub fn album_images(&self, album_id: &str, start: u64) -> Result<Url> {
        self.build(
            &format!("/api/v2/album/{album_id}!images"),
            start,
            Some("LargestImage"),
        )
    }

    fn build(&self, path: &str, start: u64, expand: Option<&str>) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|source| TreeError::InvalidUrl { url: raw, source })?;

        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("APIKey", &self.api_key)
                .append_pair("_accept", "application/json")
                .append_pair("Type", "Folder Album Page")
                .append_pair("SortMethod", "Organizer")
                .append_pair("SortDirection", "Descending")
                .append_pair("count", &PAGE_SIZE.to_string())
                .append_pair("start", &start.to_string());
            if let Some(expand) = expand {
                query.append_pair("_expand", expand);
            }
        }

        Ok(url)
    }
}
