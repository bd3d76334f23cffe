//! Wire shapes of the remote tree service. Only the fields the mirror reads
//! are modelled; everything else in the body is ignored.

use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct Envelope<T> {
    pub response:   T,
    #[serde(default)]
    pub expansions: HashMap<String, Expansion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct FolderResponse {
    #[serde(default)]
    pub node:  Vec<RawNode>,
    pub pages: RawPages,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct AlbumResponse {
    #[serde(default)]
    pub album_image: Vec<RawImage>,
    pub pages:       RawPages,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RawPages {
    pub total: u64,
    #[serde(default)]
    pub start: u64,
    pub count: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RawNode {
    pub name:    String,
    #[serde(rename = "Type")]
    pub kind:    String,
    #[serde(rename = "NodeID", default)]
    pub node_id: String,
    #[serde(default)]
    pub uris:    NodeUris,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct NodeUris {
    pub album: Option<UriRef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct UriRef {
    pub uri: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RawImage {
    pub file_name:    String,
    pub archived_uri: Option<String>,
    #[serde(rename = "ArchivedMD5")]
    pub archived_md5: Option<String>,
    #[serde(default)]
    pub uris:         ImageUris,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ImageUris {
    pub largest_image: Option<UriRef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct Expansion {
    pub largest_image: Option<LargestImage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct LargestImage {
    #[serde(default)]
    pub url: String,
    #[serde(rename = "MD5", default)]
    pub md5: String,
}
