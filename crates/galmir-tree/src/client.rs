use galmir_fetch::{Fetcher, HttpClient};

use crate::endpoint::Endpoints;
use crate::error::Result;
use crate::model::{ImageRecord, Page, TreeNode};
use crate::schema::{AlbumResponse, Envelope, FolderResponse};

/// Paginated access to folder children and album images.
pub struct TreeClient<C> {
    fetcher:   Fetcher<C>,
    endpoints: Endpoints,
}

impl<C: HttpClient> TreeClient<C> {
    pub fn new(fetcher: Fetcher<C>, endpoints: Endpoints) -> Self {
        Self { fetcher, endpoints }
    }

    /// One page of the children of folder `node_id`, starting at `start`.
    pub async fn list_folder_children(&self, node_id: &str, start: u64) -> Result<Page<TreeNode>> {
        let url = self.endpoints.folder_children(node_id, start)?;
        let body = self.fetcher.fetch(url.as_str()).await?;
        decode_folder_page(&body)
    }

    /// One page of the images of album `album_id`, starting at `start`.
    pub async fn list_album_images(&self, album_id: &str, start: u64) -> Result<Page<ImageRecord>> {
        let url = self.endpoints.album_images(album_id, start)?;
        let body = self.fetcher.fetch(url.as_str()).await?;
        decode_album_page(&body)
    }
}

/// Decode a folder-children body.
pub fn decode_folder_page(body: &[u8]) -> Result<Page<TreeNode>> {
    let envelope: Envelope<FolderResponse> = serde_json::from_slice(body)?;
    let response = envelope.response;
    let items = response.node.into_iter().map(TreeNode::from).collect();
    Ok(Page::new(items, &response.pages))
}

/// Decode an album-images body, resolving each image's content against the
/// page's expansion table.
pub fn decode_album_page(body: &[u8]) -> Result<Page<ImageRecord>> {
    let envelope: Envelope<AlbumResponse> = serde_json::from_slice(body)?;
    let expansions = envelope.expansions;
    let response = envelope.response;
    let items = response
        .album_image
        .into_iter()
        .map(|raw| ImageRecord::resolve(raw, &expansions))
        .collect();
    Ok(Page::new(items, &response.pages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TreeError;
    use crate::model::NodeKind;

    #[test]
    fn decodes_folder_page() {
        let body = br#"{
            "Response": {
                "Node": [
                    {"Name": "2019", "Type": "Folder", "NodeID": "F1"},
                    {"Name": "Beach", "Type": "Album", "NodeID": "N2",
                     "Uris": {"Album": {"Uri": "/api/v2/album/AL2"}}},
                    {"Name": "About", "Type": "Page", "NodeID": "N3"}
                ],
                "Pages": {"Total": 3, "Start": 1, "Count": 3}
            }
        }"#;
        let page = decode_folder_page(body).unwrap();

        assert_eq!((page.start, page.count, page.total), (1, 3, 3));
        let kinds: Vec<_> = page.items.iter().map(|n| n.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![NodeKind::Folder, NodeKind::Album, NodeKind::Other("Page".into())]
        );
        assert_eq!(page.items[0].remote_id, "F1");
        assert_eq!(page.items[1].remote_id, "AL2");
    }

    #[test]
    fn empty_folder_has_no_node_key() {
        let body = br#"{"Response": {"Pages": {"Total": 0, "Start": 1, "Count": 0}}}"#;
        let page = decode_folder_page(body).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn decodes_album_page_with_expansions() {
        let body = br#"{
            "Response": {
                "AlbumImage": [
                    {"FileName": "A1.jpg", "ArchivedUri": "https://a.test/1", "ArchivedMD5": "11"},
                    {"FileName": "A2.jpg", "Uris": {"LargestImage": {"Uri": "/img/2!largest"}}},
                    {"FileName": "A3.jpg"}
                ],
                "Pages": {"Total": 3, "Start": 1, "Count": 3}
            },
            "Expansions": {
                "/img/2!largest": {"LargestImage": {"Url": "https://cdn.test/2", "MD5": "22"}}
            }
        }"#;
        let page = decode_album_page(body).unwrap();

        let urls: Vec<_> = page
            .items
            .iter()
            .map(|i| i.content.as_ref().map(|c| c.url.as_str()))
            .collect();
        assert_eq!(urls, vec![Some("https://a.test/1"), Some("https://cdn.test/2"), None]);
    }

    #[test]
    fn missing_pages_is_a_decode_error() {
        let body = br#"{"Response": {"AlbumImage": []}}"#;
        assert!(matches!(decode_album_page(body), Err(TreeError::Decode(_))));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        assert!(matches!(decode_folder_page(b"<html>"), Err(TreeError::Decode(_))));
    }
}
