use std::collections::HashMap;

use galmir_verify::ContentHash;

use crate::schema::{Expansion, RawImage, RawNode, RawPages};

const ALBUM_URI_PREFIX: &str = "/api/v2/album/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Folder,
    Album,
    /// A kind the mirror does not know how to handle.
    Other(String),
}

impl NodeKind {
    fn parse(kind: &str) -> Self {
        match kind {
            "Folder" => NodeKind::Folder,
            "Album" => NodeKind::Album,
            other => NodeKind::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Folder => f.write_str("Folder"),
            NodeKind::Album => f.write_str("Album"),
            NodeKind::Other(kind) => f.write_str(kind),
        }
    }
}

/// One entry of a folder listing.
///
/// `remote_id` is the node id for folders and the album key for albums; it is
/// empty when the listing did not carry one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub name:      String,
    pub kind:      NodeKind,
    pub remote_id: String,
}

impl From<RawNode> for TreeNode {
    fn from(raw: RawNode) -> Self {
        let kind = NodeKind::parse(&raw.kind);
        let remote_id = match kind {
            NodeKind::Album => raw
                .uris
                .album
                .map(|album| album_id_from_uri(&album.uri).to_string())
                .unwrap_or_default(),
            _ => raw.node_id,
        };
        Self {
            name: raw.name,
            kind,
            remote_id,
        }
    }
}

fn album_id_from_uri(uri: &str) -> &str {
    uri.strip_prefix(ALBUM_URI_PREFIX).unwrap_or(uri)
}

/// Where the bytes of an image live and what they should hash to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteContent {
    pub hash: ContentHash,
    pub url:  String,
}

/// One image of an album listing.
///
/// `file_name` is the upstream name and is not unique within an album.
/// `content` is `None` when neither the archived original nor the expanded
/// largest rendition could be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub file_name: String,
    pub content:   Option<RemoteContent>,
}

impl ImageRecord {
    pub(crate) fn resolve(raw: RawImage, expansions: &HashMap<String, Expansion>) -> Self {
        let content = match raw.archived_uri.filter(|uri| !uri.is_empty()) {
            Some(url) => Some(RemoteContent {
                hash: ContentHash::new(raw.archived_md5.unwrap_or_default()),
                url,
            }),
            None => raw
                .uris
                .largest_image
                .and_then(|reference| expansions.get(&reference.uri))
                .and_then(|expansion| expansion.largest_image.as_ref())
                .filter(|largest| !largest.url.is_empty())
                .map(|largest| RemoteContent {
                    hash: ContentHash::new(&largest.md5),
                    url:  largest.url.clone(),
                }),
        };
        Self {
            file_name: raw.file_name,
            content,
        }
    }
}

/// One fetched slice of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub start: u64,
    pub count: u64,
    pub total: u64,
}

impl<T> Page<T> {
    pub(crate) fn new(items: Vec<T>, pages: &RawPages) -> Self {
        Self {
            items,
            start: pages.start,
            count: pages.count,
            total: pages.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ImageUris, LargestImage, NodeUris, UriRef};

    fn raw_image(archived: Option<(&str, &str)>, largest_ref: Option<&str>) -> RawImage {
        RawImage {
            file_name:    "IMG1.jpg".to_string(),
            archived_uri: archived.map(|(url, _)| url.to_string()),
            archived_md5: archived.map(|(_, md5)| md5.to_string()),
            uris:         ImageUris {
                largest_image: largest_ref.map(|uri| UriRef { uri: uri.to_string() }),
            },
        }
    }

    fn expansions() -> HashMap<String, Expansion> {
        HashMap::from([(
            "/api/v2/image/abc-0!largestimage".to_string(),
            Expansion {
                largest_image: Some(LargestImage {
                    url: "https://cdn.test/abc-X3.jpg".to_string(),
                    md5: "AABBCC".to_string(),
                }),
            },
        )])
    }

    #[test]
    fn direct_content_wins() {
        let raw = raw_image(
            Some(("https://archive.test/abc.jpg", "0011")),
            Some("/api/v2/image/abc-0!largestimage"),
        );
        let image = ImageRecord::resolve(raw, &expansions());
        assert_eq!(
            image.content,
            Some(RemoteContent {
                hash: ContentHash::new("0011"),
                url:  "https://archive.test/abc.jpg".to_string(),
            })
        );
    }

    #[test]
    fn falls_back_to_expansion() {
        let raw = raw_image(None, Some("/api/v2/image/abc-0!largestimage"));
        let image = ImageRecord::resolve(raw, &expansions());
        let content = image.content.unwrap();
        assert_eq!(content.url, "https://cdn.test/abc-X3.jpg");
        assert_eq!(content.hash.as_str(), "aabbcc");
    }

    #[test]
    fn empty_archived_uri_is_ignored() {
        let raw = raw_image(Some(("", "")), Some("/api/v2/image/abc-0!largestimage"));
        let image = ImageRecord::resolve(raw, &expansions());
        assert_eq!(image.content.unwrap().url, "https://cdn.test/abc-X3.jpg");
    }

    #[test]
    fn unresolved_when_reference_is_missing() {
        let raw = raw_image(None, Some("/api/v2/image/other!largestimage"));
        assert_eq!(ImageRecord::resolve(raw, &expansions()).content, None);

        let raw = raw_image(None, None);
        assert_eq!(ImageRecord::resolve(raw, &expansions()).content, None);
    }

    #[test]
    fn album_node_uses_album_key() {
        let raw = RawNode {
            name:    "Summer".to_string(),
            kind:    "Album".to_string(),
            node_id: "NODE1".to_string(),
            uris:    NodeUris {
                album: Some(UriRef { uri: "/api/v2/album/AbCdE".to_string() }),
            },
        };
        let node = TreeNode::from(raw);
        assert_eq!(node.kind, NodeKind::Album);
        assert_eq!(node.remote_id, "AbCdE");
    }

    #[test]
    fn album_without_reference_has_no_id() {
        let raw = RawNode {
            name:    "Broken".to_string(),
            kind:    "Album".to_string(),
            node_id: "NODE1".to_string(),
            uris:    NodeUris::default(),
        };
        assert!(TreeNode::from(raw).remote_id.is_empty());
    }

    #[test]
    fn unknown_kind_is_preserved() {
        let raw = RawNode {
            name:    "About".to_string(),
            kind:    "Page".to_string(),
            node_id: "NODE2".to_string(),
            uris:    NodeUris::default(),
        };
        let node = TreeNode::from(raw);
        assert_eq!(node.kind, NodeKind::Other("Page".to_string()));
        assert_eq!(node.kind.to_string(), "Page");
        assert_eq!(node.remote_id, "NODE2");
    }
}
