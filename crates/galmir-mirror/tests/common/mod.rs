#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use galmir_fetch::{FetchOptions, Fetcher, HttpClient, HttpResponse, RetryPolicy};
use galmir_mirror::{Downloader, Reporter, TreeWalker, WalkEvent, WalkOptions};
use galmir_tree::{Endpoints, TreeClient};
use serde_json::{Value, json};

pub const BASE: &str = "https://photos.test";

#[derive(Debug)]
pub struct Offline;

impl std::fmt::Display for Offline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("offline")
    }
}

impl std::error::Error for Offline {}

/// Answers by route. A route is the URL path plus its `start` parameter, or
/// the full URL for image downloads. The last response of a route repeats;
/// unknown routes answer 404.
#[derive(Default)]
pub struct MockService {
    routes:   Mutex<HashMap<String, VecDeque<(u16, Vec<u8>)>>>,
    requests: Mutex<Vec<String>>,
}

impl MockService {
    pub fn new() -> Arc<Self> { Arc::new(Self::default()) }

    pub fn on(&self, route: impl Into<String>, status: u16, body: impl Into<Vec<u8>>) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .entry(route.into())
            .or_default()
            .push_back((status, body.into()));
        self
    }

    pub fn folder(&self, node_id: &str, start: u64, body: Value) -> &Self {
        self.on(folder_route(node_id, start), 200, body.to_string())
    }

    pub fn album(&self, album_id: &str, start: u64, body: Value) -> &Self {
        self.on(album_route(album_id, start), 200, body.to_string())
    }

    pub fn image(&self, url: &str, body: &[u8]) -> &Self { self.on(url, 200, body.to_vec()) }

    pub fn requests(&self) -> Vec<String> { self.requests.lock().unwrap().clone() }

    pub fn count(&self, route: &str) -> usize {
        self.requests().iter().filter(|r| r.as_str() == route).count()
    }

    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.requests().iter().filter(|r| r.starts_with(prefix)).count()
    }
}

pub fn route(url: &str) -> String {
    let (base, query) = url.split_once('?').unwrap_or((url, ""));
    match query.split('&').find_map(|kv| kv.strip_prefix("start=")) {
        Some(start) => format!("{base}@{start}"),
        None => base.to_string(),
    }
}

pub fn folder_route(node_id: &str, start: u64) -> String {
    format!("{BASE}/api/v2/node/{node_id}!children@{start}")
}

pub fn album_route(album_id: &str, start: u64) -> String {
    format!("{BASE}/api/v2/album/{album_id}!images@{start}")
}

pub fn image_url(album_id: &str, position: u64) -> String {
    format!("{BASE}/originals/{album_id}/{position}.jpg")
}

impl HttpClient for MockService {
    type Error = Offline;

    async fn get(&self, url: &str, _headers: &[(String, String)]) -> Result<HttpResponse, Offline> {
        let key = route(url);
        self.requests.lock().unwrap().push(key.clone());
        let mut routes = self.routes.lock().unwrap();
        let response = match routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };
        let (status, body) = response.unwrap_or((404, Vec::new()));
        Ok(HttpResponse::new(status, body))
    }
}

/// `(name, type, id)` children. Albums carry their id in the album reference.
pub fn folder_page(total: u64, start: u64, children: &[(&str, &str, &str)]) -> Value {
    let nodes: Vec<Value> = children
        .iter()
        .map(|(name, kind, id)| match *kind {
            "Album" => json!({
                "Name": name,
                "Type": "Album",
                "NodeID": format!("node-{id}"),
                "Uris": {"Album": {"Uri": format!("/api/v2/album/{id}")}}
            }),
            _ => json!({"Name": name, "Type": kind, "NodeID": id}),
        })
        .collect();
    json!({"Response": {
        "Node": nodes,
        "Pages": {"Total": total, "Start": start, "Count": children.len()}
    }})
}

/// `(file name, body)` images listed with the body's MD5. The image at
/// listing position `n` is served from [`image_url`]`(album_id, n)`.
pub fn album_page(album_id: &str, total: u64, start: u64, images: &[(&str, &str)]) -> Value {
    let records: Vec<Value> = images
        .iter()
        .zip(start..)
        .map(|((name, body), position)| {
            json!({
                "FileName": name,
                "ArchivedUri": image_url(album_id, position),
                "ArchivedMD5": galmir_verify::ContentHash::of_bytes(body.as_bytes()).as_str(),
            })
        })
        .collect();
    json!({"Response": {
        "AlbumImage": records,
        "Pages": {"Total": total, "Start": start, "Count": images.len()}
    }})
}

/// Serve a whole album in pages of 50, images included.
pub fn serve_album(service: &MockService, album_id: &str, images: &[(&str, &str)]) {
    let total = images.len() as u64;
    if images.is_empty() {
        service.album(album_id, 1, album_page(album_id, 0, 1, &[]));
    }
    for (page, chunk) in images.chunks(50).enumerate() {
        let start = 1 + 50 * page as u64;
        service.album(album_id, start, album_page(album_id, total, start, chunk));
        for ((_, body), position) in chunk.iter().zip(start..) {
            service.image(&image_url(album_id, position), body.as_bytes());
        }
    }
}

pub fn fetcher(service: Arc<MockService>) -> Fetcher<Arc<MockService>> {
    let options = FetchOptions::default().retry(RetryPolicy::default().delay(Duration::ZERO));
    Fetcher::new(service, options)
}

pub fn walker<R: Reporter>(
    service: Arc<MockService>,
    reporter: R,
    page_attempts: Option<u32>,
) -> TreeWalker<Arc<MockService>, R> {
    let fetcher = fetcher(service);
    let client = TreeClient::new(fetcher.clone(), Endpoints::new(BASE, "KEY").unwrap());
    TreeWalker::new(client, Downloader::new(fetcher), reporter).with_options(WalkOptions {
        page_attempts,
        page_retry_delay: Duration::ZERO,
    })
}

/// Records a short label per event.
#[derive(Default)]
pub struct Recorder {
    pub events: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<String> { self.events.lock().unwrap().clone() }

    pub fn has(&self, label: &str) -> bool { self.events().iter().any(|e| e == label) }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.events().iter().position(|e| e == label)
    }
}

impl Reporter for Recorder {
    fn report(&self, event: &WalkEvent<'_>) {
        let label = match event {
            WalkEvent::FolderStarted { node_id, .. } => format!("folder:{node_id}"),
            WalkEvent::FolderDone { .. } => "folder-done".to_string(),
            WalkEvent::AlbumStarted { album_id, .. } => format!("album:{album_id}"),
            WalkEvent::AlbumTotal { total, .. } => format!("album-total:{total}"),
            WalkEvent::AlbumDone { .. } => "album-done".to_string(),
            WalkEvent::PageFailed { start, attempt, .. } => format!("page-failed:{start}:{attempt}"),
            WalkEvent::NodeAbandoned { node_id, attempts, .. } => {
                format!("abandoned:{node_id}:{attempts}")
            }
            WalkEvent::ListingStalled { node_id, .. } => format!("stalled:{node_id}"),
            WalkEvent::ChildSkipped { name, reason, .. } => format!("skipped:{name}:{reason:?}"),
            WalkEvent::DirectoryFailed { .. } => "dir-failed".to_string(),
            WalkEvent::Image { file_name, result, .. } => match result {
                Ok(outcome) => format!("image:{file_name}:{outcome:?}"),
                Err(_) => format!("image:{file_name}:failed"),
            },
        };
        self.events.lock().unwrap().push(label);
    }
}
