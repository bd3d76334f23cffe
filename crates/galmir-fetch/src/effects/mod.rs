//! Network I/O behind a trait so the fetch logic can run against a fake.

mod fetcher;
mod http;

pub use fetcher::Fetcher;
pub use http::{HttpClient, HttpResponse};
#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
