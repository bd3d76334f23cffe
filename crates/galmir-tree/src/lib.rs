//! Paginated listings of a remote media tree.
//!
//! [`TreeClient`] fetches one page at a time of folder children or album
//! images and decodes it into [`Page`]s of domain records. Walking the pages
//! is the caller's job; [`Cursor`] holds the pagination contract.

mod client;
mod cursor;
mod endpoint;
mod error;
mod model;
mod schema;

pub use client::{TreeClient, decode_album_page, decode_folder_page};
pub use cursor::{Advance, Cursor, FIRST_START};
pub use endpoint::{Endpoints, PAGE_SIZE};
pub use error::{Result, TreeError};
pub use model::{ImageRecord, NodeKind, Page, RemoteContent, TreeNode};
