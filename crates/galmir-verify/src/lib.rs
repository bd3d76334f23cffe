//! Content verification for mirrored files.
//!
//! A local file is considered current when the truncated MD5 of its bytes
//! equals the hash the remote service recorded for it.
//!
//! # Example
//!
//! ```
//! use galmir_verify::{ContentHash, Md5Hasher, VerifiedReader};
//!
//! let expected = ContentHash::new("5eb63bbbe01eeed093cb22bb8f5acdc3");
//!
//! let mut reader = VerifiedReader::new(&b"hello world"[..], Md5Hasher::new());
//! std::io::copy(&mut reader, &mut std::io::sink()).unwrap();
//!
//! reader.finish(&expected).unwrap();
//! ```

pub use self::error::{Result, VerificationError};
pub use self::hash::{CONTENT_HASH_BYTES, ContentHash, verify_bytes};
pub use self::hasher::{Hasher, Md5Hasher};
pub use self::reader::VerifiedReader;

mod error;
mod hash;
mod hasher;
mod reader;
