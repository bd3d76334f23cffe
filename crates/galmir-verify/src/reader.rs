use std::io::{self, Read};

use crate::{ContentHash, Hasher, Result, VerificationError};

/// Streaming reader that hashes data as it passes through.
pub struct VerifiedReader<R, H> {
    reader: R,
    hasher: H,
}

impl<R, H> VerifiedReader<R, H> {
    pub fn new(reader: R, hasher: H) -> Self {
        Self { reader, hasher }
    }
}

impl<R: Read, H: Hasher> Read for VerifiedReader<R, H> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.reader.read(buf)?;
        if n > 0 {
            self.hasher.update(&buf[..n]);
        }
        Ok(n)
    }
}

impl<R: Read, H: Hasher> VerifiedReader<R, H> {
    /// Drain the remaining input and return the hash of everything read.
    pub fn drain(mut self) -> io::Result<ContentHash> {
        io::copy(&mut self, &mut io::sink())?;
        Ok(self.digest())
    }

    /// Hash of the bytes read so far.
    pub fn digest(self) -> ContentHash {
        ContentHash::from_digest(&self.hasher.finalize())
    }

    /// Finalize verification against an expected hash.
    pub fn finish(self, expected: &ContentHash) -> Result<()> {
        let actual = self.digest();
        if actual == *expected {
            Ok(())
        } else {
            Err(VerificationError::Mismatch {
                expected: expected.clone(),
                actual,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Md5Hasher;
    use std::io::Cursor;

    #[test]
    fn test_md5_hasher() {
        let mut hasher = Md5Hasher::new();
        hasher.update(b"hello world");
        let hash = hasher.finalize();

        let expected = hex::decode("5eb63bbbe01eeed093cb22bb8f5acdc3").unwrap();
        assert_eq!(hash, expected);
    }

    #[test]
    fn test_verified_reader_success() {
        let data = b"test data for verification";
        let expected = ContentHash::from_digest(&Md5Hasher::digest(data));

        let mut verified = VerifiedReader::new(Cursor::new(data), Md5Hasher::new());
        let mut buffer = Vec::new();
        verified.read_to_end(&mut buffer).unwrap();

        assert_eq!(buffer, data);
        verified.finish(&expected).unwrap();
    }

    #[test]
    fn test_verified_reader_hash_mismatch() {
        let mut verified = VerifiedReader::new(Cursor::new(b"test data"), Md5Hasher::new());
        let mut buffer = Vec::new();
        verified.read_to_end(&mut buffer).unwrap();

        let wrong = ContentHash::new("00000000000000000000000000000000");
        match verified.finish(&wrong) {
            Err(VerificationError::Mismatch { expected, actual }) => {
                assert_eq!(expected, wrong);
                assert_ne!(actual, wrong);
            }
            other => panic!("Expected Mismatch error, got {other:?}"),
        }
    }

    #[test]
    fn test_drain_hashes_unread_input() {
        let reader = VerifiedReader::new(Cursor::new(b"hello world"), Md5Hasher::new());
        assert_eq!(
            reader.drain().unwrap().as_str(),
            "5eb63bbbe01eeed093cb22bb8f5acdc3"
        );
    }
}
