//! One-shot header read for a discovered tag.

use log::{debug, info, warn};

use crate::error::TagError;
use crate::format::bytes_to_hex_string;
use crate::header::TagHeader;
use crate::session::TagSession;
use crate::ultralight::{RawPageBlock, UltralightTransport};

const STATUS_PREFIX: &str = "Tag discovered! ";
const FAILED_MESSAGE: &str = "Failed to fetch data!";

#[derive(Clone, Debug)]
pub struct ReaderConfig {
    /// First page of the block to read
    pub start_page: u8,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { start_page: 0 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    Header(RawPageBlock),
    Failed,
}

/// Read the tag header once with the default configuration.
pub fn read_tag_header<T: UltralightTransport>(transport: T) -> ReadOutcome {
    read_tag_header_with(transport, &ReaderConfig::default())
}

/// Open a session, read one block, release the session. Any transport error
/// becomes `ReadOutcome::Failed`; there are no retries.
pub fn read_tag_header_with<T: UltralightTransport>(
    transport: T,
    config: &ReaderConfig,
) -> ReadOutcome {
    match read_block(transport, config.start_page) {
        Ok(block) => {
            log_header(&block);
            ReadOutcome::Header(block)
        }
        Err(e) => {
            warn!("Failed to read tag: {}", e);
            ReadOutcome::Failed
        }
    }
}

fn read_block<T: UltralightTransport>(transport: T, page: u8) -> Result<RawPageBlock, TagError> {
    let mut session = TagSession::open(transport)?;
    let block = session.read_pages(page)?;
    // A failed close after a good read still yields the data.
    if let Err(e) = session.close() {
        warn!("Failed to close tag session: {}", e);
    }

    Ok(block)
}

fn log_header(block: &RawPageBlock) {
    match TagHeader::parse(block) {
        Ok(header) => info!(
            "Tag UID {} (check bytes {})",
            bytes_to_hex_string(&header.uid()),
            if header.bcc_valid() { "ok" } else { "invalid" }
        ),
        Err(e) => debug!("Block is not a full header: {}", e),
    }
}

/// Status line shown to the user for a read outcome
pub fn status_text(outcome: &ReadOutcome) -> String {
    match outcome {
        ReadOutcome::Header(block) => format!(
            "{}Tag header {}",
            STATUS_PREFIX,
            bytes_to_hex_string(block.as_bytes())
        ),
        ReadOutcome::Failed => format!("{}{}", STATUS_PREFIX, FAILED_MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::MockTransport;

    #[test]
    fn test_success_status() {
        let mut transport = MockTransport::with_pages(vec![0x04, 0x00, 0x0F, 0xE0]);
        let outcome = read_tag_header(&mut transport);

        assert_eq!(status_text(&outcome), "Tag discovered! Tag header 04000fe0");
        assert_eq!(transport.reads, vec![0]);
        assert_eq!(transport.closes, 1);
    }

    #[test]
    fn test_read_failure_status_and_close() {
        let mut transport = MockTransport {
            fail_read: true,
            ..Default::default()
        };
        let outcome = read_tag_header(&mut transport);

        assert_eq!(outcome, ReadOutcome::Failed);
        assert_eq!(status_text(&outcome), "Tag discovered! Failed to fetch data!");
        assert_eq!(transport.closes, 1);
    }

    #[test]
    fn test_empty_answer_still_shows_header() {
        let mut transport = MockTransport::with_pages(Vec::new());
        let outcome = read_tag_header(&mut transport);

        assert!(matches!(outcome, ReadOutcome::Header(ref b) if b.is_empty()));
        assert_eq!(status_text(&outcome), "Tag discovered! Tag header ");
        assert_eq!(transport.closes, 1);
    }

    #[test]
    fn test_connect_failure() {
        let mut transport = MockTransport {
            fail_connect: true,
            ..Default::default()
        };
        assert_eq!(read_tag_header(&mut transport), ReadOutcome::Failed);
        assert_eq!(transport.connects, 1);
        assert_eq!(transport.closes, 1);
    }

    #[test]
    fn test_close_failure_keeps_data() {
        let mut transport = MockTransport {
            pages: vec![0xAA; 16],
            fail_close: true,
            ..Default::default()
        };
        let outcome = read_tag_header(&mut transport);

        assert!(matches!(outcome, ReadOutcome::Header(ref b) if b.is_complete()));
        assert_eq!(transport.closes, 1);
    }

    #[test]
    fn test_configured_start_page() {
        let mut transport = MockTransport::with_pages(vec![0x01; 16]);
        let config = ReaderConfig { start_page: 4 };
        let outcome = read_tag_header_with(&mut transport, &config);

        assert_eq!(transport.reads, vec![4]);
        assert!(matches!(outcome, ReadOutcome::Header(ref b) if b.page() == 4));
    }
}
