//! Scoped transport session to a discovered tag.
//!
//! A `TagSession` owns the transport for as long as it is open and closes it
//! exactly once, either through [`TagSession::close`] or when dropped.

use log::{debug, warn};

use crate::error::TagError;
use crate::ultralight::{RawPageBlock, UltralightTransport};

pub struct TagSession<T: UltralightTransport> {
    transport: T,
    open: bool,
}

impl<T: UltralightTransport> TagSession<T> {
    /// Connect to the tag. A failed connect still releases the handle.
    pub fn open(mut transport: T) -> Result<Self, TagError> {
        if let Err(e) = transport.connect() {
            if let Err(close_err) = transport.close() {
                warn!("Failed to release tag after connect error: {}", close_err);
            }
            return Err(e);
        }
        debug!("Tag session opened");

        Ok(Self {
            transport,
            open: true,
        })
    }

    pub fn read_pages(&mut self, page: u8) -> Result<RawPageBlock, TagError> {
        let data = self.transport.read_pages(page)?;
        debug!("Read {} bytes from page {}", data.len(), page);

        Ok(RawPageBlock::new(page, data))
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Close the session and report how the close went
    pub fn close(mut self) -> Result<(), TagError> {
        self.release()
    }

    fn release(&mut self) -> Result<(), TagError> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        debug!("Tag session closed");
        self.transport.close()
    }
}

impl<T: UltralightTransport> Drop for TagSession<T> {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            warn!("Failed to close tag session: {}", e);
        }
    }
}
