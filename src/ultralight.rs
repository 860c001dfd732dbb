//! Mifare Ultralight family constants and the transport the host provides.

use crate::error::TagError;

/// Cascade tag byte folded into the first UID check byte.
pub const CT: u8 = 0x88;
pub const PAGE_SIZE: usize = 4;
/// A READ command always answers with four consecutive pages.
pub const PAGES_PER_READ: usize = 4;
pub const READ_SIZE: usize = PAGE_SIZE * PAGES_PER_READ;

/// The platform's Ultralight technology handle for one discovered tag.
pub trait UltralightTransport {
    fn connect(&mut self) -> Result<(), TagError>;
    /// Read four pages starting at `page`. Reads past the last page wrap to
    /// page 0 on the chip, so the answer is always `READ_SIZE` bytes.
    fn read_pages(&mut self, page: u8) -> Result<Vec<u8>, TagError>;
    fn close(&mut self) -> Result<(), TagError>;
}

impl<T: UltralightTransport + ?Sized> UltralightTransport for &mut T {
    fn connect(&mut self) -> Result<(), TagError> {
        (**self).connect()
    }

    fn read_pages(&mut self, page: u8) -> Result<Vec<u8>, TagError> {
        (**self).read_pages(page)
    }

    fn close(&mut self) -> Result<(), TagError> {
        (**self).close()
    }
}

/// One page read's worth of tag memory, as the transport returned it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawPageBlock {
    page: u8,
    data: Box<[u8]>,
}

impl RawPageBlock {
    pub fn new(page: u8, data: Vec<u8>) -> Self {
        Self { page, data: data.into_boxed_slice() }
    }

    /// First page covered by this block
    pub fn page(&self) -> u8 {
        self.page
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the block holds a full four-page answer
    pub fn is_complete(&self) -> bool {
        self.data.len() == READ_SIZE
    }

    /// Bytes of the `n`th page inside the block
    pub fn page_bytes(&self, n: usize) -> Option<&[u8]> {
        self.data.get(n * PAGE_SIZE..(n + 1) * PAGE_SIZE)
    }
}
