use binrw::BinRead;
use std::io::Cursor;

use crate::error::TagError;
use crate::ultralight::{RawPageBlock, CT, READ_SIZE};

/// Manufacturer block held in pages 0-3 of an Ultralight tag
#[derive(BinRead, Debug, Clone, PartialEq, Eq)]
pub struct TagHeader {
    #[br(count(3))]
    pub uid0: Vec<u8>, // serial bytes 0-2
    pub bcc0: u8, // CT ^ uid0
    #[br(count(4))]
    pub uid1: Vec<u8>, // serial bytes 3-6
    pub bcc1: u8, // xor of uid1
    pub internal: u8,
    #[br(count(2))]
    pub lock: Vec<u8>, // static lock bits
    #[br(count(4))]
    pub otp: Vec<u8> // one-time programmable page
}

impl TagHeader {
    pub fn parse(block: &RawPageBlock) -> Result<TagHeader, TagError> {
        if block.page() != 0 {
            return Err(TagError::Protocol(format!(
                "header must start at page 0, block starts at page {}",
                block.page()
            )));
        }
        if !block.is_complete() {
            return Err(TagError::ShortRead {
                expected: READ_SIZE,
                got: block.len(),
            });
        }

        let mut cursor = Cursor::new(block.as_bytes());
        Ok(TagHeader::read(&mut cursor)?)
    }

    /// Seven byte UID with the check bytes removed
    pub fn uid(&self) -> Vec<u8> {
        let mut uid = self.uid0.clone();
        uid.extend_from_slice(&self.uid1);
        uid
    }

    pub fn bcc_valid(&self) -> bool {
        let bcc0 = self.uid0.iter().fold(CT, |acc, b| acc ^ b);
        let bcc1 = self.uid1.iter().fold(0u8, |acc, b| acc ^ b);

        bcc0 == self.bcc0 && bcc1 == self.bcc1
    }
}
