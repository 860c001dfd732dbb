//! Core of the Skyss ticket viewer.
//!
//! Reads the header pages of a Mifare Ultralight ticket, shows them as a hex
//! string, and drives a small touch-rotated GL scene. The platform (NFC stack,
//! text view, GL context) is reached through traits the host implements.

pub mod activity;
pub mod angle;
pub mod error;
pub mod format;
pub mod header;
pub mod reader;
pub mod render;
pub mod session;
pub mod touch;
pub mod ultralight;

pub use activity::{ActivityHost, Disposition, Intent, StatusView, TicketActivity};
pub use angle::SharedAngle;
pub use error::TagError;
pub use format::bytes_to_hex_string;
pub use header::TagHeader;
pub use reader::{read_tag_header, read_tag_header_with, status_text, ReadOutcome, ReaderConfig};
pub use session::TagSession;
pub use touch::{MotionAction, MotionEvent, RenderRequest, TouchController, ViewSize};
pub use ultralight::{RawPageBlock, UltralightTransport};
