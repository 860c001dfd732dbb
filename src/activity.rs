//! Entry point for platform notifications.
//!
//! Only tag discovery is handled. Any other notification is logged and the
//! screen is finished without touching the tag or the status line.

use log::error;

use crate::reader::{read_tag_header_with, status_text, ReaderConfig};
use crate::ultralight::UltralightTransport;

/// Notification delivered by the platform
#[derive(Debug)]
pub enum Intent<T> {
    /// A tag was discovered; carries its Ultralight handle
    TagDiscovered(T),
    /// Anything else, described for the log
    Other(String),
}

/// Visible single-line text display
pub trait StatusView {
    fn set_text(&mut self, text: &str);
}

pub trait ActivityHost: StatusView {
    /// End the current screen
    fn finish(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    Shown,
    Finished,
}

#[derive(Clone, Debug, Default)]
pub struct TicketActivity {
    config: ReaderConfig,
}

impl TicketActivity {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    pub fn resolve_intent<T, H>(&self, intent: Intent<T>, host: &mut H) -> Disposition
    where
        T: UltralightTransport,
        H: ActivityHost + ?Sized,
    {
        match intent {
            Intent::TagDiscovered(tag) => {
                let outcome = read_tag_header_with(tag, &self.config);
                host.set_text(&status_text(&outcome));
                Disposition::Shown
            }
            Intent::Other(description) => {
                error!("Unknown intent {}", description);
                host.finish();
                Disposition::Finished
            }
        }
    }
}
