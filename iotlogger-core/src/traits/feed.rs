//! Telemetry feed uploader
//!
//! Transport and authentication live entirely in the implementation; the
//! core only hands over named values.

/// Upload failures reported by the uploader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UploadError {
    /// Network link is down
    NotConnected,
    /// Remote service rejected the value
    Rejected,
}

/// Feeds published by the logger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FeedId {
    Temperature,
    Light,
}

impl FeedId {
    /// Feed key on the remote service
    pub const fn name(&self) -> &'static str {
        match self {
            FeedId::Temperature => "temperature",
            FeedId::Light => "light",
        }
    }
}

pub trait FeedUploader {
    /// Publish one value to a feed, creating the feed remotely if needed
    fn publish(&mut self, feed: FeedId, value: f32) -> Result<(), UploadError>;
}
