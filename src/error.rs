//! Unified error type for macropad.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Storage
    /// SD card / filesystem access failed.
    Storage(StorageError),

    // Registry
    /// The hardware line list is inconsistent.
    Registry(RegistryError),
}

/// Stage of the configuration load that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// The card did not answer the SPI init sequence.
    CardInit,
    /// No FAT volume could be mounted.
    Mount,
    /// The configuration file is missing or could not be opened.
    Open,
    /// Reading the configuration file failed.
    Read,
    /// Closing the file or volume failed.
    Close,
}

/// Errors raised while building the button registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// The same hardware line appears twice in the line list.
    DuplicateLine(u8),
}

// Convenience conversions

impl From<StorageError> for Error {
    fn from(e: StorageError) -> Self {
        Error::Storage(e)
    }
}

impl From<RegistryError> for Error {
    fn from(e: RegistryError) -> Self {
        Error::Registry(e)
    }
}
