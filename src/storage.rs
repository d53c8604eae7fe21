//! One-shot configuration load from the SD card.
//!
//! The card sits on SPI0 and carries a FAT volume; the keypad reads the
//! first line of `CONFIG_FILE_NAME` from its root directory once at boot.
//! Nothing is ever written back.

use defmt::{error, info};
use embedded_hal::delay::DelayNs;
use embedded_hal::spi::SpiDevice;
use embedded_sdmmc::{Mode, SdCard, TimeSource, Timestamp, VolumeIdx, VolumeManager};
use macropad::config::{CONFIG_BUF_LEN, CONFIG_FILE_NAME};
use macropad::error::StorageError;
use macropad::storage_logic::{config_line, ConfigLine};

/// The keypad has no RTC and never writes; every timestamp is the epoch.
struct NoClock;

impl TimeSource for NoClock {
    fn get_timestamp(&self) -> Timestamp {
        Timestamp {
            year_since_1970: 0,
            zero_indexed_month: 0,
            zero_indexed_day: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }
}

/// Read the configuration line from the card.
pub fn load_config<S, D>(spi: S, delay: D) -> Result<ConfigLine, StorageError>
where
    S: SpiDevice<u8>,
    D: DelayNs,
{
    let card = SdCard::new(spi, delay);
    let size = card.num_bytes().map_err(|e| {
        error!("SD card init failed: {:?}", defmt::Debug2Format(&e));
        StorageError::CardInit
    })?;
    info!("SD card: {} bytes", size);

    let volumes = VolumeManager::new(card, NoClock);
    let volume = volumes.open_volume(VolumeIdx(0)).map_err(|e| {
        error!("Could not mount filesystem: {:?}", defmt::Debug2Format(&e));
        StorageError::Mount
    })?;
    let root = volume.open_root_dir().map_err(|e| {
        error!("Could not open root directory: {:?}", defmt::Debug2Format(&e));
        StorageError::Mount
    })?;
    let file = root
        .open_file_in_dir(CONFIG_FILE_NAME, Mode::ReadOnly)
        .map_err(|e| {
            error!(
                "Could not open {=str}: {:?}",
                CONFIG_FILE_NAME,
                defmt::Debug2Format(&e)
            );
            StorageError::Open
        })?;

    let mut head = [0u8; CONFIG_BUF_LEN];
    let mut filled = 0;
    while filled < head.len() && !file.is_eof() {
        let n = file.read(&mut head[filled..]).map_err(|e| {
            error!("Could not read {=str}: {:?}", CONFIG_FILE_NAME, defmt::Debug2Format(&e));
            StorageError::Read
        })?;
        if n == 0 {
            break;
        }
        filled += n;
    }

    file.close().map_err(|_| StorageError::Close)?;

    let line = config_line(&head[..filled]);
    info!("Read {} config bytes from {=str}", line.len(), CONFIG_FILE_NAME);
    Ok(line)
}
