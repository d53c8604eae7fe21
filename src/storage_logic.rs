use crate::config::CONFIG_BUF_LEN;
use heapless::Vec;

/// First line of the configuration file, as handed to the parser.
pub type ConfigLine = Vec<u8, CONFIG_BUF_LEN>;

/// Extract the configuration line from the start of a file.
///
/// Reads like a C `fgets` into a `CONFIG_BUF_LEN` buffer: at most
/// `CONFIG_BUF_LEN - 1` bytes, stopping at the first newline.  NUL bytes
/// are kept for the parser to skip.  The line terminator (`\n` or
/// `\r\n`) is not part of the line.
pub fn config_line(file_head: &[u8]) -> ConfigLine {
    let mut line = ConfigLine::new();
    for &byte in file_head.iter().take(CONFIG_BUF_LEN - 1) {
        if byte == b'\n' {
            break;
        }
        // Cannot overflow: at most CONFIG_BUF_LEN - 1 bytes are taken.
        let _ = line.push(byte);
    }
    // Trailing NULs (UTF-16LE) may sit after the `\r`.
    if let Some(end) = line.iter().rposition(|&b| b != 0) {
        if line[end] == b'\r' {
            line.truncate(end);
        }
    }
    line
}
