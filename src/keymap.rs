//! Key symbol table - configuration names to USB HID keyboard usages.
//!
//! Names are matched ASCII case-insensitively, so `a`, `A`, `ctrl` and
//! `CTRL` all resolve.  Modifiers resolve to their keyboard-page usages
//! (0xE0-0xE7) and travel in the keycode array like any other key; the
//! report's modifier byte stays zero.
//!
//! Unknown names never fail: [`keycode_for`] degrades them to [`NO_KEY`].

/// Sentinel for "no key" in a keycode slot (HID usage 0x00, Reserved).
pub const NO_KEY: u8 = 0x00;

/// Static name → usage table (Keyboard/Keypad page 0x07).
///
/// Several names may share one usage; the first entry for a usage is its
/// canonical name for [`symbol_for`].
static KEY_TABLE: &[(&str, u8)] = &[
    // Letters
    ("a", 0x04),
    ("b", 0x05),
    ("c", 0x06),
    ("d", 0x07),
    ("e", 0x08),
    ("f", 0x09),
    ("g", 0x0A),
    ("h", 0x0B),
    ("i", 0x0C),
    ("j", 0x0D),
    ("k", 0x0E),
    ("l", 0x0F),
    ("m", 0x10),
    ("n", 0x11),
    ("o", 0x12),
    ("p", 0x13),
    ("q", 0x14),
    ("r", 0x15),
    ("s", 0x16),
    ("t", 0x17),
    ("u", 0x18),
    ("v", 0x19),
    ("w", 0x1A),
    ("x", 0x1B),
    ("y", 0x1C),
    ("z", 0x1D),
    // Number row
    ("1", 0x1E),
    ("2", 0x1F),
    ("3", 0x20),
    ("4", 0x21),
    ("5", 0x22),
    ("6", 0x23),
    ("7", 0x24),
    ("8", 0x25),
    ("9", 0x26),
    ("0", 0x27),
    // Editing / whitespace
    ("ENTER", 0x28),
    ("RETURN", 0x28),
    ("ESC", 0x29),
    ("ESCAPE", 0x29),
    ("BACKSPACE", 0x2A),
    ("TAB", 0x2B),
    ("SPACE", 0x2C),
    ("MINUS", 0x2D),
    ("EQUAL", 0x2E),
    ("LBRACKET", 0x2F),
    ("RBRACKET", 0x30),
    ("BACKSLASH", 0x31),
    ("SEMICOLON", 0x33),
    ("QUOTE", 0x34),
    ("GRAVE", 0x35),
    ("COMMA", 0x36),
    ("PERIOD", 0x37),
    ("DOT", 0x37),
    ("SLASH", 0x38),
    ("CAPSLOCK", 0x39),
    // Function keys
    ("F1", 0x3A),
    ("F2", 0x3B),
    ("F3", 0x3C),
    ("F4", 0x3D),
    ("F5", 0x3E),
    ("F6", 0x3F),
    ("F7", 0x40),
    ("F8", 0x41),
    ("F9", 0x42),
    ("F10", 0x43),
    ("F11", 0x44),
    ("F12", 0x45),
    // Navigation block
    ("PRINTSCREEN", 0x46),
    ("SCROLLLOCK", 0x47),
    ("PAUSE", 0x48),
    ("INSERT", 0x49),
    ("HOME", 0x4A),
    ("PAGEUP", 0x4B),
    ("DELETE", 0x4C),
    ("DEL", 0x4C),
    ("END", 0x4D),
    ("PAGEDOWN", 0x4E),
    ("RIGHT", 0x4F),
    ("LEFT", 0x50),
    ("DOWN", 0x51),
    ("UP", 0x52),
    ("NUMLOCK", 0x53),
    ("APPLICATION", 0x65),
    ("MENU", 0x65),
    // F13-F24
    ("F13", 0x68),
    ("F14", 0x69),
    ("F15", 0x6A),
    ("F16", 0x6B),
    ("F17", 0x6C),
    ("F18", 0x6D),
    ("F19", 0x6E),
    ("F20", 0x6F),
    ("F21", 0x70),
    ("F22", 0x71),
    ("F23", 0x72),
    ("F24", 0x73),
    // Modifiers
    ("CTRL", 0xE0),
    ("LCTRL", 0xE0),
    ("SHIFT", 0xE1),
    ("LSHIFT", 0xE1),
    ("ALT", 0xE2),
    ("LALT", 0xE2),
    ("GUI", 0xE3),
    ("WIN", 0xE3),
    ("CMD", 0xE3),
    ("LGUI", 0xE3),
    ("RCTRL", 0xE4),
    ("RSHIFT", 0xE5),
    ("RALT", 0xE6),
    ("ALTGR", 0xE6),
    ("RGUI", 0xE7),
];

/// Look up a symbol, returning `None` if the name is unknown.
pub fn lookup(symbol: &str) -> Option<u8> {
    if symbol.is_empty() {
        return None;
    }
    KEY_TABLE
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(symbol))
        .map(|&(_, code)| code)
}

/// Resolve a symbol to its keycode, falling back to [`NO_KEY`].
pub fn keycode_for(symbol: &str) -> u8 {
    lookup(symbol).unwrap_or(NO_KEY)
}

/// Canonical name of a keycode, for diagnostics.
///
/// This is not an inverse of [`keycode_for`]: aliases collapse onto one
/// name and unknown symbols all become [`NO_KEY`].
pub fn symbol_for(keycode: u8) -> Option<&'static str> {
    if keycode == NO_KEY {
        return None;
    }
    KEY_TABLE
        .iter()
        .find(|&&(_, code)| code == keycode)
        .map(|&(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits_resolve() {
        assert_eq!(lookup("a"), Some(0x04));
        assert_eq!(lookup("z"), Some(0x1D));
        assert_eq!(lookup("1"), Some(0x1E));
        assert_eq!(lookup("0"), Some(0x27));
    }

    #[test]
    fn lookup_ignores_ascii_case() {
        assert_eq!(lookup("A"), lookup("a"));
        assert_eq!(lookup("ctrl"), Some(0xE0));
        assert_eq!(lookup("Delete"), Some(0x4C));
    }

    #[test]
    fn modifiers_resolve_to_keyboard_page_usages() {
        assert_eq!(keycode_for("CTRL"), 0xE0);
        assert_eq!(keycode_for("SHIFT"), 0xE1);
        assert_eq!(keycode_for("ALT"), 0xE2);
        assert_eq!(keycode_for("RGUI"), 0xE7);
        assert_eq!(keycode_for("ALTGR"), 0xE6);
    }

    #[test]
    fn unknown_and_empty_symbols_fall_back_to_no_key() {
        assert_eq!(lookup("ZZZ"), None);
        assert_eq!(keycode_for("ZZZ"), NO_KEY);
        assert_eq!(lookup(""), None);
        assert_eq!(keycode_for(""), NO_KEY);
        assert_eq!(keycode_for("a "), NO_KEY);
    }

    #[test]
    fn reverse_lookup_uses_canonical_name() {
        assert_eq!(symbol_for(0x4C), Some("DELETE"));
        assert_eq!(symbol_for(0xE3), Some("GUI"));
        assert_eq!(symbol_for(NO_KEY), None);
        assert_eq!(symbol_for(0xFF), None);
    }

    #[test]
    fn reverse_lookup_is_not_an_inverse() {
        // "DEL" is an alias; it comes back under its canonical name.
        let code = keycode_for("DEL");
        assert_ne!(symbol_for(code), Some("DEL"));
    }

    #[test]
    fn table_has_no_reserved_usages() {
        for &(name, code) in KEY_TABLE {
            assert!(!name.is_empty());
            assert_ne!(code, NO_KEY, "{name} maps to the sentinel");
        }
    }
}
