//! Clipboard writes through the OSC 52 terminal escape, which works over
//! SSH and needs no platform clipboard library.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io::{self, Write};

/// The escape sequence that asks the terminal to put `text` on the clipboard.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

pub fn copy(text: &str) -> io::Result<()> {
    let mut out = io::stdout();
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_wraps_base64_payload() {
        assert_eq!(
            osc52_sequence("SELECT 1;"),
            "\x1b]52;c;U0VMRUNUIDE7\x07"
        );
    }
}
