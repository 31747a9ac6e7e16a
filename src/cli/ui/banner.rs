use std::io::{self, Write};

use crate::utils::build_info::SCREEN_VERSION;

const BANNER_LINES: [&str; 7] = [
    r" _______  _______  _______  _______    _______  _______  _______  ___      _______",
    r"|       ||       ||       ||       |  |       ||       ||       ||   |    |       |",
    r"|    ___||_     _||   _   ||_     _|  |_     _||   _   ||   _   ||   |    |  _____|",
    r"|   |___   |   |  |  | |  |  |   |      |   |  |  | |  ||  | |  ||   |    | |_____ ",
    r"|    ___|  |   |  |  |_|  |  |   |      |   |  |  |_|  ||  |_|  ||   |___ |_____  |",
    r"|   |      |   |  |       |  |   |      |   |  |       ||       ||       | _____| |",
    r"|___|      |___|  |_______|  |___|      |___|  |_______||_______||_______||_______|",
];

pub struct Banner;

impl Banner {
    pub fn render(out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", Self::text())
    }

    /// The ASCII-art title framed by blank lines, followed by the version line.
    pub fn text() -> String {
        let mut text = String::from("\n");
        for line in BANNER_LINES {
            text.push_str(line);
            text.push('\n');
        }
        text.push('\n');
        text.push_str(&Self::version_line());
        text.push_str("\n\n");
        text
    }

    pub fn version_line() -> String {
        format!("version {SCREEN_VERSION}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_ends_with_version() {
        let text = Banner::text();
        assert!(text.starts_with("\n _______"));
        assert!(text.ends_with("\nversion 0.1\n\n"));
        assert_eq!(text.lines().filter(|line| line.starts_with('|')).count(), 6);
    }
}
