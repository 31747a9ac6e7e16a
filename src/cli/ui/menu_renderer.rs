use std::io::{self, Write};

use crate::cli::registry::MenuRegistry;
use crate::cli::ui::banner::Banner;

pub const INSTRUCTIONS: &str = "select an option below to activate a tool";
pub const SEPARATOR: &str = "-----------------------------------------";
pub const PROMPT_MARKER: &str = ">> ";

/// Writes the menu screen body: banner, version, instructions and the
/// numbered entries. Clearing the screen and the prompt marker are left to the
/// caller.
pub struct MenuRenderer;

impl MenuRenderer {
    pub fn render(out: &mut impl Write, registry: &MenuRegistry) -> io::Result<()> {
        Banner::render(out)?;
        writeln!(out, "{INSTRUCTIONS}")?;
        writeln!(out, "{SEPARATOR}")?;
        for line in Self::entry_lines(registry) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// One `[<index>] <label>` line per entry in registry order.
    pub fn entry_lines(registry: &MenuRegistry) -> Vec<String> {
        registry
            .labels()
            .enumerate()
            .map(|(index, label)| format!("[{index}] {label}"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::console::Console;
    use crate::cli::registry::{LoopControl, MenuEntry};

    fn registry(labels: &[&str]) -> MenuRegistry {
        MenuRegistry::new(
            labels
                .iter()
                .map(|label| {
                    MenuEntry::from_fn(*label, |_console: &mut Console<'_>| {
                        Ok(LoopControl::Continue)
                    })
                })
                .collect(),
        )
    }

    #[test]
    fn entry_lines_are_zero_based_and_ordered() {
        let lines = MenuRenderer::entry_lines(&registry(&["xml_tool", "bat_tool", "exit"]));
        assert_eq!(lines, vec!["[0] xml_tool", "[1] bat_tool", "[2] exit"]);
    }

    #[test]
    fn render_places_entries_after_separator() {
        let mut buffer = Vec::new();
        MenuRenderer::render(&mut buffer, &registry(&["a", "b"])).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let tail: Vec<&str> = text.lines().rev().take(4).collect();
        assert_eq!(tail, vec!["[1] b", "[0] a", SEPARATOR, INSTRUCTIONS]);
        assert!(!text.contains(PROMPT_MARKER));
    }
}
