use colored::Colorize;
use std::fmt;
use std::io::{self, Write};
use std::sync::{OnceLock, RwLock};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    pub plain_mode: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn build_label(kind: MessageKind) -> (&'static str, &'static str) {
    match kind {
        MessageKind::Info => ("INFO", "[i]"),
        MessageKind::Warning => ("WARNING", "[!]"),
        MessageKind::Error => ("ERROR", "[x]"),
    }
}

/// Formats `message` with the label and, unless plain mode is on, the color of `kind`.
pub fn styled(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let (label, icon) = build_label(kind);
    let formatted = format!("{label}: {icon} {message}");

    if prefs.plain_mode {
        return formatted;
    }

    match kind {
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Info => formatted,
    }
}

/// Writes one styled line to `out`.
pub fn write(out: &mut impl Write, kind: MessageKind, message: impl fmt::Display) -> io::Result<()> {
    let prefs = current_preferences();
    writeln!(out, "{}", styled(kind, message, &prefs))
}

pub fn error(out: &mut impl Write, message: impl fmt::Display) -> io::Result<()> {
    write(out, MessageKind::Error, message)
}

pub fn warning(out: &mut impl Write, message: impl fmt::Display) -> io::Result<()> {
    write(out, MessageKind::Warning, message)
}

pub fn info(out: &mut impl Write, message: impl fmt::Display) -> io::Result<()> {
    write(out, MessageKind::Info, message)
}
