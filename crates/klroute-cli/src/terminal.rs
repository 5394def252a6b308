//! Terminal styling and color detection.
//!
//! Colors are only used for decorations (warnings, markers, totals); route
//! bodies stay plain so they can be piped and diffed.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for landmark names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements.
    pub const GRAY: &str = "\x1b[90m";
    /// Green for distances.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow for warnings.
    pub const YELLOW: &str = "\x1b[33m";
    /// Red for unreachable landmarks.
    pub const RED: &str = "\x1b[31m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            red: colors::RED,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            green: "",
            yellow: "",
            red: "",
        }
    }

    /// `colored()` when the terminal supports ANSI colors, `plain()` otherwise.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects `NO_COLOR` (https://no-color.org/) and `TERM=dumb`.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::env;
    use std::sync::Mutex;

    /// Environment variables are process-global, so tests modifying them must not run in parallel.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn with_env_vars<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let saved: Vec<_> = vars.iter().map(|(k, _)| (*k, env::var_os(k))).collect();
        for (key, value) in vars {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }

        let result = f();

        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
        result
    }

    #[test]
    fn colored_palette_has_codes() {
        let p = ColorPalette::colored();
        assert!(!p.reset.is_empty());
        assert!(!p.red.is_empty());
    }

    #[test]
    fn plain_palette_is_empty() {
        let p = ColorPalette::plain();
        assert!(p.reset.is_empty());
        assert!(p.yellow.is_empty());
    }

    #[test]
    fn no_color_disables_color() {
        with_env_vars(&[("NO_COLOR", Some("1")), ("TERM", None)], || {
            assert!(!supports_color());
        });
    }

    #[test]
    fn dumb_terminal_disables_color() {
        with_env_vars(&[("NO_COLOR", None), ("TERM", Some("dumb"))], || {
            assert!(!supports_color());
        });
    }

    #[test]
    fn color_is_on_by_default() {
        with_env_vars(&[("NO_COLOR", None), ("TERM", Some("xterm-256color"))], || {
            assert!(supports_color());
        });
    }
}
