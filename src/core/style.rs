//! Line decoration policy
//!
//! Every escape sequence a line can carry is decided here, once, at factory
//! construction. Streams and builders only concatenate the precomputed
//! strings, so the emitted bytes for a given configuration are deterministic.

use super::severity::Severity;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";
const YELLOW_BOLD: &str = "\x1b[33;1m";
const RED_BOLD: &str = "\x1b[31;1m";

/// Accent applied to a severity label when color is enabled.
fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Debug => DIM,
        Severity::Info => CYAN,
        Severity::Warning => YELLOW_BOLD,
        Severity::Error => RED_BOLD,
    }
}

/// The decoration policy shared by a factory and everything it mints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSheet {
    pub color: bool,
}

impl StyleSheet {
    /// Prefix shown ahead of every line, `(Name) ` shaped, dimmed when color
    /// is on. Empty names produce no prefix at all.
    pub fn app_prefix(&self, app_name: &str) -> String {
        if app_name.is_empty() {
            String::new()
        } else if self.color {
            format!("{}({}){} ", DIM, app_name, RESET)
        } else {
            format!("({}) ", app_name)
        }
    }

    /// Logger name field: left-justified to `padding` columns when positive,
    /// wrapped bold plus the caller's accent escape when color is on. The
    /// padding spaces sit inside the wrap, matching the bold run's width to
    /// the field.
    pub fn logger_name(&self, name: &str, padding: i32, accent: &str) -> String {
        let width = padding.max(0) as usize;
        if self.color {
            format!("{}{}{:<width$}{}", BOLD, accent, name, RESET, width = width)
        } else {
            format!("{:<width$}", name, width = width)
        }
    }

    /// Severity tag field: the label padded with trailing spaces to the
    /// common `width`, colorized per severity when color is on. Padding goes
    /// after the reset so only the label itself is accented.
    pub fn severity_tag(&self, severity: Severity, label: &str, width: usize) -> String {
        let pad = " ".repeat(width.saturating_sub(label.chars().count()));
        if self.color {
            format!("{}{}{}{}", severity_color(severity), label, RESET, pad)
        } else {
            format!("{}{}", label, pad)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_prefix_plain() {
        let style = StyleSheet { color: false };
        assert_eq!(style.app_prefix("App"), "(App) ");
        assert_eq!(style.app_prefix(""), "");
    }

    #[test]
    fn test_app_prefix_colored() {
        let style = StyleSheet { color: true };
        assert_eq!(style.app_prefix("App"), "\x1b[2m(App)\x1b[0m ");
        assert_eq!(style.app_prefix(""), "");
    }

    #[test]
    fn test_logger_name_padding() {
        let style = StyleSheet { color: false };
        assert_eq!(style.logger_name("Svc", 10, ""), "Svc       ");
        assert_eq!(style.logger_name("Svc", 0, ""), "Svc");
        assert_eq!(style.logger_name("Svc", -1, ""), "Svc");
        assert_eq!(style.logger_name("LongerName", 4, ""), "LongerName");
    }

    #[test]
    fn test_logger_name_colored_wraps_padded_field() {
        let style = StyleSheet { color: true };
        assert_eq!(
            style.logger_name("Svc", 6, ""),
            "\x1b[1mSvc   \x1b[0m"
        );
        assert_eq!(
            style.logger_name("Svc", 0, "\x1b[35m"),
            "\x1b[1m\x1b[35mSvc\x1b[0m"
        );
    }

    #[test]
    fn test_severity_tag_plain_pads_to_width() {
        let style = StyleSheet { color: false };
        assert_eq!(style.severity_tag(Severity::Info, "INFO", 7), "INFO   ");
        assert_eq!(
            style.severity_tag(Severity::Warning, "WARNING", 7),
            "WARNING"
        );
    }

    #[test]
    fn test_severity_tag_colored_pads_after_reset() {
        let style = StyleSheet { color: true };
        assert_eq!(
            style.severity_tag(Severity::Info, "INFO", 7),
            "\x1b[36mINFO\x1b[0m   "
        );
        assert_eq!(
            style.severity_tag(Severity::Error, "ERROR", 7),
            "\x1b[31;1mERROR\x1b[0m  "
        );
        assert_eq!(
            style.severity_tag(Severity::Debug, "DEBUG", 7),
            "\x1b[2mDEBUG\x1b[0m  "
        );
        assert_eq!(
            style.severity_tag(Severity::Warning, "WARNING", 7),
            "\x1b[33;1mWARNING\x1b[0m"
        );
    }
}
