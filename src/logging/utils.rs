//! Helpers shared by the console and file sinks.
use std::path::PathBuf;

/// Timestamp styles used in log files.
#[derive(Debug, Clone, Copy)]
pub(super) enum Stamp {
    /// Date and time, for the header written when a file is opened.
    Header,
    /// Time of day, prefixed to every line.
    Line,
}

impl Stamp {
    const fn format(self) -> &'static str {
        match self {
            Self::Header => "%Y-%m-%d %H:%M:%S UTC",
            Self::Line => "%H:%M:%S",
        }
    }

    /// The current UTC time in this style.
    pub(super) fn now(self) -> String {
        chrono::Utc::now().format(self.format()).to_string()
    }
}

/// Drop terminal escape sequences so the log file stays plain text.
///
/// A CSI sequence (`ESC [` ... final byte in `@`..=`~`) is removed whole;
/// any other escape removes itself and the character after it.
pub(super) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some((plain, escape)) = rest.split_once('\x1b') {
        out.push_str(plain);
        rest = match escape.strip_prefix('[') {
            Some(csi) => csi
                .find(|c: char| ('@'..='~').contains(&c))
                .and_then(|end| csi.get(end + 1..))
                .unwrap_or(""),
            None => {
                let mut chars = escape.chars();
                chars.next();
                chars.as_str()
            }
        };
    }
    out.push_str(rest);
    out
}

/// `$XDG_CACHE_HOME/gldn`, else `~/.cache/gldn`.
fn log_dir() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CACHE_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME")
                .or_else(|| std::env::var_os("USERPROFILE"))
                .map(|home| PathBuf::from(home).join(".cache"))
        })?;
    Some(base.join("gldn"))
}

/// `<log dir>/<command>.log`, creating the directory.  `None` when no
/// cache location is known or it cannot be created.
pub(super) fn log_file_path(command: &str) -> Option<PathBuf> {
    let dir = log_dir()?;
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir.join(format!("{command}.log")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn strip_ansi_keeps_summary_text() {
        assert_eq!(
            strip_ansi("\x1b[32m✓ nvim (1 symlink(s), 0 director(y/ies) created)\x1b[0m"),
            "✓ nvim (1 symlink(s), 0 director(y/ies) created)"
        );
        assert_eq!(
            strip_ansi("\x1b[1;34m==>\x1b[0m \x1b[1mLinking zsh\x1b[0m"),
            "==> Linking zsh"
        );
        assert_eq!(strip_ansi("plain"), "plain");
    }

    #[test]
    fn strip_ansi_drops_other_escapes() {
        assert_eq!(strip_ansi("\x1b[2Kdone"), "done");
        assert_eq!(strip_ansi("\x1bMdone"), "done");
        assert_eq!(strip_ansi("cut\x1b[31"), "cut");
    }

    #[test]
    fn stamps_parse_back() {
        assert!(chrono::NaiveTime::parse_from_str(&Stamp::Line.now(), "%H:%M:%S").is_ok());
        assert!(
            chrono::NaiveDateTime::parse_from_str(&Stamp::Header.now(), "%Y-%m-%d %H:%M:%S UTC")
                .is_ok()
        );
    }
}
