//! Host platform detection for platform-gated commands and URL openers.

use std::fmt;

/// Operating system family the process is running on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// macOS.
    MacOs,
    /// Linux.
    Linux,
    /// FreeBSD, OpenBSD, NetBSD or DragonFly.
    Bsd,
    /// Windows (Cygwin/MSYS provide `cygstart`).
    Windows,
    /// Anything else, by `std::env::consts::OS` name.
    Other(&'static str),
}

impl Platform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Classify an `std::env::consts::OS` identifier.
    pub fn from_os(os: &'static str) -> Self {
        match os {
            "macos" => Self::MacOs,
            "linux" => Self::Linux,
            "freebsd" | "openbsd" | "netbsd" | "dragonfly" => Self::Bsd,
            "windows" => Self::Windows,
            other => Self::Other(other),
        }
    }

    /// Program that opens a URL in the desktop's default browser.
    pub const fn url_opener(self) -> Option<&'static str> {
        match self {
            Self::MacOs => Some("open"),
            Self::Linux | Self::Bsd => Some("xdg-open"),
            Self::Windows => Some("cygstart"),
            Self::Other(_) => None,
        }
    }

    /// Whether Spotlight (`mdfind`) is available.
    pub const fn has_spotlight(self) -> bool {
        matches!(self, Self::MacOs)
    }

    /// Identifier used in messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::Bsd => "bsd",
            Self::Windows => "windows",
            Self::Other(os) => os,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openers_per_platform() {
        assert_eq!(Platform::from_os("macos").url_opener(), Some("open"));
        assert_eq!(Platform::from_os("linux").url_opener(), Some("xdg-open"));
        assert_eq!(Platform::from_os("openbsd").url_opener(), Some("xdg-open"));
        assert_eq!(Platform::from_os("windows").url_opener(), Some("cygstart"));
        assert_eq!(Platform::from_os("haiku").url_opener(), None);
    }

    #[test]
    fn spotlight_only_on_macos() {
        assert!(Platform::MacOs.has_spotlight());
        assert!(!Platform::Linux.has_spotlight());
    }
}
