/// Shell family used to reach the delegate version manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }

    #[must_use]
    pub fn display_name(self) -> String {
        match self {
            Platform::Windows => "Windows".to_string(),
            Platform::Posix => {
                #[cfg(target_os = "macos")]
                {
                    "macOS".to_string()
                }
                #[cfg(not(target_os = "macos"))]
                {
                    "Linux".to_string()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Platform;

    #[test]
    fn current_matches_compile_target() {
        assert_eq!(Platform::current().is_windows(), cfg!(windows));
    }

    #[test]
    fn windows_display_name_is_stable() {
        assert_eq!(Platform::Windows.display_name(), "Windows");
    }
}
