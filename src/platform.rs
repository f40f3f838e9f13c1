use std::env;

/// Runtime terminal capabilities relevant to drawing.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Platform {
    unicode: bool,
}

impl Platform {
    /// Detects capabilities from the current process environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_env(|key| env::var(key).ok())
    }

    /// Detects capabilities from an arbitrary variable lookup.
    #[must_use]
    pub fn from_env<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let term = lookup("TERM").unwrap_or_default();
        if matches!(term.as_str(), "linux" | "dumb" | "vt100") {
            return Self { unicode: false };
        }

        let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
            .into_iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.is_empty());

        let unicode = match locale {
            Some(locale) => {
                let locale = locale.to_ascii_lowercase();
                locale.contains("utf-8") || locale.contains("utf8")
            }
            None => cfg!(windows),
        };

        Self { unicode }
    }

    /// Capabilities with Unicode drawing disabled.
    #[must_use]
    pub fn ascii() -> Self {
        Self { unicode: false }
    }

    /// Returns true when block and arrow glyphs render reliably.
    #[must_use]
    pub fn supports_unicode(self) -> bool {
        self.unicode
    }
}

#[cfg(test)]
mod tests {
    use super::Platform;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_owned())
        }
    }

    #[test]
    fn utf8_locale_enables_unicode() {
        let platform = Platform::from_env(lookup(&[
            ("TERM", "xterm-256color"),
            ("LANG", "en_US.UTF-8"),
        ]));

        assert!(platform.supports_unicode());
    }

    #[test]
    fn lc_all_overrides_lang() {
        let platform = Platform::from_env(lookup(&[("LC_ALL", "C"), ("LANG", "en_US.utf8")]));

        assert!(!platform.supports_unicode());
    }

    #[test]
    fn linux_console_falls_back_to_ascii() {
        let platform = Platform::from_env(lookup(&[("TERM", "linux"), ("LANG", "C.UTF-8")]));

        assert!(!platform.supports_unicode());
        assert!(!Platform::ascii().supports_unicode());
    }

    #[test]
    fn detection_runs_without_panicking() {
        let _ = Platform::detect();
    }
}
