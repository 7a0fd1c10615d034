use serde::{Deserialize, Serialize};

/// Content language of the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Parses a persisted language code ("en", "ar", "ar-LB", ...)
    pub fn from_code(code: &str) -> Option<Self> {
        let lang = code.trim().to_ascii_lowercase();
        match lang.split(['-', '_']).next().unwrap_or("") {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    /// Value for the document `dir` attribute
    pub fn dir(&self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }

    /// Label of the toggle button, i.e. the language it switches to
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Language::En => "AR",
            Language::Ar => "EN",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("ar"), Some(Language::Ar));
        assert_eq!(Language::from_code(" AR-lb "), Some(Language::Ar));
        assert_eq!(Language::from_code("en_US"), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Language::En.toggled(), Language::Ar);
        assert_eq!(Language::Ar.toggled().dir(), "ltr");
        assert_eq!(Language::En.toggle_label(), "AR");
    }
}
