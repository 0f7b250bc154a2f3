// Shrthnd Layout Detection
// Best-effort initial-layout suggestion from the process locale

/// Suggest an initial layout from the process locale (`LC_ALL`, then
/// `LANG`).
///
/// Only ever a suggestion for startup defaults: `None` when the locale is
/// absent or unrecognized, and the core works fine without it (falling
/// back to the hard-coded default layout).
pub fn suggest_layout_from_locale() -> Option<&'static str> {
    let locale = std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LANG"))
        .ok()?;
    suggest_for_locale(&locale)
}

/// Map a locale string like `de_DE.UTF-8` to a layout suggestion.
pub fn suggest_for_locale(locale: &str) -> Option<&'static str> {
    let lang = locale
        .split(['_', '.', '@'])
        .next()
        .unwrap_or(locale)
        .to_lowercase();
    match lang.as_str() {
        // German-speaking locales ship QWERTZ keyboards.
        "de" => Some("qwertz"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_german_locales_suggest_qwertz() {
        assert_eq!(suggest_for_locale("de_DE.UTF-8"), Some("qwertz"));
        assert_eq!(suggest_for_locale("de_AT"), Some("qwertz"));
        assert_eq!(suggest_for_locale("de"), Some("qwertz"));
    }

    #[test]
    fn test_other_locales_suggest_nothing() {
        assert_eq!(suggest_for_locale("en_US.UTF-8"), None);
        assert_eq!(suggest_for_locale("C"), None);
        assert_eq!(suggest_for_locale(""), None);
    }

    #[test]
    fn test_suggestions_name_real_layouts() {
        for locale in ["de_DE.UTF-8", "en_US.UTF-8"] {
            if let Some(name) = suggest_for_locale(locale) {
                assert!(crate::layout::get(name).is_ok());
            }
        }
    }
}
