use std::collections::HashMap;

use sys_locale::get_locale;

const FALLBACK_LANG: &str = "en-US";

#[derive(Clone)]
pub struct I18nService {
    current_lang: String,
    translations: HashMap<String, HashMap<String, String>>,
}

impl I18nService {
    pub fn new(lang: &str) -> Self {
        let mut translations = HashMap::new();

        translations.insert(
            "de-DE".to_string(),
            parse_ftl(include_str!("../../locales/de-DE/main.ftl")),
        );
        translations.insert(
            "en-US".to_string(),
            parse_ftl(include_str!("../../locales/en-US/main.ftl")),
        );

        I18nService {
            current_lang: lang.to_string(),
            translations,
        }
    }

    /// Picks the UI language from the system locale, defaulting to English.
    pub fn detect() -> Self {
        let system_lang = get_locale().unwrap_or_else(|| FALLBACK_LANG.to_string());
        if system_lang.starts_with("de") {
            Self::new("de-DE")
        } else {
            Self::new(FALLBACK_LANG)
        }
    }

    pub fn translate(&self, key: &str) -> String {
        if let Some(val) = self
            .translations
            .get(&self.current_lang)
            .and_then(|m| m.get(key))
        {
            return val.clone();
        }

        if let Some(val) = self
            .translations
            .get(FALLBACK_LANG)
            .and_then(|m| m.get(key))
        {
            return val.clone();
        }

        key.to_string()
    }
}

fn parse_ftl(content: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ftl_skips_comments_and_blanks() {
        let map = parse_ftl("# comment\n\nbtn-search = Find Similar\n  app-title=SimWords  ");
        assert_eq!(map.len(), 2);
        assert_eq!(map["btn-search"], "Find Similar");
        assert_eq!(map["app-title"], "SimWords");
    }

    #[test]
    fn translate_falls_back_to_english_then_key() {
        let i18n = I18nService::new("de-DE");
        // Present in both locales, German wins.
        assert_ne!(i18n.translate("btn-search"), "btn-search");
        // Unknown keys come back verbatim.
        assert_eq!(i18n.translate("no-such-key"), "no-such-key");
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let i18n = I18nService::new("fr-FR");
        let en = I18nService::new("en-US");
        assert_eq!(i18n.translate("btn-search"), en.translate("btn-search"));
    }
}
