// src/i18n/mod.rs  —  Localization store + multi-language string tables
use std::collections::{BTreeSet, HashMap};

/// Closed set of display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageCode {
    #[default]
    En,
    Si,
    Ta,
}

impl LanguageCode {
    /// Menu order
    pub const ALL: [LanguageCode; 3] = [LanguageCode::En, LanguageCode::Si, LanguageCode::Ta];

    pub fn code(self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Si => "si",
            LanguageCode::Ta => "ta",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Name of the language written in that language
    pub fn native_name(self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Si => "සිංහල",
            LanguageCode::Ta => "தமிழ்",
        }
    }
}

/// One language's key → string table
pub trait Lang: Send + Sync {
    fn lookup(&self, key: &str) -> Option<&'static str>;
    fn keys(&self) -> Vec<&'static str>;
}

/// Current-language selection plus every table, built once at startup.
pub struct Localization {
    current: LanguageCode,
    en:      En,
    si:      Si,
    ta:      Ta,
}

impl Localization {
    pub fn new(initial: LanguageCode) -> Self {
        Self { current: initial, en: En::new(), si: Si::new(), ta: Ta::new() }
    }

    pub fn current(&self) -> LanguageCode { self.current }

    pub fn set_language(&mut self, code: LanguageCode) {
        if code != self.current {
            log::info!("[i18n] language {} → {}", self.current.code(), code.code());
        }
        self.current = code;
    }

    /// Display string for `key` in the current language.
    /// A key the table does not know is echoed back unchanged.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        match self.table(self.current).lookup(key) {
            Some(s) => s,
            None => {
                log::debug!("[i18n] no '{}' string for key {:?}", self.current.code(), key);
                key
            }
        }
    }

    pub fn lang_name(&self) -> &'static str { self.current.native_name() }

    /// Keys present in at least one table but missing from `code`'s table
    pub fn missing_keys(&self, code: LanguageCode) -> Vec<&'static str> {
        let all: BTreeSet<&'static str> = LanguageCode::ALL
            .into_iter()
            .flat_map(|l| self.table(l).keys())
            .collect();
        let table = self.table(code);
        all.into_iter().filter(|k| table.lookup(k).is_none()).collect()
    }

    /// Warn once per language about table gaps
    pub fn report_gaps(&self) {
        for code in LanguageCode::ALL {
            let missing = self.missing_keys(code);
            if !missing.is_empty() {
                log::warn!("[i18n] '{}' is missing {} key(s): {:?}", code.code(), missing.len(), missing);
            }
        }
    }

    fn table(&self, code: LanguageCode) -> &dyn Lang {
        match code {
            LanguageCode::En => &self.en,
            LanguageCode::Si => &self.si,
            LanguageCode::Ta => &self.ta,
        }
    }
}

// ── Helper macro ──────────────────────────────────────────────────────────────
macro_rules! lang_map {
    ($name:ident, [ $( $k:literal => $v:literal ),* $(,)? ]) => {
        pub struct $name(HashMap<&'static str, &'static str>);
        impl $name {
            pub fn new() -> Self {
                let mut m = HashMap::new();
                $( m.insert($k, $v); )*
                Self(m)
            }
        }
        impl Lang for $name {
            fn lookup(&self, key: &str) -> Option<&'static str> {
                self.0.get(key).copied()
            }
            fn keys(&self) -> Vec<&'static str> {
                self.0.keys().copied().collect()
            }
        }
    };
}

// ── English ───────────────────────────────────────────────────────────────────
lang_map!(En, [
    "app.title"                => "SnapLog",
    "wizard.image1"            => "Add the first image",
    "wizard.image2"            => "Add the second image",
    "wizard.image3"            => "Add the third image",
    "wizard.selectFromGallery" => "Select from gallery",
    "nav.previous"             => "Previous",
    "nav.next"                 => "Next",
    "nav.finish"               => "Finish",
    "nav.edit"                 => "Edit",
    "lang.select"              => "Select language",
    "perm.denied"              => "Permission denied",
    "perm.message"             => "Allow access to your photo library to add images.",
    "notice.ok"                => "OK",
    "gallery.title"            => "Gallery",
    "gallery.empty"            => "No images found",
    "details.title"            => "Add details",
    "details.location"         => "Location",
    "details.description"      => "Description",
    "details.date"             => "Date",
    "showcase.title"           => "Showcase",
    "tag.1"                    => "Travel",
    "tag.2"                    => "Nature",
    "tag.3"                    => "Friends",
    "tag.4"                    => "Food",
    "tag.5"                    => "Memories",
]);

// ── Sinhala ───────────────────────────────────────────────────────────────────
lang_map!(Si, [
    "app.title"                => "SnapLog",
    "wizard.image1"            => "පළමු රූපය එක් කරන්න",
    "wizard.image2"            => "දෙවන රූපය එක් කරන්න",
    "wizard.image3"            => "තෙවන රූපය එක් කරන්න",
    "wizard.selectFromGallery" => "ගැලරියෙන් තෝරන්න",
    "nav.previous"             => "පෙර",
    "nav.next"                 => "ඊළඟ",
    "nav.finish"               => "අවසන්",
    "nav.edit"                 => "සංස්කරණය",
    "lang.select"              => "භාෂාව තෝරන්න",
    "perm.denied"              => "අවසරය ප්‍රතික්ෂේප විය",
    "perm.message"             => "රූප එක් කිරීමට ඡායාරූප පුස්තකාලයට ප්‍රවේශය ලබා දෙන්න.",
    "notice.ok"                => "හරි",
    "gallery.title"            => "ගැලරිය",
    "gallery.empty"            => "රූප හමු නොවීය",
    "details.title"            => "විස්තර එක් කරන්න",
    "details.location"         => "ස්ථානය",
    "details.description"      => "විස්තරය",
    "details.date"             => "දිනය",
    "showcase.title"           => "ප්‍රදර්ශනය",
    "tag.1"                    => "සංචාර",
    "tag.2"                    => "සොබාදහම",
    "tag.3"                    => "මිතුරන්",
    "tag.4"                    => "ආහාර",
    "tag.5"                    => "මතකයන්",
]);

// ── Tamil ─────────────────────────────────────────────────────────────────────
lang_map!(Ta, [
    "app.title"                => "SnapLog",
    "wizard.image1"            => "முதல் படத்தைச் சேர்க்கவும்",
    "wizard.image2"            => "இரண்டாவது படத்தைச் சேர்க்கவும்",
    "wizard.image3"            => "மூன்றாவது படத்தைச் சேர்க்கவும்",
    "wizard.selectFromGallery" => "கேலரியிலிருந்து தேர்ந்தெடுக்கவும்",
    "nav.previous"             => "முந்தைய",
    "nav.next"                 => "அடுத்து",
    "nav.finish"               => "முடி",
    "nav.edit"                 => "திருத்து",
    "lang.select"              => "மொழியைத் தேர்ந்தெடுக்கவும்",
    "perm.denied"              => "அனுமதி மறுக்கப்பட்டது",
    "perm.message"             => "படங்களைச் சேர்க்க புகைப்பட நூலகத்திற்கு அணுகலை அனுமதிக்கவும்.",
    "notice.ok"                => "சரி",
    "gallery.title"            => "கேலரி",
    "gallery.empty"            => "படங்கள் எதுவும் இல்லை",
    "details.title"            => "விவரங்களைச் சேர்க்கவும்",
    "details.location"         => "இடம்",
    "details.description"      => "விளக்கம்",
    "details.date"             => "தேதி",
    "showcase.title"           => "காட்சியகம்",
    "tag.1"                    => "பயணம்",
    "tag.2"                    => "இயற்கை",
    "tag.3"                    => "நண்பர்கள்",
    "tag.4"                    => "உணவு",
    "tag.5"                    => "நினைவுகள்",
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_key_resolves_per_language() {
        let mut l = Localization::new(LanguageCode::En);
        assert_eq!(l.t("nav.next"), "Next");
        l.set_language(LanguageCode::Si);
        assert_eq!(l.t("nav.next"), "ඊළඟ");
        l.set_language(LanguageCode::Ta);
        assert_eq!(l.t("nav.next"), "அடுத்து");
    }

    #[test]
    fn unknown_key_is_echoed_in_every_language() {
        let mut l = Localization::new(LanguageCode::En);
        for code in LanguageCode::ALL {
            l.set_language(code);
            assert_eq!(l.t("no.such.key"), "no.such.key");
        }
    }

    #[test]
    fn every_key_exists_in_all_languages() {
        let l = Localization::new(LanguageCode::En);
        for code in LanguageCode::ALL {
            assert!(l.missing_keys(code).is_empty(), "{:?} has gaps", code);
        }
    }

    #[test]
    fn gaps_are_reported_per_language() {
        let mut si = Si::new();
        si.0.remove("tag.5");
        si.0.remove("nav.edit");
        let l = Localization { current: LanguageCode::Si, en: En::new(), si, ta: Ta::new() };

        assert_eq!(l.missing_keys(LanguageCode::Si), vec!["nav.edit", "tag.5"]);
        assert!(l.missing_keys(LanguageCode::En).is_empty());
        assert!(l.missing_keys(LanguageCode::Ta).is_empty());
        // a gap falls through to the key itself
        assert_eq!(l.t("tag.5"), "tag.5");
        l.report_gaps();
    }

    #[test]
    fn shared_keys_resolve_to_their_own_table() {
        let mut l = Localization::new(LanguageCode::En);
        let keys = l.en.keys();
        for code in LanguageCode::ALL {
            l.set_language(code);
            for key in &keys {
                assert_eq!(Some(l.t(key)), l.table(code).lookup(key));
            }
        }
    }

    #[test]
    fn language_codes_parse() {
        assert_eq!(LanguageCode::from_code("si"), Some(LanguageCode::Si));
        assert_eq!(LanguageCode::from_code(" TA "), Some(LanguageCode::Ta));
        assert_eq!(LanguageCode::from_code("de"), None);
        assert_eq!(LanguageCode::default(), LanguageCode::En);
    }

    #[test]
    fn lang_name_follows_selection() {
        let mut l = Localization::new(LanguageCode::En);
        assert_eq!(l.lang_name(), "English");
        l.set_language(LanguageCode::Ta);
        assert_eq!(l.lang_name(), "தமிழ்");
        assert_eq!(l.current(), LanguageCode::Ta);
    }
}
