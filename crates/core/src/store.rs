use folio_protocol::Locale;
use thiserror::Error;

use crate::model::ContentTree;

const EMBEDDED_JA: &str = include_str!("../content/ja.json");
const EMBEDDED_EN: &str = include_str!("../content/en.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{locale} content: {source}")]
    Parse {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
}

/// Immutable holder of both locale variants of the display content.
#[derive(Debug, Clone)]
pub struct TranslationStore {
    ja: ContentTree,
    en: ContentTree,
}

impl TranslationStore {
    pub fn new(ja: ContentTree, en: ContentTree) -> Self {
        Self { ja, en }
    }

    /// The content compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_JA, EMBEDDED_EN)
    }

    pub fn from_json(ja: &str, en: &str) -> Result<Self, ContentError> {
        let parse = |locale: Locale, text: &str| {
            serde_json::from_str::<ContentTree>(text)
                .map_err(|source| ContentError::Parse { locale, source })
        };
        let store = Self::new(parse(Locale::Ja, ja)?, parse(Locale::En, en)?);
        tracing::debug!(
            categories = store.ja.skills.categories.len(),
            careers = store.ja.careers.items.len(),
            projects = store.ja.projects.items.len(),
            "content store loaded"
        );
        Ok(store)
    }

    pub fn get(&self, locale: Locale) -> &ContentTree {
        match locale {
            Locale::Ja => &self.ja,
            Locale::En => &self.en,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let store = TranslationStore::embedded();
        assert!(store.is_ok(), "embedded content should parse: {store:?}");
    }

    #[test]
    fn locale_trees_share_structure() {
        let Ok(store) = TranslationStore::embedded() else {
            unreachable!("embedded content parses");
        };
        let ja = store.get(Locale::Ja);
        let en = store.get(Locale::En);

        let names = |tree: &ContentTree| -> Vec<String> {
            tree.skills
                .categories
                .iter()
                .map(|c| format!("{}:{}", c.name, c.skills.len()))
                .collect()
        };
        assert_eq!(names(ja), names(en));

        let ids = |tree: &ContentTree| -> Vec<String> { tree.careers.items.keys().cloned().collect() };
        assert_eq!(ids(ja), ids(en));
        assert_eq!(ja.projects.items.len(), en.projects.items.len());
        assert_eq!(ja.social.links.len(), en.social.links.len());
        assert_ne!(ja.profile_tab.about_me, en.profile_tab.about_me);
    }

    #[test]
    fn malformed_content_names_the_locale() {
        let err = TranslationStore::from_json(EMBEDDED_JA, "{\"portfolio\": 1}");
        match err {
            Err(ContentError::Parse { locale, .. }) => assert_eq!(locale, Locale::En),
            Ok(_) => unreachable!("english tree is malformed"),
        }
    }
}
