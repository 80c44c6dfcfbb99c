//! Tab navigation.

use crate::types::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    SearchAz,
    SearchEn,
    SearchRu,
    Organizations,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::SearchAz => "Search AZ",
            View::SearchEn => "Search EN",
            View::SearchRu => "Search RU",
            View::Organizations => "Organizations",
        }
    }

    pub fn all() -> &'static [View] {
        &[
            View::SearchAz,
            View::SearchEn,
            View::SearchRu,
            View::Organizations,
        ]
    }

    /// Language of a search tab; `None` for the organization tab.
    pub fn language(&self) -> Option<Language> {
        match self {
            View::SearchAz => Some(Language::Az),
            View::SearchEn => Some(Language::En),
            View::SearchRu => Some(Language::Ru),
            View::Organizations => None,
        }
    }

    pub fn index(&self) -> usize {
        Self::all()
            .iter()
            .position(|v| v == self)
            .unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<View> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> View {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> View {
        let idx = self.index();
        let all = Self::all();
        let prev = if idx == 0 { all.len() - 1 } else { idx - 1 };
        all[prev]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_wraps_both_ways() {
        assert_eq!(View::Organizations.next(), View::SearchAz);
        assert_eq!(View::SearchAz.previous(), View::Organizations);
        assert_eq!(View::SearchEn.next(), View::SearchRu);
    }

    #[test]
    fn search_tabs_map_to_languages() {
        assert_eq!(View::SearchAz.language(), Some(Language::Az));
        assert_eq!(View::SearchRu.language(), Some(Language::Ru));
        assert_eq!(View::Organizations.language(), None);
        assert_eq!(View::from_index(4), None);
    }
}
