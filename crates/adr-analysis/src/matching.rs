//! Fuzzy matching of document sections against the section catalog
//!
//! A synonym matches a section key when it occurs at a word boundary (a
//! trailing `*` makes it a prefix). The document title heading (the first
//! level-1 heading) stands in for the Title section and is kept out of every
//! other match, so "# Decision log for Context X" does not count as a Context
//! section. A first level-1 heading whose key is exactly another section's
//! synonym ("# Context") is an ordinary section, not a title.

use adr_catalog::sections::{SectionSpec, MANDATORY_SECTIONS, OPTIONAL_SECTIONS, TITLE};
use adr_document::{text, Document, Section};

/// Section lookups over one document
#[derive(Debug, Clone, Copy)]
pub(crate) struct SectionLookup<'d> {
    doc: &'d Document,
    title_heading: Option<&'d Section>,
}

impl<'d> SectionLookup<'d> {
    pub(crate) fn new(doc: &'d Document) -> Self {
        let title_heading = doc
            .sections()
            .find(|s| s.level == 1)
            .filter(|s| !names_other_section(&s.key));
        Self { doc, title_heading }
    }

    /// The document title heading, if it serves as the Title section
    #[inline]
    pub(crate) fn title_heading(&self) -> Option<&'d Section> {
        self.title_heading
    }

    /// Sections other than the title heading, in document order
    pub(crate) fn content_sections(&self) -> impl Iterator<Item = &'d Section> + '_ {
        let title_key = self.title_heading.map(|s| s.key.as_str());
        self.doc
            .sections()
            .filter(move |s| Some(s.key.as_str()) != title_key)
    }

    /// Content sections whose key matches any of `terms`
    pub(crate) fn find_by_terms<'t>(
        &'t self,
        terms: &'t [&'t str],
    ) -> impl Iterator<Item = &'d Section> + 't {
        self.content_sections()
            .filter(move |s| text::contains_any(&s.key, terms))
    }

    /// First section satisfying a catalog entry
    pub(crate) fn find(&self, spec: &SectionSpec) -> Option<&'d Section> {
        let found = self.find_by_terms(spec.synonyms).next();
        if spec.name == TITLE {
            found.or(self.title_heading)
        } else {
            found
        }
    }

    /// Whether a catalog entry is satisfied
    #[inline]
    pub(crate) fn has(&self, spec: &SectionSpec) -> bool {
        self.find(spec).is_some()
    }

    /// Catalog entry by name, then [`SectionLookup::find`]
    pub(crate) fn find_named(&self, name: &str) -> Option<&'d Section> {
        adr_catalog::sections::section(name).and_then(|spec| self.find(spec))
    }
}

const QUALIFIED_NAME_WORDS: usize = 2;

/// Whether `key` reads as a non-title section name: equal to a plain synonym,
/// or at most [`QUALIFIED_NAME_WORDS`] words one of which carries a prefix
/// synonym ("Problem Statement", "Positive Consequences")
fn names_other_section(key: &str) -> bool {
    let short = text::word_count(key) <= QUALIFIED_NAME_WORDS;
    MANDATORY_SECTIONS
        .iter()
        .chain(OPTIONAL_SECTIONS)
        .filter(|spec| spec.name != TITLE)
        .flat_map(|spec| spec.synonyms.iter())
        .any(|syn| match syn.strip_suffix('*') {
            Some(_) => short && text::contains_term(key, syn),
            None => key == *syn,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use adr_catalog::sections::section;

    fn doc(text: &str) -> Document {
        Document::parse(text).unwrap()
    }

    #[test]
    fn first_h1_is_the_title() {
        let d = doc("# ADR-3: Decision on Context propagation\n\n## Status\nAccepted\n");
        let lookup = SectionLookup::new(&d);
        assert!(lookup.has(section("Title").unwrap()));
        assert!(lookup.has(section("Status").unwrap()));
        assert!(!lookup.has(section("Decision").unwrap()));
        assert!(!lookup.has(section("Context").unwrap()));
    }

    #[test]
    fn h1_naming_a_section_is_not_a_title() {
        let d = doc("# Context\nWe need queues.\n# Decision\nUse SQS.\n");
        let lookup = SectionLookup::new(&d);
        assert!(lookup.title_heading().is_none());
        assert!(!lookup.has(section("Title").unwrap()));
        assert!(lookup.has(section("Context").unwrap()));
        let d = doc("# Consequences\nSlower builds.\n");
        assert!(SectionLookup::new(&d).title_heading().is_none());
    }

    #[test]
    fn explicit_title_section() {
        let d = doc("## Title\nUse queues\n## Decision Outcome\nSQS\n");
        let lookup = SectionLookup::new(&d);
        assert_eq!(lookup.find_named("Title").unwrap().key, "title");
        assert_eq!(lookup.find_named("Decision").unwrap().key, "decision outcome");
    }

    #[test]
    fn prefix_synonyms_and_word_boundaries() {
        let d = doc("# T\n## Positive Consequences\nfast\n## Options Considered\nA or B\n## Risky bits\nnone\n");
        let lookup = SectionLookup::new(&d);
        assert!(lookup.has(section("Consequences").unwrap()));
        assert!(lookup.has(section("Alternatives").unwrap()));
        assert!(lookup.has(section("Risks").unwrap()));
        let d = doc("# T\n## Contextual notes\nx\n");
        assert!(!SectionLookup::new(&d).has(section("Context").unwrap()));
    }

    #[test]
    fn qualified_section_h1_is_not_a_title() {
        let d = doc("# Problem Statement\nBuilds are slow.\n## Decision\nCache them.\n");
        let lookup = SectionLookup::new(&d);
        assert!(lookup.title_heading().is_none());
        assert!(lookup.has(section("Context").unwrap()));

        let d = doc("# Positive Consequences\nFaster builds.\n");
        let lookup = SectionLookup::new(&d);
        assert!(lookup.title_heading().is_none());
        assert!(lookup.has(section("Consequences").unwrap()));

        let d = doc("# Reduce the risk of outages\n## Status\nAccepted\n");
        assert!(SectionLookup::new(&d).title_heading().is_some());
    }
}
