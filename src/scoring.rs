//! # Scoring Module
//!
//! ## Purpose
//! Deterministic keyword-overlap scoring of documents against a free-text
//! query, and top-k selection over the knowledge store.
//!
//! ## Input/Output Specification
//! - **Input**: A document and a case-folded query
//! - **Output**: Non-negative integer score; ranked (document, score) hits
//! - **Performance**: Full linear scan, O(documents x query tokens)
//!
//! ## Scoring Rules
//! - +3 per keyword occurring as a substring of the folded query
//! - +2 per query token exactly matching a folded title token
//! - +1 per query token exactly matching a folded content token
//! - Ties keep knowledge-base insertion order (stable sort)

use crate::knowledge::KnowledgeStore;
use crate::text;
use crate::Document;
use std::collections::HashSet;

/// Score contribution for a keyword substring match
pub const KEYWORD_WEIGHT: u32 = 3;
/// Score contribution for an exact title token match
pub const TITLE_WEIGHT: u32 = 2;
/// Score contribution for an exact content token match
pub const CONTENT_WEIGHT: u32 = 1;

/// A scored document reference
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    /// The matched document
    pub document: &'a Document,
    /// Additive overlap score, always positive for returned hits
    pub score: u32,
}

/// Score a single document against a case-folded query.
///
/// Pure function of its inputs. Keywords are matched verbatim as loaded, as
/// substrings of the folded query; title and content matches are exact on
/// whitespace tokens.
pub fn score(document: &Document, folded_query: &str) -> u32 {
    let mut score = 0;

    for keyword in &document.keywords {
        if folded_query.contains(keyword.as_str()) {
            score += KEYWORD_WEIGHT;
        }
    }

    let folded_title = text::fold(&document.title);
    let title_tokens: HashSet<&str> = text::tokenize(&folded_title).collect();
    for word in text::tokenize(folded_query) {
        if title_tokens.contains(word) {
            score += TITLE_WEIGHT;
        }
    }

    let folded_content = text::fold(&document.content);
    let content_tokens: HashSet<&str> = text::tokenize(&folded_content).collect();
    for word in text::tokenize(folded_query) {
        if content_tokens.contains(word) {
            score += CONTENT_WEIGHT;
        }
    }

    score
}

/// Score every document in the store against the query and return the top
/// matches, best first.
///
/// Documents scoring zero are dropped. The sort is stable, so equal scores
/// keep insertion order. An empty query matches nothing.
pub fn search<'a>(
    store: &'a KnowledgeStore,
    query: &str,
    max_results: usize,
) -> Vec<SearchHit<'a>> {
    let folded = text::fold(query);

    let mut hits: Vec<SearchHit<'a>> = store
        .documents()
        .iter()
        .map(|document| SearchHit {
            score: score(document, &folded),
            document,
        })
        .filter(|hit| hit.score > 0)
        .collect();

    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(max_results);
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> Document {
        Document {
            id: "ipc_302".to_string(),
            title: "Section 302 IPC - Murder".to_string(),
            content: "Punishment for murder under the penal code.".to_string(),
            keywords: vec!["murder".to_string(), "section 302".to_string()],
            accuracy_score: 100,
        }
    }

    #[test]
    fn test_score_is_deterministic() {
        let doc = sample_doc();
        let folded = text::fold("What is Section 302 IPC punishment for murder?");
        assert_eq!(score(&doc, &folded), score(&doc, &folded));
    }

    #[test]
    fn test_keyword_substring_match_adds_three() {
        let doc = Document {
            id: String::new(),
            title: String::new(),
            content: String::new(),
            keywords: vec!["section 302".to_string()],
            accuracy_score: 0,
        };
        let folded = text::fold("Tell me about SECTION 302 please");
        assert_eq!(score(&doc, &folded), KEYWORD_WEIGHT);
    }

    #[test]
    fn test_keyword_matches_inside_words() {
        // Substring containment, not token-boundary matching
        let doc = Document {
            id: String::new(),
            title: String::new(),
            content: String::new(),
            keywords: vec!["fir".to_string()],
            accuracy_score: 0,
        };
        assert_eq!(score(&doc, &text::fold("my first query")), KEYWORD_WEIGHT);
    }

    #[test]
    fn test_title_and_content_token_matches() {
        let doc = sample_doc();
        // "murder" appears as keyword (+3), title token (+2), content token (+1)
        assert_eq!(
            score(&doc, &text::fold("murder")),
            KEYWORD_WEIGHT + TITLE_WEIGHT + CONTENT_WEIGHT
        );
    }

    #[test]
    fn test_repeated_query_tokens_score_repeatedly() {
        let doc = sample_doc();
        let single = score(&doc, &text::fold("murder"));
        let double = score(&doc, &text::fold("murder murder"));
        // Keyword substring check fires once; token checks fire per query token
        assert_eq!(
            double,
            single + TITLE_WEIGHT + CONTENT_WEIGHT
        );
    }

    #[test]
    fn test_empty_query_scores_zero() {
        assert_eq!(score(&sample_doc(), &text::fold("")), 0);
    }

    #[test]
    fn test_search_drops_zero_scores_and_caps_results() {
        let docs: Vec<Document> = (0..6)
            .map(|i| Document {
                id: format!("doc_{}", i),
                title: "shared title word".to_string(),
                content: String::new(),
                keywords: Vec::new(),
                accuracy_score: 0,
            })
            .collect();
        let store = KnowledgeStore::from_documents(docs);

        let hits = search(&store, "shared", 3);
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|hit| hit.score > 0));
        // Stable sort keeps insertion order among equal scores
        assert_eq!(hits[0].document.id, "doc_0");
        assert_eq!(hits[1].document.id, "doc_1");
        assert_eq!(hits[2].document.id, "doc_2");

        assert!(search(&store, "unrelated", 3).is_empty());
    }

    #[test]
    fn test_search_sorts_descending() {
        let store = KnowledgeStore::builtin();
        let hits = search(&store, "What is Section 302 IPC punishment for murder?", 3);
        assert!(!hits.is_empty());
        assert_eq!(hits[0].document.id, "ipc_302");
        for pair in hits.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_search_empty_query_matches_nothing() {
        let store = KnowledgeStore::builtin();
        assert!(search(&store, "", 3).is_empty());
    }
}
