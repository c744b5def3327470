//! Ranking and search-service invariants over random corpora.

use std::collections::HashMap;

use comicdex::testing::make_index;
use comicdex::{normalize, rank, rank_scored, ComicId, SearchService};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{1,8}").unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..8).prop_map(|words| words.join(" "))
}

/// Records with distinct ids, in random order.
fn corpus_strategy() -> impl Strategy<Value = Vec<(ComicId, String, String)>> {
    prop::collection::btree_set(1u32..5000, 1..30)
        .prop_flat_map(|ids| {
            let n = ids.len();
            (
                Just(ids.into_iter().collect::<Vec<_>>()).prop_shuffle(),
                prop::collection::vec((text_strategy(), text_strategy()), n),
            )
        })
        .prop_map(|(ids, texts)| {
            ids.into_iter()
                .zip(texts)
                .map(|(id, (title, alt))| (id, title, alt))
                .collect()
        })
}

fn as_refs(corpus: &[(ComicId, String, String)]) -> Vec<(ComicId, &str, &str)> {
    corpus
        .iter()
        .map(|(id, title, alt)| (*id, title.as_str(), alt.as_str()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_rank_respects_limit(corpus in corpus_strategy(), query in text_strategy(), limit in 0usize..15) {
        let index = make_index(&as_refs(&corpus));
        let ranked = rank(&normalize(&query), index.entries(), limit);
        prop_assert!(ranked.len() <= limit);
        prop_assert!(ranked.iter().all(|id| index.contains(*id)));
    }

    #[test]
    fn prop_ties_keep_corpus_order(corpus in corpus_strategy(), query in text_strategy()) {
        let index = make_index(&as_refs(&corpus));
        let position: HashMap<ComicId, usize> =
            corpus.iter().enumerate().map(|(pos, (id, _, _))| (*id, pos)).collect();

        let scored = rank_scored(&normalize(&query), index.entries(), corpus.len());
        for pair in scored.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
            if pair[0].1 == pair[1].1 {
                prop_assert!(position[&pair[0].0] < position[&pair[1].0]);
            }
        }
    }

    #[test]
    fn prop_search_is_deterministic(corpus in corpus_strategy(), query in text_strategy()) {
        let service = SearchService::new(make_index(&as_refs(&corpus)));
        prop_assert_eq!(service.search(&query), service.search(&query));
    }

    #[test]
    fn prop_numeric_hit_is_first_exactly_once(corpus in corpus_strategy(), pick in any::<prop::sample::Index>()) {
        let service = SearchService::new(make_index(&as_refs(&corpus)));
        let id = corpus[pick.index(corpus.len())].0;
        let results = service.search(&id.to_string());

        prop_assert_eq!(results[0], id);
        prop_assert_eq!(results.iter().filter(|&&r| r == id).count(), 1);
        prop_assert!(results.len() <= service.limit() + 1);
    }

    #[test]
    fn prop_numeric_miss_is_plain_rank(corpus in corpus_strategy(), missing in 5000u32..10000) {
        let service = SearchService::new(make_index(&as_refs(&corpus)));
        let query = missing.to_string();
        let plain = rank(&normalize(&query), service.index().entries(), service.limit());
        prop_assert_eq!(service.search(&query), plain);
    }
}
