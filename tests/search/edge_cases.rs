//! Degenerate queries and corpora.

use super::common::{make_index, sample_service};
use comicdex::{CorpusIndex, CorpusSnapshot, SearchService};

#[test]
fn test_empty_and_blank_queries() {
    let service = sample_service();
    for query in ["", " ", "\t\n", "!!!", "- - -"] {
        assert!(service.search(query).is_empty(), "query {:?}", query);
    }
}

#[test]
fn test_query_that_folds_to_nothing() {
    // CJK has no ASCII approximation, so nothing is left to compare
    assert!(sample_service().search("日本語").is_empty());
}

#[test]
fn test_empty_corpus() {
    let service = SearchService::new(CorpusIndex::load(CorpusSnapshot::new()).unwrap());
    assert!(service.search("anything").is_empty());
    assert!(service.search("1").is_empty());
}

#[test]
fn test_results_always_resolve() {
    let service = sample_service();
    for query in ["sketch", "327", "usb", "i m leaving you", "ﬁnally"] {
        for id in service.search(query) {
            assert!(service.index().get_by_id(id).is_some(), "{} from {:?}", id, query);
        }
    }
}

#[test]
fn test_records_with_empty_text() {
    let service = SearchService::new(make_index(&[(1, "", ""), (2, "Title", "")]));
    assert_eq!(service.search("title")[0], 2);
    // The blank record is still a candidate, just a zero-scored one
    assert_eq!(service.search("title"), vec![2, 1]);
}

#[test]
fn test_very_long_query() {
    let query = "bobby tables ".repeat(200);
    let results = sample_service().search(&query);
    assert!(results.len() <= 10);
}
