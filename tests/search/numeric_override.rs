//! A query that is just a comic number pins that comic to the top.

use super::common::{make_index, sample_service};
use comicdex::{normalize, rank, SearchService};

#[test]
fn test_known_id_is_first_and_unique() {
    let service = sample_service();
    for (query, id) in [("327", 327), ("  353  ", 353), ("1", 1), ("+927", 927), ("2347\n", 2347)] {
        let results = service.search(query);
        assert_eq!(results[0], id, "query {:?}", query);
        assert_eq!(
            results.iter().filter(|&&r| r == id).count(),
            1,
            "query {:?} returned {} more than once: {:?}",
            query,
            id,
            results
        );
    }
}

#[test]
fn test_placeholder_id_is_pinned() {
    let hits = sample_service().search_hits("404");
    assert_eq!(hits[0].id, 404);
    assert!(hits[0].pinned);
}

#[test]
fn test_unknown_id_leaves_ranking_alone() {
    let service = sample_service();
    for query in ["9999", "0", "-327", "99999999999999999999"] {
        let plain = rank(&normalize(query), service.index().entries(), service.limit());
        assert_eq!(service.search(query), plain, "query {:?}", query);
    }
}

#[test]
fn test_already_first_is_unchanged() {
    // "42" is both the number and the best fuzzy match
    let service = SearchService::new(make_index(&[(7, "Seven", ""), (42, "42", "")]));
    let plain = rank("42", service.index().entries(), service.limit());
    assert_eq!(plain[0], 42);
    assert_eq!(service.search("42"), plain);
}

#[test]
fn test_pinned_id_pushes_past_limit() {
    let service = sample_service().with_limit(3);
    let results = service.search("1053");
    assert_eq!(results[0], 1053);
    assert!(results.len() <= 4);
    assert!(results[1..].iter().all(|&id| id != 1053));
}

#[test]
fn test_pin_survives_zero_limit() {
    let service = sample_service().with_limit(0);
    assert_eq!(service.search("327"), vec![327]);
    assert!(service.search("exploits").is_empty());
}

#[test]
fn test_number_inside_text_is_not_an_override() {
    let hits = sample_service().search_hits("xkcd 327");
    assert!(hits.iter().all(|hit| !hit.pinned));
}
