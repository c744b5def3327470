//! Fuzzy ranking over the sample corpus.
//!
//! A query that appears verbatim in a comic's title or alt text gets the full
//! partial score for that comic, which no other comic can match.

use super::common::{make_index, sample_index, sample_service, SAMPLE};
use comicdex::{normalize, rank, rank_scored};

// ============================================================================
// EXACT AND NEAR-EXACT QUERIES
// ============================================================================

#[test]
fn test_exact_title_ranks_first() {
    let service = sample_service();
    assert_eq!(service.search("Exploits of a Mom")[0], 327);
    assert_eq!(service.search("python")[0], 353);
    assert_eq!(service.search("Standards")[0], 927);
}

#[test]
fn test_every_title_is_found() {
    let service = sample_service();
    for &(id, title, _) in SAMPLE {
        let results = service.search(title);
        assert!(
            results.contains(&id),
            "query {:?} should find comic {}, got {:?}",
            title,
            id,
            results
        );
    }
}

#[test]
fn test_query_ignores_case_and_accents() {
    let service = sample_service();
    assert_eq!(service.search("ÉXPLOITS OF A MOM")[0], 327);
    assert_eq!(service.search("Pythön")[0], 353);
}

#[test]
fn test_alt_text_phrase_finds_comic() {
    let service = sample_service();
    assert_eq!(service.search("yellowstone supervolcano")[0], 1053);
}

// ============================================================================
// ORDERING
// ============================================================================

#[test]
fn test_ranking_is_deterministic() {
    let service = sample_service();
    for query in ["sketch", "i m", "help", "the"] {
        assert_eq!(service.search(query), service.search(query));
    }
}

#[test]
fn test_scores_descend() {
    let index = sample_index();
    for query in ["sketch", "python perl", "mini usb charging"] {
        let scored = rank_scored(&normalize(query), index.entries(), 10);
        assert!(
            scored.windows(2).all(|pair| pair[0].1 >= pair[1].1),
            "scores for {:?} not descending: {:?}",
            query,
            scored
        );
    }
}

#[test]
fn test_equal_scores_keep_insertion_order() {
    let index = make_index(&[
        (30, "Duplicate", "same"),
        (10, "Duplicate", "same"),
        (20, "Duplicate", "same"),
        (5, "Something else entirely", "unrelated"),
    ]);
    let ranked = rank("duplicate same", index.entries(), 3);
    assert_eq!(ranked, vec![30, 10, 20]);
}

#[test]
fn test_limit_bounds_results() {
    let index = sample_index();
    for limit in [0, 1, 5, 10, 50] {
        let ranked = rank("the", index.entries(), limit);
        assert_eq!(ranked.len(), limit.min(index.len()));
    }
}
