//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use comicdex::testing::make_snapshot;
use comicdex::{ComicId, CorpusIndex, CorpusSnapshot, SearchService};

// Re-export canonical test utilities from comicdex::testing
pub use comicdex::testing::{make_index, make_record, ScriptedSource};

// ============================================================================
// SAMPLE CORPUS
// ============================================================================

/// A handful of real comics, in crawl order.
pub const SAMPLE: &[(ComicId, &str, &str)] = &[
    (1, "Barrel - Part 1", "Don't we all."),
    (
        2,
        "Petit Trees (sketch)",
        "'Petit' being a reference to Le Petit Prince, which I only thought about halfway through the sketch",
    ),
    (3, "Island (sketch)", "Hello, island"),
    (149, "Sandwich", "Proper User Policy apparently means Simon Says."),
    (
        303,
        "Compiling",
        "'Are you stealing those LCDs?' 'Yeah, but I'm doing it while my code compiles.'",
    ),
    (
        327,
        "Exploits of a Mom",
        "Her daughter is named Help I'm trapped in a driver's license factory.",
    ),
    (
        353,
        "Python",
        "I wrote 20 short programs in Python yesterday.  It was wonderful.  Perl, I'm leaving you.",
    ),
    (404, "404", ""),
    (
        927,
        "Standards",
        "Fortunately, the charging one has been solved now that we've all standardized on mini-USB. Or is it micro-USB? Shit.",
    ),
    (
        1053,
        "Ten Thousand",
        "Saying 'what kind of an idiot doesn't know about the Yellowstone supervolcano' is so much more boring than telling someone about the Yellowstone supervolcano for the first time.",
    ),
    (
        2347,
        "Dependency",
        "Someday ImageMagick will finally break for good and we'll have a long period of scrambling as we try to reassemble civilization from the rubble.",
    ),
];

pub fn sample_snapshot() -> CorpusSnapshot {
    make_snapshot(SAMPLE)
}

pub fn sample_index() -> CorpusIndex {
    make_index(SAMPLE)
}

pub fn sample_service() -> SearchService {
    SearchService::new(sample_index())
}

// ============================================================================
// FILES
// ============================================================================

/// Write `json` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, json).expect("test file should be writable");
    path
}

// ============================================================================
// REMOTE PAYLOADS
// ============================================================================

/// A remote metadata document, with the extra fields the real source sends.
pub fn comic_json(num: ComicId, title: &str, alt: &str) -> String {
    serde_json::json!({
        "month": "1",
        "num": num,
        "link": "",
        "year": "2006",
        "news": "",
        "safe_title": title,
        "transcript": "",
        "alt": alt,
        "img": format!("https://imgs.xkcd.com/comics/comic_{}.png", num),
        "title": title,
        "day": "1"
    })
    .to_string()
}
