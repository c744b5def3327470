// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning result ids into something a chat transport can show.
//!
//! Each hit becomes an inline article: a title, the alt text as description,
//! a permalink, and a small HTML message with the number linked and the
//! title and alt text escaped:
//!
//! ```text
//! <a href="https://xkcd.com/327/">327</a>: <b>Exploits of a Mom</b>
//!
//! <i>Her daughter is named Help I&#x27;m trapped in a driver&#x27;s license factory.</i>
//! ```

use serde::Serialize;

use crate::index::CorpusIndex;
use crate::types::{ComicId, ComicRecord};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InlineArticle {
    /// The comic number as a string, unique within one result list.
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    pub message_html: String,
}

/// `{base}/{num}/`, tolerating a trailing slash on `base`.
pub fn permalink(base: &str, num: ComicId) -> String {
    format!("{}/{}/", base.trim_end_matches('/'), num)
}

fn escape(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}

pub fn render_article(record: &ComicRecord, permalink_base: &str) -> InlineArticle {
    let url = permalink(permalink_base, record.num);
    let title = record.display_title();
    let message_html = format!(
        "<a href=\"{}\">{}</a>: <b>{}</b>\n\n<i>{}</i>",
        url,
        record.num,
        escape(title),
        escape(&record.alt)
    );

    InlineArticle {
        id: record.num.to_string(),
        title: title.to_string(),
        url,
        description: record.alt.clone(),
        thumb_url: record.img.clone(),
        message_html,
    }
}

/// Articles for `ids` in order. Ids the index cannot resolve are skipped.
pub fn render_results(index: &CorpusIndex, ids: &[ComicId], permalink_base: &str) -> Vec<InlineArticle> {
    ids.iter()
        .filter_map(|&id| match index.get_by_id(id) {
            Some(record) => Some(render_article(record, permalink_base)),
            None => {
                tracing::debug!(id, "skipping unresolvable result");
                None
            }
        })
        .collect()
}
