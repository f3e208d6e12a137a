// src/extract/mod.rs
//! Price-anchored product extraction.
//!
//! Every element whose text carries the currency marker is an *anchor*.
//! For each anchor we climb a fixed ladder of ancestor depths looking for
//! the tightest container whose lines classify into a name and a price.
//! Accepted container texts feed a per-run dedup set so overlapping
//! anchors (price inside badge inside card) yield one record, not three.
//!
//! Per-anchor and per-depth failures are absorbed here: a stale handle or
//! a missing ancestor just moves the scan along. Only the initial anchor
//! query can abort the run, since failing *that* means the session itself
//! is gone.

pub mod classify;

use std::collections::HashSet;

use crate::page::{Page, PageError, PageNode};
use crate::progress::Progress;
use crate::record::ProductRecord;
use crate::specs::PlatformSpec;

use classify::classify_lines;

/// Containers shorter than this cannot hold a name+price pair.
pub const MIN_CONTAINER_LEN: usize = 10;

/// Scan `page` for product records in anchor order, capped at
/// `max_products` (default: one per anchor, i.e. effectively unbounded).
///
/// An empty result is a normal outcome, reported to the caller as such.
pub fn extract_products<P: Page>(
    page: &P,
    spec: &PlatformSpec,
    max_products: Option<usize>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<ProductRecord>, PageError> {
    let anchors = match page.find_text_nodes(spec.currency) {
        Ok(a) => a,
        Err(e) => {
            loge!("{}: anchor query failed: {e}", spec.name);
            return Err(e);
        }
    };
    if anchors.is_empty() {
        logf!("{}: no '{}' anchors on page", spec.name, spec.currency);
        return Ok(Vec::new());
    }
    logf!("{}: {} price anchors", spec.name, anchors.len());

    let cap = max_products.unwrap_or(anchors.len());
    if let Some(p) = progress.as_deref_mut() {
        p.begin(anchors.len());
    }

    let url = page.current_url();
    let mut seen: HashSet<String> = HashSet::new();
    let mut records: Vec<ProductRecord> = Vec::new();

    for anchor in &anchors {
        if records.len() >= cap {
            logf!("{}: stopping at cap of {cap}", spec.name);
            break;
        }
        let Some(found) = resolve_container(anchor, spec, &seen) else {
            continue;
        };
        seen.insert(found.raw_text.clone());

        let record = ProductRecord {
            platform: s!(spec.name),
            name: found.name,
            price: found.price,
            raw_text: found.raw_text,
            source_url: url.clone(),
        };
        if let Some(p) = progress.as_deref_mut() {
            p.record_found(records.len() + 1, &record);
        }
        records.push(record);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish(records.len());
    }
    logf!("{}: {} records extracted", spec.name, records.len());
    Ok(records)
}

struct ResolvedContainer {
    raw_text: String,
    name: String,
    price: String,
}

/// Walk the depth ladder for one anchor. First accepted depth wins, which
/// prefers the tightest (least noisy) container. Any failure (missing
/// ancestor, unreadable text, too short, already seen, classification miss)
/// moves on to the next depth; exhausting the ladder abandons the anchor.
fn resolve_container<N: PageNode>(
    anchor: &N,
    spec: &PlatformSpec,
    seen: &HashSet<String>,
) -> Option<ResolvedContainer> {
    for &depth in spec.ancestor_depths {
        let Ok(container) = anchor.ancestor(depth) else {
            continue;
        };
        let Ok(text) = container.text() else {
            continue;
        };
        let text = text.trim();
        if text.chars().count() < MIN_CONTAINER_LEN {
            continue;
        }
        if seen.contains(text) {
            continue;
        }
        let hit = classify_lines(text, spec);
        if let (Some(name), Some(price)) = (hit.name, hit.price) {
            return Some(ResolvedContainer { raw_text: s!(text), name, price });
        }
    }
    logd!("anchor abandoned after {} depths", spec.ancestor_depths.len());
    None
}
