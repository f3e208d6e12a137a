// src/extract/classify.rs

use crate::specs::PlatformSpec;

/// Name/price candidates pulled out of one container's lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub name: Option<String>,
    pub price: Option<String>,
}

impl Classified {
    pub fn is_product(&self) -> bool {
        self.name.is_some() && self.price.is_some()
    }
}

/// Classify the lines of a container's text, top to bottom.
///
/// The first line containing the currency marker takes the price slot; the
/// first line that looks like a title takes the name slot. Everything else
/// is noise (badges, quantity counters, "ADD" buttons). First match wins
/// per slot; there is no scoring pass.
pub fn classify_lines(text: &str, spec: &PlatformSpec) -> Classified {
    let mut name: Option<String> = None;
    let mut price: Option<String> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if line.contains(spec.currency) {
            if price.is_none() {
                price = Some(s!(line));
            }
            continue;
        }
        if name.is_none() && looks_like_name(line, spec) {
            name = Some(s!(line));
        }
    }

    Classified { name, price }
}

/// A name line is long enough to be a title, not a bare number, and free
/// of the platform's UI/promo vocabulary.
fn looks_like_name(line: &str, spec: &PlatformSpec) -> bool {
    if line.chars().count() <= 3 {
        return false;
    }
    if line.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let upper = line.to_uppercase();
    !spec.noise_words.iter().any(|w| upper.contains(w))
}
