// src/specs/mod.rs
//! # Platform specs
//!
//! One module per quick-commerce platform, each encoding *what makes that
//! site different* so the rest of the pipeline stays generic:
//!
//! - The home URL and the manual-setup banner shown before a scan (location,
//!   login quirks, search; all human-driven).
//! - The ancestor-depth ladder the container resolver climbs. These sites
//!   ship framework-generated markup with unpredictable nesting, so the
//!   ladder is tuned per platform rather than derived from selectors.
//! - The noise-word set the line classifier rejects when picking a name
//!   line (UI actions and promo badges differ per site).
//! - Chrome launch flags (Zepto needs a desktop user-agent override).
//! - The output file stem used when deriving result filenames.
//!
//! Specs are plain consts. They carry no behavior; `extract` and `runner`
//! decide when and how to use them.

mod blinkit;
mod swiggy;
mod zepto;

pub use blinkit::BLINKIT;
pub use swiggy::SWIGGY;
pub use zepto::ZEPTO;

/// Everything the pipeline needs to know about one platform.
pub struct PlatformSpec {
    /// Display name, also the `Platform` CSV column value.
    pub name: &'static str,
    /// CLI identifier (`--platform <id>`).
    pub id: &'static str,
    pub home_url: &'static str,
    /// Currency marker anchoring the scan.
    pub currency: &'static str,
    /// Ancestor depths tried in order; first accepted depth wins.
    pub ancestor_depths: &'static [usize],
    /// Uppercase substrings that disqualify a line as a product name.
    pub noise_words: &'static [&'static str],
    /// Filename stem for result files.
    pub file_stem: &'static str,
    /// Extra Chrome launch flags.
    pub chrome_args: &'static [&'static str],
    /// True when the site defeats the heuristic and records are typed in.
    pub manual_entry: bool,
    /// Lines of the manual-setup banner.
    pub setup_steps: &'static [&'static str],
}

pub const ALL: [&PlatformSpec; 3] = [&BLINKIT, &ZEPTO, &SWIGGY];

pub fn by_id(id: &str) -> Option<&'static PlatformSpec> {
    ALL.into_iter().find(|s| s.id.eq_ignore_ascii_case(id))
}
