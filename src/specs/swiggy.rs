// src/specs/swiggy.rs
//! Swiggy Instamart renders everything client-side behind aggressive
//! anti-scraping, so the price-anchor heuristic finds nothing useful.
//! The browser stays open for viewing while records go through the
//! manual-entry producer instead. Depths and noise words stay populated
//! so a forced automated run degrades gracefully rather than panicking.

use super::PlatformSpec;

pub const SWIGGY: PlatformSpec = PlatformSpec {
    name: "Swiggy Instamart",
    id: "swiggy",
    home_url: "https://www.swiggy.com/instamart",
    currency: "₹",
    ancestor_depths: &[2, 3, 4],
    noise_words: &["ADD", "SAVE", "OFF"],
    file_stem: "swiggy_instamart",
    chrome_args: &["--disable-dev-shm-usage"],
    manual_entry: true,
    setup_steps: &[
        "1. Set your delivery location",
        "2. Browse to the products you want to record",
        "3. Keep the page visible; you will type entries in here",
    ],
};
