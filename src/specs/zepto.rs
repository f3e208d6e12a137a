// src/specs/zepto.rs
//! Zepto nests product cards deeper than Blinkit, hence the extra depth.
//! Its cards also carry "x% OFF" and "MIN y" badges that would otherwise
//! win the name slot. Serves a mobile layout without a desktop user-agent.

use super::PlatformSpec;

const DESKTOP_UA: &str = "--user-agent=Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub const ZEPTO: PlatformSpec = PlatformSpec {
    name: "Zepto",
    id: "zepto",
    home_url: "https://www.zepto.com/",
    currency: "₹",
    ancestor_depths: &[2, 3, 4, 5],
    noise_words: &["ADD", "SAVE", "OFF", "MIN"],
    file_stem: "zepto",
    chrome_args: &["--disable-dev-shm-usage", DESKTOP_UA],
    manual_entry: false,
    setup_steps: &[
        "1. Set your delivery location",
        "2. Handle any login prompts (skip if possible)",
        "3. Search for ANY product you want",
        "4. Wait for products to appear on the page",
        "5. Then come back here and continue",
        "",
        "Note: Zepto might require phone number verification",
    ],
};
