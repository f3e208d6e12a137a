// src/specs/blinkit.rs
//! Blinkit search results place price and name close together, so a short
//! depth ladder suffices. Promo badges are mostly "ADD" buttons and
//! "SAVE x%" tags.

use super::PlatformSpec;

pub const BLINKIT: PlatformSpec = PlatformSpec {
    name: "Blinkit",
    id: "blinkit",
    home_url: "https://blinkit.com/",
    currency: "₹",
    ancestor_depths: &[2, 3, 4],
    noise_words: &["ADD", "SAVE"],
    file_stem: "blinkit",
    chrome_args: &["--disable-dev-shm-usage"],
    manual_entry: false,
    setup_steps: &[
        "1. Set your location (any serviceable pincode works)",
        "2. Search for ANY product you want (milk, bread, eggs, ...)",
        "3. Wait for products to appear on the page",
        "4. Then come back here and continue",
    ],
};
