// tests/classify.rs
//
// Line classification rules against realistic container texts.
//
use qc_scrape::extract::classify::classify_lines;
use qc_scrape::specs::{BLINKIT, ZEPTO};

#[test]
fn name_and_price_from_typical_card() {
    let hit = classify_lines("Amul Milk 500ml\n₹27\nADD", &BLINKIT);
    assert_eq!(hit.name.as_deref(), Some("Amul Milk 500ml"));
    assert_eq!(hit.price.as_deref(), Some("₹27"));
    assert!(hit.is_product());
}

#[test]
fn promo_only_card_has_no_name() {
    // "SAVE 10%" is noise, "OFF" is too short to be a title.
    let hit = classify_lines("₹99\nSAVE 10%\nOFF", &BLINKIT);
    assert_eq!(hit.price.as_deref(), Some("₹99"));
    assert_eq!(hit.name, None);
    assert!(!hit.is_product());
}

#[test]
fn first_price_line_wins() {
    let hit = classify_lines("₹47\n₹52 MRP\nBritannia Brown Bread", &BLINKIT);
    assert_eq!(hit.price.as_deref(), Some("₹47"));
}

#[test]
fn first_name_line_wins() {
    let hit = classify_lines("Fresh Bread Loaf\nWhole Wheat Variant\n₹35", &BLINKIT);
    assert_eq!(hit.name.as_deref(), Some("Fresh Bread Loaf"));
}

#[test]
fn noise_words_are_platform_specific() {
    let text = "10% OFF Combo Pack of Eggs\n₹120";
    // Blinkit does not exclude OFF; Zepto does.
    let blinkit = classify_lines(text, &BLINKIT);
    assert_eq!(blinkit.name.as_deref(), Some("10% OFF Combo Pack of Eggs"));
    let zepto = classify_lines(text, &ZEPTO);
    assert_eq!(zepto.name, None);
}

#[test]
fn min_badge_blocked_on_zepto() {
    let hit = classify_lines("MIN 2 PACKS\nTaaza Toned Milk\n₹54", &ZEPTO);
    assert_eq!(hit.name.as_deref(), Some("Taaza Toned Milk"));
}

#[test]
fn noise_match_is_case_insensitive() {
    let hit = classify_lines("Save extra with pass\nDaily Eggs 6 pcs\n₹42", &BLINKIT);
    assert_eq!(hit.name.as_deref(), Some("Daily Eggs 6 pcs"));
}

#[test]
fn purely_numeric_line_is_not_a_name() {
    let hit = classify_lines("12345\nAmul Gold Milk\n₹66", &BLINKIT);
    assert_eq!(hit.name.as_deref(), Some("Amul Gold Milk"));
}

#[test]
fn short_lines_are_not_names() {
    // "1 L" is a quantity tag, three chars with the space.
    let hit = classify_lines("1 L\nMother Dairy Toned Milk\n₹56", &BLINKIT);
    assert_eq!(hit.name.as_deref(), Some("Mother Dairy Toned Milk"));
}

#[test]
fn blank_lines_are_skipped() {
    let hit = classify_lines("\n   \nNandini Curd 400g\n\n₹25\n", &BLINKIT);
    assert_eq!(hit.name.as_deref(), Some("Nandini Curd 400g"));
    assert_eq!(hit.price.as_deref(), Some("₹25"));
}

#[test]
fn classification_is_idempotent() {
    let text = "Amul Milk 500ml\n₹27\nADD";
    let a = classify_lines(text, &BLINKIT);
    let b = classify_lines(text, &BLINKIT);
    assert_eq!(a, b);
}

#[test]
fn price_line_never_doubles_as_name() {
    // Only line is a price; no name slot filled.
    let hit = classify_lines("₹27 for 500ml pack", &BLINKIT);
    assert_eq!(hit.price.as_deref(), Some("₹27 for 500ml pack"));
    assert_eq!(hit.name, None);
}
