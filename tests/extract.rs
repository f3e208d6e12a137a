// tests/extract.rs
//
// Extractor behavior on a synthetic page: depth ladder, dedup, cap,
// ordering, and failure absorption. No browser involved.
//
use std::collections::HashSet;

use qc_scrape::extract::extract_products;
use qc_scrape::page::{Page, PageError, PageNode};
use qc_scrape::specs::BLINKIT;

/// Synthetic DOM node. Anchors carry their resolvable ancestors by depth;
/// anything not listed is past the root.
#[derive(Clone)]
enum Node {
    Anchor(Vec<(usize, Node)>),
    Text(String),
    /// Resolves, but every read fails like a stale handle would.
    Broken,
}

impl PageNode for Node {
    fn ancestor(&self, levels: usize) -> Result<Self, PageError> {
        match self {
            Node::Anchor(ancestors) => ancestors
                .iter()
                .find(|(d, _)| *d == levels)
                .map(|(_, n)| n.clone())
                .ok_or(PageError::NotFound),
            _ => Err(PageError::NotFound),
        }
    }

    fn text(&self) -> Result<String, PageError> {
        match self {
            Node::Text(t) => Ok(t.clone()),
            Node::Broken => Err(PageError::Session("stale handle".into())),
            Node::Anchor(_) => Err(PageError::Session("anchor read".into())),
        }
    }
}

struct FakePage {
    url: String,
    anchors: Vec<Node>,
    fail_find: bool,
}

impl FakePage {
    fn with(anchors: Vec<Node>) -> Self {
        FakePage {
            url: "https://blinkit.com/s/?q=milk".into(),
            anchors,
            fail_find: false,
        }
    }
}

impl Page for FakePage {
    type Node = Node;

    fn find_text_nodes(&self, _marker: &str) -> Result<Vec<Node>, PageError> {
        if self.fail_find {
            return Err(PageError::Session("browser disconnected".into()));
        }
        Ok(self.anchors.clone())
    }

    fn current_url(&self) -> String {
        self.url.clone()
    }
}

/// Anchor whose only resolvable ancestor is `text` at `depth`.
fn card(depth: usize, text: &str) -> Node {
    Node::Anchor(vec![(depth, Node::Text(text.into()))])
}

fn product_text(n: usize) -> String {
    format!("Milk Brand {n} 500ml\n₹{}\nADD", 20 + n)
}

#[test]
fn zero_anchors_give_empty_result() {
    let page = FakePage::with(vec![]);
    let records = extract_products(&page, &BLINKIT, None, None).unwrap();
    assert!(records.is_empty());
}

#[test]
fn records_carry_platform_and_url() {
    let page = FakePage::with(vec![card(2, &product_text(1))]);
    let records = extract_products(&page, &BLINKIT, None, None).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].platform, "Blinkit");
    assert_eq!(records[0].source_url, "https://blinkit.com/s/?q=milk");
    assert_eq!(records[0].name, "Milk Brand 1 500ml");
    assert_eq!(records[0].price, "₹21");
}

#[test]
fn cap_limits_output_to_first_successes() {
    let anchors: Vec<Node> = (0..10).map(|n| card(2, &product_text(n))).collect();
    let records = extract_products(&page_of(anchors), &BLINKIT, Some(3), None).unwrap();
    assert_eq!(records.len(), 3);
    // first 3 anchors in locator order
    assert_eq!(records[0].name, "Milk Brand 0 500ml");
    assert_eq!(records[1].name, "Milk Brand 1 500ml");
    assert_eq!(records[2].name, "Milk Brand 2 500ml");
}

fn page_of(anchors: Vec<Node>) -> FakePage {
    FakePage::with(anchors)
}

#[test]
fn without_cap_every_valid_anchor_yields_a_record() {
    let anchors: Vec<Node> = (0..5).map(|n| card(3, &product_text(n))).collect();
    let records = extract_products(&page_of(anchors), &BLINKIT, None, None).unwrap();
    assert_eq!(records.len(), 5);
}

#[test]
fn identical_containers_are_deduplicated() {
    let text = product_text(7);
    let anchors = vec![card(2, &text), card(2, &text), card(2, &product_text(8))];
    let records = extract_products(&page_of(anchors), &BLINKIT, None, None).unwrap();
    assert_eq!(records.len(), 2);

    let raws: HashSet<&str> = records.iter().map(|r| r.raw_text.as_str()).collect();
    assert_eq!(raws.len(), records.len(), "raw_text must be unique");
}

#[test]
fn depth_ladder_recovers_from_missing_ancestors() {
    // Nothing at depth 2; a valid container at depth 3.
    let page = page_of(vec![card(3, &product_text(1))]);
    let records = extract_products(&page, &BLINKIT, None, None).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn tightest_accepted_depth_wins() {
    let tight = product_text(1);
    let wide = format!("{}\nBanner Noise Line", product_text(1));
    let anchor = Node::Anchor(vec![
        (2, Node::Text(tight.clone())),
        (3, Node::Text(wide)),
    ]);
    let records = extract_products(&page_of(vec![anchor]), &BLINKIT, None, None).unwrap();
    assert_eq!(records[0].raw_text, tight);
}

#[test]
fn short_container_falls_through_to_deeper_depth() {
    let anchor = Node::Anchor(vec![
        (2, Node::Text("₹21 X".into())), // under the minimum length
        (3, Node::Text(product_text(1))),
    ]);
    let records = extract_products(&page_of(vec![anchor]), &BLINKIT, None, None).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Milk Brand 1 500ml");
}

#[test]
fn nameless_containers_yield_nothing() {
    let anchor = Node::Anchor(vec![
        (2, Node::Text("₹99\nSAVE 10%\nOFF".into())),
        (3, Node::Text("₹99\nSAVE 10%\nOFF\nADD".into())),
        (4, Node::Text("₹99\nSAVE 10%\nOFF\nADD 2".into())),
    ]);
    let records = extract_products(&page_of(vec![anchor]), &BLINKIT, None, None).unwrap();
    assert!(records.is_empty());
}

#[test]
fn broken_anchor_does_not_abort_the_scan() {
    let broken = Node::Anchor(vec![(2, Node::Broken), (3, Node::Broken), (4, Node::Broken)]);
    let anchors = vec![card(2, &product_text(1)), broken, card(2, &product_text(2))];
    let records = extract_products(&page_of(anchors), &BLINKIT, None, None).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Milk Brand 1 500ml");
    assert_eq!(records[1].name, "Milk Brand 2 500ml");
}

#[test]
fn locator_failure_propagates() {
    let mut page = FakePage::with(vec![]);
    page.fail_find = true;
    let err = extract_products(&page, &BLINKIT, None, None).unwrap_err();
    assert!(matches!(err, PageError::Session(_)));
}

#[test]
fn every_record_is_well_formed() {
    let anchors = vec![
        card(2, &product_text(1)),
        Node::Anchor(vec![(2, Node::Text("₹99\nSAVE 10%".into()))]), // no name
        card(4, &product_text(2)),
    ];
    let records = extract_products(&page_of(anchors), &BLINKIT, None, None).unwrap();
    for r in &records {
        assert!(!r.name.is_empty());
        assert!(!r.price.is_empty());
        assert!(r.price.contains('₹'));
        assert!(!r.raw_text.is_empty());
    }
    assert_eq!(records.len(), 2);
}
