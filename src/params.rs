// src/params.rs
use std::path::PathBuf;

use crate::csv::Delim;
use crate::specs::PlatformSpec;

/// Pre-scan settle delay. These sites render cards lazily; the core assumes
/// a stable page, so the wait happens out here before it is invoked.
pub const SETTLE_DELAY_MS: u64 = 3000;

#[derive(Clone)]
pub struct Params {
    pub platform: Option<&'static PlatformSpec>, // picked interactively when absent
    pub max_products: Option<usize>,             // count cap; prompted when absent
    pub out: Option<PathBuf>,                    // output file or directory hint
    pub format: Delim,
    pub include_headers: bool,
    pub manual: bool,                            // force the manual-entry producer
    pub list_platforms: bool,                    // list platforms then exit
}

impl Params {
    pub fn new() -> Self {
        Self {
            platform: None,
            max_products: None,
            out: None,
            format: Delim::Csv,
            include_headers: false,
            manual: false,
            list_platforms: false,
        }
    }
}
