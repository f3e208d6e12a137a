// src/runner.rs
use std::error::Error;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::{
    browser, extract, file, manual, prompt,
    page::Page,
    params::{Params, SETTLE_DELAY_MS},
    progress::Progress,
    record::ProductRecord,
    specs::{self, PlatformSpec},
};

/// Summary of what was produced.
pub struct RunSummary {
    pub records: usize,
    pub path: Option<PathBuf>,
}

/// Top-level interactive run: launch the browser, walk the human through
/// setup, extract (or collect manually), persist, report.
pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let spec = match params.platform {
        Some(s) => s,
        None => pick_platform()?,
    };
    let manual_run = params.manual || spec.manual_entry;
    logf!("run start: platform={} manual={}", spec.id, manual_run);

    let page = browser::launch(spec)?;
    print_banner(spec);

    let mut term = prompt::line("What product did you search for? (e.g. milk, bread, eggs): ")?;
    if term.is_empty() {
        term = s!("product");
    }

    let records = if manual_run {
        manual::collect(spec, &page.current_url())?
    } else {
        prompt::pause(&format!(
            "Press Enter after you've searched for '{term}' and can see the products..."
        ))?;
        let cap = match params.max_products {
            Some(n) => Some(n),
            None => {
                println!("\nHow many {term} products do you want to extract?");
                println!("Enter a number (e.g. 20), or press Enter for ALL products on the page.");
                prompt::count_or_all("Your choice: ")?
            }
        };
        thread::sleep(Duration::from_millis(SETTLE_DELAY_MS));
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Current page: {}", page.current_url()));
        }
        extract::extract_products(&page, spec, cap, progress)?
    };

    let summary = if records.is_empty() {
        if manual_run {
            println!("\nNo products entered");
        } else {
            print_troubleshooting(spec, &term);
        }
        RunSummary { records: 0, path: None }
    } else {
        let filename = file::result_filename(spec, &term, manual_run, params.format);
        let path = file::resolve_out_path(params.out.as_deref(), &filename)?;
        file::write_records(&path, &records, params.include_headers, params.format)?;
        logf!("wrote {} records to {}", records.len(), path.display());

        print_results(spec, &records, &term, &path);
        RunSummary { records: records.len(), path: Some(path) }
    };

    prompt::pause("\nPress Enter to close the browser...")?;
    Ok(summary)
}

fn pick_platform() -> Result<&'static PlatformSpec, Box<dyn Error>> {
    println!("Platforms:");
    for spec in specs::ALL {
        println!("  {:<10} {}", spec.id, spec.name);
    }
    let v = prompt::line("Which platform? ")?;
    specs::by_id(&v).ok_or_else(|| format!("Unknown platform: {}", v).into())
}

fn print_banner(spec: &PlatformSpec) {
    let rule = "=".repeat(60);
    println!("\n{rule}");
    println!("{} MANUAL SETUP", spec.name.to_uppercase());
    println!("{rule}");
    println!("Please complete these steps manually in the browser:");
    for step in spec.setup_steps {
        println!("{step}");
    }
    println!("{rule}");
}

/// "Found nothing" is a reportable outcome, never a raw fault.
fn print_troubleshooting(spec: &PlatformSpec, term: &str) {
    println!("\nNo {term} products were found!");
    println!("Troubleshooting tips:");
    println!("- Make sure you searched for '{term}' on {}", spec.name);
    println!("- Ensure products are visible on the page");
    println!("- Check that you're not on a 'no results' page");
    println!("- Try scrolling down to load more products");
}

fn print_results(spec: &PlatformSpec, records: &[ProductRecord], term: &str, path: &std::path::Path) {
    let rule = "=".repeat(60);
    println!("\n{rule}");
    println!("{} {} PRODUCTS", spec.name.to_uppercase(), term.to_uppercase());
    println!("{rule}");
    for r in records {
        println!("{} - {}", r.name, r.price);
    }
    println!("\nSummary:");
    println!("  Total products: {}", records.len());
    println!("  Product searched: {term}");
    println!("  File saved: {}", path.display());
    println!("  Platform: {}", spec.name);
}
