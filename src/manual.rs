// src/manual.rs
//! Manual data-entry producer.
//!
//! Some platforms (Swiggy Instamart) render product cards in ways the
//! price-anchor heuristic cannot see. For those, a human reads the live
//! page and types records in here. Same output contract as the extractor:
//! an ordered `Vec<ProductRecord>` for the persistence path.

use std::error::Error;

use crate::prompt;
use crate::record::ProductRecord;
use crate::specs::PlatformSpec;

/// One typed-in product, kept editable until the user confirms the batch.
#[derive(Debug, Clone)]
struct ManualEntry {
    name: String,
    price: String,
    size: String, // optional; empty when not given
}

impl ManualEntry {
    /// Synthesize the container text a scraped record would have had, so
    /// the CSV schema and dedup key semantics stay uniform.
    fn raw_text(&self) -> String {
        let mut raw = join!(self.name.as_str(), "\n", self.price.as_str());
        if !self.size.is_empty() {
            raw.push('\n');
            raw.push_str(&self.size);
        }
        raw
    }

    fn into_record(self, spec: &PlatformSpec, url: &str) -> ProductRecord {
        let raw_text = self.raw_text();
        ProductRecord {
            platform: s!(spec.name),
            name: self.name,
            price: self.price,
            raw_text,
            source_url: s!(url),
        }
    }
}

/// Entry loop, then a verify/edit pass. Blank name ends the loop.
pub fn collect(spec: &PlatformSpec, url: &str) -> Result<Vec<ProductRecord>, Box<dyn Error>> {
    println!("\nEnter the products you see on {}.", spec.name);
    println!("For each product, enter the name and price.");
    println!("Press Enter with an empty name when you're done.");
    println!("{}", "-".repeat(50));

    let mut entries = Vec::new();
    while let Some(entry) = read_entry(entries.len() + 1)? {
        println!("  Added: {} - {}", entry.name, entry.price);
        entries.push(entry);
    }

    let entries = verify(entries)?;
    logf!("{}: {} manual entries confirmed", spec.name, entries.len());
    Ok(entries
        .into_iter()
        .map(|e| e.into_record(spec, url))
        .collect())
}

/// One product's worth of prompts. `None` when the user is done.
fn read_entry(number: usize) -> Result<Option<ManualEntry>, Box<dyn Error>> {
    println!("\nProduct #{number}:");
    let name = prompt::line("  Product name (or press Enter to finish): ")?;
    if name.is_empty() {
        return Ok(None);
    }
    let mut price = prompt::line("  Product price (e.g. ₹67, ₹45): ")?;
    if !price.contains('₹') {
        price = prompt::line("  Please enter price with ₹ symbol: ")?;
    }
    let size = prompt::line("  Size/Quantity (optional, e.g. 1L, 500g): ")?;
    Ok(Some(ManualEntry { name, price, size }))
}

fn list(entries: &[ManualEntry]) {
    for (i, e) in entries.iter().enumerate() {
        println!("{}. {} - {}", i + 1, e.name, e.price);
        if !e.size.is_empty() {
            println!("   Size: {}", e.size);
        }
    }
}

/// Show the batch and confirm; 'n' opens the edit menu.
fn verify(entries: Vec<ManualEntry>) -> Result<Vec<ManualEntry>, Box<dyn Error>> {
    if entries.is_empty() {
        return Ok(entries);
    }
    println!("\nYou entered {} products:", entries.len());
    println!("{}", "-".repeat(50));
    list(&entries);
    println!("{}", "-".repeat(50));

    if prompt::confirm("\nAre these products correct? (y/n): ")? {
        return Ok(entries);
    }
    edit(entries)
}

/// Add/remove/edit menu until the user is done.
fn edit(mut entries: Vec<ManualEntry>) -> Result<Vec<ManualEntry>, Box<dyn Error>> {
    loop {
        println!("\nEdit products (you have {} products):", entries.len());
        println!("1. Add more products");
        println!("2. Remove a product");
        println!("3. Edit a product");
        println!("4. Done editing");

        match prompt::line("Your choice (1-4): ")?.as_str() {
            "1" => {
                while let Some(entry) = read_entry(entries.len() + 1)? {
                    println!("  Added: {}", entry.name);
                    entries.push(entry);
                }
            }
            "2" => {
                if entries.is_empty() {
                    println!("No products to remove");
                    continue;
                }
                list(&entries);
                match pick_index("Enter number to remove: ", entries.len())? {
                    Some(i) => {
                        let removed = entries.remove(i);
                        println!("Removed: {}", removed.name);
                    }
                    None => println!("Invalid number"),
                }
            }
            "3" => {
                if entries.is_empty() {
                    println!("No products to edit");
                    continue;
                }
                list(&entries);
                match pick_index("Enter number to edit: ", entries.len())? {
                    Some(i) => {
                        edit_one(&mut entries[i])?;
                        println!("Product updated");
                    }
                    None => println!("Invalid number"),
                }
            }
            "4" => break,
            _ => println!("Invalid choice"),
        }
    }
    Ok(entries)
}

/// 1-based index prompt; `None` on parse failure or out of range.
fn pick_index(msg: &str, len: usize) -> Result<Option<usize>, Box<dyn Error>> {
    let v = prompt::line(msg)?;
    match v.parse::<usize>() {
        Ok(n) if n >= 1 && n <= len => Ok(Some(n - 1)),
        _ => Ok(None),
    }
}

/// Re-prompt each field; blank keeps the current value.
fn edit_one(entry: &mut ManualEntry) -> Result<(), Box<dyn Error>> {
    println!("Editing: {}", entry.name);

    let name = prompt::line(&format!("New name (current: {}): ", entry.name))?;
    if !name.is_empty() {
        entry.name = name;
    }
    let price = prompt::line(&format!("New price (current: {}): ", entry.price))?;
    if !price.is_empty() {
        entry.price = price;
    }
    let size = prompt::line(&format!("New size (current: {}): ", entry.size))?;
    if !size.is_empty() {
        entry.size = size;
    }
    Ok(())
}
