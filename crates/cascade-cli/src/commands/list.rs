use std::path::Path;

use anyhow::Result;

use cascade_tui::deck;

pub fn run(deck_path: Option<&Path>) -> Result<()> {
    let deck = deck::load(deck_path)?;

    println!("{} ({} pages)", deck.title, deck.pages.len());
    for (index, page) in deck.pages.iter().enumerate() {
        println!("  {:>3}  {}", index + 1, page.title);
    }

    Ok(())
}
