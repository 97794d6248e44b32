//! Deck discovery.
//!
//! A deck is a directory of `.md`/`.txt` files, one page per file,
//! ordered by file name. The first non-empty line of a file becomes the
//! page title (leading `#` markers stripped); the rest is the body.
//! With no path, a built-in demo deck is used.

use std::fs;
use std::path::Path;

use cascade_core::{Error, Result};
use tracing::info;

use crate::page::ContentPage;

pub struct Deck {
    pub title: String,
    pub pages: Vec<ContentPage>,
}

/// Load a deck from a directory, or the demo deck when no path is
/// given. An empty directory is an error: the navigator cannot be
/// constructed without pages.
pub fn load(path: Option<&Path>) -> Result<Deck> {
    match path {
        Some(dir) => load_dir(dir),
        None => Ok(demo_deck()),
    }
}

fn load_dir(dir: &Path) -> Result<Deck> {
    let mut files: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && matches!(
                    path.extension().and_then(|e| e.to_str()),
                    Some("md") | Some("txt")
                )
        })
        .collect();
    files.sort();

    let mut pages = Vec::with_capacity(files.len());
    for file in &files {
        let content = fs::read_to_string(file)?;
        pages.push(parse_page(file, &content));
    }

    if pages.is_empty() {
        return Err(Error::EmptyDeck);
    }

    let title = dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("deck")
        .to_string();
    info!(deck = %title, pages = pages.len(), "deck loaded");
    Ok(Deck { title, pages })
}

fn parse_page(path: &Path, content: &str) -> ContentPage {
    let mut lines = content.lines();
    let mut title = None;
    for line in lines.by_ref() {
        let trimmed = line.trim().trim_start_matches('#').trim();
        if !trimmed.is_empty() {
            title = Some(trimmed.to_string());
            break;
        }
    }
    let title = title.unwrap_or_else(|| {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string()
    });
    let body: Vec<&str> = lines.collect();
    ContentPage::new(title, body.join("\n").trim_start_matches('\n'))
}

fn demo_deck() -> Deck {
    let pages = vec![
        ContentPage::new(
            "Welcome to cascade",
            "cascade shows one page per screen and turns scroll gestures \
             into page transitions.\n\n\
             Scroll the mouse wheel, press Down/PageDown/Space, or drag \
             vertically to move to the next page. Up/PageUp go back, Home \
             and End jump to the ends, and digits jump directly.\n\n\
             Press ? for all keys, q to quit.",
        ),
        ContentPage::new(
            "Navigation dots",
            "The dot column on the right marks your position in the deck. \
             The filled dot is the current page.\n\n\
             Pressing : opens a jump prompt; type a page number and press \
             Enter. Direct jumps are always accepted, even during the \
             transition cooldown.",
        ),
        ContentPage::new(
            "Long pages scroll inside",
            long_page_body(),
        ),
        ContentPage::new(
            "Your own decks",
            "Point cascade at a directory of .md or .txt files:\n\n\
             cascade run ./my-deck\n\n\
             Files are ordered by name and become one page each. The \
             first non-empty line is the page title.",
        ),
    ];
    Deck {
        title: "demo".to_string(),
        pages,
    }
}

fn long_page_body() -> String {
    let mut body = String::from(
        "When a page's content is taller than the screen, wheel gestures \
         scroll the content first. Only at the top or bottom edge does the \
         next gesture flip the page.\n",
    );
    for i in 1..=40 {
        body.push_str(&format!(
            "\nFiller paragraph {} of 40. Keep scrolling; the page will not \
             change until this content reaches its end.",
            i
        ));
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_demo_deck_is_nonempty() {
        let deck = load(None).unwrap();
        assert!(deck.pages.len() >= 2);
    }

    #[test]
    fn test_parse_page_takes_first_line_as_title() {
        let page = parse_page(
            &PathBuf::from("01-intro.md"),
            "# Hello\n\nbody text here",
        );
        assert_eq!(page.title, "Hello");
    }

    #[test]
    fn test_parse_page_falls_back_to_file_stem() {
        let page = parse_page(&PathBuf::from("02-empty.md"), "\n\n");
        assert_eq!(page.title, "02-empty");
    }

    #[test]
    fn test_missing_dir_is_io_error() {
        let result = load(Some(Path::new("/nonexistent/deck/dir")));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
