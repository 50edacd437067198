//! Reading order for documents within a category.
//!
//! A handful of landing pages are pinned to the front of their section so a
//! reader always starts with the overview. Everything after that is ordered by
//! title with the Unicode collation algorithm (CLDR root order), so accents
//! and case only matter once the base letters tie, and the filename settles
//! anything still equal so the order is total.

use feruca::{Collator, Locale, Tailoring};
use std::cmp::Ordering;

/// Filenames pinned to the front of their category, in this order.
const PINNED: &[&str] = &["readme.html", "showcase.html", "demo-quickstart.html"];

/// Anything with a pin rank sorts before everything without one.
fn pin_rank(filename: &str) -> usize {
    PINNED
        .iter()
        .position(|pinned| *pinned == filename)
        .unwrap_or(usize::MAX)
}

/// Collator for document titles.
///
/// Punctuation is not ignorable and lowercase sorts before uppercase, which
/// matches what browsers do for `localeCompare` without a locale.
pub fn title_collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}

/// Compare two titles the way a reader expects them to be alphabetised.
pub fn compare_titles(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b)
}

/// Compare two documents by pin rank, then title, then filename.
pub fn compare_documents(
    collator: &mut Collator,
    a_filename: &str,
    a_title: &str,
    b_filename: &str,
    b_title: &str,
) -> Ordering {
    pin_rank(a_filename)
        .cmp(&pin_rank(b_filename))
        .then_with(|| compare_titles(collator, a_title, b_title))
        .then_with(|| a_filename.cmp(b_filename))
}

/// Anything that can be placed in reading order.
pub trait Ordered {
    fn filename(&self) -> &str;
    fn title(&self) -> &str;
}

/// Sort documents into reading order in place.
///
/// The sort is stable, so inputs that compare equal keep their listing order.
pub fn sort_documents<T: Ordered>(documents: &mut [T]) {
    let mut collator = title_collator();
    documents.sort_by(|a, b| {
        compare_documents(
            &mut collator,
            a.filename(),
            a.title(),
            b.filename(),
            b.title(),
        )
    });
}
