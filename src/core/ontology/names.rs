use std::sync::OnceLock;

use regex::Regex;

/// Prefix every book individual carries, so no title can produce the name
/// of a customer, employee, order or the inventory
pub const BOOK_PREFIX: &str = "Book";

fn non_word_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\W+").expect("valid non-word pattern"))
}

fn leading_digit() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d").expect("valid leading digit pattern"))
}

fn book_name_parts() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^Book_(\d+)_(.+)$").expect("valid book name pattern"))
}

/// Make a string usable as an individual name
///
/// Every run of characters that are not letters, digits or `_` collapses
/// to a single `_`, and a leading digit (in any script) gets a `_` prefix.
pub fn iri_safe(name: &str) -> String {
    let collapsed = non_word_runs().replace_all(name, "_");
    if leading_digit().is_match(&collapsed) {
        format!("_{}", collapsed)
    } else {
        collapsed.into_owned()
    }
}

/// Individual name of the book with roster uid `uid`
///
/// The uid comes first, so two books never share a name even when their
/// titles sanitise to the same string.
pub fn book_individual_name(uid: u64, title: &str) -> String {
    iri_safe(&format!("{}_{}_{}", BOOK_PREFIX, uid, title))
}

/// Turn an individual name back into something readable
///
/// Book names read as `<title> <uid>`; every other name just has its
/// underscores replaced with spaces.
pub fn display_name(individual: &str) -> String {
    match book_name_parts().captures(individual) {
        Some(caps) => format!("{} {}", caps[2].replace('_', " "), &caps[1]),
        None => individual.replace('_', " "),
    }
}
