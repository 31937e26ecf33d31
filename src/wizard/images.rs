//! Option image filenames
//!
//! The web front end shows each choice option with a photo whose filename is
//! derived from the option label. The derivation is a pure string transform:
//! lowercase, spaces to dashes, slashes and parentheses stripped, then
//! anything outside `[a-z0-9-]` dropped.

/// Derive the image slug for an option label
pub fn option_slug(option: &str) -> String {
    option
        .to_lowercase()
        .replace(' ', "-")
        .replace('/', "")
        .replace(['(', ')'], "")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Full asset path for an option's image
pub fn option_image_path(option: &str) -> String {
    format!("/images/options/{}.jpg", option_slug(option))
}
