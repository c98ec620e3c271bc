// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;

/// Title normalization used for article slugs.
///
/// 1. lower-case the title
/// 2. drop everything except `a-z`, `0-9`, whitespace, and `-`
/// 3. turn whitespace runs into a single `-`
/// 4. collapse `-` runs
/// 5. trim leading and trailing `-`
///
/// The timestamp suffix is added by the domain slug service.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let lowered = input.to_lowercase();

        let mut slug = String::with_capacity(lowered.len());
        let mut pending_separator = false;
        for c in lowered.chars() {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                if pending_separator {
                    if !slug.is_empty() {
                        slug.push('-');
                    }
                    pending_separator = false;
                }
                slug.push(c);
            } else if c == '-' || c.is_whitespace() {
                pending_separator = true;
            }
        }
        slug
    }
}
