// src/application/ports/util.rs

/// Turns a title into the human-readable part of a slug (no timestamp suffix).
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
