// src/infrastructure/generation/mod.rs
mod fallback;
mod openai;

pub use fallback::TemplateSynthesizer;
pub use openai::{OpenAiContentProvider, OpenAiSettings, build_prompt};
