// src/infrastructure/generation/fallback.rs
use crate::application::ports::{generation::ContentSynthesizer, time::Clock};
use crate::domain::generation::{GeneratedContent, TitleTemplate};
use rand::{Rng, seq::SliceRandom};
use std::sync::Arc;

/// Offline synthesizer built from fixed section templates.
///
/// Keywords and the target length are accepted for parity with the live
/// provider but do not change the document structure.
pub struct TemplateSynthesizer {
    clock: Arc<dyn Clock>,
}

impl TemplateSynthesizer {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn synthesize_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        topic: &str,
        _keywords: &[String],
        _target_word_count: u32,
    ) -> GeneratedContent {
        let template = TitleTemplate::ALL
            .choose(rng)
            .copied()
            .unwrap_or(TitleTemplate::CompleteGuide);
        let title = template.render(topic);
        let generated_on = self.clock.now().format("%B %d, %Y at %H:%M UTC");

        let body = format!(
            "# {title}\n\
             \n\
             ## Introduction\n\
             \n\
             {topic} has become an important subject for businesses and individuals alike. \
             This article walks through the fundamentals, explains why it matters, and \
             collects practical advice you can put to work today.\n\
             \n\
             ## What Is {topic}?\n\
             \n\
             At its core, {topic} is about understanding the key concepts well enough to make \
             informed decisions. Getting the basics right makes every later step easier.\n\
             \n\
             ## Why {topic} Matters\n\
             \n\
             - It improves efficiency and saves time\n\
             - It helps reduce costs over the long term\n\
             - It creates a better experience for everyone involved\n\
             - It keeps you competitive as expectations change\n\
             \n\
             ## Best Practices\n\
             \n\
             1. Start with clear goals and measure progress against them\n\
             2. Learn from trusted sources and proven approaches\n\
             3. Begin small, then iterate based on results\n\
             4. Review and refine your approach regularly\n\
             \n\
             ## Conclusion\n\
             \n\
             {topic} rewards a thoughtful, steady approach. Apply the practices above, keep \
             learning, and reach out to an expert when you need tailored guidance.\n\
             \n\
             ---\n\
             \n\
             *Generated on {generated_on}*\n"
        );

        GeneratedContent::new(title, body)
    }
}

impl ContentSynthesizer for TemplateSynthesizer {
    fn synthesize(
        &self,
        topic: &str,
        keywords: &[String],
        target_word_count: u32,
    ) -> GeneratedContent {
        self.synthesize_with(&mut rand::thread_rng(), topic, keywords, target_word_count)
    }
}
