// src/domain/generation/templates.rs

/// Title phrasings used when content is synthesized offline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleTemplate {
    CompleteGuide,
    EverythingYouNeedToKnow,
    Understanding,
    EssentialInsights,
}

impl TitleTemplate {
    pub const ALL: [TitleTemplate; 4] = [
        TitleTemplate::CompleteGuide,
        TitleTemplate::EverythingYouNeedToKnow,
        TitleTemplate::Understanding,
        TitleTemplate::EssentialInsights,
    ];

    pub fn render(&self, topic: &str) -> String {
        match self {
            Self::CompleteGuide => format!("The Complete Guide to {topic}"),
            Self::EverythingYouNeedToKnow => format!("{topic}: Everything You Need to Know"),
            Self::Understanding => format!("Understanding {topic}: A Practical Overview"),
            Self::EssentialInsights => format!("{topic}: Essential Insights and Best Practices"),
        }
    }

    /// Every title the synthesizer can produce for `topic`.
    pub fn candidates(topic: &str) -> Vec<String> {
        Self::ALL.iter().map(|template| template.render(topic)).collect()
    }
}
