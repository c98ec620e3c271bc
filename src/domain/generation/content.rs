// src/domain/generation/content.rs

/// Title/body pair produced by either the provider or the fallback synthesizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedContent {
    pub title: String,
    pub body: String,
}

impl GeneratedContent {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Title from the first `# ` line, otherwise the topic verbatim. The body is kept as-is.
    pub fn from_markdown(raw: impl Into<String>, topic: &str) -> Self {
        let body = raw.into();
        let title = extract_title(&body).unwrap_or(topic).to_string();
        Self { title, body }
    }

    /// Enforces a non-blank title and at least one heading line in the body.
    pub fn normalized(self, topic: &str) -> Self {
        let title = if self.title.trim().is_empty() {
            topic.to_string()
        } else {
            self.title.trim().to_string()
        };
        let body = if self.has_heading() {
            self.body
        } else {
            format!("# {title}\n\n{}", self.body.trim_start())
        };
        Self { title, body }
    }

    pub fn has_heading(&self) -> bool {
        self.body.lines().any(is_heading_line)
    }

    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }
}

/// Text of the first top-level heading (`# Title`).
pub fn extract_title(markdown: &str) -> Option<&str> {
    markdown
        .lines()
        .filter_map(|line| line.strip_prefix("# "))
        .map(str::trim)
        .find(|title| !title.is_empty())
}

/// ATX heading of any level: one to six `#` followed by a space.
pub fn is_heading_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    let hashes = trimmed.chars().take_while(|c| *c == '#').count();
    (1..=6).contains(&hashes)
        && trimmed[hashes..]
            .chars()
            .next()
            .is_some_and(|c| c == ' ' || c == '\t')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_comes_from_first_top_level_heading() {
        let raw = "Intro line\n## Not this\n# Real Title  \n# Second";
        let content = GeneratedContent::from_markdown(raw, "topic");
        assert_eq!(content.title, "Real Title");
        assert_eq!(content.body, raw);
    }

    #[test]
    fn title_falls_back_to_topic_verbatim() {
        let content = GeneratedContent::from_markdown("## Only second level\ntext", "Edge AI");
        assert_eq!(content.title, "Edge AI");
    }

    #[test]
    fn heading_detection_requires_space() {
        assert!(is_heading_line("# Title"));
        assert!(is_heading_line("   ### Nested"));
        assert!(!is_heading_line("#hashtag"));
        assert!(!is_heading_line("####### seven"));
        assert!(!is_heading_line("plain"));
    }

    #[test]
    fn normalized_prepends_heading_when_missing() {
        let content = GeneratedContent::new("Edge AI", "\n\nJust prose.").normalized("Edge AI");
        assert_eq!(content.body, "# Edge AI\n\nJust prose.");
        assert!(content.has_heading());
    }

    #[test]
    fn normalized_replaces_blank_title_with_topic() {
        let content = GeneratedContent::new("  ", "## Section\nbody").normalized("Edge AI");
        assert_eq!(content.title, "Edge AI");
        assert_eq!(content.body, "## Section\nbody");
    }
}
