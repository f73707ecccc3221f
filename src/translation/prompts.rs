/*!
 * Prompt templates for document translation.
 *
 * Two templates are used: one for body prose, one for short frontmatter
 * fields. Both name the source and target languages by their human-readable
 * names and carry the glossary as `source -> target` lines.
 */

use super::glossary::Glossary;

/// System prompt template with language placeholders.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// The system prompt for body prose translation.
    pub const BODY_TRANSLATOR: &'static str = "You are a professional technical documentation translation assistant. Translate the following {source_language} technical documentation to {target_language} with these requirements:
1. Maintain technical term accuracy
2. Keep Markdown structure unchanged
3. Do not translate content in import statements, code blocks, links, or images
4. Translation should be natural and fluent, conforming to {target_language} expression habits
5. For technical terms, use standard {target_language} translations if available, otherwise keep the {source_language} term";

    /// The system prompt for frontmatter field translation.
    pub const FIELD_TRANSLATOR: &'static str = "You are a professional technical documentation translation assistant. Translate the following {source_language} text to {target_language} with these requirements:
1. This is frontmatter metadata, so keep it concise and clear
2. Maintain technical term accuracy
3. The result should be natural and fluent {target_language}
4. Respond with the translated text only, without explanations or notes";

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self { template: template.to_string() }
    }

    /// Create the body translator template.
    pub fn body_translator() -> Self {
        Self::new(Self::BODY_TRANSLATOR)
    }

    /// Create the frontmatter field translator template.
    pub fn field_translator() -> Self {
        Self::new(Self::FIELD_TRANSLATOR)
    }

    /// Render the template with language names and glossary terms.
    pub fn render(&self, source_language: &str, target_language: &str, glossary: &Glossary) -> String {
        let mut prompt = self
            .template
            .replace("{source_language}", source_language)
            .replace("{target_language}", target_language);

        if !glossary.is_empty() {
            prompt.push_str("\n\nPay special attention to the translation of the following proprietary terms:\n");
            prompt.push_str(&glossary.prompt_lines());
            prompt.push_str(&format!(
                "\n\nFor proprietary terms, strictly follow the glossary. If a proprietary term is not in the glossary, keep the original {} text.",
                source_language
            ));
        }

        prompt
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::body_translator()
    }
}
