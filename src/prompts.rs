// prompts.rs

/// Builds the fixed analysis prompt with the article text interpolated
/// verbatim. The wording is load-bearing: the section headers and inline
/// labels it requests are the same literals the renderer later matches on.
pub fn analysis_prompt(article_text: &str) -> String {
    format!(
        "Analyze the following article and provide:

1. Perspectives (1-2 paragraphs)
- Groups likely to support these ideas
- Groups likely to oppose them
- Key points of controversy


2. Context & Background (1-2 paragraphs)
- Intellectual/historical context
- Related movements or schools of thought

3. Key Ideas & Themes (2-3 paragraphs)
- Main arguments and concepts
- Core assumptions
- Unstated premises and assumptions
- Key conclusions

Here's the article:
{}

Format your response in clear sections with headers and use emojis. Be sure to ALWAYS include the Perspectives section. Be objective and analytical in your assessment.",
        article_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_interpolates_article() {
        let prompt = analysis_prompt("The quick brown fox.");
        assert!(prompt.contains("Here's the article:\nThe quick brown fox."));
        assert!(prompt.contains("Perspectives"));
        assert!(prompt.contains("Context & Background"));
        assert!(prompt.contains("Key Ideas & Themes"));
    }
}
