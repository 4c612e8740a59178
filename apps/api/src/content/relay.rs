//! Thin relay between raw text and the model. No local scoring fallback:
//! if the upstream call fails or the answer breaks the schema, the error
//! propagates to the API layer.

use serde::{Deserialize, Serialize};

use crate::content::prompts::{
    ANALYZE_PROMPT_TEMPLATE, ANALYZE_SYSTEM, GENERATE_PROMPT_TEMPLATE, GENERATE_SYSTEM,
    OPTIMIZE_PROMPT_TEMPLATE, OPTIMIZE_SYSTEM,
};
use crate::errors::AppError;
use crate::llm::LlmClient;

pub const DEFAULT_CONTENT_TYPE: &str = "blog_post";
pub const DEFAULT_WORD_COUNT: u32 = 800;

/// Typed shape the model must return for an analysis call.
/// Missing or mistyped fields fail the whole call, never default to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentScores {
    pub keyword_density: f64,
    pub readability_score: i32,
    pub structure_score: i32,
    pub suggestions: Vec<String>,
}

pub async fn analyze_content(
    llm: &LlmClient,
    content: &str,
    target_keywords: &[String],
) -> Result<ContentScores, AppError> {
    let prompt = ANALYZE_PROMPT_TEMPLATE
        .replace("{keywords}", &target_keywords.join(", "))
        .replace("{content}", content);

    Ok(llm.call_json(&prompt, ANALYZE_SYSTEM).await?)
}

pub async fn optimize_content(
    llm: &LlmClient,
    content: &str,
    target_keywords: &[String],
) -> Result<String, AppError> {
    let prompt = OPTIMIZE_PROMPT_TEMPLATE
        .replace("{keywords}", &target_keywords.join(", "))
        .replace("{content}", content);

    Ok(llm.call(&prompt, OPTIMIZE_SYSTEM).await?)
}

pub async fn generate_content(
    llm: &LlmClient,
    content_type: &str,
    topic: &str,
    target_keywords: &[String],
    word_count: u32,
) -> Result<String, AppError> {
    let prompt = GENERATE_PROMPT_TEMPLATE
        .replace("{content_type}", content_type)
        .replace("{topic}", topic)
        .replace("{word_count}", &word_count.to_string())
        .replace("{keywords}", &target_keywords.join(", "));

    Ok(llm.call(&prompt, GENERATE_SYSTEM).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_decode_from_expected_shape() {
        let json = r#"{
            "keywordDensity": 2.4,
            "readabilityScore": 78,
            "structureScore": 65,
            "suggestions": ["Add an H2 for each section"]
        }"#;
        let scores: ContentScores = serde_json::from_str(json).unwrap();
        assert_eq!(scores.readability_score, 78);
        assert_eq!(scores.suggestions.len(), 1);
    }

    #[test]
    fn scores_fail_closed_on_missing_field() {
        // the original silently defaulted missing fields to zero; this
        // decoder must reject the contract break instead
        let json = r#"{"keywordDensity": 2.4, "suggestions": []}"#;
        assert!(serde_json::from_str::<ContentScores>(json).is_err());
    }

    #[test]
    fn scores_fail_closed_on_mistyped_field() {
        let json = r#"{
            "keywordDensity": "high",
            "readabilityScore": 78,
            "structureScore": 65,
            "suggestions": []
        }"#;
        assert!(serde_json::from_str::<ContentScores>(json).is_err());
    }

    #[test]
    fn analyze_prompt_embeds_keywords_and_content() {
        let prompt = ANALYZE_PROMPT_TEMPLATE
            .replace("{keywords}", "rust, seo")
            .replace("{content}", "Hello world");
        assert!(prompt.contains("rust, seo"));
        assert!(prompt.contains("Hello world"));
        assert!(!prompt.contains("{keywords}"));
        assert!(!prompt.contains("{content}"));
    }
}
