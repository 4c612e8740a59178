// LLM prompt constants for the advisory endpoints. JSON-only system prompts
// share the cross-cutting fragment from llm::prompts.

pub use crate::llm::prompts::JSON_ONLY_SYSTEM;

/// On-page analysis prompt. Replace `{url}`, `{keywords}`, `{content}`.
pub const ONPAGE_PROMPT_TEMPLATE: &str = r#"Analyze on-page SEO for the URL "{url}" with target keywords: {keywords}

Return a JSON object with this EXACT schema:
{
  "titleOptimization": ["..."],
  "metaDescriptionSuggestions": ["..."],
  "headerOptimization": ["..."],
  "internalLinkingSuggestions": ["..."],
  "keywordPlacement": ["..."]
}

PAGE CONTENT:
{content}"#;

/// Competitor analysis prompt. Replace `{your_domain}`, `{competitors}`, `{niche}`.
pub const COMPETITOR_PROMPT_TEMPLATE: &str = r#"Analyze competitors {competitors} against {your_domain} in the {niche} niche. Identify content gaps and keyword opportunities.

Return a JSON object with this EXACT schema:
{
  "analyses": [
    {
      "competitor": "domain.com",
      "contentGaps": ["..."],
      "keywordOpportunities": ["..."],
      "strengthsWeaknesses": {
        "strengths": ["..."],
        "weaknesses": ["..."]
      }
    }
  ]
}"#;

/// Local-SEO task generation prompt.
/// Replace `{business_name}`, `{location}`, `{business_type}`.
pub const LOCAL_SEO_PROMPT_TEMPLATE: &str = r#"Generate 15 local SEO optimization tasks for "{business_name}" - a {business_type} business in {location}.

Return a JSON object with this EXACT schema:
{
  "tasks": [
    {
      "task": "Update Google My Business listing",
      "priority": "high",
      "description": "...",
      "estimatedImpact": "..."
    }
  ]
}

priority must be one of: "high", "medium", "low"."#;

/// Social post generation prompt. Replace `{platforms}`, `{keywords}`, `{content}`.
pub const SOCIAL_PROMPT_TEMPLATE: &str = r##"Create SEO-optimized social media posts for these platforms: {platforms}. Base them on the provided content, include relevant hashtags and optimize for keywords: {keywords}

Return a JSON object with this EXACT schema:
{
  "posts": [
    {
      "platform": "twitter",
      "content": "...",
      "hashtags": ["#seo", "#marketing"],
      "optimizedForSEO": true
    }
  ]
}

CONTENT:
{content}"##;
