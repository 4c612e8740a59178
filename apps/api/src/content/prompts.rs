// LLM prompt constants for the Content Relay.

/// System prompt for content analysis; enforces JSON-only output.
pub const ANALYZE_SYSTEM: &str = "You are an SEO expert analyzing content for \
    keyword density, readability, and structure. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Analysis prompt template. Replace `{keywords}` and `{content}` before sending.
pub const ANALYZE_PROMPT_TEMPLATE: &str = r#"Analyze the following content for SEO performance against the target keywords: {keywords}

Return a JSON object with this EXACT schema (no extra fields):
{
  "keywordDensity": 2.4,
  "readabilityScore": 78,
  "structureScore": 65,
  "suggestions": ["suggestion1", "suggestion2"]
}

- keywordDensity: percentage of words that are target keywords (number)
- readabilityScore: 0-100 (higher is easier to read)
- structureScore: 0-100 (heading usage, paragraph length, scannability)
- suggestions: concrete, actionable improvements

CONTENT:
{content}"#;

/// System prompt for content optimization; plain text output.
pub const OPTIMIZE_SYSTEM: &str = "You are an expert SEO content optimizer. \
    Improve the provided content for the given target keywords while keeping \
    the original tone and factual accuracy. \
    Respond with the optimized content only — no preamble, no commentary.";

/// Optimization prompt template. Replace `{keywords}` and `{content}`.
pub const OPTIMIZE_PROMPT_TEMPLATE: &str = r#"Target keywords: {keywords}

Optimize this content for SEO performance, readability and structure:

{content}"#;

/// System prompt for content generation; plain text output.
pub const GENERATE_SYSTEM: &str = "You are an expert SEO content creator. \
    Write engaging, informative, SEO-friendly content. \
    Respond with the content only — no preamble, no commentary.";

/// Generation prompt template.
/// Replace `{content_type}`, `{topic}`, `{keywords}`, `{word_count}`.
pub const GENERATE_PROMPT_TEMPLATE: &str = r#"Create a {content_type} about "{topic}".

Length: approximately {word_count} words.
Optimize naturally for these keywords: {keywords}"#;
