// LLM prompt constants for backlink opportunity discovery.

/// System prompt enforcing the JSON envelope the decoder expects.
pub const DISCOVER_SYSTEM: &str = "You are a backlink outreach expert. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Discovery prompt template. Replace `{domain}`, `{niche}` and `{keywords}`.
pub const DISCOVER_PROMPT_TEMPLATE: &str = r#"Find 10 high-quality backlink opportunities for the domain "{domain}" in the "{niche}" niche, targeting these keywords: {keywords}

Return a JSON object with this EXACT schema:
{
  "opportunities": [
    {
      "domain": "example.com",
      "relevanceScore": 85,
      "authorityScore": 90,
      "contactEmail": "contact@example.com",
      "reason": "High authority blog in your niche"
    }
  ]
}

- relevanceScore and authorityScore are integers 0-100
- contactEmail may be omitted when unknown
- reason is one sentence explaining why the site is worth pitching"#;
