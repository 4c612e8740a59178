//! Opportunity discovery is entirely delegated to the model; this module
//! decodes the answer and maps opportunities into pending backlink rows.

use serde::{Deserialize, Serialize};

use crate::backlinks::prompts::{DISCOVER_PROMPT_TEMPLATE, DISCOVER_SYSTEM};
use crate::errors::AppError;
use crate::llm::LlmClient;
use crate::models::site::{BacklinkStatus, NewBacklink};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklinkOpportunity {
    pub domain: String,
    pub relevance_score: i32,
    pub authority_score: i32,
    #[serde(default)]
    pub contact_email: Option<String>,
    pub reason: String,
}

#[derive(Debug, Deserialize)]
struct OpportunityEnvelope {
    opportunities: Vec<BacklinkOpportunity>,
}

pub async fn discover_opportunities(
    llm: &LlmClient,
    domain: &str,
    target_keywords: &[String],
    niche: &str,
) -> Result<Vec<BacklinkOpportunity>, AppError> {
    let prompt = DISCOVER_PROMPT_TEMPLATE
        .replace("{domain}", domain)
        .replace("{niche}", niche)
        .replace("{keywords}", &target_keywords.join(", "));

    let envelope: OpportunityEnvelope = llm.call_json(&prompt, DISCOVER_SYSTEM).await?;
    Ok(envelope.opportunities)
}

/// Maps a discovered opportunity to a pending backlink row. Anchor texts
/// cycle through the target keywords by index so the mapping stays
/// deterministic.
pub fn opportunity_to_backlink(
    website_id: i32,
    target_domain: &str,
    target_keywords: &[String],
    index: usize,
    opportunity: &BacklinkOpportunity,
) -> NewBacklink {
    let anchor_text = if target_keywords.is_empty() {
        None
    } else {
        Some(target_keywords[index % target_keywords.len()].clone())
    };

    NewBacklink {
        website_id,
        source_url: format!("https://{}", opportunity.domain),
        target_url: format!("https://{target_domain}"),
        anchor_text,
        domain_authority: Some(opportunity.authority_score),
        status: BacklinkStatus::Pending,
        is_nofollow: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opportunity(domain: &str) -> BacklinkOpportunity {
        BacklinkOpportunity {
            domain: domain.to_string(),
            relevance_score: 80,
            authority_score: 72,
            contact_email: None,
            reason: "Relevant industry blog".to_string(),
        }
    }

    #[test]
    fn envelope_decodes_with_optional_email() {
        let json = r#"{
            "opportunities": [
                {"domain": "a.com", "relevanceScore": 85, "authorityScore": 90, "reason": "r"},
                {"domain": "b.com", "relevanceScore": 60, "authorityScore": 40,
                 "contactEmail": "x@b.com", "reason": "r"}
            ]
        }"#;
        let envelope: OpportunityEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.opportunities.len(), 2);
        assert!(envelope.opportunities[0].contact_email.is_none());
        assert_eq!(
            envelope.opportunities[1].contact_email.as_deref(),
            Some("x@b.com")
        );
    }

    #[test]
    fn mapping_produces_pending_rows() {
        let keywords = vec!["rust seo".to_string(), "crate audit".to_string()];
        let link = opportunity_to_backlink(7, "ex.com", &keywords, 0, &opportunity("blog.org"));
        assert_eq!(link.website_id, 7);
        assert_eq!(link.source_url, "https://blog.org");
        assert_eq!(link.target_url, "https://ex.com");
        assert_eq!(link.status, BacklinkStatus::Pending);
        assert_eq!(link.domain_authority, Some(72));
        assert!(!link.is_nofollow);
    }

    #[test]
    fn anchor_text_cycles_through_keywords() {
        let keywords = vec!["one".to_string(), "two".to_string()];
        let anchors: Vec<Option<String>> = (0..4)
            .map(|i| {
                opportunity_to_backlink(1, "ex.com", &keywords, i, &opportunity("s.com"))
                    .anchor_text
            })
            .collect();
        assert_eq!(
            anchors,
            vec![
                Some("one".to_string()),
                Some("two".to_string()),
                Some("one".to_string()),
                Some("two".to_string())
            ]
        );
    }

    #[test]
    fn no_keywords_means_no_anchor_text() {
        let link = opportunity_to_backlink(1, "ex.com", &[], 0, &opportunity("s.com"));
        assert!(link.anchor_text.is_none());
    }
}
