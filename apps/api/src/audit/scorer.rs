//! Audit scorer: a pure function from an extracted `PageSnapshot` to scores
//! and categorized issues. The rules are load-bearing for dashboard
//! compatibility; change them only together with the client.

use serde::{Deserialize, Serialize};

use crate::audit::fetcher::PageSnapshot;

/// Fixed placeholder until real mobile emulation exists.
pub const MOBILE_SCORE_PLACEHOLDER: i32 = 85;

/// Load time above which the page gets a performance issue.
const SLOW_PAGE_THRESHOLD_MS: u64 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Meta,
    Structure,
    Accessibility,
    Performance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditIssue {
    #[serde(rename = "type")]
    pub category: IssueCategory,
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditOutcome {
    pub page_speed: i32,
    pub mobile_score: i32,
    pub broken_links: i32,
    pub missing_alt_tags: i32,
    pub missing_meta_tags: i32,
    pub duplicate_content: i32,
    pub issues: Vec<AuditIssue>,
}

/// Scores one page load.
///
/// `broken_links` and `duplicate_content` are not computed from real checks
/// yet; the schema fields are kept at 0 so the client contract holds.
pub fn score(snapshot: &PageSnapshot) -> AuditOutcome {
    let page_speed = (100 - snapshot.load_time_ms as i64 / 100).clamp(0, 100) as i32;

    let missing_alt_tags = snapshot.images.iter().filter(|i| !i.has_alt).count() as i32;

    let title_missing = snapshot.title.trim().is_empty();
    let description_missing = snapshot.meta_description.trim().is_empty();
    let missing_meta_tags = i32::from(title_missing) + i32::from(description_missing);

    let page_url = Some(snapshot.url.clone());
    let mut issues = Vec::new();

    if title_missing {
        issues.push(AuditIssue {
            category: IssueCategory::Meta,
            severity: Severity::High,
            message: "Missing page title".to_string(),
            url: page_url.clone(),
        });
    }

    if description_missing {
        issues.push(AuditIssue {
            category: IssueCategory::Meta,
            severity: Severity::Medium,
            message: "Missing meta description".to_string(),
            url: page_url.clone(),
        });
    }

    let h1_count = snapshot.h1_count();
    if h1_count == 0 {
        issues.push(AuditIssue {
            category: IssueCategory::Structure,
            severity: Severity::High,
            message: "Missing H1 heading".to_string(),
            url: page_url.clone(),
        });
    } else if h1_count > 1 {
        issues.push(AuditIssue {
            category: IssueCategory::Structure,
            severity: Severity::Medium,
            message: "Multiple H1 headings found".to_string(),
            url: page_url.clone(),
        });
    }

    if missing_alt_tags > 0 {
        issues.push(AuditIssue {
            category: IssueCategory::Accessibility,
            severity: Severity::Medium,
            message: format!("{missing_alt_tags} images missing alt text"),
            url: page_url.clone(),
        });
    }

    if snapshot.load_time_ms > SLOW_PAGE_THRESHOLD_MS {
        issues.push(AuditIssue {
            category: IssueCategory::Performance,
            severity: Severity::High,
            message: "Page load time exceeds 3 seconds".to_string(),
            url: page_url,
        });
    }

    AuditOutcome {
        page_speed,
        mobile_score: MOBILE_SCORE_PLACEHOLDER,
        broken_links: 0,
        missing_alt_tags,
        missing_meta_tags,
        duplicate_content: 0,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::fetcher::{PageHeading, PageImage};

    fn snapshot() -> PageSnapshot {
        PageSnapshot {
            url: "https://ex.com/".to_string(),
            title: "Example".to_string(),
            meta_description: "A description".to_string(),
            content: String::new(),
            images: vec![],
            links: vec![],
            headings: vec![PageHeading {
                level: 1,
                text: "Hello".to_string(),
            }],
            load_time_ms: 500,
        }
    }

    fn image(has_alt: bool) -> PageImage {
        PageImage {
            src: "/img.png".to_string(),
            alt: if has_alt { "alt".to_string() } else { String::new() },
            has_alt,
        }
    }

    fn has_issue(outcome: &AuditOutcome, category: IssueCategory, message: &str) -> bool {
        outcome
            .issues
            .iter()
            .any(|i| i.category == category && i.message == message)
    }

    #[test]
    fn clean_page_has_no_issues() {
        let outcome = score(&snapshot());
        assert!(outcome.issues.is_empty());
        assert_eq!(outcome.page_speed, 95);
        assert_eq!(outcome.mobile_score, MOBILE_SCORE_PLACEHOLDER);
        assert_eq!(outcome.broken_links, 0);
        assert_eq!(outcome.duplicate_content, 0);
    }

    #[test]
    fn page_speed_is_clamped_to_zero() {
        let mut snap = snapshot();
        snap.load_time_ms = 15_000;
        assert_eq!(score(&snap).page_speed, 0);
    }

    #[test]
    fn page_speed_is_clamped_to_hundred() {
        let mut snap = snapshot();
        snap.load_time_ms = 0;
        assert_eq!(score(&snap).page_speed, 100);
    }

    #[test]
    fn missing_alt_tags_counts_images_without_alt() {
        let mut snap = snapshot();
        snap.images = vec![image(true), image(false), image(false), image(false)];
        let outcome = score(&snap);
        assert_eq!(outcome.missing_alt_tags, 3);
        assert!(has_issue(
            &outcome,
            IssueCategory::Accessibility,
            "3 images missing alt text"
        ));
    }

    #[test]
    fn all_alts_present_emits_no_accessibility_issue() {
        let mut snap = snapshot();
        snap.images = vec![image(true), image(true)];
        let outcome = score(&snap);
        assert_eq!(outcome.missing_alt_tags, 0);
        assert!(!outcome
            .issues
            .iter()
            .any(|i| i.category == IssueCategory::Accessibility));
    }

    #[test]
    fn missing_title_and_description_count_as_meta_tags() {
        let mut snap = snapshot();
        snap.title = String::new();
        snap.meta_description = "  ".to_string();
        let outcome = score(&snap);
        assert_eq!(outcome.missing_meta_tags, 2);
        assert!(has_issue(&outcome, IssueCategory::Meta, "Missing page title"));
        assert!(has_issue(
            &outcome,
            IssueCategory::Meta,
            "Missing meta description"
        ));
    }

    #[test]
    fn zero_h1_emits_high_structure_issue() {
        let mut snap = snapshot();
        snap.headings = vec![PageHeading {
            level: 2,
            text: "Only h2".to_string(),
        }];
        let outcome = score(&snap);
        assert!(has_issue(
            &outcome,
            IssueCategory::Structure,
            "Missing H1 heading"
        ));
        assert!(!has_issue(
            &outcome,
            IssueCategory::Structure,
            "Multiple H1 headings found"
        ));
    }

    #[test]
    fn multiple_h1_emits_medium_structure_issue() {
        let mut snap = snapshot();
        snap.headings = vec![
            PageHeading {
                level: 1,
                text: "First".to_string(),
            },
            PageHeading {
                level: 1,
                text: "Second".to_string(),
            },
        ];
        let outcome = score(&snap);
        assert!(has_issue(
            &outcome,
            IssueCategory::Structure,
            "Multiple H1 headings found"
        ));
        assert!(!has_issue(
            &outcome,
            IssueCategory::Structure,
            "Missing H1 heading"
        ));
    }

    #[test]
    fn slow_page_emits_performance_issue() {
        let mut snap = snapshot();
        snap.load_time_ms = 3_001;
        let outcome = score(&snap);
        assert!(has_issue(
            &outcome,
            IssueCategory::Performance,
            "Page load time exceeds 3 seconds"
        ));
    }

    #[test]
    fn threshold_load_time_is_not_slow() {
        let mut snap = snapshot();
        snap.load_time_ms = 3_000;
        let outcome = score(&snap);
        assert!(!outcome
            .issues
            .iter()
            .any(|i| i.category == IssueCategory::Performance));
    }

    #[test]
    fn issues_serialize_with_expected_wire_names() {
        let mut snap = snapshot();
        snap.title = String::new();
        let outcome = score(&snap);
        let json = serde_json::to_value(&outcome.issues[0]).unwrap();
        assert_eq!(json["type"], "meta");
        assert_eq!(json["severity"], "high");
        assert_eq!(json["message"], "Missing page title");
    }
}
