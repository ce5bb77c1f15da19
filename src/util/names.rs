//! Quick tab-name heuristics.

use regex::Regex;

/// Derive a short tab label from a message, or `None` when nothing matches.
///
/// GitHub pull/issue/discussion URLs take priority over inline references
/// like `PR #12`, `issue 34`, or `PROJ-567` ticket keys.
pub fn extract_quick_tab_name(message: &str) -> Option<String> {
    match_github_url(message).or_else(|| match_inline_reference(message))
}

fn match_github_url(message: &str) -> Option<String> {
    let url = Regex::new(r"github\.com/[\w.-]+/[\w.-]+/(pull|issues|discussions)/(\d+)").ok()?;
    let caps = url.captures(message)?;
    let label = match &caps[1] {
        "pull" => "PR",
        "issues" => "Issue",
        "discussions" => "Discussion",
        _ => return None,
    };
    Some(format!("{} #{}", label, &caps[2]))
}

fn match_inline_reference(message: &str) -> Option<String> {
    let pr = Regex::new(r"(?i)\bPR\s*#(\d+)").ok()?;
    if let Some(caps) = pr.captures(message) {
        return Some(format!("PR #{}", &caps[1]));
    }

    let issue = Regex::new(r"(?i)\bissue\s*#?(\d+)").ok()?;
    if let Some(caps) = issue.captures(message) {
        return Some(format!("Issue #{}", &caps[1]));
    }

    let ticket = Regex::new(r"\b([A-Z][A-Z0-9]+-\d+)\b").ok()?;
    ticket.captures(message).map(|caps| caps[1].to_string())
}
