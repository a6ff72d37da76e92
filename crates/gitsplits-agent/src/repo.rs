//! Repository reference normalization

use regex::Regex;
use std::sync::OnceLock;

static HOST_PREFIX_RE: OnceLock<Regex> = OnceLock::new();
static REPO_REF_RE: OnceLock<Regex> = OnceLock::new();

/// Canonicalize a repository reference to `github.com/<owner>/<repo>`.
///
/// Accepts bare `owner/repo`, `github.com/owner/repo`, and full URLs with
/// or without a scheme.
pub fn normalize_repo_url(input: &str) -> String {
    let re = HOST_PREFIX_RE
        .get_or_init(|| Regex::new(r"(?i)^(https?://)?(www\.)?github\.com/").unwrap());
    let cleaned = re.replace(input.trim(), "");
    let cleaned = cleaned.trim_end_matches('/').trim();
    format!("github.com/{cleaned}")
}

/// Find the first `owner/repo` reference in free-form text, canonicalized.
pub fn extract_first_repo(text: &str) -> Option<String> {
    let re = REPO_REF_RE.get_or_init(|| {
        Regex::new(r"(?i)(?:github\.com/)?([A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+)").unwrap()
    });
    re.captures(text)
        .map(|caps| format!("github.com/{}", &caps[1]))
}
