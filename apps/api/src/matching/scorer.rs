//! Match scoring between a seeker's skill tokens and a job's effective skills.

use serde::{Deserialize, Serialize};

/// Computed per (seeker, job) pair. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0–100 integer score.
    pub score: u32,
    /// Seeker tokens with at least one matching job token, seeker casing.
    pub matched_skills: Vec<String>,
    pub job_skill_count: usize,
    pub seeker_skill_count: usize,
}

impl MatchResult {
    fn empty(seeker_count: usize, job_count: usize) -> Self {
        MatchResult {
            score: 0,
            matched_skills: Vec::new(),
            job_skill_count: job_count,
            seeker_skill_count: seeker_count,
        }
    }
}

/// True when two tokens count as a match: equal, or either contains the other.
/// Symmetric by construction.
fn tokens_match(a: &str, b: &str) -> bool {
    a == b || a.contains(b) || b.contains(a)
}

/// Scores a seeker's normalized skill tokens against a job's skill tokens.
///
/// The match count is over all (seeker, job) pairs — one seeker token may
/// match several job tokens and vice versa. The score is
/// `round(100 * pairs / max(|seeker|, |job|))`, capped at 100 since the pair
/// count can exceed the denominator when tokens nest inside each other.
///
/// Either side empty scores 0 with no matched skills; malformed input is a
/// normal scoreless state, never an error. Because the match predicate and
/// the `max` denominator are both symmetric, swapping pre-normalized operands
/// yields the same score.
pub fn compute_skill_match(seeker_tokens: &[String], job_tokens: &[String]) -> MatchResult {
    if seeker_tokens.is_empty() || job_tokens.is_empty() {
        return MatchResult::empty(seeker_tokens.len(), job_tokens.len());
    }

    let job_lower: Vec<String> = job_tokens.iter().map(|s| s.to_lowercase()).collect();

    let mut match_count: usize = 0;
    for seeker in seeker_tokens {
        for job in &job_lower {
            if tokens_match(seeker, job) {
                match_count += 1;
            }
        }
    }

    let mut matched_skills: Vec<String> = Vec::new();
    for seeker in seeker_tokens {
        if matched_skills.contains(seeker) {
            continue;
        }
        if job_lower.iter().any(|job| tokens_match(seeker, job)) {
            matched_skills.push(seeker.clone());
        }
    }

    let max_skills = seeker_tokens.len().max(job_lower.len());
    let score = ((match_count as f64 / max_skills as f64) * 100.0).round() as u32;

    MatchResult {
        score: score.min(100),
        matched_skills,
        job_skill_count: job_lower.len(),
        seeker_skill_count: seeker_tokens.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_seeker_scores_zero() {
        let result = compute_skill_match(&[], &tokens(&["rust", "sql"]));
        assert_eq!(result.score, 0);
        assert!(result.matched_skills.is_empty());
    }

    #[test]
    fn test_empty_job_scores_zero() {
        let result = compute_skill_match(&tokens(&["rust"]), &[]);
        assert_eq!(result.score, 0);
        assert!(result.matched_skills.is_empty());
    }

    #[test]
    fn test_worked_example_javascript_react() {
        // Seeker "JavaScript, React" normalized; job ["javascript", "node"].
        // One matching pair, max(2, 2) = 2 → 50.
        let seeker = tokens(&["javascript", "react"]);
        let job = tokens(&["javascript", "node"]);
        let result = compute_skill_match(&seeker, &job);
        assert_eq!(result.score, 50);
        assert_eq!(result.matched_skills, vec!["javascript"]);
        assert_eq!(result.job_skill_count, 2);
        assert_eq!(result.seeker_skill_count, 2);
    }

    #[test]
    fn test_job_tokens_lowercased_before_compare() {
        let result = compute_skill_match(&tokens(&["python"]), &tokens(&["Python"]));
        assert_eq!(result.score, 100);
        assert_eq!(result.matched_skills, vec!["python"]);
    }

    #[test]
    fn test_containment_counts_both_directions() {
        let seeker = tokens(&["node.js"]);
        let job = tokens(&["node"]);
        assert_eq!(compute_skill_match(&seeker, &job).score, 100);

        let seeker = tokens(&["node"]);
        let job = tokens(&["node.js"]);
        assert_eq!(compute_skill_match(&seeker, &job).score, 100);
    }

    #[test]
    fn test_all_pairs_counts_pairs_not_tokens() {
        // "sql" matches both "mysql" and "postgresql": 2 pairs, max(1, 2) = 2.
        let result = compute_skill_match(&tokens(&["sql"]), &tokens(&["mysql", "postgresql"]));
        assert_eq!(result.score, 100);
        assert_eq!(result.matched_skills, vec!["sql"]);
    }

    #[test]
    fn test_score_capped_at_100() {
        // Nested tokens inflate the pair count past the denominator:
        // pairs = 4 ("c" ↔ both, "css" ↔ both... ), max = 2.
        let seeker = tokens(&["c", "css"]);
        let job = tokens(&["c", "css"]);
        let result = compute_skill_match(&seeker, &job);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_symmetry_on_pre_normalized_tokens() {
        let a = tokens(&["javascript", "react", "sql"]);
        let b = tokens(&["mysql", "react native", "go"]);
        let forward = compute_skill_match(&a, &b);
        let backward = compute_skill_match(&b, &a);
        assert_eq!(forward.score, backward.score);
    }

    #[test]
    fn test_matched_skills_deduplicated() {
        let seeker = tokens(&["sql", "sql"]);
        let job = tokens(&["mysql"]);
        let result = compute_skill_match(&seeker, &job);
        assert_eq!(result.matched_skills, vec!["sql"]);
    }
}
