//! Skill tokenization and free-text skill extraction.
//!
//! Profiles store skills as a free-form comma-separated string; job postings
//! carry a declared skill list plus whatever their title and description
//! mention in prose. Both feed the scorer as lowercase tokens.

use std::collections::HashSet;

/// Domain skill keywords recognized in free text. Process-wide, immutable.
///
/// Matching is case-insensitive substring containment, so short entries like
/// "r" or "go" can fire inside unrelated words. That imprecision is an
/// accepted trade-off — tightening to word boundaries would change every
/// computed score.
pub const SKILL_KEYWORDS: &[&str] = &[
    // Languages
    "javascript", "js", "python", "java", "c++", "c#", "php", "ruby", "go", "rust",
    "swift", "kotlin", "typescript", "ts", "scala", "r", "matlab", "perl", "html", "css",
    // Web frameworks and tooling
    "react", "angular", "vue", "node.js", "nodejs", "express.js", "expressjs", "django",
    "flask", "laravel", "spring", "asp.net", "aspnet", "jquery", "bootstrap", "sass",
    "less", "webpack", "babel", "npm", "yarn", "next.js", "nextjs", "nuxt.js", "nuxtjs",
    // Databases
    "mysql", "postgresql", "postgres", "mongodb", "sqlite", "oracle", "sql server",
    "sqlserver", "redis", "elasticsearch", "dynamodb", "firebase", "cassandra",
    // Cloud / devops
    "aws", "amazon web services", "azure", "google cloud", "gcp", "docker", "kubernetes",
    "k8s", "jenkins", "git", "github", "gitlab", "terraform", "ansible", "chef", "puppet",
    // ML / data
    "machine learning", "ml", "deep learning", "dl", "tensorflow", "pytorch", "scikit-learn",
    "scikitlearn", "pandas", "numpy", "matplotlib", "seaborn", "jupyter", "spark", "hadoop",
    // Mobile
    "react native", "reactnative", "flutter", "xamarin", "ionic", "cordova", "android", "ios",
    // Soft skills
    "leadership", "communication", "teamwork", "problem solving", "problemsolving", "analytical",
    "project management", "projectmanagement", "agile", "scrum", "kanban", "customer service",
    // Design
    "ui/ux", "ui", "ux", "figma", "adobe photoshop", "photoshop", "illustrator", "sketch",
    "invision", "wireframing", "prototyping", "user research", "design thinking",
    // Marketing
    "digital marketing", "digitalmarketing", "seo", "sem", "social media", "socialmedia",
    "content marketing", "contentmarketing", "email marketing", "emailmarketing", "analytics",
    "google ads", "googleads", "facebook ads", "facebookads",
];

/// Turns a free-form comma-separated skill string into normalized tokens:
/// trimmed, lowercased, empties dropped. Empty input yields an empty vec.
pub fn normalize_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Scans free text against [`SKILL_KEYWORDS`] and returns every entry that
/// occurs as a case-insensitive substring. Deterministic; dictionary order.
pub fn extract_skills_from_text(text: &str) -> Vec<&'static str> {
    if text.is_empty() {
        return Vec::new();
    }
    let text_lower = text.to_lowercase();
    SKILL_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| text_lower.contains(kw))
        .collect()
}

/// Union of a job's declared skills and the skills extracted from its
/// description and title, deduplicated case-insensitively. First occurrence
/// wins, so declared casing survives over dictionary casing.
pub fn effective_job_skills(declared: &[String], description: &str, title: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut skills = Vec::new();

    let candidates = declared
        .iter()
        .map(String::as_str)
        .chain(extract_skills_from_text(description))
        .chain(extract_skills_from_text(title));

    for skill in candidates {
        if seen.insert(skill.to_lowercase()) {
            skills.push(skill.to_string());
        }
    }
    skills
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_empty_string_yields_nothing() {
        assert!(normalize_skills("").is_empty());
        assert!(normalize_skills("   ").is_empty());
        assert!(normalize_skills(",,,").is_empty());
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        let tokens = normalize_skills(" JavaScript ,  React,node.js ");
        assert_eq!(tokens, vec!["javascript", "react", "node.js"]);
    }

    #[test]
    fn test_extract_finds_keywords_case_insensitively() {
        let found = extract_skills_from_text("Looking for a React and Node.js developer");
        assert!(found.contains(&"react"));
        assert!(found.contains(&"node.js"));
    }

    #[test]
    fn test_extract_empty_text_yields_nothing() {
        assert!(extract_skills_from_text("").is_empty());
    }

    #[test]
    fn test_extract_is_idempotent() {
        let text = "Senior Python engineer with AWS and Docker experience";
        assert_eq!(extract_skills_from_text(text), extract_skills_from_text(text));
    }

    #[test]
    fn test_extract_substring_false_positive_is_accepted() {
        // "r" and "go" live in the dictionary and substring matching lets them
        // fire inside unrelated words. Accepted behavior, not a defect.
        let found = extract_skills_from_text("category manager");
        assert!(found.contains(&"r"));
        assert!(found.contains(&"go"));
    }

    #[test]
    fn test_extract_preserves_dictionary_casing_and_dedups() {
        let found = extract_skills_from_text("python python PYTHON");
        let python_hits = found.iter().filter(|s| **s == "python").count();
        assert_eq!(python_hits, 1);
    }

    #[test]
    fn test_effective_skills_dedup_is_case_insensitive() {
        let declared = vec!["JavaScript".to_string(), "React".to_string()];
        let skills = effective_job_skills(&declared, "We use javascript daily", "");
        // Declared "JavaScript" wins over the extracted lowercase duplicate.
        let js_hits = skills
            .iter()
            .filter(|s| s.eq_ignore_ascii_case("javascript"))
            .count();
        assert_eq!(js_hits, 1);
        assert!(skills.contains(&"JavaScript".to_string()));
    }

    #[test]
    fn test_effective_skills_pulls_from_title_and_description() {
        let skills = effective_job_skills(&[], "Needs Kubernetes know-how", "Docker Engineer");
        assert!(skills.contains(&"kubernetes".to_string()));
        assert!(skills.contains(&"docker".to_string()));
    }
}
