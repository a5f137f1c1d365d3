//! Job ranking: scores a job collection against one seeker's skills.

use serde::{Deserialize, Serialize};

use crate::matching::scorer::compute_skill_match;
use crate::matching::skills::{effective_job_skills, normalize_skills};
use crate::models::job::JobRow;

/// A job that scored above zero for the seeker, with its match metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: JobRow,
    pub match_score: u32,
    pub matched_skills: Vec<String>,
    pub total_job_skills: usize,
    pub user_skills_count: usize,
}

/// Result of ranking: matched jobs sorted by score, unmatched jobs in their
/// original order. Any combined listing presents `matched` first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedJobs {
    pub matched: Vec<ScoredJob>,
    pub unmatched: Vec<JobRow>,
}

/// Ranks `jobs` against a seeker's raw comma-separated skill string.
///
/// Each job is scored on its effective skill set — declared skills plus
/// whatever the description and title mention. Jobs scoring 0 drop to
/// `unmatched`; the rest sort descending by score. The sort is stable, so
/// jobs with equal scores keep their input order (common with small skill
/// sets). An empty skill string matches nothing and is not an error.
pub fn rank_jobs(seeker_skills_raw: &str, jobs: Vec<JobRow>) -> RankedJobs {
    let seeker_tokens = normalize_skills(seeker_skills_raw);

    let mut matched = Vec::new();
    let mut unmatched = Vec::new();

    for job in jobs {
        let job_skills = effective_job_skills(&job.skills, &job.description, &job.title);
        let result = compute_skill_match(&seeker_tokens, &job_skills);

        if result.score > 0 {
            matched.push(ScoredJob {
                job,
                match_score: result.score,
                matched_skills: result.matched_skills,
                total_job_skills: result.job_skill_count,
                user_skills_count: result.seeker_skill_count,
            });
        } else {
            unmatched.push(job);
        }
    }

    // Vec::sort_by is stable — ties retain input order.
    matched.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    RankedJobs { matched, unmatched }
}
