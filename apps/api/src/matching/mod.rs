// Skill matching engine: normalization, free-text extraction, scoring, ranking.
// Everything here is pure and synchronous — handlers do the I/O.

pub mod handlers;
pub mod ranker;
pub mod scorer;
pub mod skills;
