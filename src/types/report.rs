use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub score: f64,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub improvements: Vec<String>,
    pub tech_summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Maturity {
    Beginner,
    Intermediate,
    Advanced,
}

impl Maturity {
    pub fn from_score(score: f64) -> Self {
        if score >= 7.5 {
            Maturity::Advanced
        } else if score >= 5.0 {
            Maturity::Intermediate
        } else {
            Maturity::Beginner
        }
    }
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Maturity::Beginner => "Beginner",
            Maturity::Intermediate => "Intermediate",
            Maturity::Advanced => "Advanced",
        };
        f.write_str(label)
    }
}
