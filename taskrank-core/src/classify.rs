//! Fixed-threshold labels derived from a priority score.

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Moderate,
    Low,
}

impl Confidence {
    pub const HIGH_AT: f64 = 0.8;
    pub const MODERATE_AT: f64 = 0.5;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::HIGH_AT {
            Self::High
        } else if score >= Self::MODERATE_AT {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Urgent,
    Upcoming,
    Safe,
}

impl Status {
    pub const URGENT_AT: f64 = 0.75;
    pub const UPCOMING_AT: f64 = 0.5;

    /// Display order for counts and charts.
    pub const ALL: [Status; 3] = [Status::Urgent, Status::Upcoming, Status::Safe];

    pub fn from_score(score: f64) -> Self {
        if score >= Self::URGENT_AT {
            Self::Urgent
        } else if score >= Self::UPCOMING_AT {
            Self::Upcoming
        } else {
            Self::Safe
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::Upcoming => "Upcoming",
            Self::Safe => "Safe",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Confidence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "moderate" => Ok(Self::Moderate),
            "low" => Ok(Self::Low),
            other => Err(anyhow!("unknown confidence label: {other}")),
        }
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "urgent" => Ok(Self::Urgent),
            "upcoming" => Ok(Self::Upcoming),
            "safe" => Ok(Self::Safe),
            other => Err(anyhow!("unknown status label: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_representative_scores() {
        assert_eq!(Confidence::from_score(0.9), Confidence::High);
        assert_eq!(Status::from_score(0.9), Status::Urgent);

        assert_eq!(Confidence::from_score(0.6), Confidence::Moderate);
        assert_eq!(Status::from_score(0.6), Status::Upcoming);

        assert_eq!(Confidence::from_score(0.2), Confidence::Low);
        assert_eq!(Status::from_score(0.2), Status::Safe);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert_eq!(Confidence::from_score(0.8), Confidence::High);
        assert_eq!(Confidence::from_score(0.5), Confidence::Moderate);
        assert_eq!(Confidence::from_score(0.4999), Confidence::Low);

        assert_eq!(Status::from_score(0.75), Status::Urgent);
        assert_eq!(Status::from_score(0.5), Status::Upcoming);
        assert_eq!(Status::from_score(0.7499), Status::Upcoming);
    }

    #[test]
    fn test_out_of_range_scores_still_classify() {
        assert_eq!(Confidence::from_score(1.4), Confidence::High);
        assert_eq!(Status::from_score(-0.3), Status::Safe);
    }

    #[test]
    fn test_monotone_over_grid() {
        let mut prev_c = Confidence::from_score(-1.0);
        let mut prev_s = Status::from_score(-1.0);
        let rank_c = |c: Confidence| match c {
            Confidence::Low => 0,
            Confidence::Moderate => 1,
            Confidence::High => 2,
        };
        let rank_s = |s: Status| match s {
            Status::Safe => 0,
            Status::Upcoming => 1,
            Status::Urgent => 2,
        };
        for i in 0..=200 {
            let score = -0.5 + f64::from(i) * 0.01;
            let c = Confidence::from_score(score);
            let s = Status::from_score(score);
            assert!(rank_c(c) >= rank_c(prev_c));
            assert!(rank_s(s) >= rank_s(prev_s));
            prev_c = c;
            prev_s = s;
        }
    }

    #[test]
    fn test_labels_parse_back() {
        for s in Status::ALL {
            assert_eq!(s.label().parse::<Status>().unwrap(), s);
        }
        assert_eq!(" moderate ".parse::<Confidence>().unwrap(), Confidence::Moderate);
        assert!("meh".parse::<Confidence>().is_err());
    }
}
