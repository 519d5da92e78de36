//! Fixed lookup tables used for display: interest clusters, selectable skills,
//! match-score tiers and the discovery filter options.

use std::borrow::Cow;

/// An interest cluster as known to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestCluster {
    pub id: u32,
    pub name: &'static str,
    /// Tailwind classes for the small badge.
    pub badge: &'static str,
    /// Tailwind class for bars and dots.
    pub accent: &'static str,
}

pub const CLUSTERS: [InterestCluster; 5] = [
    InterestCluster {
        id: 1,
        name: "AI/ML",
        badge: "bg-purple-100 dark:bg-purple-900/30 text-purple-800 dark:text-purple-200",
        accent: "bg-purple-500",
    },
    InterestCluster {
        id: 2,
        name: "Web Development",
        badge: "bg-blue-100 dark:bg-blue-900/30 text-blue-800 dark:text-blue-200",
        accent: "bg-blue-500",
    },
    InterestCluster {
        id: 3,
        name: "App Development",
        badge: "bg-green-100 dark:bg-green-900/30 text-green-800 dark:text-green-200",
        accent: "bg-green-500",
    },
    InterestCluster {
        id: 4,
        name: "Cybersecurity",
        badge: "bg-red-100 dark:bg-red-900/30 text-red-800 dark:text-red-200",
        accent: "bg-red-500",
    },
    InterestCluster {
        id: 5,
        name: "Electronics",
        badge: "bg-orange-100 dark:bg-orange-900/30 text-orange-800 dark:text-orange-200",
        accent: "bg-orange-500",
    },
];

const UNKNOWN_CLUSTER_BADGE: &str = "bg-gray-100 dark:bg-gray-700 text-gray-800 dark:text-gray-200";
const UNKNOWN_CLUSTER_ACCENT: &str = "bg-gray-500";

pub fn cluster(id: u32) -> Option<&'static InterestCluster> {
    CLUSTERS.iter().find(|c| c.id == id)
}

/// Display name of a cluster; unknown ids render as `"Cluster {id}"`.
pub fn cluster_name(id: u32) -> Cow<'static, str> {
    match cluster(id) {
        Some(c) => Cow::Borrowed(c.name),
        None => Cow::Owned(format!("Cluster {id}")),
    }
}

pub fn cluster_badge(id: u32) -> &'static str {
    cluster(id).map_or(UNKNOWN_CLUSTER_BADGE, |c| c.badge)
}

pub fn cluster_accent(id: u32) -> &'static str {
    cluster(id).map_or(UNKNOWN_CLUSTER_ACCENT, |c| c.accent)
}

/// A skill offered by the registration wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
}

pub const SKILLS: [Skill; 15] = [
    Skill { id: "problem_solving", name: "Problem Solving", emoji: "🧩" },
    Skill { id: "algebra", name: "Algebra & Equations", emoji: "📐" },
    Skill { id: "geometry", name: "Geometry & Spatial Thinking", emoji: "🔷" },
    Skill { id: "probability", name: "Probability & Statistics", emoji: "📊" },
    Skill { id: "number_theory", name: "Number Theory", emoji: "🔢" },
    Skill { id: "algorithms", name: "Algorithms & Logic Building", emoji: "⚡" },
    Skill { id: "pattern_recognition", name: "Pattern Recognition", emoji: "🔍" },
    Skill { id: "navigation", name: "Navigation & Pathfinding", emoji: "🧭" },
    Skill { id: "clue_solving", name: "Clue Solving & Riddles", emoji: "🔑" },
    Skill { id: "time_management", name: "Time Management", emoji: "⏰" },
    Skill { id: "team_collaboration", name: "Team Collaboration", emoji: "🤝" },
    Skill { id: "leadership", name: "Leadership", emoji: "👑" },
    Skill { id: "attention_detail", name: "Attention to Detail", emoji: "🔎" },
    Skill { id: "endurance", name: "Endurance & Activeness", emoji: "💪" },
    Skill { id: "creative_thinking", name: "Creative Thinking", emoji: "💡" },
];

pub fn skill(id: &str) -> Option<&'static Skill> {
    SKILLS.iter().find(|s| s.id == id)
}

/// Departments offered by the discovery filter.
pub const DEPARTMENTS: [&str; 4] = [
    "Computer Science",
    "Information Technology",
    "Electronics",
    "Mechanical",
];

/// Year-of-study options offered by the discovery filter.
pub const YEARS: [u32; 4] = [1, 2, 3, 4];

/// Team size limits offered by the discovery filter.
pub const TEAM_SIZE_LIMITS: [u32; 3] = [2, 3, 4];

/// Colour band of a suggestion's match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
    Weak,
}

impl MatchTier {
    pub fn for_score(score: f64) -> Self {
        if score >= 15.0 {
            MatchTier::Excellent
        } else if score >= 10.0 {
            MatchTier::Good
        } else if score >= 5.0 {
            MatchTier::Fair
        } else {
            MatchTier::Weak
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            MatchTier::Excellent => "text-green-600 dark:text-green-400",
            MatchTier::Good => "text-blue-600 dark:text-blue-400",
            MatchTier::Fair => "text-yellow-600 dark:text-yellow-400",
            MatchTier::Weak => "text-red-600 dark:text-red-400",
        }
    }
}

/// Score rendered with one decimal, e.g. `"12.5"`.
pub fn format_score(score: f64) -> String {
    format!("{score:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_names() {
        assert_eq!(cluster_name(1), "AI/ML");
        assert_eq!(cluster_name(5), "Electronics");
        assert_eq!(cluster_name(9), "Cluster 9");
        assert_eq!(cluster_badge(9), UNKNOWN_CLUSTER_BADGE);
    }

    #[test]
    fn test_skill_ids_are_unique() {
        for (i, a) in SKILLS.iter().enumerate() {
            assert!(SKILLS[i + 1..].iter().all(|b| b.id != a.id), "{}", a.id);
        }
        assert_eq!(skill("leadership").map(|s| s.emoji), Some("👑"));
        assert!(skill("juggling").is_none());
    }

    #[test]
    fn test_match_tiers() {
        assert_eq!(MatchTier::for_score(15.0), MatchTier::Excellent);
        assert_eq!(MatchTier::for_score(14.9), MatchTier::Good);
        assert_eq!(MatchTier::for_score(5.0), MatchTier::Fair);
        assert_eq!(MatchTier::for_score(4.99), MatchTier::Weak);
        assert_eq!(format_score(12.345), "12.3");
    }
}
