//! Choices offered by the form.

use bio_client::ProfileField;

pub const CAREER_OPTIONS: &[&str] = &[
    "Software Engineer",
    "Entrepreneur",
    "Artist",
    "Designer",
    "Teacher",
    "Doctor",
    "Marketing Professional",
    "Data Scientist",
    "Chef",
    "Musician",
];

pub const INTEREST_OPTIONS: &[&str] = &[
    "Cooking",
    "Travel",
    "Sports",
    "Music",
    "Reading",
    "Gaming",
    "Fitness",
    "Photography",
    "Art",
    "Technology",
    "Literature",
];

pub const PERSONALITY_OPTIONS: &[&str] = &[
    "Adventurous",
    "Creative",
    "Compassionate",
    "Motivated",
    "Optimistic",
    "Empathetic",
    "Analytical",
    "Outgoing",
    "Introverted",
];

pub const RELATIONSHIP_GOAL_OPTIONS: &[&str] = &[
    "Casual",
    "Long-term",
    "Adventurous",
    "Seeking Deep Connection",
    "Friendship First",
    "Marriage Minded",
];

/// A multi-select group rendered as checkboxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionGroup {
    pub field: ProfileField,
    pub title: &'static str,
    pub options: &'static [&'static str],
}

pub const OPTION_GROUPS: [OptionGroup; 3] = [
    OptionGroup {
        field: ProfileField::Interests,
        title: "What Are Your Interests? (Select Multiple)",
        options: INTEREST_OPTIONS,
    },
    OptionGroup {
        field: ProfileField::PersonalityTraits,
        title: "What Are Your Personality Traits? (Select Multiple)",
        options: PERSONALITY_OPTIONS,
    },
    OptionGroup {
        field: ProfileField::RelationshipGoals,
        title: "What Are Your Relationship Goals? (Select Multiple)",
        options: RELATIONSHIP_GOAL_OPTIONS,
    },
];
