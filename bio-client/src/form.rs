use shared_types::ProfileInput;
use validator::Validate;

use crate::error::SubmitRejected;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProfileField {
    Career,
    Interests,
    PersonalityTraits,
    RelationshipGoals,
}

impl ProfileField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Career => "career",
            Self::Interests => "interests",
            Self::PersonalityTraits => "personality traits",
            Self::RelationshipGoals => "relationship goals",
        }
    }

    fn from_field_name(name: &str) -> Option<Self> {
        match name {
            "career" => Some(Self::Career),
            "interests" => Some(Self::Interests),
            "personality_traits" => Some(Self::PersonalityTraits),
            "relationship_goals" => Some(Self::RelationshipGoals),
            _ => None,
        }
    }
}

/// Editable profile held by the form between submissions.
///
/// Multi-select fields behave as sets: toggling adds a missing value and
/// removes a present one, keeping first-selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    input: ProfileInput,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_input(input: ProfileInput) -> Self {
        Self { input }
    }

    pub fn input(&self) -> &ProfileInput {
        &self.input
    }

    pub fn set_career(&mut self, career: impl Into<String>) {
        self.input.career = career.into();
    }

    pub fn toggle_interest(&mut self, value: &str) {
        toggle(&mut self.input.interests, value);
    }

    pub fn toggle_personality_trait(&mut self, value: &str) {
        toggle(&mut self.input.personality_traits, value);
    }

    pub fn toggle_relationship_goal(&mut self, value: &str) {
        toggle(&mut self.input.relationship_goals, value);
    }

    /// Toggle `value` in a multi-select field. Career is single-valued and
    /// is ignored here.
    pub fn toggle(&mut self, field: ProfileField, value: &str) {
        match field {
            ProfileField::Career => {}
            ProfileField::Interests => self.toggle_interest(value),
            ProfileField::PersonalityTraits => self.toggle_personality_trait(value),
            ProfileField::RelationshipGoals => self.toggle_relationship_goal(value),
        }
    }

    pub fn is_selected(&self, field: ProfileField, value: &str) -> bool {
        match field {
            ProfileField::Career => self.input.career == value,
            ProfileField::Interests => self.input.interests.iter().any(|v| v == value),
            ProfileField::PersonalityTraits => {
                self.input.personality_traits.iter().any(|v| v == value)
            }
            ProfileField::RelationshipGoals => {
                self.input.relationship_goals.iter().any(|v| v == value)
            }
        }
    }

    /// Fields still empty, in form order.
    pub fn missing_fields(&self) -> Vec<ProfileField> {
        let Err(errors) = self.input.validate() else {
            return Vec::new();
        };

        let mut missing: Vec<ProfileField> = errors
            .field_errors()
            .keys()
            .filter_map(|name| ProfileField::from_field_name(&**name))
            .collect();
        missing.sort();
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.input.validate().is_ok()
    }

    /// Snapshot of the input for submission, or the fields that block it.
    pub fn validated(&self) -> Result<ProfileInput, SubmitRejected> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(SubmitRejected::Incomplete { missing });
        }
        Ok(self.input.clone())
    }
}

fn toggle(values: &mut Vec<String>, value: &str) {
    if let Some(index) = values.iter().position(|v| v == value) {
        values.remove(index);
    } else {
        values.push(value.to_string());
    }
}
