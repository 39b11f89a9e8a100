//! Student and course metadata for one evaluation.

use serde::{Deserialize, Serialize};

use crate::errors::{MissingFieldError, RequiredField};

/// Caller-supplied metadata. Every field is optional here; validation into an
/// [`EvaluationRecord`] reports the first required field that is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationDetails {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Name used in the intro paragraph; falls back to `first_name`.
    pub child_name: Option<String>,
    pub date: Option<String>,
    pub course: Option<String>,
    pub instructor: Option<String>,
    pub site: Option<String>,
    pub teaching_assistant: Option<String>,
    /// Phrase completing "Congratulations, NAME, on ... COURSE."
    pub completion: Option<String>,
}

impl EvaluationDetails {
    fn get(&self, field: RequiredField) -> Option<&str> {
        let value = match field {
            RequiredField::FirstName => &self.first_name,
            RequiredField::LastName => &self.last_name,
            RequiredField::Date => &self.date,
            RequiredField::Course => &self.course,
            RequiredField::Instructor => &self.instructor,
            RequiredField::Site => &self.site,
            RequiredField::TeachingAssistant => &self.teaching_assistant,
            RequiredField::Completion => &self.completion,
        };
        value.as_deref().filter(|v| !v.trim().is_empty())
    }
}

/// Validated, immutable evaluation metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationRecord {
    pub first_name: String,
    pub last_name: String,
    pub child_name: String,
    pub date: String,
    pub course: String,
    pub instructor: String,
    pub site: String,
    pub teaching_assistant: String,
    pub completion: String,
}

impl EvaluationRecord {
    /// Scans required fields in [`RequiredField::ORDER`] and fails on the first gap.
    pub fn from_details(details: &EvaluationDetails) -> Result<Self, MissingFieldError> {
        for field in RequiredField::ORDER {
            if details.get(field).is_none() {
                return Err(MissingFieldError::new(field));
            }
        }

        let take = |field: RequiredField| details.get(field).unwrap_or_default().to_string();
        let first_name = take(RequiredField::FirstName);
        let child_name = details
            .child_name
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| first_name.clone());

        Ok(Self {
            last_name: take(RequiredField::LastName),
            date: take(RequiredField::Date),
            course: take(RequiredField::Course),
            instructor: take(RequiredField::Instructor),
            site: take(RequiredField::Site),
            teaching_assistant: take(RequiredField::TeachingAssistant),
            completion: take(RequiredField::Completion),
            first_name,
            child_name,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// CTY standard filename: `last_first[suffix].docx`.
    pub fn standard_filename(&self, suffix: &str) -> String {
        format!("{}_{}{}.docx", self.last_name, self.first_name, suffix)
    }
}

#[cfg(test)]
pub(crate) fn sample_details() -> EvaluationDetails {
    EvaluationDetails {
        first_name: Some("John".to_string()),
        last_name: Some("Smith".to_string()),
        child_name: None,
        date: Some("July 28, 2017".to_string()),
        course: Some("Introduction to Robotics".to_string()),
        instructor: Some("Ada Byron".to_string()),
        site: Some("Lancaster".to_string()),
        teaching_assistant: Some("Grace Hopper".to_string()),
        completion: Some("successfully completing".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear(details: &mut EvaluationDetails, field: RequiredField) {
        let slot = match field {
            RequiredField::FirstName => &mut details.first_name,
            RequiredField::LastName => &mut details.last_name,
            RequiredField::Date => &mut details.date,
            RequiredField::Course => &mut details.course,
            RequiredField::Instructor => &mut details.instructor,
            RequiredField::Site => &mut details.site,
            RequiredField::TeachingAssistant => &mut details.teaching_assistant,
            RequiredField::Completion => &mut details.completion,
        };
        *slot = None;
    }

    #[test]
    fn test_each_missing_field_is_identified() {
        for field in RequiredField::ORDER {
            let mut details = sample_details();
            clear(&mut details, field);
            let err = EvaluationRecord::from_details(&details).unwrap_err();
            assert_eq!(err.field, field);
            assert_eq!(err.position, field.position());
        }
    }

    #[test]
    fn test_first_missing_field_wins() {
        let mut details = sample_details();
        details.site = None;
        details.last_name = None;
        let err = EvaluationRecord::from_details(&details).unwrap_err();
        assert_eq!(err.field, RequiredField::LastName);
    }

    #[test]
    fn test_blank_field_counts_as_missing() {
        let mut details = sample_details();
        details.course = Some("   ".to_string());
        let err = EvaluationRecord::from_details(&details).unwrap_err();
        assert_eq!(err.field, RequiredField::Course);
    }

    #[test]
    fn test_child_name_defaults_to_first_name() {
        let record = EvaluationRecord::from_details(&sample_details()).unwrap();
        assert_eq!(record.child_name, "John");
    }

    #[test]
    fn test_child_name_used_when_supplied() {
        let mut details = sample_details();
        details.child_name = Some("Johnny".to_string());
        let record = EvaluationRecord::from_details(&details).unwrap();
        assert_eq!(record.child_name, "Johnny");
        assert_eq!(record.first_name, "John");
    }

    #[test]
    fn test_standard_filename() {
        let record = EvaluationRecord::from_details(&sample_details()).unwrap();
        assert_eq!(record.standard_filename(""), "Smith_John.docx");
        assert_eq!(record.standard_filename("_draft"), "Smith_John_draft.docx");
    }

    #[test]
    fn test_details_deserialize_with_absent_fields() {
        let details: EvaluationDetails =
            serde_json::from_str(r#"{ "first_name": "John", "last_name": "Smith" }"#).unwrap();
        assert_eq!(details.first_name.as_deref(), Some("John"));
        assert!(details.date.is_none());
        let err = EvaluationRecord::from_details(&details).unwrap_err();
        assert_eq!(err.field, RequiredField::Date);
    }
}
