//! Pre-submission form validation
//!
//! Each form declares a schema of per-field rules. Validation runs over a
//! plain value map and returns a map of field name to message, so it can
//! be exercised without any DOM.

use std::collections::BTreeMap;

/// A single validation rule for one field
#[derive(Debug, Clone)]
pub enum Rule {
    /// Value must be present and not just whitespace
    Required,
    /// Value must look like an email address
    Email,
    /// Value must be a running time in HH:MM:SS
    Duration,
    /// Value must be one of the listed options
    OneOf(&'static [&'static str]),
}

/// Rules for one named field
#[derive(Debug, Clone)]
pub struct FieldRules {
    pub field: &'static str,
    /// Human-readable name used in messages
    pub label: &'static str,
    pub rules: Vec<Rule>,
}

/// Validation schema for a whole form
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldRules>,
}

impl Schema {
    pub fn new(fields: Vec<FieldRules>) -> Self {
        Self { fields }
    }

    /// Checks every field and returns the first failing message per field.
    /// An empty result means the form may be submitted.
    pub fn validate(&self, values: &BTreeMap<String, String>) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        for field in &self.fields {
            let value = values.get(field.field).map(String::as_str).unwrap_or("");
            if let Some(message) = check_field(field, value) {
                errors.insert(field.field.to_string(), message);
            }
        }
        errors
    }
}

fn check_field(field: &FieldRules, value: &str) -> Option<String> {
    for rule in &field.rules {
        match rule {
            Rule::Required => {
                if value.trim().is_empty() {
                    return Some(format!("{} is required", field.label));
                }
            }
            // Non-required rules only apply once a value was entered
            Rule::Email => {
                if !value.is_empty() && !looks_like_email(value) {
                    return Some("Enter a valid email address".to_string());
                }
            }
            Rule::Duration => {
                if !value.is_empty() && !is_duration(value) {
                    return Some(format!("{} must be in HH:MM:SS format", field.label));
                }
            }
            Rule::OneOf(allowed) => {
                if !value.is_empty() && !allowed.contains(&value) {
                    return Some(format!("{} must be one of the listed options", field.label));
                }
            }
        }
    }
    None
}

/// Loose email shape check: one @ with a dotted domain after it
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// HH:MM:SS with two digits per part and minutes/seconds under 60
fn is_duration(value: &str) -> bool {
    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() != 3 {
        return false;
    }
    let mut numbers = [0u32; 3];
    for (i, part) in parts.iter().enumerate() {
        if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        match part.parse() {
            Ok(n) => numbers[i] = n,
            Err(_) => return false,
        }
    }
    numbers[1] < 60 && numbers[2] < 60
}

/// Schema for the add-lesson form
pub fn lesson_schema() -> Schema {
    Schema::new(vec![
        FieldRules {
            field: "title",
            label: "Title",
            rules: vec![Rule::Required],
        },
        FieldRules {
            field: "content",
            label: "Content",
            rules: vec![Rule::Required],
        },
        FieldRules {
            field: "author",
            label: "Author",
            rules: vec![Rule::Required],
        },
        FieldRules {
            field: "module",
            label: "Module",
            rules: vec![Rule::Required],
        },
        FieldRules {
            field: "type",
            label: "Type",
            rules: vec![Rule::Required, Rule::OneOf(crate::types::LESSON_TYPES)],
        },
        FieldRules {
            field: "duration",
            label: "Duration",
            rules: vec![Rule::Required, Rule::Duration],
        },
    ])
}

/// Schema for the edit-user form. The avatar is optional and not
/// validated here; it is read straight from the file input.
pub fn user_schema() -> Schema {
    Schema::new(vec![
        FieldRules {
            field: "name",
            label: "Name",
            rules: vec![Rule::Required],
        },
        FieldRules {
            field: "email",
            label: "Email",
            rules: vec![Rule::Required, Rule::Email],
        },
        FieldRules {
            field: "admin",
            label: "Role",
            rules: vec![Rule::Required, Rule::OneOf(&["true", "false"])],
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn complete_lesson() -> BTreeMap<String, String> {
        values(&[
            ("title", "Intro"),
            ("content", "Welcome"),
            ("author", "Ada"),
            ("module", "basics"),
            ("type", "video"),
            ("duration", "00:10:00"),
        ])
    }

    #[test]
    fn complete_lesson_passes() {
        assert!(lesson_schema().validate(&complete_lesson()).is_empty());
    }

    #[test]
    fn empty_lesson_reports_every_field() {
        let errors = lesson_schema().validate(&BTreeMap::new());
        for field in ["title", "content", "author", "module", "type", "duration"] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
        assert_eq!(errors["title"], "Title is required");
    }

    #[test]
    fn whitespace_does_not_satisfy_required() {
        let mut lesson = complete_lesson();
        lesson.insert("title".to_string(), "   ".to_string());
        let errors = lesson_schema().validate(&lesson);
        assert_eq!(errors.get("title").map(String::as_str), Some("Title is required"));
    }

    #[test]
    fn unknown_lesson_type_is_rejected() {
        let mut lesson = complete_lesson();
        lesson.insert("type".to_string(), "webinar".to_string());
        let errors = lesson_schema().validate(&lesson);
        assert_eq!(
            errors.get("type").map(String::as_str),
            Some("Type must be one of the listed options")
        );
    }

    #[test]
    fn duration_must_be_well_formed() {
        let bad = ["1:2:3", "00:60:00", "00:00:60", "0a:00:00", "10:00", "100:00:00"];
        for duration in bad {
            let mut lesson = complete_lesson();
            lesson.insert("duration".to_string(), duration.to_string());
            let errors = lesson_schema().validate(&lesson);
            assert!(errors.contains_key("duration"), "{duration} should fail");
        }
        let mut lesson = complete_lesson();
        lesson.insert("duration".to_string(), "23:59:59".to_string());
        assert!(lesson_schema().validate(&lesson).is_empty());
    }

    #[test]
    fn user_email_is_checked() {
        let mut user = values(&[
            ("name", "Grace"),
            ("email", "grace@example.com"),
            ("admin", "false"),
        ]);
        assert!(user_schema().validate(&user).is_empty());

        for email in ["grace", "grace@", "@example.com", "grace@example", "a b@c.d"] {
            user.insert("email".to_string(), email.to_string());
            let errors = user_schema().validate(&user);
            assert_eq!(
                errors.get("email").map(String::as_str),
                Some("Enter a valid email address"),
                "{email} should fail"
            );
        }
    }

    #[test]
    fn required_wins_over_shape_rules() {
        let user = values(&[("name", "Grace"), ("email", ""), ("admin", "true")]);
        let errors = user_schema().validate(&user);
        assert_eq!(errors.get("email").map(String::as_str), Some("Email is required"));
    }

    #[test]
    fn admin_flag_only_accepts_booleans() {
        let user = values(&[
            ("name", "Grace"),
            ("email", "grace@example.com"),
            ("admin", "maybe"),
        ]);
        let errors = user_schema().validate(&user);
        assert!(errors.contains_key("admin"));
    }
}
