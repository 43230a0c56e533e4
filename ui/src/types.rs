//! Shared types for the Paideia admin console
//!
//! These types mirror the platform API response structures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::form::SelectOption;

/// Generic API response wrapper
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// Lesson types the platform knows how to render
pub const LESSON_TYPES: &[&str] = &["video", "article", "quiz"];

pub fn lesson_type_options() -> Vec<SelectOption> {
    LESSON_TYPES
        .iter()
        .map(|t| SelectOption::new(*t, *t, *t))
        .collect()
}

/// A course as returned by the platform API
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub modules: Vec<CourseModule>,
}

impl Course {
    /// Select options for the module picker, one per module.
    /// The option value is the module code the lesson will be filed under.
    pub fn module_options(&self) -> Vec<SelectOption> {
        self.modules
            .iter()
            .map(|m| SelectOption::new(m.title.clone(), m.code.clone(), m.id.clone()))
            .collect()
    }
}

/// A module inside a course
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct CourseModule {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub code: String,
}

/// A lesson as returned by the platform API
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Lesson {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    /// Code of the module this lesson belongs to
    pub module: String,
    #[serde(rename = "type")]
    pub lesson_type: String,
    /// Running time in HH:MM:SS
    pub duration: String,
    /// Id of the owning course
    pub course: String,
}

/// Request body for creating a lesson
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LessonPayload {
    pub title: String,
    pub content: String,
    pub author: String,
    pub module: String,
    #[serde(rename = "type")]
    pub lesson_type: String,
    pub duration: String,
    pub course: String,
}

impl LessonPayload {
    /// Builds the request body from submitted form values. The owning
    /// course comes from the route, not from a form field.
    pub fn from_form(values: &BTreeMap<String, String>, course_id: &str) -> Self {
        let field = |name: &str| values.get(name).cloned().unwrap_or_default();
        Self {
            title: field("title"),
            content: field("content"),
            author: field("author"),
            module: field("module"),
            lesson_type: field("type"),
            duration: field("duration"),
            course: course_id.to_string(),
        }
    }
}

/// A platform user account
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Form values for editing this account. The avatar is a file input
    /// and cannot be pre-populated, so it is not included.
    pub fn form_entries(&self) -> Vec<(String, String)> {
        vec![
            ("name".to_string(), self.name.clone()),
            ("email".to_string(), self.email.clone()),
            ("admin".to_string(), self.admin.to_string()),
        ]
    }
}

/// Request body for updating a user
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub admin: bool,
    /// New avatar as a data URL, only sent when the admin picked a file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserPayload {
    pub fn from_form(values: &BTreeMap<String, String>, avatar: Option<String>) -> Self {
        let field = |name: &str| values.get(name).cloned().unwrap_or_default();
        Self {
            name: field("name"),
            email: field("email"),
            admin: field("admin") == "true",
            avatar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn lesson_payload_takes_course_from_route() {
        let values = values(&[
            ("title", "Intro"),
            ("content", "Welcome to the course"),
            ("author", "Ada"),
            ("module", "mod-1"),
            ("type", "video"),
            ("duration", "00:12:30"),
        ]);
        let payload = LessonPayload::from_form(&values, "course-9");
        assert_eq!(payload.course, "course-9");
        assert_eq!(payload.module, "mod-1");
        assert_eq!(payload.lesson_type, "video");
        assert_eq!(payload.duration, "00:12:30");
    }

    #[test]
    fn lesson_payload_serializes_type_field() {
        let values = values(&[("title", "Intro"), ("type", "quiz")]);
        let payload = LessonPayload::from_form(&values, "c1");
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["type"], "quiz");
        assert_eq!(body["course"], "c1");
        assert!(body.get("lesson_type").is_none());
    }

    #[test]
    fn user_form_entries_cover_every_editable_field() {
        let user = User {
            id: "u1".to_string(),
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            admin: true,
            avatar: None,
        };
        let entries = user.form_entries();
        assert_eq!(
            entries,
            vec![
                ("name".to_string(), "Grace".to_string()),
                ("email".to_string(), "grace@example.com".to_string()),
                ("admin".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn user_payload_parses_admin_flag() {
        let admin = UserPayload::from_form(&values(&[("admin", "true")]), None);
        assert!(admin.admin);
        let common = UserPayload::from_form(&values(&[("admin", "false")]), None);
        assert!(!common.admin);
    }

    #[test]
    fn user_payload_omits_avatar_unless_picked() {
        let without = UserPayload::from_form(&values(&[("name", "Grace")]), None);
        let body = serde_json::to_value(&without).unwrap();
        assert!(body.get("avatar").is_none());

        let with = UserPayload::from_form(
            &values(&[("name", "Grace")]),
            Some("data:image/png;base64,AAAA".to_string()),
        );
        let body = serde_json::to_value(&with).unwrap();
        assert_eq!(body["avatar"], "data:image/png;base64,AAAA");
    }

    #[test]
    fn module_options_carry_label_value_and_id() {
        let course: Course = serde_json::from_value(json!({
            "_id": "c1",
            "title": "Rust 101",
            "modules": [
                {"_id": "m1", "title": "Basics", "code": "basics"},
                {"_id": "m2", "title": "Ownership", "code": "ownership"}
            ]
        }))
        .unwrap();
        let options = course.module_options();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].label, "Basics");
        assert_eq!(options[0].value, "basics");
        assert_eq!(options[0].id, "m1");
    }

    #[test]
    fn course_without_modules_deserializes() {
        let course: Course =
            serde_json::from_value(json!({"_id": "c2", "title": "Empty"})).unwrap();
        assert!(course.modules.is_empty());
        assert!(course.module_options().is_empty());
    }
}
