//! Route paths used across the console
//!
//! Destinations are built here rather than inline so navigation targets
//! stay consistent between links, redirects and post-submit routing.

pub const COURSES: &str = "/admin/courses";
pub const USERS: &str = "/admin/users";

/// Add-lesson form for a course
pub fn new_lesson(course_id: &str) -> String {
    format!("{}/{}/lessons/new", COURSES, urlencoding::encode(course_id))
}

/// Lessons of one module within a course
pub fn module_lessons(course_id: &str, module_code: &str) -> String {
    format!(
        "{}/{}/modules/{}",
        COURSES,
        urlencoding::encode(course_id),
        urlencoding::encode(module_code)
    )
}

/// Edit form for a user account
pub fn edit_user(user_id: &str) -> String {
    format!("{}/{}/edit", USERS, urlencoding::encode(user_id))
}
