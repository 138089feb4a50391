//! Repository structs, one per table.

mod course_repo;
mod dashboard_repo;
mod enrollment_repo;
mod student_repo;
mod user_repo;

pub use course_repo::CourseRepo;
pub use dashboard_repo::DashboardRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use student_repo::StudentRepo;
pub use user_repo::UserRepo;

/// Escape ILIKE metacharacters so a search term matches literally.
///
/// Postgres treats backslash as the default LIKE escape character, so
/// `\`, `%`, and `_` in the user's term must be escaped before it is
/// spliced into a `'%' || $n || '%'` pattern.
pub(crate) fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
