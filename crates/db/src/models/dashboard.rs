//! Dashboard summary model.

use serde::Serialize;

/// The four summary figures rendered on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_students: i64,
    pub active_students: i64,
    pub total_courses: i64,
    pub total_enrollments: i64,
}
