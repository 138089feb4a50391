//! Enrollment-specific rules: the unique (student, course) pair, the join
//! expansion, and the immutability of the parent references on update.

use sqlx::PgPool;

use registrar_db::models::course::CreateCourse;
use registrar_db::models::enrollment::{CreateEnrollment, UpdateEnrollment};
use registrar_db::models::student::CreateStudent;
use registrar_db::repositories::{CourseRepo, EnrollmentRepo, StudentRepo};

async fn seed_pair(pool: &PgPool) -> (i64, i64) {
    let student = StudentRepo::create(
        pool,
        &CreateStudent {
            student_code: "STU001".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@x.edu".to_string(),
            enrollment_date: None,
            status: None,
            phone: None,
            date_of_birth: None,
            address: None,
        },
    )
    .await
    .unwrap();

    let course = CourseRepo::create(
        pool,
        &CreateCourse {
            course_code: "CS101".to_string(),
            title: "Intro".to_string(),
            description: None,
            credits: 3,
            department: None,
            max_capacity: 30,
            status: None,
        },
    )
    .await
    .unwrap();

    (student.id, course.id)
}

fn enrollment(student_id: i64, course_id: i64) -> CreateEnrollment {
    CreateEnrollment {
        student_id,
        course_id,
        status: None,
        grade: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_pair_hits_named_constraint(pool: PgPool) {
    let (student_id, course_id) = seed_pair(&pool).await;

    EnrollmentRepo::create(&pool, &enrollment(student_id, course_id))
        .await
        .unwrap();

    let err = EnrollmentRepo::create(&pool, &enrollment(student_id, course_id))
        .await
        .unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_enrollments_student_course"));
        }
        other => panic!("expected database error, got {other:?}"),
    }

    // No second row was inserted.
    let count = EnrollmentRepo::count(&pool, None).await.unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_parent_is_foreign_key_violation(pool: PgPool) {
    let (student_id, _) = seed_pair(&pool).await;

    let err = EnrollmentRepo::create(&pool, &enrollment(student_id, 999_999))
        .await
        .unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            // 23503 = foreign_key_violation
            assert_eq!(db_err.code().as_deref(), Some("23503"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_detail_join_embeds_summaries(pool: PgPool) {
    let (student_id, course_id) = seed_pair(&pool).await;
    let created = EnrollmentRepo::create(&pool, &enrollment(student_id, course_id))
        .await
        .unwrap();
    assert_eq!(created.status, "enrolled"); // default

    let detail = EnrollmentRepo::find_detail_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("detail should exist");
    assert_eq!(detail.student_code, "STU001");
    assert_eq!(detail.student_first_name, "Ada");
    assert_eq!(detail.student_last_name, "Lovelace");
    assert_eq!(detail.course_code, "CS101");
    assert_eq!(detail.course_title, "Intro");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_touches_only_grade_and_status(pool: PgPool) {
    let (student_id, course_id) = seed_pair(&pool).await;
    let created = EnrollmentRepo::create(&pool, &enrollment(student_id, course_id))
        .await
        .unwrap();

    let updated = EnrollmentRepo::update(
        &pool,
        created.id,
        &UpdateEnrollment {
            status: "completed".to_string(),
            grade: Some("A-".to_string()),
        },
    )
    .await
    .unwrap()
    .expect("enrollment should exist");

    assert_eq!(updated.status, "completed");
    assert_eq!(updated.grade.as_deref(), Some("A-"));
    // Parent references are unchanged by design.
    assert_eq!(updated.student_id, student_id);
    assert_eq!(updated.course_id, course_id);
    assert_eq!(updated.enrolled_at, created.enrolled_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_matches_joined_fields(pool: PgPool) {
    let (student_id, course_id) = seed_pair(&pool).await;
    EnrollmentRepo::create(&pool, &enrollment(student_id, course_id))
        .await
        .unwrap();

    // Matches via the joined student name.
    assert_eq!(EnrollmentRepo::count(&pool, Some("lovelace")).await.unwrap(), 1);
    // Matches via the joined course title.
    assert_eq!(EnrollmentRepo::count(&pool, Some("intro")).await.unwrap(), 1);
    // No match.
    assert_eq!(EnrollmentRepo::count(&pool, Some("chemistry")).await.unwrap(), 0);

    let page = EnrollmentRepo::list_page(&pool, Some("cs101"), 10, 0)
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
}
