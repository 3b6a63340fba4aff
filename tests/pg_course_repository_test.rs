/// Postgres course repository tests
///
/// Run only when TEST_DATABASE_URL points at a disposable database.
mod utils;

use academy_lib::modules::course::domain::{
    Course, CourseChanges, CourseQuery, CourseRepository, Difficulty, RepositoryError,
};
use uuid::Uuid;
use academy_lib::modules::course::PgCourseRepository;
use chrono::{TimeZone, Utc};
use utils::db;
use utils::factories::CourseFactory;

macro_rules! repo_or_skip {
    () => {
        match db::test_database() {
            Some(database) => {
                db::clean_test_db(&database);
                PgCourseRepository::new(database)
            }
            None => {
                eprintln!("TEST_DATABASE_URL not set; skipping");
                return;
            }
        }
    };
}

#[tokio::test]
async fn save_and_find_round_trip() {
    let _guard = db::acquire_test_lock();
    let repo = repo_or_skip!();

    let course = CourseFactory::new()
        .slug("pg-round-trip")
        .price_cents(120000, "CHF")
        .difficulty(Difficulty::Expert)
        .build();
    let saved = repo.save(&course).await.unwrap();
    assert_eq!(saved.id(), course.id());

    let by_id = repo.find_by_id(course.id()).await.unwrap().unwrap();
    assert_eq!(by_id.price().format(), "1200.00 CHF");
    assert_eq!(by_id.difficulty(), Difficulty::Expert);

    let by_slug = repo.find_by_slug("pg-round-trip").await.unwrap().unwrap();
    assert_eq!(by_slug.id(), course.id());
    assert!(repo.find_by_slug("absent").await.unwrap().is_none());
}

#[tokio::test]
async fn save_upserts_existing_row() {
    let _guard = db::acquire_test_lock();
    let repo = repo_or_skip!();

    let course = CourseFactory::new().build();
    repo.save(&course).await.unwrap();

    let revised = course
        .revise(CourseChanges {
            title: Some("Revised".to_string()),
            published: Some(true),
            ..Default::default()
        })
        .unwrap();
    repo.save(&revised).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 1);
    assert_eq!(repo.count_published().await.unwrap(), 1);
    let stored = repo.find_by_id(revised.id()).await.unwrap().unwrap();
    assert_eq!(stored.title(), "Revised");
}

#[tokio::test]
async fn duplicate_slug_rejected() {
    let _guard = db::acquire_test_lock();
    let repo = repo_or_skip!();

    repo.save(&CourseFactory::new().slug("dup").build())
        .await
        .unwrap();
    let err = repo
        .save(&CourseFactory::new().slug("dup").build())
        .await
        .unwrap_err();

    assert_eq!(err, RepositoryError::DuplicateSlug("dup".to_string()));
    assert!(repo.exists_by_slug("dup").await.unwrap());
}

#[tokio::test]
async fn filters_and_pagination() {
    let _guard = db::acquire_test_lock();
    let repo = repo_or_skip!();

    for course in [
        CourseFactory::new().difficulty(Difficulty::Beginner).published().featured().build(),
        CourseFactory::new().difficulty(Difficulty::Beginner).published().build(),
        CourseFactory::new().difficulty(Difficulty::Advanced).build(),
    ] {
        repo.save(&course).await.unwrap();
    }

    assert_eq!(repo.find_published().await.unwrap().len(), 2);
    assert_eq!(repo.find_featured().await.unwrap().len(), 1);
    assert_eq!(
        repo.find_by_difficulty(Difficulty::Beginner).await.unwrap().len(),
        2
    );

    let page = repo
        .find_all(&CourseQuery {
            limit: Some(2),
            offset: Some(2),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
}

#[tokio::test]
async fn delete_reports_removal() {
    let _guard = db::acquire_test_lock();
    let repo = repo_or_skip!();

    let course = CourseFactory::new().build();
    repo.save(&course).await.unwrap();

    assert!(repo.delete(course.id()).await.unwrap());
    assert!(!repo.delete(course.id()).await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 0);
}

fn slugs(courses: &[Course]) -> Vec<&str> {
    courses.iter().map(|c| c.slug().as_str()).collect()
}

#[tokio::test]
async fn listing_is_newest_first_with_id_tiebreak() {
    let _guard = db::acquire_test_lock();
    let repo = repo_or_skip!();

    let at = |secs: i64| Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap();
    // "tie-b" and "tie-a" share a timestamp; the lower id comes first
    for course in [
        CourseFactory::new().slug("oldest").build_restored(Uuid::from_u128(1), at(0)),
        CourseFactory::new().slug("tie-b").build_restored(Uuid::from_u128(3), at(100)),
        CourseFactory::new().slug("newest").build_restored(Uuid::from_u128(2), at(200)),
        CourseFactory::new().slug("tie-a").build_restored(Uuid::from_u128(4), at(100)),
    ] {
        repo.save(&course).await.unwrap();
    }

    let all = repo.find_all(&CourseQuery::default()).await.unwrap();
    assert_eq!(slugs(&all), vec!["newest", "tie-b", "tie-a", "oldest"]);

    let page = repo
        .find_all(&CourseQuery {
            limit: Some(2),
            offset: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(slugs(&page), vec!["tie-b", "tie-a"]);
}
