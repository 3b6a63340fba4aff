use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tokio::task;

use crate::modules::course::domain::{
    Course, CourseId, CourseQuery, CourseRepository, Difficulty, RepositoryError,
    RepositoryResult,
};
use crate::modules::course::infrastructure::mapper;
use crate::modules::course::infrastructure::models::CourseModel;
use crate::schema::courses;
use crate::shared::infrastructure::{Database, DbConnection};
use crate::shared::utils::logger::LogContext;

const SLUG_UNIQUE_CONSTRAINT: &str = "courses_slug_key";

/// `CourseRepository` backed by PostgreSQL through Diesel.
///
/// Diesel is synchronous, so every call checks a connection out of the pool
/// and runs on the blocking thread pool.
pub struct PgCourseRepository {
    db: Arc<Database>,
}

impl PgCourseRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Run `op` with a pooled connection on the blocking pool
    async fn with_conn<T, F>(&self, operation: &'static str, op: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut DbConnection) -> RepositoryResult<T> + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        let started = Instant::now();

        let result = task::spawn_blocking(move || {
            let mut conn = db
                .get_connection()
                .map_err(|e| RepositoryError::Connection(e.to_string()))?;
            op(&mut conn)
        })
        .await
        .map_err(|e| RepositoryError::TaskJoin(e.to_string()))?;

        LogContext::db_operation(
            operation,
            "courses",
            Some(started.elapsed().as_millis() as u64),
        );
        result
    }

    async fn load_where(
        &self,
        operation: &'static str,
        query: CourseQuery,
    ) -> RepositoryResult<Vec<Course>> {
        let models = self
            .with_conn(operation, move |conn| {
                let mut q = courses::table
                    .select(CourseModel::as_select())
                    .into_boxed();

                if let Some(published) = query.published {
                    q = q.filter(courses::published.eq(published));
                }
                if let Some(featured) = query.featured {
                    q = q.filter(courses::featured.eq(featured));
                }
                if let Some(difficulty) = query.difficulty {
                    q = q.filter(courses::difficulty.eq(difficulty));
                }
                if let Some(offset) = query.offset {
                    q = q.offset(i64::from(offset));
                }
                if let Some(limit) = query.limit {
                    q = q.limit(i64::from(limit));
                }

                q.order((courses::created_at.desc(), courses::id.asc()))
                    .load::<CourseModel>(conn)
                    .map_err(query_error)
            })
            .await?;

        to_entities(models)
    }
}

fn query_error(err: DieselError) -> RepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
            if info.constraint_name() == Some(SLUG_UNIQUE_CONSTRAINT) =>
        {
            RepositoryError::DuplicateSlug(info.message().to_string())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            RepositoryError::Connection(info.message().to_string())
        }
        other => RepositoryError::Query(other.to_string()),
    }
}

fn to_entities(models: Vec<CourseModel>) -> RepositoryResult<Vec<Course>> {
    models.into_iter().map(mapper::model_to_entity).collect()
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn find_by_id(&self, id: &CourseId) -> RepositoryResult<Option<Course>> {
        let id = id.into_uuid();
        let model = self
            .with_conn("course find_by_id", move |conn| {
                courses::table
                    .find(id)
                    .select(CourseModel::as_select())
                    .first::<CourseModel>(conn)
                    .optional()
                    .map_err(query_error)
            })
            .await?;

        model.map(mapper::model_to_entity).transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> RepositoryResult<Option<Course>> {
        let slug = slug.to_string();
        let model = self
            .with_conn("course find_by_slug", move |conn| {
                courses::table
                    .filter(courses::slug.eq(slug))
                    .select(CourseModel::as_select())
                    .first::<CourseModel>(conn)
                    .optional()
                    .map_err(query_error)
            })
            .await?;

        model.map(mapper::model_to_entity).transpose()
    }

    async fn find_all(&self, query: &CourseQuery) -> RepositoryResult<Vec<Course>> {
        self.load_where("course find_all", *query).await
    }

    async fn find_published(&self) -> RepositoryResult<Vec<Course>> {
        self.load_where("course find_published", CourseQuery::published())
            .await
    }

    async fn find_featured(&self) -> RepositoryResult<Vec<Course>> {
        let query = CourseQuery {
            featured: Some(true),
            ..Default::default()
        };
        self.load_where("course find_featured", query).await
    }

    async fn find_by_difficulty(&self, difficulty: Difficulty) -> RepositoryResult<Vec<Course>> {
        let query = CourseQuery {
            difficulty: Some(difficulty),
            ..Default::default()
        };
        self.load_where("course find_by_difficulty", query).await
    }

    async fn save(&self, course: &Course) -> RepositoryResult<Course> {
        let new_model = mapper::entity_to_new_model(course)?;
        let changeset = mapper::entity_to_changeset(course)?;
        let slug = course.slug().to_string();

        let saved = self
            .with_conn("course save", move |conn| {
                diesel::insert_into(courses::table)
                    .values(&new_model)
                    .on_conflict(courses::id)
                    .do_update()
                    .set(&changeset)
                    .returning(CourseModel::as_returning())
                    .get_result::<CourseModel>(conn)
                    .map_err(|e| match query_error(e) {
                        RepositoryError::DuplicateSlug(_) => RepositoryError::DuplicateSlug(slug),
                        other => other,
                    })
            })
            .await?;

        mapper::model_to_entity(saved)
    }

    async fn delete(&self, id: &CourseId) -> RepositoryResult<bool> {
        let id = id.into_uuid();
        let deleted = self
            .with_conn("course delete", move |conn| {
                diesel::delete(courses::table.find(id))
                    .execute(conn)
                    .map_err(query_error)
            })
            .await?;

        Ok(deleted > 0)
    }

    async fn exists_by_slug(&self, slug: &str) -> RepositoryResult<bool> {
        let slug = slug.to_string();
        self.with_conn("course exists_by_slug", move |conn| {
            diesel::select(diesel::dsl::exists(
                courses::table.filter(courses::slug.eq(slug)),
            ))
            .get_result::<bool>(conn)
            .map_err(query_error)
        })
        .await
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let n = self
            .with_conn("course count", |conn| {
                courses::table
                    .count()
                    .get_result::<i64>(conn)
                    .map_err(query_error)
            })
            .await?;
        Ok(n.max(0) as u64)
    }

    async fn count_published(&self) -> RepositoryResult<u64> {
        let n = self
            .with_conn("course count_published", |conn| {
                courses::table
                    .filter(courses::published.eq(true))
                    .count()
                    .get_result::<i64>(conn)
                    .map_err(query_error)
            })
            .await?;
        Ok(n.max(0) as u64)
    }
}
