/// Conversions between `courses` rows and the `Course` aggregate
use crate::log_error;
use crate::modules::course::domain::{
    Course, CourseId, Duration, Money, NewCourse, RepositoryError, Slug,
};
use crate::modules::course::infrastructure::models::{
    CourseChangeset, CourseModel, NewCourseModel,
};

/// Rebuild the aggregate from a row, re-running domain validation.
///
/// A row that no longer satisfies the invariants is reported as
/// `CorruptRecord` rather than silently patched.
pub fn model_to_entity(model: CourseModel) -> Result<Course, RepositoryError> {
    let id = model.id.to_string();
    let corrupt = |reason: String| {
        log_error!("Course row {} failed validation: {}", id, reason);
        RepositoryError::CorruptRecord {
            id: id.clone(),
            reason,
        }
    };

    let minutes = u32::try_from(model.duration_minutes)
        .map_err(|_| corrupt(format!("negative duration {}", model.duration_minutes)))?;
    let slug = Slug::new(&model.slug).map_err(|e| corrupt(e.to_string()))?;
    let price =
        Money::from_cents(model.price_cents, &model.currency).map_err(|e| corrupt(e.to_string()))?;

    Course::restore(
        CourseId::from_uuid(model.id),
        NewCourse {
            title: model.title,
            slug,
            description: model.description,
            difficulty: model.difficulty,
            duration: Duration::from_minutes(minutes),
            price,
            instructor: model.instructor,
            published: model.published,
            featured: model.featured,
        },
        model.created_at,
        model.updated_at,
    )
    .map_err(|e| corrupt(e.to_string()))
}

/// Column value for a duration; the column is a signed 32-bit integer
fn duration_column(course: &Course) -> Result<i32, RepositoryError> {
    let minutes = course.duration().minutes();
    i32::try_from(minutes).map_err(|_| {
        RepositoryError::Query(format!(
            "duration of {} minutes for course {} does not fit the duration_minutes column",
            minutes,
            course.id()
        ))
    })
}

pub fn entity_to_new_model(course: &Course) -> Result<NewCourseModel, RepositoryError> {
    Ok(NewCourseModel {
        id: course.id().into_uuid(),
        title: course.title().to_string(),
        slug: course.slug().to_string(),
        description: course.description().to_string(),
        difficulty: course.difficulty(),
        duration_minutes: duration_column(course)?,
        price_cents: course.price().amount(),
        currency: course.price().currency().to_string(),
        instructor: course.instructor().to_string(),
        published: course.is_published(),
        featured: course.is_featured(),
        created_at: course.created_at(),
        updated_at: course.updated_at(),
    })
}

pub fn entity_to_changeset(course: &Course) -> Result<CourseChangeset, RepositoryError> {
    Ok(CourseChangeset {
        title: course.title().to_string(),
        slug: course.slug().to_string(),
        description: course.description().to_string(),
        difficulty: course.difficulty(),
        duration_minutes: duration_column(course)?,
        price_cents: course.price().amount(),
        currency: course.price().currency().to_string(),
        instructor: course.instructor().to_string(),
        published: course.is_published(),
        featured: course.is_featured(),
        updated_at: course.updated_at(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::course::domain::{CourseChanges, Difficulty};
    use chrono::Utc;
    use uuid::Uuid;

    fn row() -> CourseModel {
        let now = Utc::now();
        CourseModel {
            id: Uuid::new_v4(),
            title: "Databases".to_string(),
            slug: "databases".to_string(),
            description: "Indexes and query plans".to_string(),
            difficulty: Difficulty::Expert,
            duration_minutes: 600,
            price_cents: 12900,
            currency: "EUR".to_string(),
            instructor: "Edgar Codd".to_string(),
            published: true,
            featured: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_row_to_entity_and_back() {
        let model = row();
        let id = model.id;
        let course = model_to_entity(model).unwrap();

        assert_eq!(course.id().as_uuid(), &id);
        assert_eq!(course.duration().format_human_readable(), "10 hours");
        assert_eq!(course.price().format(), "€129.00");

        let new_model = entity_to_new_model(&course).unwrap();
        assert_eq!(new_model.id, id);
        assert_eq!(new_model.price_cents, 12900);
        assert_eq!(new_model.difficulty, Difficulty::Expert);

        let changeset = entity_to_changeset(&course).unwrap();
        assert_eq!(changeset.slug, "databases");
    }

    #[test]
    fn test_longest_duration_fits_column() {
        let course = model_to_entity(CourseModel {
            duration_minutes: i32::MAX,
            ..row()
        })
        .unwrap();
        let revised = course
            .revise(CourseChanges {
                duration: Some(Duration::from_minutes(u32::MAX)),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(entity_to_new_model(&revised).unwrap().duration_minutes, i32::MAX);
    }

    #[test]
    fn test_invalid_row_is_corrupt_record() {
        let model = CourseModel {
            price_cents: -1,
            ..row()
        };
        assert!(matches!(
            model_to_entity(model),
            Err(RepositoryError::CorruptRecord { .. })
        ));

        let model = CourseModel {
            slug: "Bad Slug".to_string(),
            ..row()
        };
        assert!(model_to_entity(model).is_err());
    }
}
