//! InstructorWeeksHandler - weeks in which an instructor taught on a given
//! support medium.
//!
//! Read-only aggregation over the instructor's courses and their
//! registrations.

use std::sync::Arc;

use crate::domain::course::Support;
use crate::domain::foundation::{DomainError, ErrorCode, InstructorId};
use crate::ports::{CourseRepository, InstructorRepository, RegistrationRepository};

/// Query for the distinct weeks an instructor taught courses of a medium.
#[derive(Debug, Clone)]
pub struct InstructorWeeksQuery {
    pub instructor_id: InstructorId,
    pub support: Support,
}

/// Handler aggregating registration weeks per instructor and medium.
pub struct InstructorWeeksHandler {
    instructors: Arc<dyn InstructorRepository>,
    courses: Arc<dyn CourseRepository>,
    registrations: Arc<dyn RegistrationRepository>,
}

impl InstructorWeeksHandler {
    pub fn new(
        instructors: Arc<dyn InstructorRepository>,
        courses: Arc<dyn CourseRepository>,
        registrations: Arc<dyn RegistrationRepository>,
    ) -> Self {
        Self {
            instructors,
            courses,
            registrations,
        }
    }

    /// Distinct week numbers, ascending.
    pub async fn handle(&self, query: InstructorWeeksQuery) -> Result<Vec<u32>, DomainError> {
        let Some(instructor) = self.instructors.find_by_id(&query.instructor_id).await? else {
            return Err(DomainError::new(
                ErrorCode::InstructorNotFound,
                format!("Instructor {} not found", query.instructor_id),
            ));
        };

        let mut weeks = Vec::new();
        for course_id in &instructor.course_ids {
            let Some(course) = self.courses.find_by_id(course_id).await? else {
                continue;
            };
            if course.support == query.support {
                weeks.extend(self.registrations.weeks_for_course(course_id).await?);
            }
        }

        weeks.sort_unstable();
        weeks.dedup();
        Ok(weeks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{
        InMemoryCourseRepository, InMemoryInstructorRepository, InMemoryRegistrationRepository,
    };
    use crate::domain::course::{Course, CourseCategory};
    use crate::domain::foundation::{CourseId, RegistrationId, SkierId};
    use crate::domain::instructor::Instructor;
    use crate::domain::registration::Registration;
    use chrono::NaiveDate;

    struct Fixture {
        instructors: Arc<InMemoryInstructorRepository>,
        courses: Arc<InMemoryCourseRepository>,
        registrations: Arc<InMemoryRegistrationRepository>,
        handler: InstructorWeeksHandler,
    }

    impl Fixture {
        fn new() -> Self {
            let instructors = Arc::new(InMemoryInstructorRepository::new());
            let courses = Arc::new(InMemoryCourseRepository::new());
            let registrations = Arc::new(InMemoryRegistrationRepository::new());
            let handler = InstructorWeeksHandler::new(
                instructors.clone(),
                courses.clone(),
                registrations.clone(),
            );
            Self {
                instructors,
                courses,
                registrations,
                handler,
            }
        }

        async fn add_course(&self, support: Support) -> CourseId {
            let course = Course::new(
                CourseId::new(),
                CourseCategory::CollectiveAdult,
                support,
                1,
                8_000,
                1,
            );
            let id = course.id;
            self.courses.save(&course).await.unwrap();
            id
        }

        async fn register_weeks(&self, course_id: CourseId, weeks: &[u32]) {
            for &week in weeks {
                self.registrations
                    .save(&Registration::complete(
                        RegistrationId::new(),
                        week,
                        SkierId::new(),
                        course_id,
                    ))
                    .await
                    .unwrap();
            }
        }
    }

    #[tokio::test]
    async fn aggregates_distinct_sorted_weeks_for_medium() {
        let fx = Fixture::new();
        let ski_a = fx.add_course(Support::Ski).await;
        let ski_b = fx.add_course(Support::Ski).await;
        let snowboard = fx.add_course(Support::Snowboard).await;

        fx.register_weeks(ski_a, &[5, 2, 5]).await;
        fx.register_weeks(ski_b, &[2, 9]).await;
        fx.register_weeks(snowboard, &[1]).await;

        let mut instructor = Instructor::new(
            InstructorId::new(),
            "Paul",
            "Girard",
            NaiveDate::from_ymd_opt(2019, 12, 1).unwrap(),
        );
        instructor.assign_course(ski_a);
        instructor.assign_course(ski_b);
        instructor.assign_course(snowboard);
        fx.instructors.save(&instructor).await.unwrap();

        let weeks = fx
            .handler
            .handle(InstructorWeeksQuery {
                instructor_id: instructor.id,
                support: Support::Ski,
            })
            .await
            .unwrap();

        assert_eq!(weeks, vec![2, 5, 9]);
    }

    #[tokio::test]
    async fn unknown_instructor_fails() {
        let fx = Fixture::new();
        let err = fx
            .handler
            .handle(InstructorWeeksQuery {
                instructor_id: InstructorId::new(),
                support: Support::Ski,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InstructorNotFound);
    }

    #[tokio::test]
    async fn instructor_without_matching_courses_yields_empty() {
        let fx = Fixture::new();
        let snowboard = fx.add_course(Support::Snowboard).await;
        fx.register_weeks(snowboard, &[4]).await;

        let mut instructor = Instructor::new(
            InstructorId::new(),
            "Paul",
            "Girard",
            NaiveDate::from_ymd_opt(2019, 12, 1).unwrap(),
        );
        instructor.assign_course(snowboard);
        fx.instructors.save(&instructor).await.unwrap();

        let weeks = fx
            .handler
            .handle(InstructorWeeksQuery {
                instructor_id: instructor.id,
                support: Support::Ski,
            })
            .await
            .unwrap();
        assert!(weeks.is_empty());
    }
}
