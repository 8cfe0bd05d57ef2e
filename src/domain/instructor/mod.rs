//! Instructor domain module.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{CourseId, InstructorId};

/// Instructor entity - teaches a set of courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: InstructorId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_hire: NaiveDate,
    pub course_ids: HashSet<CourseId>,
}

impl Instructor {
    pub fn new(
        id: InstructorId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_hire: NaiveDate,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_hire,
            course_ids: HashSet::new(),
        }
    }

    pub fn assign_course(&mut self, course_id: CourseId) {
        self.course_ids.insert(course_id);
    }
}
