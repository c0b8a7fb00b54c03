use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::{debug, warn};

use super::{next_key, Course, CourseKey, Describe, Grade, Person, PersonInfo};
use crate::error::{CoreError, Result};

/// Opaque identity of a [`Student`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentKey(u64);

/// A person enrolled in courses
///
/// Holds the enrollment list (in first-enrollment order, no duplicates),
/// one letter grade per enrolled course and one presence flag per date.
/// Not `Clone`: the identity key must stay unique to one record set.
#[derive(Debug)]
pub struct Student {
    key: StudentKey,
    person: Person,
    student_id: String,
    courses: Vec<Course>,
    grades: HashMap<CourseKey, Grade>,
    attendance: IndexMap<NaiveDate, bool>,
}

/// Snapshot of a [`Student`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentInfo {
    #[serde(flatten)]
    pub person: PersonInfo,
    pub student_id: String,
    pub enrolled_courses: Vec<String>,
    pub gpa: f64,
}

impl Student {
    pub fn new(name: impl Into<String>, age: i64, student_id: impl Into<String>) -> Self {
        Self {
            key: StudentKey(next_key()),
            person: Person::new(name, age),
            student_id: student_id.into(),
            courses: Vec::new(),
            grades: HashMap::new(),
            attendance: IndexMap::new(),
        }
    }

    pub fn key(&self) -> StudentKey {
        self.key
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// Enrolled courses in enrollment order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn is_enrolled(&self, course: &Course) -> bool {
        self.courses.contains(course)
    }

    /// Recorded grades, in enrollment order of their courses
    pub fn grades(&self) -> impl Iterator<Item = (&Course, &Grade)> {
        self.courses
            .iter()
            .filter_map(|course| self.grades.get(&course.key()).map(|grade| (course, grade)))
    }

    pub fn grade_for(&self, course: &Course) -> Option<&Grade> {
        self.grades.get(&course.key())
    }

    pub fn add_course(&mut self, course: &Course) -> Result<()> {
        if self.is_enrolled(course) {
            warn!(student_id = %self.student_id, course_code = %course.course_code(), "Duplicate enrollment rejected");
            return Err(CoreError::DuplicateEnrollment {
                student_id: self.student_id.clone(),
                course_code: course.course_code().to_string(),
            });
        }
        debug!(student_id = %self.student_id, course_code = %course.course_code(), "Enrolled in course");
        self.courses.push(course.clone());
        Ok(())
    }

    /// Record or overwrite the grade for an enrolled course.
    ///
    /// Letters outside the grading scale are stored as given and count as
    /// zero quality points in [`Student::calculate_gpa`].
    pub fn add_grade(&mut self, course: &Course, grade: impl Into<Grade>) -> Result<()> {
        if !self.is_enrolled(course) {
            warn!(student_id = %self.student_id, course_code = %course.course_code(), "Grade for unenrolled course rejected");
            return Err(CoreError::NotEnrolled {
                student_id: self.student_id.clone(),
                course_code: course.course_code().to_string(),
            });
        }

        let grade: Grade = grade.into();
        if !grade.is_recognized() {
            warn!(student_id = %self.student_id, course_code = %course.course_code(), %grade, "Unrecognized grade recorded with zero quality points");
        }
        debug!(student_id = %self.student_id, course_code = %course.course_code(), %grade, "Grade recorded");
        self.grades.insert(course.key(), grade);
        Ok(())
    }

    /// Credit-weighted grade point average rounded to two decimals.
    ///
    /// Returns 0.0 when nothing is graded or the graded credits do not sum
    /// to a positive number.
    pub fn calculate_gpa(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }

        let (total_points, total_credits) = self.grades().fold(
            (0.0_f64, 0_i128),
            |(points, credits), (course, grade)| {
                (
                    points + grade.quality_points() * course.credits() as f64,
                    credits + i128::from(course.credits()),
                )
            },
        );

        if total_credits > 0 {
            round2(total_points / total_credits as f64)
        } else {
            0.0
        }
    }

    /// Set the presence flag for `date`; the last write for a date wins and
    /// keeps the date's original position.
    pub fn mark_attendance(&mut self, date: NaiveDate, present: bool) {
        debug!(student_id = %self.student_id, %date, present, "Student attendance marked");
        self.attendance.insert(date, present);
    }

    /// Presence flags in first-recorded date order
    pub fn attendance(&self) -> &IndexMap<NaiveDate, bool> {
        &self.attendance
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Student {}

impl std::hash::Hash for Student {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl Describe for Student {
    type Info = StudentInfo;

    /// GPA is recomputed on every call.
    fn info(&self) -> StudentInfo {
        StudentInfo {
            person: self.person.info(),
            student_id: self.student_id.clone(),
            enrolled_courses: self
                .courses
                .iter()
                .map(|course| course.course_name().to_string())
                .collect(),
            gpa: self.calculate_gpa(),
        }
    }
}

/// Two-decimal rounding with exact halves going to the even neighbour.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_duplicate_enrollment_rejected() {
        let math = Course::new("Math", "MAT101", 3);
        let mut student = Student::new("Abdul", 20, "S123");

        student.add_course(&math).unwrap();
        let err = student.add_course(&math).unwrap_err();

        assert_eq!(
            err,
            CoreError::DuplicateEnrollment {
                student_id: "S123".to_string(),
                course_code: "MAT101".to_string(),
            }
        );
        assert_eq!(student.courses().len(), 1);
    }

    #[test]
    fn test_same_fields_different_course_can_enroll() {
        let first = Course::new("Math", "MAT101", 3);
        let second = Course::new("Math", "MAT101", 3);
        let mut student = Student::new("Abdul", 20, "S123");

        student.add_course(&first).unwrap();
        student.add_course(&second).unwrap();
        assert_eq!(student.courses().len(), 2);
    }

    #[test]
    fn test_enrollment_order_preserved() {
        let mut student = Student::new("Abdul", 20, "S123");
        for (name, code) in [("Physics", "PHY101"), ("Math", "MAT101"), ("Art", "ART100")] {
            student.add_course(&Course::new(name, code, 3)).unwrap();
        }
        assert_eq!(
            student.info().enrolled_courses,
            vec!["Physics", "Math", "Art"]
        );
    }

    #[test]
    fn test_grade_requires_enrollment() {
        let math = Course::new("Math", "MAT101", 3);
        let physics = Course::new("Physics", "PHY101", 4);
        let mut student = Student::new("Abdul", 20, "S123");
        student.add_course(&math).unwrap();
        student.add_grade(&math, "B").unwrap();

        let err = student.add_grade(&physics, "A").unwrap_err();
        assert!(matches!(err, CoreError::NotEnrolled { .. }));
        assert_eq!(student.grades().count(), 1);
        assert_eq!(student.grade_for(&math), Some(&Grade::B));
        assert_eq!(student.grade_for(&physics), None);
    }

    #[test]
    fn test_grade_overwrite() {
        let math = Course::new("Math", "MAT101", 3);
        let mut student = Student::new("Abdul", 20, "S123");
        student.add_course(&math).unwrap();

        student.add_grade(&math, "F").unwrap();
        student.add_grade(&math, "A").unwrap();

        assert_eq!(student.grades().count(), 1);
        assert_eq!(student.calculate_gpa(), 4.0);
    }

    #[test]
    fn test_gpa_credit_weighted() {
        let math = Course::new("Math", "MAT101", 3);
        let physics = Course::new("Physics", "PHY101", 4);
        let mut student = Student::new("Abdul", 20, "S123");
        student.add_course(&math).unwrap();
        student.add_course(&physics).unwrap();
        student.add_grade(&math, "A").unwrap();
        student.add_grade(&physics, "A-").unwrap();

        assert_eq!(student.calculate_gpa(), 3.71);
    }

    #[test]
    fn test_gpa_ignores_ungraded_courses() {
        let math = Course::new("Math", "MAT101", 3);
        let physics = Course::new("Physics", "PHY101", 4);
        let mut student = Student::new("Abdul", 20, "S123");
        student.add_course(&math).unwrap();
        student.add_course(&physics).unwrap();
        student.add_grade(&math, "B-").unwrap();

        assert_eq!(student.calculate_gpa(), 2.5);
    }

    #[test]
    fn test_gpa_without_grades_is_zero() {
        let mut student = Student::new("Abdul", 20, "S123");
        assert_eq!(student.calculate_gpa(), 0.0);

        student.add_course(&Course::new("Math", "MAT101", 3)).unwrap();
        assert_eq!(student.calculate_gpa(), 0.0);
    }

    #[test]
    fn test_gpa_zero_credit_courses() {
        let seminar = Course::new("Seminar", "SEM000", 0);
        let mut student = Student::new("Abdul", 20, "S123");
        student.add_course(&seminar).unwrap();
        student.add_grade(&seminar, "A").unwrap();

        assert_eq!(student.calculate_gpa(), 0.0);
    }

    #[test]
    fn test_unrecognized_grade_counts_as_zero() {
        let math = Course::new("Math", "MAT101", 3);
        let physics = Course::new("Physics", "PHY101", 3);
        let mut student = Student::new("Abdul", 20, "S123");
        student.add_course(&math).unwrap();
        student.add_course(&physics).unwrap();
        student.add_grade(&math, "A").unwrap();
        student.add_grade(&physics, "B+").unwrap();

        assert_eq!(
            student.grade_for(&physics),
            Some(&Grade::Unrecognized("B+".to_string()))
        );
        assert_eq!(student.calculate_gpa(), 2.0);
    }

    #[test]
    fn test_attendance_last_write_wins() {
        let mut student = Student::new("Abdul", 20, "S123");
        let day = date(2024, 10, 26);

        student.mark_attendance(day, false);
        student.mark_attendance(day, true);
        student.mark_attendance(date(2024, 10, 27), false);

        let attendance = student.attendance();
        assert_eq!(attendance.len(), 2);
        assert_eq!(attendance.get(&day), Some(&true));
    }

    #[test]
    fn test_students_compare_by_identity() {
        let first = Student::new("Abdul", 20, "S123");
        let second = Student::new("Abdul", 20, "S123");
        assert_ne!(first, second);
        assert_ne!(first.key(), second.key());
        assert_eq!(first.info(), second.info());
    }

    #[test]
    fn test_attendance_keeps_recording_order() {
        let mut student = Student::new("Abdul", 20, "S123");
        let later = date(2026, 10, 18);
        let earlier = date(2024, 10, 26);

        student.mark_attendance(later, true);
        student.mark_attendance(earlier, false);
        student.mark_attendance(later, false);

        let dates: Vec<_> = student.attendance().keys().copied().collect();
        assert_eq!(dates, vec![later, earlier]);
        assert_eq!(student.attendance().get(&later), Some(&false));
    }

    #[test]
    fn test_info_keeps_base_fields() {
        let math = Course::new("Math", "MAT101", 3);
        let mut student = Student::new("Abdul", 20, "S123");
        student.add_course(&math).unwrap();
        student.add_grade(&math, "A").unwrap();

        let info = student.info();
        assert_eq!(info.person, student.person().info());
        assert_eq!(info.student_id, "S123");
        assert_eq!(info.gpa, 4.0);

        let value = serde_json::to_value(&info).unwrap();
        for key in ["name", "age", "student_id", "enrolled_courses", "gpa"] {
            assert!(value.get(key).is_some(), "missing {key} in {value}");
        }
    }

    #[test]
    fn test_info_gpa_is_not_cached() {
        let math = Course::new("Math", "MAT101", 3);
        let mut student = Student::new("Abdul", 20, "S123");
        student.add_course(&math).unwrap();

        assert_eq!(student.info().gpa, 0.0);
        student.add_grade(&math, "D").unwrap();
        assert_eq!(student.info().gpa, 2.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(26.0 / 7.0), 3.71);
        assert_eq!(round2(1200.0), 1200.0);
        assert_eq!(round2(-0.004), -0.0);
        assert_eq!(round2(2.125), 2.12);
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
    }

    #[test]
    fn test_gpa_half_rounds_to_even() {
        let chemistry = Course::new("Chemistry", "CHM101", 3);
        let biology = Course::new("Biology", "BIO101", 3);
        let mut student = Student::new("Abdul", 20, "S123");
        student.add_course(&chemistry).unwrap();
        student.add_course(&biology).unwrap();
        student.add_grade(&chemistry, "C").unwrap();
        student.add_grade(&biology, "D").unwrap();

        // (2.25 * 3 + 2.00 * 3) / 6 = 2.125
        assert_eq!(student.calculate_gpa(), 2.12);
    }

    #[test]
    fn test_gpa_huge_credits_do_not_overflow() {
        let huge = Course::new("Thesis", "THS999", i64::MAX);
        let small = Course::new("Math", "MAT101", 1);
        let mut student = Student::new("Abdul", 20, "S123");
        student.add_course(&huge).unwrap();
        student.add_course(&small).unwrap();
        student.add_grade(&huge, "A").unwrap();
        student.add_grade(&small, "A").unwrap();

        assert_eq!(student.calculate_gpa(), 4.0);
    }

    #[test]
    fn test_gpa_credits_cancelling_out_is_zero() {
        let plus = Course::new("Plus", "PLS001", i64::MAX);
        let minus = Course::new("Minus", "MIN001", i64::MIN);
        let mut student = Student::new("Abdul", 20, "S123");
        student.add_course(&plus).unwrap();
        student.add_course(&minus).unwrap();
        student.add_grade(&plus, "A").unwrap();
        student.add_grade(&minus, "B").unwrap();

        assert_eq!(student.calculate_gpa(), 0.0);
    }
}
