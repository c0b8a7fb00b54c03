use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::student::round2;
use super::{Describe, Person, PersonInfo, Student, StudentKey};
use crate::error::{CoreError, Result};

/// Hourly wage a teacher is hired at unless told otherwise
pub const DEFAULT_HOURLY_WAGE: f64 = 30.0;

/// One line of a teacher's attendance history
#[derive(Debug, Clone, PartialEq)]
struct AttendanceEntry {
    student: StudentKey,
    student_id: String,
    present: bool,
}

/// A person paid by the hour who takes attendance for students
#[derive(Debug, Clone)]
pub struct Teacher {
    person: Person,
    teacher_id: String,
    subject: String,
    hourly_wage: f64,
    /// Append-only history, dates in first-recorded order
    student_attendance: Vec<(NaiveDate, Vec<AttendanceEntry>)>,
}

/// Snapshot of a [`Teacher`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherInfo {
    #[serde(flatten)]
    pub person: PersonInfo,
    pub teacher_id: String,
    pub subject: String,
    pub hourly_wage: f64,
}

impl Teacher {
    pub fn new(
        name: impl Into<String>,
        age: i64,
        teacher_id: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            person: Person::new(name, age),
            teacher_id: teacher_id.into(),
            subject: subject.into(),
            hourly_wage: DEFAULT_HOURLY_WAGE,
            student_attendance: Vec::new(),
        }
    }

    /// Builder-style override of the default wage, validated like
    /// [`Teacher::set_hourly_wage`].
    pub fn with_hourly_wage(mut self, hourly_wage: f64) -> Result<Self> {
        self.set_hourly_wage(hourly_wage)?;
        Ok(self)
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    pub fn teacher_id(&self) -> &str {
        &self.teacher_id
    }

    pub fn set_teacher_id(&mut self, teacher_id: impl Into<String>) {
        self.teacher_id = teacher_id.into();
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
    }

    pub fn hourly_wage(&self) -> f64 {
        self.hourly_wage
    }

    /// Negative and non-finite wages are rejected.
    pub fn set_hourly_wage(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() || value < 0.0 {
            warn!(teacher_id = %self.teacher_id, value, "Rejected invalid hourly wage");
            return Err(CoreError::validation(
                "hourly_wage",
                format!("hourly wage must be a non-negative number, got {value}"),
            ));
        }
        debug!(teacher_id = %self.teacher_id, from = self.hourly_wage, to = value, "Hourly wage updated");
        self.hourly_wage = value;
        Ok(())
    }

    /// Pay for `hours_worked`, rounded to two decimals. Negative hours are
    /// not rejected and yield a negative amount.
    pub fn calculate_salary(&self, hours_worked: f64) -> f64 {
        if hours_worked < 0.0 {
            warn!(teacher_id = %self.teacher_id, hours_worked, "Salary computed for negative hours");
        }
        round2(hours_worked * self.hourly_wage)
    }

    /// Take attendance for a batch of students on `date`.
    ///
    /// Each record is appended to this teacher's history (so repeating a
    /// date keeps every entry) and written to the student's own record,
    /// where it replaces any earlier flag for that date.
    pub fn mark_attendance<'a, I>(&mut self, date: NaiveDate, records: I)
    where
        I: IntoIterator<Item = (&'a mut Student, bool)>,
    {
        let idx = match self.student_attendance.iter().position(|(d, _)| *d == date) {
            Some(idx) => idx,
            None => {
                self.student_attendance.push((date, Vec::new()));
                self.student_attendance.len() - 1
            }
        };
        let day = &mut self.student_attendance[idx].1;

        for (student, present) in records {
            day.push(AttendanceEntry {
                student: student.key(),
                student_id: student.student_id().to_string(),
                present,
            });
            student.mark_attendance(date, present);
        }

        debug!(teacher_id = %self.teacher_id, %date, entries = day.len(), "Attendance recorded");
    }

    /// Number of history entries recorded for `student` on `date`.
    pub fn attendance_count(&self, date: NaiveDate, student: &Student) -> usize {
        self.student_attendance
            .iter()
            .filter(|(d, _)| *d == date)
            .flat_map(|(_, entries)| entries)
            .filter(|entry| entry.student == student.key())
            .count()
    }

    /// Human-readable attendance history, one line per date:
    /// `YYYY-MM-DD: S123 - true, S124 - false`.
    pub fn attendance(&self) -> Vec<String> {
        self.student_attendance
            .iter()
            .map(|(date, entries)| {
                let students = entries
                    .iter()
                    .map(|entry| format!("{} - {}", entry.student_id, entry.present))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{date}: {students}")
            })
            .collect()
    }
}

impl Describe for Teacher {
    type Info = TeacherInfo;

    fn info(&self) -> TeacherInfo {
        TeacherInfo {
            person: self.person.info(),
            teacher_id: self.teacher_id.clone(),
            subject: self.subject.clone(),
            hourly_wage: self.hourly_wage,
        }
    }
}
