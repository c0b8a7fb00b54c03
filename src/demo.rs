//! The demonstration scenario: two courses, two students and one teacher
//! going through enrollment, grading, payroll and attendance.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use gradebook_core::ports::Clock;
use gradebook_core::{parse_date, Course, Describe, Student, StudentInfo, Teacher, TeacherInfo};
use serde::Serialize;
use indexmap::IndexMap;
use tracing::info;

use crate::config::PayrollConfig;

/// Date of the second attendance session, supplied as text
pub const SECOND_SESSION: &str = "2024-10-26";

/// Everything the scenario prints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    pub hours_worked: f64,
    pub currency: String,
    pub salary: f64,
    pub student_info: StudentInfo,
    pub teacher_info: TeacherInfo,
    pub student_gpa: f64,
    pub teacher_attendance: Vec<String>,
    pub student_attendance: IndexMap<NaiveDate, bool>,
}

pub fn run(payroll: &PayrollConfig, clock: &dyn Clock) -> Result<DemoReport> {
    let math = Course::new("Math", "MAT101", 3);
    let physics = Course::new("Physics", "PHY101", 4);

    let mut student = Student::new("Abdul", 20, "S123");
    let mut student1 = Student::new("Hakim", 21, "S124");
    student.add_course(&math)?;
    student.add_course(&physics)?;
    student.add_grade(&math, "A")?;
    student.add_grade(&physics, "A-")?;

    let mut teacher = Teacher::new("Dr. Smith", 45, "T98765", "Mathematics")
        .with_hourly_wage(payroll.default_hourly_wage)
        .context("Invalid default_hourly_wage in payroll config")?;
    let salary = teacher.calculate_salary(payroll.hours_worked);
    info!(teacher_id = %teacher.teacher_id(), hours = payroll.hours_worked, salary, "Salary calculated");

    let today = clock.today();
    teacher.mark_attendance(today, [(&mut student, true), (&mut student1, false)]);
    let second = parse_date(SECOND_SESSION)?;
    teacher.mark_attendance(second, [(&mut student, true), (&mut student1, true)]);
    info!(%today, %second, "Attendance sessions recorded");

    Ok(DemoReport {
        hours_worked: payroll.hours_worked,
        currency: payroll.currency.clone(),
        salary,
        student_info: student.info(),
        teacher_info: teacher.info(),
        student_gpa: student.calculate_gpa(),
        teacher_attendance: teacher.attendance(),
        student_attendance: student.attendance().clone(),
    })
}
