use anyhow::{Context, Result};
use gradebook_core::{StudentInfo, TeacherInfo};
use std::fmt::Write;

use crate::cli::OutputFormat;
use crate::demo::DemoReport;

pub fn render(report: &DemoReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
        }
    }
}

fn student_line(info: &StudentInfo) -> String {
    format!(
        "name={}, age={}, student_id={}, enrolled_courses=[{}], gpa={:.2}",
        info.person.name,
        info.person.age,
        info.student_id,
        info.enrolled_courses.join(", "),
        info.gpa
    )
}

fn teacher_line(info: &TeacherInfo) -> String {
    format!(
        "name={}, age={}, teacher_id={}, subject={}, hourly_wage={:.2}",
        info.person.name, info.person.age, info.teacher_id, info.subject, info.hourly_wage
    )
}

fn render_text(report: &DemoReport) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Teacher Salary for {} hours: {:.2}", report.hours_worked, report.salary);
    let _ = writeln!(out, "Student Info: {}", student_line(&report.student_info));
    let _ = writeln!(out, "Teacher Info: {}", teacher_line(&report.teacher_info));
    let _ = writeln!(out, "Student GPA: {:.2}", report.student_gpa);
    let _ = writeln!(out, "Teacher Salary: {:.2} {}", report.salary, report.currency);

    let _ = writeln!(out, "Attendance:");
    for line in &report.teacher_attendance {
        let _ = writeln!(out, "  {line}");
    }

    let _ = writeln!(out, "Student Attendance:");
    for (date, present) in &report.student_attendance {
        let _ = writeln!(out, "  {date}: {present}");
    }

    out
}
