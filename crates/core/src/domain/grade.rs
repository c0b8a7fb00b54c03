use serde::{Deserialize, Serialize};

/// A letter grade as recorded against a course
///
/// Any text is accepted. Letters outside the grading scale are kept
/// verbatim as [`Grade::Unrecognized`] and earn zero quality points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Grade {
    A,
    AMinus,
    B,
    BMinus,
    C,
    D,
    F,
    Unrecognized(String),
}

impl Grade {
    /// Quality points on the 4.0 scale.
    pub fn quality_points(&self) -> f64 {
        match self {
            Grade::A => 4.00,
            Grade::AMinus => 3.50,
            Grade::B => 3.00,
            Grade::BMinus => 2.50,
            Grade::C => 2.25,
            Grade::D => 2.00,
            Grade::F | Grade::Unrecognized(_) => 0.00,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Grade::Unrecognized(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
            Grade::Unrecognized(letter) => letter,
        }
    }
}

impl From<&str> for Grade {
    fn from(letter: &str) -> Self {
        match letter {
            "A" => Grade::A,
            "A-" => Grade::AMinus,
            "B" => Grade::B,
            "B-" => Grade::BMinus,
            "C" => Grade::C,
            "D" => Grade::D,
            "F" => Grade::F,
            other => Grade::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for Grade {
    fn from(letter: String) -> Self {
        Grade::from(letter.as_str())
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.as_str().to_string()
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
