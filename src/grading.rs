//! Letter grade classification
//!
//! | Mean        | Grade |
//! |-------------|-------|
//! | >= 90       | A     |
//! | >= 80       | B     |
//! | >= 70       | C     |
//! | >= 60       | D     |
//! | < 60        | F     |
//!
//! Lower bounds are inclusive, so a mean sitting exactly on a boundary gets
//! the higher grade.

use serde::Serialize;
use std::fmt;

pub const PASSING_MEAN: f64 = 60.0;
pub const HONOR_ROLL_MEAN: f64 = 85.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    pub fn from_mean(mean: f64) -> Self {
        match mean {
            m if m >= 90.0 => LetterGrade::A,
            m if m >= 80.0 => LetterGrade::B,
            m if m >= 70.0 => LetterGrade::C,
            m if m >= 60.0 => LetterGrade::D,
            _ => LetterGrade::F,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            LetterGrade::A => 'A',
            LetterGrade::B => 'B',
            LetterGrade::C => 'C',
            LetterGrade::D => 'D',
            LetterGrade::F => 'F',
        }
    }

    /// Status line shown under the letter grade
    pub fn feedback(self) -> &'static str {
        match self {
            LetterGrade::A => "Excellent work! 🌟",
            LetterGrade::B => "Good job! Keep it up! 👍",
            LetterGrade::C => "Satisfactory. Room for improvement. 📚",
            LetterGrade::D => "Needs significant improvement. 📖",
            LetterGrade::F => "Failed. Please study more and retake. ❌",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Everything derived from three test scores
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    pub scores: [f64; 3],
    pub mean: f64,
    pub letter: LetterGrade,
    pub passed: bool,
    pub honor_roll: bool,
}

impl GradeReport {
    pub fn from_scores(scores: [f64; 3]) -> Self {
        let mean = scores.iter().sum::<f64>() / 3.0;
        Self {
            scores,
            mean,
            letter: LetterGrade::from_mean(mean),
            passed: mean >= PASSING_MEAN,
            honor_roll: mean >= HONOR_ROLL_MEAN,
        }
    }

    /// Points still missing to reach a passing mean
    pub fn points_to_pass(&self) -> Option<f64> {
        (!self.passed).then(|| PASSING_MEAN - self.mean)
    }
}
