// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

/// The outcome a learner assigns to one card presentation.
///
/// `View` is recorded when a card is displayed but not yet graded. It is
/// non-scoring: it never affects ease, interval, or due-date arithmetic.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Again,
    Hard,
    Good,
    Easy,
    View,
}

impl Grade {
    pub fn is_scoring(self) -> bool {
        !matches!(self, Grade::View)
    }

    /// Map a drill keypress (1-4) to a grade.
    pub fn from_key(key: u8) -> Option<Grade> {
        match key {
            1 => Some(Grade::Again),
            2 => Some(Grade::Hard),
            3 => Some(Grade::Good),
            4 => Some(Grade::Easy),
            _ => None,
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::Again => write!(f, "again"),
            Grade::Hard => write!(f, "hard"),
            Grade::Good => write!(f, "good"),
            Grade::Easy => write!(f, "easy"),
            Grade::View => write!(f, "view"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring() {
        assert!(Grade::Again.is_scoring());
        assert!(Grade::Hard.is_scoring());
        assert!(Grade::Good.is_scoring());
        assert!(Grade::Easy.is_scoring());
        assert!(!Grade::View.is_scoring());
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Grade::from_key(1), Some(Grade::Again));
        assert_eq!(Grade::from_key(4), Some(Grade::Easy));
        assert_eq!(Grade::from_key(5), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Grade::Again).unwrap();
        assert_eq!(json, "\"again\"");
        let grade: Grade = serde_json::from_str("\"view\"").unwrap();
        assert_eq!(grade, Grade::View);
    }

    #[test]
    fn test_unknown_grade_is_rejected() {
        let result: Result<Grade, _> = serde_json::from_str("\"perfect\"");
        assert!(result.is_err());
    }
}
