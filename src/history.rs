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

use std::fs::OpenOptions;
use std::fs::read_to_string;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::error::Fallible;
use crate::types::review::ReviewLog;

pub const HISTORY_FILE: &str = "history.jsonl";

pub fn history_path(directory: &Path) -> PathBuf {
    directory.join(HISTORY_FILE)
}

/// Read the review history, one JSON object per line.
///
/// A missing file is an empty history. A line that does not parse (for
/// example, a grade this version does not know about) is skipped with a
/// warning: grade validation is the writer's job, and one bad line should
/// not take the whole deck down.
pub fn read_history(path: &Path) -> Fallible<Vec<ReviewLog>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = read_to_string(path)?;
    let mut logs = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<ReviewLog>(line) {
            Ok(log) => logs.push(log),
            Err(err) => {
                log::warn!("skipping history line {}: {err}", index + 1);
            }
        }
    }
    Ok(logs)
}

/// Append one review event. The history file is append-only: events are
/// never rewritten or reordered.
pub fn append_history(path: &Path, log: &ReviewLog) -> Fallible<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let line = serde_json::to_string(log)?;
    writeln!(file, "{line}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::types::grade::Grade;
    use crate::types::timestamp::Timestamp;

    #[test]
    fn test_missing_file_is_empty_history() -> Fallible<()> {
        let dir = tempdir()?;
        let logs = read_history(&history_path(dir.path()))?;
        assert!(logs.is_empty());
        Ok(())
    }

    #[test]
    fn test_append_then_read() -> Fallible<()> {
        let dir = tempdir()?;
        let path = history_path(dir.path());
        let first = ReviewLog::new("a.md", Timestamp::from_millis(1_000), Grade::View);
        let second = ReviewLog {
            duration_ms: Some(1_500),
            ..ReviewLog::new("a.md", Timestamp::from_millis(2_000), Grade::Good)
        };
        append_history(&path, &first)?;
        append_history(&path, &second)?;

        let logs = read_history(&path)?;
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].grade, Grade::View);
        assert_eq!(logs[1].grade, Grade::Good);
        assert_eq!(logs[1].duration_ms, Some(1_500));
        Ok(())
    }

    #[test]
    fn test_bad_lines_are_skipped() -> Fallible<()> {
        let dir = tempdir()?;
        let path = history_path(dir.path());
        std::fs::write(
            &path,
            "{\"cardId\":\"a.md\",\"ts\":1,\"grade\":\"good\"}\n\
             {\"cardId\":\"a.md\",\"ts\":2,\"grade\":\"perfect\"}\n\
             not json at all\n\
             \n\
             {\"cardId\":\"b.md\",\"ts\":3,\"grade\":\"view\"}\n",
        )?;
        let logs = read_history(&path)?;
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].card_id, "a.md");
        assert_eq!(logs[1].card_id, "b.md");
        Ok(())
    }
}
