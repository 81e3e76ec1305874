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

use std::fs::read_to_string;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::Fallible;
use crate::types::card::Card;

/// Parse every card file under the deck directory.
///
/// A card is a `.md` file with a `## Front` and a `## Back` section and an
/// optional `# Title` heading. The card's id is its deck-relative path, and
/// its group is the top-level subdirectory it lives in, if any. Files with
/// neither section are skipped with a warning.
///
/// Cards are returned sorted by id, so the catalog order does not depend on
/// directory iteration order.
pub fn parse_deck(directory: &Path) -> Fallible<Vec<Card>> {
    let mut cards = Vec::new();
    for entry in WalkDir::new(directory) {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().is_none_or(|ext| ext != "md") {
            continue;
        }
        let relative = path
            .strip_prefix(directory)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");
        if relative.split('/').any(|part| part.starts_with('.')) {
            continue;
        }
        let contents = read_to_string(path)?;
        match parse_card(&relative, &contents) {
            Some(card) => cards.push(card),
            None => log::warn!("{relative} has no front or back section, skipping."),
        }
    }
    cards.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(cards)
}

/// Parse one card file. Returns None if the file has neither a front nor a
/// back section.
pub fn parse_card(relative_path: &str, contents: &str) -> Option<Card> {
    let title = contents.lines().find_map(|line| {
        line.strip_prefix("# ")
            .map(|rest| rest.trim().to_string())
            .filter(|title| !title.is_empty())
    });
    let front = extract_section(contents, "Front");
    let back = extract_section(contents, "Back");
    if front.is_none() && back.is_none() {
        return None;
    }
    let group = match relative_path.split_once('/') {
        Some((group, _)) => Some(group.to_string()),
        None => None,
    };
    Some(Card {
        id: relative_path.to_string(),
        title,
        front: front.unwrap_or_default(),
        back: back.unwrap_or_default(),
        group,
    })
}

/// Extract the body of a `## <header>` section: everything up to the next
/// `## ` heading or the end of the file, trimmed.
fn extract_section(contents: &str, header: &str) -> Option<String> {
    let mut body: Option<Vec<&str>> = None;
    for line in contents.lines() {
        if let Some(rest) = line.strip_prefix("## ") {
            if body.is_some() {
                break;
            }
            if rest.trim() == header {
                body = Some(Vec::new());
            }
        } else if let Some(lines) = body.as_mut() {
            lines.push(line);
        }
    }
    body.map(|lines| lines.join("\n").trim().to_string())
}

#[cfg(test)]
mod tests {
    use std::fs::create_dir_all;
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_parse_card() {
        let contents = "# Ser vs Estar\n\n## Front\n\nWhen is *ser* used?\n\n## Back\n\nFor permanent traits.\n";
        let card = parse_card("spanish/ser.md", contents).unwrap();
        assert_eq!(card.id, "spanish/ser.md");
        assert_eq!(card.title.as_deref(), Some("Ser vs Estar"));
        assert_eq!(card.front, "When is *ser* used?");
        assert_eq!(card.back, "For permanent traits.");
        assert_eq!(card.group.as_deref(), Some("spanish"));
    }

    #[test]
    fn test_parse_card_without_title() {
        let contents = "## Front\n\nq\n\n## Back\n\na\n";
        let card = parse_card("misc.md", contents).unwrap();
        assert_eq!(card.title, None);
        assert_eq!(card.group, None);
    }

    #[test]
    fn test_parse_card_with_missing_back() {
        let contents = "## Front\n\nq\n";
        let card = parse_card("misc.md", contents).unwrap();
        assert_eq!(card.front, "q");
        assert_eq!(card.back, "");
    }

    #[test]
    fn test_parse_card_without_sections() {
        assert!(parse_card("notes.md", "# Just some notes\n\nNot a card.\n").is_none());
    }

    #[test]
    fn test_section_stops_at_next_heading() {
        let contents = "## Front\n\nline one\nline two\n\n## Back\n\nanswer\n";
        let card = parse_card("a.md", contents).unwrap();
        assert_eq!(card.front, "line one\nline two");
        assert_eq!(card.back, "answer");
    }

    #[test]
    fn test_group_is_first_path_component() {
        let contents = "## Front\n\nq\n\n## Back\n\na\n";
        let card = parse_card("math/algebra/rings.md", contents).unwrap();
        assert_eq!(card.group.as_deref(), Some("math"));
    }

    #[test]
    fn test_parse_deck() -> Fallible<()> {
        let dir = tempdir()?;
        write(
            dir.path().join("b.md"),
            "## Front\n\nq1\n\n## Back\n\na1\n",
        )?;
        create_dir_all(dir.path().join("math"))?;
        write(
            dir.path().join("math/a.md"),
            "## Front\n\nq2\n\n## Back\n\na2\n",
        )?;
        write(dir.path().join("notes.txt"), "not a card")?;
        write(dir.path().join("stray.md"), "no sections here")?;

        let cards = parse_deck(dir.path())?;
        assert_eq!(cards.len(), 2);
        // Sorted by id.
        assert_eq!(cards[0].id, "b.md");
        assert_eq!(cards[1].id, "math/a.md");
        assert_eq!(cards[1].group.as_deref(), Some("math"));
        Ok(())
    }

    #[test]
    fn test_parse_deck_skips_hidden_files() -> Fallible<()> {
        let dir = tempdir()?;
        write(
            dir.path().join(".draft.md"),
            "## Front\n\nq\n\n## Back\n\na\n",
        )?;
        let cards = parse_deck(dir.path())?;
        assert!(cards.is_empty());
        Ok(())
    }
}
