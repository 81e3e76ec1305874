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

use serde::Deserialize;
use serde::Serialize;

/// A flashcard. The front and back are opaque markdown blobs: the scheduler
/// never interprets them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    /// Deck-relative path of the card's file. Unique and stable across
    /// sessions.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub front: String,
    pub back: String,
    /// Top-level deck subdirectory the card lives in, if any. A flat
    /// namespace used only for filtering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_are_omitted() {
        let card = Card {
            id: "a.md".to_string(),
            title: None,
            front: "q".to_string(),
            back: "a".to_string(),
            group: None,
        };
        let json = serde_json::to_string(&card).unwrap();
        assert!(!json.contains("title"));
        assert!(!json.contains("group"));
    }
}
