//! Reading and writing saved rounds as JSON files.

use chain_engine::BoardSave;
use std::path::{Path, PathBuf};

/// Writes `save` into `dir`, creating the directory if needed.
///
/// The file name is derived from the save name; characters outside
/// `[A-Za-z0-9_-]` become `_`.
pub fn write_save(dir: &Path, save: &BoardSave) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.json", file_stem(&save.name)));
    let json = serde_json::to_string_pretty(save)?;
    std::fs::write(&path, json)?;
    tracing::debug!(path = %path.display(), "wrote save");
    Ok(path)
}

/// Reads a save written by [`write_save`].
pub fn read_save(path: &Path) -> anyhow::Result<BoardSave> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "save".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chain_engine::{generate_board, Difficulty, LevelBook, Round};

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let board = generate_board(Difficulty::Medium, Some("save-test"));
        let pieces = LevelBook::builtin().select(&board, Some("basic"), None);
        let round = Round::new(board, pieces);
        let start = round.board().starting_square;
        let round = round.place("rook-blue", start).unwrap();

        let save = BoardSave::capture(&round, 0, "my board/1", 1_700_000_000_000);
        let path = write_save(&dir.path().join("nested"), &save).unwrap();
        assert_eq!(path.file_name().unwrap(), "my_board_1.json");

        let loaded = read_save(&path).unwrap();
        assert_eq!(loaded, save);
        assert_eq!(loaded.restore().unwrap().chain(), round.chain());
    }

    #[test]
    fn test_read_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(read_save(&path).is_err());
        assert!(read_save(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_empty_name_gets_default_stem() {
        assert_eq!(file_stem(""), "save");
        assert_eq!(file_stem("daily-01"), "daily-01");
    }
}
