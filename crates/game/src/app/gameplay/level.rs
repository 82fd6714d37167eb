use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Relative to the assets directory; absent means the built-in layout.
pub(crate) const LEVEL_OVERRIDE_FILE: &str = "levels/orchard.json";

const S: i8 = -1;

#[rustfmt::skip]
const BUILTIN_ROWS: [[i8; 20]; 15] = [
    [1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1],
    [1,0,0,0,1,1,0,0,0,0,0,1,1,0,0,0,0,0,0,1],
    [1,0,S,0,1,1,0,2,0,0,0,1,1,0,0,0,0,0,0,1],
    [1,0,0,0,1,1,0,0,0,2,2,1,1,2,2,1,1,1,1,1],
    [1,0,0,1,1,1,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,0,1,0,0,0,2,0,0,0,0,0,0,2,2,2,1],
    [1,2,0,0,0,1,0,0,0,0,0,0,0,0,0,0,2,5,2,1],
    [1,1,1,0,0,1,0,0,0,0,0,2,0,0,0,0,2,2,2,1],
    [1,0,0,0,0,0,0,0,1,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,0,0,0,0,1,0,0,0,0,0,0,0,2,0,0,1],
    [1,0,0,1,1,1,1,1,1,1,1,1,1,0,0,1,1,1,1,1],
    [1,0,0,1,1,0,0,1,2,0,0,0,0,0,0,1,1,0,0,1],
    [1,0,0,0,0,0,2,1,0,0,0,0,0,0,0,1,0,0,0,1],
    [1,0,2,0,0,0,0,1,0,0,0,2,0,0,0,1,0,0,0,1],
    [1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1],
];

pub(crate) fn builtin_layout() -> Vec<Vec<i8>> {
    BUILTIN_ROWS.iter().map(|row| row.to_vec()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct LevelDef {
    pub(crate) rows: Vec<Vec<i8>>,
}

#[derive(Debug, Error)]
pub(crate) enum LevelError {
    #[error("failed to read level file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse level file {path} at {location}: {source}")]
    Parse {
        path: PathBuf,
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads the optional level override. A missing file selects the built-in
/// layout; a present-but-broken file is a hard error.
pub(crate) fn load_override(assets_dir: &Path) -> Result<Option<LevelDef>, LevelError> {
    let path = assets_dir.join(LEVEL_OVERRIDE_FILE);
    if !path.is_file() {
        return Ok(None);
    }

    let text = fs::read_to_string(&path).map_err(|source| LevelError::Read {
        path: path.clone(),
        source,
    })?;
    let mut deserializer = serde_json::Deserializer::from_str(&text);
    match serde_path_to_error::deserialize(&mut deserializer) {
        Ok(def) => Ok(Some(def)),
        Err(error) => {
            let location = error.path().to_string();
            Err(LevelError::Parse {
                path,
                location,
                source: error.into_inner(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::grid::TileGrid;
    use super::*;

    #[test]
    fn builtin_layout_validates() {
        let built = TileGrid::from_layout(&builtin_layout()).expect("built-in layout is valid");
        assert_eq!(built.grid.rows(), 15);
        assert_eq!(built.grid.cols(), 20);
        assert_eq!(built.start_px, (2 * 32, 2 * 32));
        assert_eq!(built.goal_px, (17 * 32, 6 * 32));
    }

    #[test]
    fn missing_override_selects_builtin() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = load_override(dir.path()).expect("no error");
        assert!(result.is_none());
    }

    #[test]
    fn override_file_parses_rows() {
        let dir = tempfile::tempdir().expect("tempdir");
        let levels_dir = dir.path().join("levels");
        fs::create_dir_all(&levels_dir).expect("mkdir");
        fs::write(
            levels_dir.join("orchard.json"),
            r#"{"rows": [[1, 1], [-1, 5]]}"#,
        )
        .expect("write level");

        let level = load_override(dir.path())
            .expect("parse")
            .expect("file present");
        assert_eq!(level.rows, vec![vec![1, 1], vec![-1, 5]]);
    }

    #[test]
    fn broken_override_reports_json_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let levels_dir = dir.path().join("levels");
        fs::create_dir_all(&levels_dir).expect("mkdir");
        fs::write(
            levels_dir.join("orchard.json"),
            r#"{"rows": [[1, 1], ["x", 5]]}"#,
        )
        .expect("write level");

        let error = load_override(dir.path()).expect_err("parse failure");
        match error {
            LevelError::Parse { location, .. } => assert_eq!(location, "rows[1][0]"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
