use include_dir::{Dir, include_dir};
use lazy_static::lazy_static;
use numerical_target::NumericalTarget;
use serde::Deserialize;
use std::path::Path;

const TARGETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/../test-data/targets");

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("fixture {0} is not found")]
    NotFound(String),
    #[error("fixture is not valid UTF-8")]
    Encoding,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Target stored in a JSON fixture together with its expected values
///
/// `None` as an expected value means the input is outside of the transformation domain.
#[derive(Clone, Debug)]
pub struct TargetCase {
    pub name: String,
    pub target: NumericalTarget,
    pub samples: Vec<(f64, Option<f64>)>,
}

#[derive(Deserialize)]
struct TargetRecord {
    target: NumericalTarget,
    samples: Vec<(f64, Option<f64>)>,
}

fn read_target_case(path: &Path) -> Result<TargetCase, Error> {
    let file = TARGETS_DIR
        .get_file(path)
        .ok_or_else(|| Error::NotFound(path.display().to_string()))?;
    let contents = file.contents_utf8().ok_or(Error::Encoding)?;
    let record: TargetRecord = serde_json::from_str(contents)?;
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
        .to_owned();
    Ok(TargetCase {
        name,
        target: record.target,
        samples: record.samples,
    })
}

pub fn target_case<P: AsRef<Path>>(path: P) -> TargetCase {
    read_target_case(path.as_ref()).unwrap()
}

pub fn iter_target_cases() -> impl Iterator<Item = TargetCase> {
    TARGETS_DIR
        .find("**/*.json")
        .unwrap()
        .filter_map(|entry| Some(target_case(entry.as_file()?.path())))
}

lazy_static! {
    pub static ref TARGET_CASES: Vec<TargetCase> = iter_target_cases().collect();
}
