use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::CurrencyError;

const TMP_SUFFIX: &str = "tmp";

/// Serializes `value` as pretty JSON and writes it by staging to a temporary
/// file next to `path`.
pub fn save_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), CurrencyError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    let tmp = tmp_path(path);
    let staged = write_staged(&tmp, &json).and_then(|()| fs::rename(&tmp, path));
    if let Err(err) = staged {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }
    Ok(())
}

fn write_staged(tmp: &Path, json: &str) -> std::io::Result<()> {
    let mut file = File::create(tmp)?;
    file.write_all(json.as_bytes())?;
    file.flush()
}

/// Reads and deserializes a JSON document from disk.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, CurrencyError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
