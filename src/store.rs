// Storage helpers for the JSON user file.
//
// - `load_collection` reads and parses the whole file in one go.
// - `persist_collection` writes into a temporary file next to the target
//   and renames it over the target once the data is synced, so a failed
//   write leaves the previous file in place.

use crate::error::{RegistrarError, Result};
use crate::model::UserCollection;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Load every user record stored at `path`.
pub fn load_collection(path: &Path) -> Result<UserCollection> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => RegistrarError::FileNotFound { path: path.to_path_buf() },
        _ => RegistrarError::ReadFailure { path: path.to_path_buf(), source: e },
    })?;

    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .map_err(|e| RegistrarError::ReadFailure { path: path.to_path_buf(), source: e })?;

    let users: UserCollection = serde_json::from_slice(&data)
        .map_err(|e| RegistrarError::MalformedData { path: path.to_path_buf(), source: e })?;
    log::debug!("loaded {} user(s) from {}", users.len(), path.display());
    Ok(users)
}

/// Replace the file at `path` with `users`, pretty-printed with two-space
/// indentation. Non-ASCII text is written as-is.
pub fn persist_collection(path: &Path, users: &UserCollection) -> Result<()> {
    write_atomically(path, users)
        .map_err(|e| RegistrarError::WriteFailure { path: path.to_path_buf(), source: e })?;
    log::debug!("wrote {} user(s) to {}", users.len(), path.display());
    Ok(())
}

fn write_atomically(path: &Path, users: &UserCollection) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;

    // The temp file is created owner-only; keep the target's mode instead.
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, users)?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserRecord;
    use tempfile::TempDir;

    fn sample() -> UserCollection {
        UserCollection::new()
            .append(UserRecord::new("Alice", "alice@example.com"))
            .append(UserRecord::new("Мария", "maria@пример.рф"))
    }

    #[test]
    fn persist_then_load_returns_same_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, "[]").unwrap();

        persist_collection(&path, &sample()).unwrap();
        let loaded = load_collection(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn output_is_indented_and_keeps_non_ascii() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");

        let users = UserCollection::new().append(UserRecord::new("Мария", "maria@пример.рф"));
        persist_collection(&path, &users).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "[\n  {\n    \"name\": \"Мария\",\n    \"email\": \"maria@пример.рф\"\n  }\n]"
        );
    }

    #[test]
    fn missing_file_is_reported_and_not_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");

        let err = load_collection(&path).unwrap_err();
        assert!(matches!(err, RegistrarError::FileNotFound { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn non_array_content_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, "\"not an array\"").unwrap();

        let err = load_collection(&path).unwrap_err();
        assert!(matches!(err, RegistrarError::MalformedData { .. }));
    }

    #[test]
    fn truncated_content_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, "[{\"name\": \"Alice\", \"em").unwrap();

        let err = load_collection(&path).unwrap_err();
        assert!(matches!(err, RegistrarError::MalformedData { .. }));
    }

    #[test]
    fn directory_in_place_of_file_is_a_read_failure() {
        let dir = TempDir::new().unwrap();
        let err = load_collection(dir.path()).unwrap_err();
        assert!(matches!(err, RegistrarError::ReadFailure { .. }));
    }

    #[test]
    fn write_into_missing_directory_fails_cleanly() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent").join("users.json");

        let err = persist_collection(&path, &sample()).unwrap_err();
        assert!(matches!(err, RegistrarError::WriteFailure { .. }));
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn read_only_directory_keeps_original_bytes() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        let original = "[\n  {\"name\": \"Alice\", \"email\": \"alice@example.com\"}\n]";
        fs::write(&path, original).unwrap();
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o555)).unwrap();

        // Permission bits do not bind root; nothing to check there.
        let writable = fs::write(dir.path().join("check"), "").is_ok();
        if !writable {
            let err = persist_collection(&path, &sample()).unwrap_err();
            assert!(matches!(err, RegistrarError::WriteFailure { .. }));
            assert_eq!(fs::read(&path).unwrap(), original.as_bytes());
        }

        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn failed_rename_leaves_target_and_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("users.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "x").unwrap();

        let err = persist_collection(&target, &sample()).unwrap_err();
        assert!(matches!(err, RegistrarError::WriteFailure { .. }));
        assert!(target.join("keep").exists());

        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }
}
