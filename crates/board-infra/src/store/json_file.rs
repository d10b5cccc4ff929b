//! JSON file post store - the production storage backend.

use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;

use board_core::domain::BoardDocument;
use board_core::error::StoreError;
use board_core::ports::PostStore;

/// Stores the board as a single pretty-printed JSON document on disk.
///
/// Reads are fail-open: a missing file is an empty board, and an unreadable
/// or corrupt file is logged and also treated as an empty board. Writes go to
/// a uniquely named temporary file in the same directory, which is then
/// persisted over the target.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Write `contents` next to `path` and rename it into place. The temporary
/// file is removed if anything fails before the rename.
fn write_atomically(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[async_trait]
impl PostStore for JsonFileStore {
    async fn load(&self) -> BoardDocument {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Data file not found, starting empty");
                return BoardDocument::default();
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to read data file, treating board as empty"
                );
                return BoardDocument::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Data file is not valid board JSON, treating board as empty"
                );
                BoardDocument::default()
            }
        }
    }

    async fn save(&self, document: &BoardDocument) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(document)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_atomically(&path, json.as_bytes()))
            .await
            .map_err(io::Error::other)??;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use board_core::BoardService;
    use board_core::domain::{Post, PostText};
    use serde_json::{Value, json};

    fn post(text: &str) -> Post {
        Post::new(PostText::parse(text).unwrap(), chrono::Utc::now(), [])
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    /// Collects formatted log output for assertions.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json"));
        assert!(store.load().await.posts.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load().await.posts.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_logs_warning_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{ not json").unwrap();

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        assert!(JsonFileStore::new(&path).load().await.posts.is_empty());

        let output = logs.contents();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("not valid board JSON"), "{output}");
        assert!(output.contains(&path.display().to_string()), "{output}");
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json"));

        let document = BoardDocument::new(vec![post("second"), post("first")]);
        store.save(&document).await.unwrap();
        assert_eq!(store.load().await, document);
    }

    #[tokio::test]
    async fn test_save_writes_posts_object_and_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let store = JsonFileStore::new(&path);

        store
            .save(&BoardDocument::new(vec![post("hello")]))
            .await
            .unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["posts"][0]["text"], "hello");
        assert!(value["posts"][0]["createdAt"].is_string());
        assert!(raw.contains("\n  \"posts\""));

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("data.json")]);
    }

    #[tokio::test]
    async fn test_repeated_saves_replace_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json"));

        store.save(&BoardDocument::new(vec![post("one")])).await.unwrap();
        store.save(&BoardDocument::new(vec![post("two")])).await.unwrap();

        assert_eq!(store.load().await.posts[0].text, "two");
    }

    #[tokio::test]
    async fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/board/data.json"));

        store.save(&BoardDocument::default()).await.unwrap();
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_save_overwrites_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "garbage").unwrap();
        let store = JsonFileStore::new(&path);

        let mut document = store.load().await;
        document.posts.push(post("recovered"));
        store.save(&document).await.unwrap();

        assert_eq!(store.load().await.posts[0].text, "recovered");
    }

    #[tokio::test]
    async fn test_create_keeps_stored_created_at_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let stored = json!({"posts": [
            {"id": "1", "text": "old", "createdAt": "2024-05-01T12:00:00.123456+09:00"}
        ]});
        std::fs::write(&path, stored.to_string()).unwrap();

        let service = BoardService::new(Arc::new(JsonFileStore::new(&path)));
        service.create("new").await.unwrap();

        let value = read_json(&path);
        assert_eq!(value["posts"][0]["text"], "new");
        assert_eq!(value["posts"][1]["createdAt"], "2024-05-01T12:00:00.123456+09:00");
    }

    #[tokio::test]
    async fn test_iso_timestamp_without_offset_keeps_board() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let stored = json!({"posts": [
            {"id": "2", "text": "local time", "createdAt": "2024-05-01T12:00:00"},
            {"id": "1", "text": "utc", "createdAt": "2024-05-01T11:00:00.000Z"}
        ]});
        std::fs::write(&path, stored.to_string()).unwrap();

        let service = BoardService::new(Arc::new(JsonFileStore::new(&path)));
        assert_eq!(service.list().await.len(), 2);
        service.create("new").await.unwrap();

        let value = read_json(&path);
        let posts = value["posts"].as_array().unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[1]["createdAt"], "2024-05-01T12:00:00");
        assert_eq!(posts[2]["createdAt"], "2024-05-01T11:00:00.000Z");
    }
}
