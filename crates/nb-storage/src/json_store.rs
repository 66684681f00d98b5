//! JSON file storage for news, comments, and users

use nb_core::actor::Actor;
use nb_core::comment::{Comment, CommentFilter, NewComment};
use nb_core::error::{NewsboardError, Result};
use nb_core::news::model::{NewNews, NewsItem};
use nb_core::store::{Store, StoreData};
use nb_core::types::{ActorId, CommentId, NewsId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard};
use tracing::{debug, info};

/// Current on-disk schema version
pub const CURRENT_SCHEMA_VERSION: &str = "1.0";

/// Name of the database file inside the data directory
pub const DB_FILE_NAME: &str = "newsboard.json";

/// On-disk document
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreFile {
    /// Schema version of this document
    pub schema_version: String,
    /// When the file was last written
    pub saved_at: chrono::DateTime<chrono::Utc>,
    /// Stored records
    #[serde(flatten)]
    pub data: StoreData,
}

/// Store that keeps all records in a single JSON file.
///
/// Records are held in memory and the whole file is rewritten after every
/// change.
pub struct JsonFileStore {
    /// Base directory for storage
    base_dir: PathBuf,
    /// Records
    data: RwLock<StoreData>,
}

impl JsonFileStore {
    /// Open (or create) a store in the given directory
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();

        if !base_dir.exists() {
            fs::create_dir_all(&base_dir).map_err(|e| {
                NewsboardError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create data directory: {}", e),
                ))
            })?;
            debug!("Created data directory: {:?}", base_dir);
        }

        let db_path = base_dir.join(DB_FILE_NAME);
        let data = if db_path.exists() {
            Self::read_file(&db_path)?
        } else {
            StoreData::default()
        };

        Ok(Self {
            base_dir,
            data: RwLock::new(data),
        })
    }

    /// Open the store in the default directory
    pub fn default_location() -> Result<Self> {
        Self::new(Self::default_dir())
    }

    /// Platform data directory, falling back to ~/.newsboard
    pub fn default_dir() -> PathBuf {
        directories::ProjectDirs::from("com", "newsboard", "newsboard")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".newsboard")
            })
    }

    /// Get base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path of the database file
    pub fn db_path(&self) -> PathBuf {
        self.base_dir.join(DB_FILE_NAME)
    }

    /// Get a temporary path for atomic writes
    fn temp_path(&self) -> PathBuf {
        self.base_dir.join(format!(".{}.tmp", DB_FILE_NAME))
    }

    fn read_file(path: &Path) -> Result<StoreData> {
        let file = fs::File::open(path)?;
        let reader = BufReader::new(file);
        let store_file: StoreFile = serde_json::from_reader(reader)?;

        if store_file.schema_version != CURRENT_SCHEMA_VERSION {
            return Err(NewsboardError::UnsupportedSchemaVersion(
                store_file.schema_version,
            ));
        }

        info!(
            "Loaded {} news and {} comments from {:?}",
            store_file.data.news.len(),
            store_file.data.comments.len(),
            path
        );
        Ok(store_file.data)
    }

    /// Write the document atomically (write to temp, then rename)
    fn atomic_write(&self, data: &StoreData) -> Result<()> {
        let temp_path = self.temp_path();
        let final_path = self.db_path();

        let file = StoreFile {
            schema_version: CURRENT_SCHEMA_VERSION.to_string(),
            saved_at: chrono::Utc::now(),
            data: data.clone(),
        };

        let temp_file = fs::File::create(&temp_path).map_err(|e| {
            NewsboardError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create temp file: {}", e),
            ))
        })?;
        let mut writer = BufWriter::new(temp_file);
        serde_json::to_writer_pretty(&mut writer, &file)?;
        writer.flush()?;

        // Rename to final path (atomic on most filesystems)
        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            NewsboardError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to rename temp file: {}", e),
            ))
        })?;

        debug!("Saved store to {:?}", final_path);
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreData> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a change and persist it; the in-memory copy is left untouched on failure
    fn mutate<T>(&self, change: impl FnOnce(&mut StoreData) -> Result<T>) -> Result<T> {
        let mut guard = self.data.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = (*guard).clone();
        let value = change(&mut next)?;
        self.atomic_write(&next)?;
        *guard = next;
        Ok(value)
    }
}

impl Store for JsonFileStore {
    fn create_actor(&self, actor: Actor) -> Result<Actor> {
        self.mutate(|data| data.create_actor(actor))
    }

    fn get_actor(&self, id: &ActorId) -> Result<Actor> {
        self.read().get_actor(id)
    }

    fn find_actor(&self, username: &str) -> Result<Option<Actor>> {
        Ok(self.read().find_actor(username))
    }

    fn list_actors(&self) -> Result<Vec<Actor>> {
        Ok(self.read().actors.clone())
    }

    fn create_news(&self, news: NewNews) -> Result<NewsItem> {
        self.mutate(|data| Ok(data.create_news(news)))
    }

    fn get_news(&self, id: NewsId) -> Result<NewsItem> {
        self.read().get_news(id)
    }

    fn list_news(&self) -> Result<Vec<NewsItem>> {
        Ok(self.read().news.clone())
    }

    fn delete_news(&self, id: NewsId) -> Result<usize> {
        self.mutate(|data| data.delete_news(id))
    }

    fn create_comment(&self, comment: NewComment) -> Result<Comment> {
        self.mutate(|data| data.create_comment(comment))
    }

    fn get_comment(&self, id: CommentId) -> Result<Comment> {
        self.read().get_comment(id)
    }

    fn list_comments(&self, filter: &CommentFilter) -> Result<Vec<Comment>> {
        Ok(self.read().list_comments(filter))
    }

    fn update_comment(&self, comment: &Comment) -> Result<()> {
        self.mutate(|data| data.update_comment(comment))
    }

    fn delete_comment(&self, id: CommentId) -> Result<Comment> {
        self.mutate(|data| data.delete_comment(id))
    }
}
