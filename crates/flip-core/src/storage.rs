// Rust guideline compliant 2026-08-05

//! Storage module for the flashcard collection.
//!
//! Persistence is a key-value contract: the whole collection serializes as a
//! single JSON array under one storage key. The file-backed implementation
//! writes atomically (temp file + rename) and supports an advisory lock so
//! two CLI invocations cannot interleave writes.

use crate::models::Flashcard;
use crate::notify::Notifier;
use crate::{identity, time, Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Storage key for the flashcard collection.
///
/// Matches the key used by earlier versions of the tool, so existing
/// collections load unchanged.
pub const STORAGE_KEY: &str = "flashcards.v1";

/// Key-value persistence contract.
///
/// `read` returns the raw serialized value, or `None` when nothing has been
/// written under the key. `write` replaces the previous value and is durable
/// until the next write or an external clear.
pub trait Persistence {
    /// Reads the raw value stored under a key.
    ///
    /// # Arguments
    ///
    /// * `key` - The storage key
    ///
    /// # Returns
    ///
    /// The stored value, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Writes a value under a key, overwriting any prior value.
    ///
    /// # Arguments
    ///
    /// * `key` - The storage key
    /// * `value` - The serialized value
    ///
    /// # Returns
    ///
    /// Ok if the write completed.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed persistence rooted at a data directory.
///
/// Each key maps to one file in the directory. Writes go to a temp file that
/// is synced and renamed into place, so a crashed write never leaves a
/// truncated collection behind.
#[derive(Debug, Clone)]
pub struct FileVault {
    dir: PathBuf,
}

impl FileVault {
    /// Creates a vault rooted at the given directory, creating it if needed.
    ///
    /// # Arguments
    ///
    /// * `dir` - The data directory
    ///
    /// # Returns
    ///
    /// A new FileVault.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory path is empty or cannot be created.
    pub fn new(dir: PathBuf) -> Result<Self> {
        if dir.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Data directory cannot be empty",
            )));
        }
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Returns the vault's data directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.dir.as_path()
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Acquires an exclusive advisory lock on the vault.
    ///
    /// The lock guards against a second CLI invocation mutating the same
    /// collection concurrently. It is released when the returned guard drops.
    ///
    /// # Returns
    ///
    /// A lock guard held for the lifetime of the mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock file cannot be opened or the lock is
    /// already held by another process.
    pub fn lock_exclusive(&self) -> Result<VaultLock> {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_path = self.dir.join(".lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&lock_path)?;

        lock_file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Another flip process holds the lock: {}", e),
            ))
        })?;

        Ok(VaultLock { file: lock_file })
    }
}

/// Guard for an exclusive vault lock. Unlocks on drop.
#[derive(Debug)]
pub struct VaultLock {
    file: std::fs::File,
}

impl Drop for VaultLock {
    fn drop(&mut self) {
        use fs2::FileExt;
        let _ = self.file.unlock();
    }
}

impl Persistence for FileVault {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        use std::io::Write;

        let path = self.key_path(key);
        let temp_path = path.with_extension("tmp");

        {
            let mut file = std::fs::File::create(&temp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &path)?;

        Ok(())
    }
}

/// In-memory persistence for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryVault {
    map: HashMap<String, String>,
}

impl MemoryVault {
    /// Creates an empty in-memory vault.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a vault pre-populated with a single key-value pair.
    ///
    /// # Arguments
    ///
    /// * `key` - The storage key
    /// * `value` - The raw value
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut map = HashMap::new();
        map.insert(key.to_string(), value.to_string());
        Self { map }
    }

    /// Returns the raw value stored under a key, if any.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }
}

impl Persistence for MemoryVault {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.map.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Owns the flashcard collection and its persistence backend.
///
/// The collection is ordered; insertion order is display order, and order
/// changes only by append or removal. Every mutation persists the full
/// collection before returning.
#[derive(Debug)]
pub struct Store<B: Persistence> {
    backend: B,
    cards: Vec<Flashcard>,
}

impl<B: Persistence> Store<B> {
    /// Opens a store, loading the collection from the backend.
    ///
    /// Loading fails soft: an absent key, a read failure, a malformed value,
    /// or a value that is not a JSON array all produce an empty collection.
    /// Parse failures are reported once through the notifier; individual
    /// cards that fail validation or repeat an id are skipped with a warning.
    ///
    /// # Arguments
    ///
    /// * `backend` - The persistence backend
    /// * `notifier` - Collaborator for load warnings
    ///
    /// # Returns
    ///
    /// A store holding the loaded (possibly empty) collection.
    pub fn open(backend: B, notifier: &dyn Notifier) -> Self {
        let cards = Self::load(&backend, notifier);
        Self { backend, cards }
    }

    fn load(backend: &B, notifier: &dyn Notifier) -> Vec<Flashcard> {
        let raw = match backend.read(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                notifier.warn(&format!("Failed to read stored flashcards: {}", err));
                return Vec::new();
            }
        };

        let parsed: Vec<Flashcard> = match serde_json::from_str(&raw) {
            Ok(parsed) => parsed,
            Err(err) => {
                notifier.warn(&format!(
                    "Stored flashcards are corrupt, starting fresh: {}",
                    err
                ));
                return Vec::new();
            }
        };

        let mut cards: Vec<Flashcard> = Vec::with_capacity(parsed.len());
        for card in parsed {
            if let Err(err) = card.validate() {
                notifier.warn(&format!("Skipping stored flashcard: {}", err));
                continue;
            }
            if cards.iter().any(|existing| existing.id == card.id) {
                notifier.warn(&format!("Skipping duplicate flashcard id: {}", card.id));
                continue;
            }
            cards.push(card);
        }

        cards
    }

    /// Returns the persistence backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    /// Returns the card at an index, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Flashcard> {
        self.cards.get(index)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Serializes the full collection and writes it to the backend.
    ///
    /// # Returns
    ///
    /// Ok if the write completed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails. The
    /// in-memory collection is unaffected either way.
    pub fn save(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.cards)?;
        self.backend.write(STORAGE_KEY, &raw)
    }

    /// Seeds the collection with three example cards if it is empty.
    ///
    /// A no-op on a non-empty collection. Seed content is fixed; timestamps
    /// are the current instant.
    ///
    /// # Returns
    ///
    /// `true` if seeding happened.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the seeded collection fails; the seed
    /// cards remain in memory.
    pub fn seed_if_empty(&mut self) -> Result<bool> {
        if !self.cards.is_empty() {
            return Ok(false);
        }

        let now = time::now_millis();
        for (question, answer) in [
            ("What is the capital of France?", "Paris"),
            ("What does HTML stand for?", "HyperText Markup Language"),
            ("2 + 2 = ?", "4"),
        ] {
            let id = identity::unique_id(&self.cards, question, answer, now);
            self.cards
                .push(Flashcard::new(id, question.into(), answer.into(), now));
        }

        self.save()?;
        Ok(true)
    }

    /// Appends a new card and persists the collection.
    ///
    /// # Arguments
    ///
    /// * `question` - The question text (already trimmed by the caller)
    /// * `answer` - The answer text (already trimmed by the caller)
    ///
    /// # Returns
    ///
    /// The index of the new card (= length - 1).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCard` if either field is blank (the collection
    /// is untouched), or an IO/JSON error if persistence fails (the card
    /// stays in memory).
    pub fn add(&mut self, question: &str, answer: &str) -> Result<usize> {
        let question = question.trim();
        let answer = answer.trim();

        let now = time::now_millis();
        let id = identity::unique_id(&self.cards, question, answer, now);
        let card = Flashcard::new(id, question.to_string(), answer.to_string(), now);
        card.validate()?;

        self.cards.push(card);
        let index = self.cards.len() - 1;
        self.save()?;
        Ok(index)
    }

    /// Updates the card at an index and persists the collection.
    ///
    /// The card's id and `created_at` are unchanged; `updated_at` becomes the
    /// current instant.
    ///
    /// # Arguments
    ///
    /// * `index` - The card index
    /// * `question` - The new question text (already trimmed by the caller)
    /// * `answer` - The new answer text (already trimmed by the caller)
    ///
    /// # Returns
    ///
    /// Ok if the update was applied.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` for a bad index and
    /// `Error::InvalidCard` for blank fields (the collection is untouched in
    /// both cases), or an IO/JSON error if persistence fails (the update
    /// stays in memory).
    pub fn update(&mut self, index: usize, question: &str, answer: &str) -> Result<()> {
        let len = self.cards.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() {
            return Err(Error::InvalidCard("Question cannot be empty".to_string()));
        }
        if answer.is_empty() {
            return Err(Error::InvalidCard("Answer cannot be empty".to_string()));
        }

        let card = &mut self.cards[index];
        card.question = question.to_string();
        card.answer = answer.to_string();
        card.updated_at = time::now_millis();

        self.save()
    }

    /// Removes the card at an index and persists the collection.
    ///
    /// # Arguments
    ///
    /// * `index` - The card index
    ///
    /// # Returns
    ///
    /// Ok if the removal was applied.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` for a bad index (the collection is
    /// untouched), or an IO/JSON error if persistence fails (the removal
    /// stays in memory).
    pub fn remove(&mut self, index: usize) -> Result<()> {
        let len = self.cards.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        self.cards.remove(index);
        self.save()
    }
}
