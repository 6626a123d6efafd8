use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::shared::constants::ANIMATION_EXTENSION;

/// The phrase-to-animation table: normalized phrase → GIF path.
///
/// Populated once at startup by scanning the animation directory for
/// `{phrase}.gif` entries, read-only thereafter. The file stem is the
/// phrase, so the on-disk naming convention is the single source of truth.
pub struct PhraseLibrary {
    phrases: BTreeMap<String, PathBuf>,
}

impl PhraseLibrary {
    pub fn scan(dir: &Path) -> Self {
        let mut phrases = BTreeMap::new();

        match fs::read_dir(dir) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let path = entry.path();
                    let is_animation = path
                        .extension()
                        .and_then(|e| e.to_str())
                        .map(|e| e.eq_ignore_ascii_case(ANIMATION_EXTENSION))
                        .unwrap_or(false);
                    if !is_animation {
                        continue;
                    }
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        phrases.insert(stem.to_string(), path.clone());
                    }
                }
            }
            Err(e) => {
                log::warn!(
                    "cannot read animation directory {}: {e}; phrase table is empty",
                    dir.display()
                );
            }
        }

        log::info!(
            "phrase library: {} animation(s) under {}",
            phrases.len(),
            dir.display()
        );
        Self { phrases }
    }

    /// Build from explicit phrase names, deriving paths by convention.
    pub fn from_phrases(dir: &Path, phrases: impl IntoIterator<Item = String>) -> Self {
        let phrases = phrases
            .into_iter()
            .map(|p| {
                let path = dir.join(format!("{p}.{ANIMATION_EXTENSION}"));
                (p, path)
            })
            .collect();
        Self { phrases }
    }

    /// Exact match on the normalized phrase, nothing fuzzy.
    pub fn lookup(&self, phrase: &str) -> Option<&Path> {
        self.phrases.get(phrase).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
