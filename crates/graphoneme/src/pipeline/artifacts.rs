//! # Persisted Artifact Set

use std::path::{Path, PathBuf};

use crate::errors::{GraphonemeError, Result};

/// The four co-located artifacts of one trained model, keyed by a
/// common base path.
///
/// All four are written together on save and read together on load;
/// loading is all-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Serialized model weights (format owned by the model).
    pub weights: PathBuf,

    /// The serialized vocabulary pair.
    pub vocabs: PathBuf,

    /// The serialized training configuration.
    pub config: PathBuf,

    /// The serialized per-epoch loss history.
    pub history: PathBuf,
}

impl ArtifactPaths {
    /// Derive the four artifact paths from a base path.
    ///
    /// `models/g2p` maps to `models/g2p.weights`, `models/g2p.vocab.json`,
    /// `models/g2p.config.json`, and `models/g2p.history.json`.
    pub fn for_base<P: AsRef<Path>>(base: P) -> Self {
        let base = base.as_ref();
        let suffixed = |suffix: &str| {
            let mut name = base.as_os_str().to_owned();
            name.push(suffix);
            PathBuf::from(name)
        };

        Self {
            weights: suffixed(".weights"),
            vocabs: suffixed(".vocab.json"),
            config: suffixed(".config.json"),
            history: suffixed(".history.json"),
        }
    }

    /// Fail with the first missing artifact, if any.
    pub fn verify_all_present(&self) -> Result<()> {
        for path in [&self.weights, &self.vocabs, &self.config, &self.history] {
            if !path.is_file() {
                return Err(GraphonemeError::MissingArtifact { path: path.clone() });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_base_suffixes() {
        let paths = ArtifactPaths::for_base("models/g2p");
        assert_eq!(paths.weights, PathBuf::from("models/g2p.weights"));
        assert_eq!(paths.vocabs, PathBuf::from("models/g2p.vocab.json"));
        assert_eq!(paths.config, PathBuf::from("models/g2p.config.json"));
        assert_eq!(paths.history, PathBuf::from("models/g2p.history.json"));
    }

    #[test]
    fn test_verify_reports_the_missing_artifact() {
        tempdir::TempDir::new("artifacts")
            .map(|dir| {
                let paths = ArtifactPaths::for_base(dir.path().join("g2p"));
                for path in [&paths.weights, &paths.vocabs, &paths.config] {
                    std::fs::write(path, b"{}").expect("failed to write");
                }

                match paths.verify_all_present() {
                    Err(GraphonemeError::MissingArtifact { path }) => {
                        assert_eq!(path, paths.history);
                    }
                    other => panic!("expected MissingArtifact, got {other:?}"),
                }
            })
            .expect("failed to create temp dir");
    }
}
