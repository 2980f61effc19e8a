use anyhow::Context;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LabelError {
    #[error("missing label for index {index} (label file has {available} line(s))")]
    Missing { index: usize, available: usize },
}

/// Libellés lisibles des indices : la ligne i nomme l'indice i.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Labels {
    names: Vec<String>,
}

impl Labels {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Lit un fichier texte, un libellé par ligne.
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading labels {}", path.display()))?;
        Ok(Self::parse(&raw))
    }

    /// Les lignes vides en fin de fichier sont ignorées.
    pub fn parse(raw: &str) -> Self {
        let mut names: Vec<String> = raw
            .lines()
            .map(|l| l.trim_end_matches('\r').to_string())
            .collect();
        while names.last().is_some_and(|l| l.trim().is_empty()) {
            names.pop();
        }
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&str, LabelError> {
        self.names
            .get(index)
            .map(String::as_str)
            .ok_or(LabelError::Missing {
                index,
                available: self.names.len(),
            })
    }

    /// Vérifie en amont que tout l'univers est couvert.
    pub fn ensure_covers(&self, universe: &[usize]) -> Result<(), LabelError> {
        for &index in universe {
            self.get(index)?;
        }
        Ok(())
    }
}

/// Libellé d'un indice, ou l'indice lui-même à défaut de fichier.
pub fn display_name(labels: Option<&Labels>, index: usize) -> Result<String, LabelError> {
    match labels {
        Some(l) => l.get(index).map(str::to_string),
        None => Ok(index.to_string()),
    }
}

/// Charge les libellés ; en cas d'échec, avertit et continue sans.
pub fn load_labels_or_warn<P: AsRef<Path>>(path: P) -> Option<Labels> {
    let path = path.as_ref();
    match Labels::from_path(path) {
        Ok(labels) => Some(labels),
        Err(err) => {
            #[cfg(feature = "logging")]
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "label file unavailable, falling back to indices"
            );
            eprintln!("Warning: {err:#}; printing indices instead");
            None
        }
    }
}
