use crate::libs::error::{ChartError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Display metadata of a topology class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub name: String,
    /// HTML
    pub description: String,
    pub image: String,
}

impl ClassInfo {
    /// Icon asset name: the first three characters of the image name.
    ///
    /// ```
    /// # use quadview::libs::topology::ClassInfo;
    /// let info = ClassInfo {
    ///     name: "Propeller (LPLx)".to_string(),
    ///     description: String::new(),
    ///     image: "lplx".to_string(),
    /// };
    /// assert_eq!(info.icon(), "lpl");
    /// ```
    pub fn icon(&self) -> &str {
        match self.image.char_indices().nth(3) {
            Some((idx, _)) => &self.image[..idx],
            None => &self.image,
        }
    }
}

/// Where class metadata comes from. Lookups may be slow or fail.
#[async_trait]
pub trait ClassInfoSource: Send + Sync {
    async fn class_info(&self, topology: &str, name: &str) -> Result<ClassInfo>;
}

/// Class descriptions on disk, one directory per class holding a
/// `DESCRIPTION` file: a title line followed by Markdown.
#[derive(Debug, Clone)]
pub struct DescriptionDir {
    root: PathBuf,
}

impl DescriptionDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// ```
    /// # use quadview::libs::topology::DescriptionDir;
    /// let text = "Propeller\nAll loops are *propeller* loops.\n";
    /// let info = DescriptionDir::parse("LPL", "propeller", text).unwrap();
    /// assert_eq!(info.name, "Propeller (LPL)");
    /// assert_eq!(info.image, "lpl");
    /// assert_eq!(info.description, "<p>All loops are <em>propeller</em> loops.</p>\n");
    /// ```
    pub fn parse(topology: &str, name: &str, text: &str) -> Result<ClassInfo> {
        let mut lines = text.lines();
        // A blank title line still names the class by its topology
        let title = lines.next().map(str::trim).ok_or_else(|| ChartError::Decode {
            name: name.to_string(),
            message: "empty description".to_string(),
        })?;

        let body = lines.collect::<Vec<_>>().join("\n");
        let mut description = String::new();
        pulldown_cmark::html::push_html(&mut description, pulldown_cmark::Parser::new(body.trim()));

        Ok(ClassInfo {
            name: format!("{} ({})", title, topology),
            description,
            image: topology.to_lowercase(),
        })
    }
}

#[async_trait]
impl ClassInfoSource for DescriptionDir {
    async fn class_info(&self, topology: &str, name: &str) -> Result<ClassInfo> {
        let not_found = || ChartError::ClassNotFound {
            topology: topology.to_string(),
            name: name.to_string(),
        };

        // Names come from result cells, keep them inside the root
        let dir = name.to_lowercase();
        if dir.is_empty() || dir.contains(['/', '\\']) || dir.starts_with('.') {
            return Err(not_found());
        }

        let path = self.root.join(dir).join("DESCRIPTION");
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(not_found()),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!("read class description {}", path.display());

        Self::parse(topology, name, &text)
    }
}
