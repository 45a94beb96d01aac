use crate::core::cage::Cage;
use crate::domain::model::{Bird, BirdKind};
use crate::utils::error::{CageError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub cage: Option<CageSection>,
    #[serde(default)]
    pub birds: Vec<BirdEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CageSection {
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirdEntry {
    pub kind: String,
    pub name: Option<String>,
}

impl RosterConfig {
    /// 從 TOML 檔案載入名冊
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CageError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析名冊
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CageError::RosterParseError {
            message: e.to_string(),
        })
    }

    pub fn label(&self) -> Option<&str> {
        self.cage.as_ref().and_then(|c| c.label.as_deref())
    }

    /// 驗證後依名冊順序建立籠子
    pub fn into_cage(self) -> Result<Cage<Bird>> {
        self.validate()?;

        let mut cage = Cage::new();
        for entry in &self.birds {
            cage.put(entry.to_bird()?);
        }

        tracing::info!(
            label = self.label().unwrap_or("unnamed"),
            birds = cage.len(),
            "loaded roster"
        );
        Ok(cage)
    }
}

impl BirdEntry {
    pub fn to_bird(&self) -> Result<Bird> {
        let kind: BirdKind = self.kind.parse()?;
        Ok(match &self.name {
            Some(name) => Bird::with_name(kind, name.trim()),
            None => Bird::of_kind(kind),
        })
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("birds", self.birds.len(), 1)?;

        // kind 由 to_bird 解析時檢查
        for (i, entry) in self.birds.iter().enumerate() {
            if let Some(name) = &entry.name {
                validate_non_empty_string(&format!("birds[{}].name", i), name)?;
            }
        }

        Ok(())
    }
}
