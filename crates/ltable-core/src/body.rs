// crates/ltable-core/src/body.rs

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{LtError, Result};

/// Costume slots in firmware order. Order only drives JSON field order.
pub const DEFAULT_PARTS: [&str; 15] = [
    "hat", "face", "chestL", "chestR", "armL", "armR", "tie", "belt", "gloveL", "gloveR", "legL",
    "legR", "shoeL", "shoeR", "board",
];

/// Key reserved for the frame timestamp in every frame object.
pub const TIME_KEY: &str = "time";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartList(Vec<String>);

impl Default for PartList {
    fn default() -> Self {
        Self(DEFAULT_PARTS.iter().map(|s| s.to_string()).collect())
    }
}

impl PartList {
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = Self(names.into_iter().map(Into::into).collect());
        list.validate()?;
        Ok(list)
    }

    pub fn validate(&self) -> Result<()> {
        if self.0.is_empty() {
            return Err(LtError::InvalidInput("part list is empty".into()));
        }
        let mut seen = HashSet::with_capacity(self.0.len());
        for name in &self.0 {
            if name.is_empty() {
                return Err(LtError::InvalidInput("part name is empty".into()));
            }
            if name == TIME_KEY {
                return Err(LtError::InvalidInput(format!("part name {TIME_KEY:?} is reserved")));
            }
            if !seen.insert(name.as_str()) {
                return Err(LtError::InvalidInput(format!("duplicate part name {name:?}")));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
