use crate::domain::objects::PATH_SEPARATOR_REGEX;
use crate::errors::PlzError;
use anyhow::Context;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExtensionName(String);

impl ExtensionName {
    pub fn try_parse(name: impl Into<String>) -> anyhow::Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(PlzError::EmptyExtensionName.into());
        }

        let re = regex::Regex::new(PATH_SEPARATOR_REGEX)
            .with_context(|| format!("invalid path separator regex: {PATH_SEPARATOR_REGEX}"))?;

        if re.is_match(&name) {
            return Err(PlzError::PathSeparatorInName.into());
        }

        if name == "." || name == ".." {
            return Err(PlzError::InvalidExtensionName.into());
        }

        Ok(Self(name))
    }
}

impl AsRef<str> for ExtensionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ExtensionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
