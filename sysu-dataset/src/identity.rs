use crate::common::*;

/// A person identity in its canonical form, the decimal number zero-padded to
/// at least four digits, a negative number keeping its sign in front
/// (`-3` is `-003`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(String);

impl PersonId {
    pub fn new(id: i64) -> Self {
        Self(format!("{:04}", id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PersonId {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let token = text.trim();
        let id: i64 = token
            .parse()
            .with_context(|| format!("invalid person id '{}'", token))?;
        Ok(Self::new(id))
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PersonId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
