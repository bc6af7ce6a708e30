use indexmap::IndexSet;
use serde::Deserialize;

/// Columns a serializer keeps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<String>")]
pub enum Include {
    /// Every column
    #[default]
    All,

    /// Only the named columns
    Only(IndexSet<String>),
}

/// Columns a serializer drops.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<String>")]
pub enum Exclude {
    /// No column
    #[default]
    None,

    /// The named columns. Never empty; an empty set is [`Exclude::None`].
    Only(IndexSet<String>),
}

impl Include {
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Only(names.into_iter().map(Into::into).collect())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn contains(&self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(names) => names.contains(name),
        }
    }

    /// The explicitly named columns, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        let names = match self {
            Self::All => None,
            Self::Only(names) => Some(names),
        };
        names.into_iter().flatten().map(String::as_str)
    }
}

impl Exclude {
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: IndexSet<String> = names.into_iter().map(Into::into).collect();

        if names.is_empty() {
            Self::None
        } else {
            Self::Only(names)
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn contains(&self, name: &str) -> bool {
        match self {
            Self::None => false,
            Self::Only(names) => names.contains(name),
        }
    }

    /// The explicitly named columns, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        let names = match self {
            Self::None => None,
            Self::Only(names) => Some(names),
        };
        names.into_iter().flatten().map(String::as_str)
    }
}

impl From<Vec<String>> for Include {
    fn from(names: Vec<String>) -> Self {
        Self::only(names)
    }
}

impl From<Vec<String>> for Exclude {
    fn from(names: Vec<String>) -> Self {
        Self::only(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_exclude_is_none() {
        assert!(Exclude::only(Vec::<String>::new()).is_none());
        assert!(!Exclude::only(["id"]).is_none());
    }

    #[test]
    fn empty_include_selects_nothing() {
        let include = Include::only(Vec::<String>::new());
        assert!(!include.is_all());
        assert!(!include.contains("id"));
    }

    #[test]
    fn names_keep_order_and_dedupe() {
        let include = Include::only(["b", "a", "b"]);
        assert_eq!(include.names().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(Include::All.names().count(), 0);
    }
}
