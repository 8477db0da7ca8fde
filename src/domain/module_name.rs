use std::fmt::{Display, Error, Formatter};

use crate::domain::Dunder;

/// A dotted module name as written at a request site. Relative requests carry their dots
/// separately; the name itself is always a plain segment path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName(Vec<String>);

impl ModuleName {
    pub fn new(segments: Vec<String>) -> Self {
        assert!(!segments.is_empty());
        Self(segments)
    }

    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Self {
        Self::new(segments.iter().map(|s| s.as_ref().to_string()).collect())
    }

    pub fn from_dotted(s: &str) -> Self {
        let segments = s.split('.').map(|s| s.to_string()).collect();
        Self::new(segments)
    }

    /// The forward-compatibility module's name.
    pub fn future() -> Self {
        Self::from_segments(&[Dunder::Future])
    }

    pub fn as_str(&self) -> String {
        self.0.join(".")
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn parent(&self) -> Option<ModuleName> {
        self.strip_last(1)
    }

    /// Removes `n` segments from the end of the module name.
    ///
    /// This operation is structural, not semantic: it represents walking upward in the
    /// module hierarchy. Relative-request dot handling is layered on top of this in the
    /// resolver.
    ///
    /// Returns `None` if removing `n` segments would erase the module name entirely.
    pub fn strip_last(&self, n: usize) -> Option<ModuleName> {
        if n >= self.0.len() {
            return None;
        }

        let new_len = self.0.len() - n;
        Some(ModuleName(self.0[..new_len].to_vec()))
    }

    /// Joins additional segments onto the module name.
    pub fn join<I>(&self, tail: I) -> ModuleName
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut segments = self.0.clone();
        for s in tail {
            segments.push(s.as_ref().to_string());
        }
        ModuleName(segments)
    }

    /// The fully qualified name of an attribute of this module, e.g. `alpha.beta` for
    /// attribute `beta` of module `alpha`.
    pub fn attribute(&self, name: &str) -> ModuleName {
        self.join([name])
    }

    /// True when `self` names a module nested anywhere beneath `package`.
    pub fn is_within(&self, package: &ModuleName) -> bool {
        self.0.len() > package.0.len() && self.0[..package.0.len()] == package.0[..]
    }
}

impl Display for ModuleName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.as_str())
    }
}

impl From<&ModuleName> for String {
    fn from(value: &ModuleName) -> Self {
        value.to_string()
    }
}
