use crate::domain::ModuleName;

/// What an acquisition statement asked for: the whole module, or specific attributes
/// of it.
#[derive(Debug, Clone, PartialEq)]
pub enum AcquireKind {
    Bare,
    Selective(Vec<String>),
}

/// A single module-acquisition request, as dispatched through the runtime's resolver
/// slot.
///
/// `name` is the name exactly as written at the request site. For relative requests it
/// has not been resolved against `package` yet; that is the real resolver's job, and an
/// installed interception matches on this unresolved form.
#[derive(Debug, Clone, PartialEq)]
pub struct AcquireRequest {
    pub name: ModuleName,
    pub kind: AcquireKind,
    /// Number of leading dots; zero means absolute.
    pub level: usize,
    /// Package of the module issuing the request, if any.
    pub package: Option<ModuleName>,
}

impl AcquireRequest {
    pub fn bare(name: ModuleName) -> Self {
        Self {
            name,
            kind: AcquireKind::Bare,
            level: 0,
            package: None,
        }
    }

    pub fn selective<S: AsRef<str>>(name: ModuleName, attributes: &[S]) -> Self {
        Self {
            kind: AcquireKind::Selective(
                attributes.iter().map(|a| a.as_ref().to_string()).collect(),
            ),
            ..Self::bare(name)
        }
    }

    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    pub fn with_package(mut self, package: Option<ModuleName>) -> Self {
        self.package = package;
        self
    }

    /// The same request with the attribute list dropped.
    pub fn as_bare(&self) -> Self {
        Self {
            name: self.name.clone(),
            kind: AcquireKind::Bare,
            level: self.level,
            package: self.package.clone(),
        }
    }

    pub fn attributes(&self) -> Option<&[String]> {
        match &self.kind {
            AcquireKind::Bare => None,
            AcquireKind::Selective(attributes) => Some(attributes),
        }
    }

    pub fn is_relative(&self) -> bool {
        self.level > 0
    }
}
