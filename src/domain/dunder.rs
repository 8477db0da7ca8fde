use std::{
    fmt::{Display, Error, Formatter},
    ops::Deref,
};

/// Double-underscore names reserved by the runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dunder {
    Name,
    Package,
    Future,
}

impl Dunder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "__name__",
            Self::Package => "__package__",
            Self::Future => "__future__",
        }
    }
}

impl Deref for Dunder {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Dunder {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for Dunder {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.as_str())
    }
}
