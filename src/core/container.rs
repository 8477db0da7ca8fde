use std::{
    cell::{Ref, RefCell, RefMut},
    fmt::{Debug, Error, Formatter},
    rc::Rc,
};

/// A shared, mutable handle to a runtime value. Thin wrapper around `Rc<RefCell<T>>` so
/// call sites can say what they mean: clone the handle, not the value.
pub struct Container<T>(Rc<RefCell<T>>);

impl<T> Container<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Do these two handles refer to the same underlying value? This is the runtime's
    /// notion of `is`, as opposed to the structural equality of `==`.
    pub fn same_identity(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Container<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Debug> Debug for Container<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self.0.try_borrow() {
            Ok(value) => write!(f, "Container({:?})", &*value),
            Err(_) => write!(f, "Container(<borrowed>)"),
        }
    }
}

impl<T: PartialEq> PartialEq for Container<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other) || *self.borrow() == *other.borrow()
    }
}
