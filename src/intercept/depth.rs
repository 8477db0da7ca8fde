use std::cell::Cell;

/// Recursion depth of the acquisition currently being handled. Zero means the request was
/// written directly in the caller's block; anything deeper was triggered by a module body
/// or by submodule handling.
#[derive(Debug, Default)]
pub(crate) struct Depth(Cell<usize>);

impl Depth {
    pub fn get(&self) -> usize {
        self.0.get()
    }

    /// Step one level deeper until the guard drops.
    pub fn enter(&self) -> DepthGuard<'_> {
        self.0.set(self.0.get() + 1);
        DepthGuard(&self.0)
    }
}

/// Undoes one `enter` when dropped, error and panic paths included.
pub(crate) struct DepthGuard<'a>(&'a Cell<usize>);

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}
