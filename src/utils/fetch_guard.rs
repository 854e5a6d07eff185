use std::cell::Cell;
use std::rc::Rc;

/// Generation counter that lets a view drop fetch results it no longer wants.
///
/// Each request takes a [`FetchTicket`] with [`FetchGuard::begin`]; starting a
/// newer request or calling [`FetchGuard::invalidate`] (on teardown) makes
/// every earlier ticket stale.
#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    generation: Rc<Cell<u64>>,
}

#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: Rc<Cell<u64>>,
    issued: u64,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> FetchTicket {
        let issued = self.generation.get().wrapping_add(1);
        self.generation.set(issued);
        FetchTicket { generation: Rc::clone(&self.generation), issued }
    }

    pub fn invalidate(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

impl FetchTicket {
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.issued
    }
}
