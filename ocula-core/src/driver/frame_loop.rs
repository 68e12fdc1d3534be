/// Handle of one requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallbackId(pub u64);

/// Display-refresh callback chain: at most one pending callback, re-requested
/// by the callback itself while the loop stays active.
#[derive(Debug, Default)]
pub struct FrameLoop {
    active: bool,
    pending: Option<CallbackId>,
    next_id: u64,
}

impl FrameLoop {
    /// Mark active and request the first callback.
    pub fn start(&mut self) {
        self.active = true;
        self.schedule();
    }

    /// Cancel the pending callback and clear the active flag.
    pub fn stop(&mut self) {
        self.active = false;
        self.pending = None;
    }

    /// Request a callback, replacing any pending one.
    pub fn schedule(&mut self) -> CallbackId {
        let id = CallbackId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending = Some(id);
        id
    }

    /// Consume the pending callback.
    pub fn take_pending(&mut self) -> Option<CallbackId> {
        self.pending.take()
    }

    /// `true` between `start` and `stop`.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// `true` while a callback is waiting to run.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
