pub const USERNAME_DEBOUNCE_MS: u32 = 400;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceToken(u64);

/// Tracks the single pending timer for coalesced input. Arming a new token
/// invalidates the previous one.
#[derive(Clone, Debug, Default)]
pub struct InputDebounce {
    next: u64,
    pending: Option<u64>,
}

impl InputDebounce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self) -> DebounceToken {
        self.next = self.next.wrapping_add(1);
        self.pending = Some(self.next);
        DebounceToken(self.next)
    }

    /// Consumes the pending token; `false` for a superseded or cancelled one.
    pub fn fire(&mut self, token: DebounceToken) -> bool {
        if self.pending != Some(token.0) {
            return false;
        }
        self.pending = None;
        true
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
