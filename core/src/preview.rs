pub const PREVIEW_ERROR_MESSAGE: &str =
    "Could not load the stats card. Check the username and try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewState {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Identifies one recompute cycle; image signals carry it back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewTicket {
    pub seq: u64,
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct Preview {
    state: PreviewState,
    seq: u64,
    url: Option<String>,
}

impl Preview {
    pub fn new() -> Self {
        Self {
            state: PreviewState::Idle,
            seq: 0,
            url: None,
        }
    }

    /// Starts a fresh load for `url`, even when it equals the current one.
    pub fn recompute(&mut self, url: String) -> PreviewTicket {
        self.seq = self.seq.wrapping_add(1);
        self.state = PreviewState::Loading;
        self.url = Some(url.clone());
        PreviewTicket { seq: self.seq, url }
    }

    pub fn image_loaded(&mut self, seq: u64) -> bool {
        self.settle(seq, PreviewState::Loaded)
    }

    pub fn image_failed(&mut self, seq: u64) -> bool {
        self.settle(seq, PreviewState::Errored)
    }

    fn settle(&mut self, seq: u64, next: PreviewState) -> bool {
        if seq != self.seq || self.state != PreviewState::Loading {
            return false;
        }
        self.state = next;
        true
    }

    pub fn state(&self) -> PreviewState {
        self.state
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        (self.state == PreviewState::Errored).then_some(PREVIEW_ERROR_MESSAGE)
    }
}

impl Default for Preview {
    fn default() -> Self {
        Self::new()
    }
}
