pub const TOAST_DURATION_MS: u32 = 1_800;

#[derive(Clone, Debug, Default)]
pub struct Toast {
    message: Option<String>,
    generation: u64,
}

impl Toast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any visible message and returns the generation its dismissal
    /// timer must present.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.message = Some(message.into());
        self.generation
    }

    pub fn dismiss(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
