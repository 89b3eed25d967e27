/// Visible while at least one request is outstanding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadingIndicator {
    pending: usize,
}

impl LoadingIndicator {
    pub fn show(&mut self) {
        self.pending += 1;
    }

    pub fn hide(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.pending > 0
    }
}
