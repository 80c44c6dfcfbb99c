//! Common traits for TUI components

/// A focusable row of a form, in top-to-bottom order.
///
/// Implementors list their rows once in `ORDER`; moving focus past either
/// end stays on the first or last row.
pub trait FormField: Copy + PartialEq + 'static {
    const ORDER: &'static [Self];
    /// Row that sends the form.
    const SUBMIT: Self;
    /// Row standing for the result list, reachable only when results exist.
    const RESULTS: Self;

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        let idx = (self.position() + 1).min(Self::ORDER.len() - 1);
        Self::ORDER[idx]
    }

    fn previous(self) -> Self {
        Self::ORDER[self.position().saturating_sub(1)]
    }

    /// Whether the row holds free text that can be edited.
    fn is_text(self) -> bool;
}
