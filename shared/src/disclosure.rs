//! Per-card disclosure state.

/// Summary-vs-full state owned by a single card instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Disclosure {
    /// Excerpt only; attachments hidden.
    #[default]
    Collapsed,
    /// Full body plus attachments.
    Expanded,
}

impl Disclosure {
    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Collapsed => Disclosure::Expanded,
            Disclosure::Expanded => Disclosure::Collapsed,
        }
    }

    /// `true` when the full body should be shown.
    pub fn is_expanded(self) -> bool {
        matches!(self, Disclosure::Expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::Disclosure;

    #[test]
    fn starts_collapsed() {
        assert_eq!(Disclosure::default(), Disclosure::Collapsed);
        assert!(!Disclosure::default().is_expanded());
    }

    #[test]
    fn toggle_parity_decides_state() {
        let mut state = Disclosure::default();
        for step in 1..=7 {
            state = state.toggled();
            assert_eq!(state.is_expanded(), step % 2 == 1);
        }
    }
}
