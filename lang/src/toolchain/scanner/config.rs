/// What the driver does after a scan invocation fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Recovery {
    /// Stop at the first error.
    #[default]
    Halt,

    /// Record the error, discard the rune it points at (or one rune if the failed scan consumed
    /// nothing), and keep going.
    SkipRune,
}

/// Driver configuration for [TokenizedBuffer](super::TokenizedBuffer).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanConfig {
    pub recovery: Recovery,

    /// Stop after this many errors, regardless of the recovery policy.
    pub max_errors: Option<usize>,
}

impl ScanConfig {
    pub fn halting() -> ScanConfig {
        ScanConfig { recovery: Recovery::Halt, max_errors: None }
    }

    pub fn recovering(max_errors: Option<usize>) -> ScanConfig {
        ScanConfig { recovery: Recovery::SkipRune, max_errors }
    }

    pub(crate) fn should_stop(&self, error_count: usize) -> bool {
        self.recovery == Recovery::Halt || self.max_errors.is_some_and(|max| error_count >= max)
    }
}
