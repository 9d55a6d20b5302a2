//! Rule-category toggles.

/// Which rule categories the engine emits.
///
/// Toggles only control inclusion: the dates of the remaining entries and
/// their relative order never change. Every category is enabled by default.
///
/// # Example
///
/// ```
/// use tahara_rules::RuleSet;
///
/// let rules = RuleSet::new()
///     .with_kartyupleity(false)
///     .with_stable_patterns(false);
/// assert!(rules.or_zarua());
/// assert!(!rules.kartyupleity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    or_zarua: bool,
    kartyupleity: bool,
    standard_cycles: bool,
    personal_interval: bool,
    stable_patterns: bool,
}

impl RuleSet {
    /// Creates a rule set with every category enabled.
    pub fn new() -> Self {
        Self {
            or_zarua: true,
            kartyupleity: true,
            standard_cycles: true,
            personal_interval: true,
            stable_patterns: true,
        }
    }

    /// Enables or disables the or zarua entry.
    pub fn with_or_zarua(mut self, enabled: bool) -> Self {
        self.or_zarua = enabled;
        self
    }

    /// Enables or disables the kartyupleity entry after night events.
    pub fn with_kartyupleity(mut self, enabled: bool) -> Self {
        self.kartyupleity = enabled;
        self
    }

    /// Enables or disables the 30-day, monthly and 31-day entries.
    pub fn with_standard_cycles(mut self, enabled: bool) -> Self {
        self.standard_cycles = enabled;
        self
    }

    /// Enables or disables the personal-interval entry.
    pub fn with_personal_interval(mut self, enabled: bool) -> Self {
        self.personal_interval = enabled;
        self
    }

    /// Enables or disables the stable-interval group.
    pub fn with_stable_patterns(mut self, enabled: bool) -> Self {
        self.stable_patterns = enabled;
        self
    }

    // --- Accessors ---

    /// Returns whether the or zarua entry is emitted.
    pub fn or_zarua(&self) -> bool {
        self.or_zarua
    }

    /// Returns whether the kartyupleity entry is emitted.
    pub fn kartyupleity(&self) -> bool {
        self.kartyupleity
    }

    /// Returns whether the standard cycle entries are emitted.
    pub fn standard_cycles(&self) -> bool {
        self.standard_cycles
    }

    /// Returns whether the personal-interval entry is emitted.
    pub fn personal_interval(&self) -> bool {
        self.personal_interval
    }

    /// Returns whether the stable-interval group is emitted.
    pub fn stable_patterns(&self) -> bool {
        self.stable_patterns
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}
