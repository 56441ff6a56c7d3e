//! One-shot hero reveal.
//!
//! The hero renders "settled out" (transparent, offset) on the first
//! pass and moves to "settled in" once the page has mounted. The flag is
//! monotonic: once mounted, always mounted.

/// Whether the page has completed its first render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MountFlag(bool);

impl MountFlag {
    /// Unmounted flag, as created at page construction.
    pub const fn new() -> Self {
        Self(false)
    }

    /// `true` after [`MountFlag::mark_mounted`].
    pub const fn is_mounted(self) -> bool {
        self.0
    }

    /// Set the flag. Returns `true` only for the call that flipped it.
    pub fn mark_mounted(&mut self) -> bool {
        let flipped = !self.0;
        self.0 = true;
        flipped
    }

    /// Hero state for the current flag.
    pub const fn hero_state(self) -> HeroState {
        if self.0 {
            HeroState::SettledIn
        } else {
            HeroState::SettledOut
        }
    }
}

/// Visual state of the hero content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroState {
    /// Invisible and offset downwards
    SettledOut,
    /// Visible, no offset
    SettledIn,
}

impl HeroState {
    /// CSS class list for the hero wrapper.
    pub const fn class(self) -> &'static str {
        match self {
            HeroState::SettledOut => "hero-reveal hero-reveal-out",
            HeroState::SettledIn => "hero-reveal hero-reveal-in",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unmounted() {
        let flag = MountFlag::new();
        assert!(!flag.is_mounted());
        assert_eq!(flag.hero_state(), HeroState::SettledOut);
        assert_eq!(MountFlag::default(), flag);
    }

    #[test]
    fn flips_exactly_once() {
        let mut flag = MountFlag::new();
        assert!(flag.mark_mounted());
        assert!(!flag.mark_mounted());
        assert!(!flag.mark_mounted());
        assert!(flag.is_mounted());
    }

    #[test]
    fn never_reverts() {
        let mut flag = MountFlag::new();
        flag.mark_mounted();
        for _ in 0..10 {
            flag.mark_mounted();
            assert_eq!(flag.hero_state(), HeroState::SettledIn);
        }
    }

    #[test]
    fn hero_classes() {
        assert!(HeroState::SettledOut.class().ends_with("hero-reveal-out"));
        assert!(HeroState::SettledIn.class().ends_with("hero-reveal-in"));
    }
}
