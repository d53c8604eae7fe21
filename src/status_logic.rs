use crate::config::{BLINK_MOUNTED_MS, BLINK_NOT_MOUNTED_MS, BLINK_SUSPENDED_MS};

/// USB link state as reflected on the status LED.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// Not configured by a host.
    NotMounted,
    /// Configured and running.
    Mounted,
    /// Bus suspended by the host.
    Suspended,
}

impl LinkState {
    /// Derive the link state from the USB stack's flags.
    pub fn from_flags(configured: bool, suspended: bool) -> Self {
        if suspended {
            LinkState::Suspended
        } else if configured {
            LinkState::Mounted
        } else {
            LinkState::NotMounted
        }
    }
}

/// What the status LED should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedPattern {
    /// Toggle every `half_period_ms`.
    Blink { half_period_ms: u64 },
    /// Stay lit.
    Solid,
}

impl LedPattern {
    /// Caps Lock overrides the link state with a solid LED.
    pub fn for_state(state: LinkState, caps_lock: bool) -> Self {
        if caps_lock {
            return LedPattern::Solid;
        }
        let half_period_ms = match state {
            LinkState::NotMounted => BLINK_NOT_MOUNTED_MS,
            LinkState::Mounted => BLINK_MOUNTED_MS,
            LinkState::Suspended => BLINK_SUSPENDED_MS,
        };
        LedPattern::Blink { half_period_ms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suspend_wins_over_configured() {
        assert_eq!(LinkState::from_flags(true, true), LinkState::Suspended);
        assert_eq!(LinkState::from_flags(false, true), LinkState::Suspended);
        assert_eq!(LinkState::from_flags(true, false), LinkState::Mounted);
        assert_eq!(LinkState::from_flags(false, false), LinkState::NotMounted);
    }

    #[test]
    fn blink_period_follows_link_state() {
        assert_eq!(
            LedPattern::for_state(LinkState::NotMounted, false),
            LedPattern::Blink { half_period_ms: 250 }
        );
        assert_eq!(
            LedPattern::for_state(LinkState::Mounted, false),
            LedPattern::Blink { half_period_ms: 1000 }
        );
        assert_eq!(
            LedPattern::for_state(LinkState::Suspended, false),
            LedPattern::Blink { half_period_ms: 2500 }
        );
    }

    #[test]
    fn caps_lock_holds_led_on() {
        for state in [LinkState::NotMounted, LinkState::Mounted, LinkState::Suspended] {
            assert_eq!(LedPattern::for_state(state, true), LedPattern::Solid);
        }
    }
}
