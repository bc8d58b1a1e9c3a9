//! ECS components for territory bots.
//!
//! Components are pure data containers attached to bot entities.
//! The expansion logic lives in `systems::expansion`.

use crate::hex::HexCoord;
use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// IDENTITY COMPONENTS
// ============================================================================

/// Faction identifier; 0 is neutral territory, 1..N are bot-owned factions.
#[derive(
    Component,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
)]
pub struct FactionId(pub u8);

impl FactionId {
    pub const NEUTRAL: FactionId = FactionId(0);

    pub fn is_neutral(self) -> bool {
        self.0 == 0
    }
}

// ============================================================================
// BOT COMPONENTS
// ============================================================================

/// Cell the bot currently expands from. Advances with every claim.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BotPosition(pub HexCoord);

/// The bot's designated spawn cell; the stuck-recovery expansion origin.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnPoint(pub HexCoord);

/// Countdown driving periodic expansion steps.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExpansionTimer {
    /// Seconds between expansion steps.
    pub interval: f32,
    /// Seconds until the next step.
    pub remaining: f32,
}

impl ExpansionTimer {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            remaining: interval,
        }
    }

    /// Advance by `dt`. Returns true when the interval elapsed, resetting
    /// the countdown for the next cycle.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = self.interval;
            true
        } else {
            false
        }
    }
}

// ============================================================================
// BUNDLE HELPERS
// ============================================================================

/// Bundle for spawning a complete territory bot entity.
#[derive(Bundle)]
pub struct BotBundle {
    pub faction: FactionId,
    pub spawn: SpawnPoint,
    pub position: BotPosition,
    pub timer: ExpansionTimer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_faction() {
        assert!(FactionId::NEUTRAL.is_neutral());
        assert!(!FactionId(1).is_neutral());
    }

    #[test]
    fn test_timer_fires_once_per_interval() {
        let mut timer = ExpansionTimer::new(1.0);
        assert!(!timer.advance(0.4));
        assert!(!timer.advance(0.4));
        assert!(timer.advance(0.4));
        // Reset after firing.
        assert_eq!(timer.interval, 1.0);
        assert!(!timer.advance(0.4));
    }

    #[test]
    fn test_timer_fires_when_dt_equals_interval() {
        let mut timer = ExpansionTimer::new(0.05);
        assert!(timer.advance(0.05));
        assert!(timer.advance(0.05));
    }
}
