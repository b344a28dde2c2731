//! Screen lifecycle states.

use anyhow::{Result, bail};

/// The three states a screen passes through, in order.
///
/// Transitions are single-shot: a screen is created once, destroyed once,
/// and never revived. `Created → Destroyed` is legal so a host can tear
/// down a screen whose creation pipeline failed partway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Created,
    Active,
    Destroyed,
}

impl Lifecycle {
    /// Move to `next`, rejecting any transition the state machine does not
    /// allow.
    pub fn advance(&mut self, next: Lifecycle) -> Result<()> {
        let allowed = matches!(
            (*self, next),
            (Lifecycle::Created, Lifecycle::Active)
                | (Lifecycle::Created, Lifecycle::Destroyed)
                | (Lifecycle::Active, Lifecycle::Destroyed)
        );
        if !allowed {
            bail!("invalid lifecycle transition {:?} -> {:?}", self, next);
        }
        *self = next;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Lifecycle::Active)
    }

    pub fn is_destroyed(&self) -> bool {
        matches!(self, Lifecycle::Destroyed)
    }
}
