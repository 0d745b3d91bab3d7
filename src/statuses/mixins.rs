//! Reusable payload shapes shared by many concrete statuses (`spec.md`
//! §4.5 "Usage helpers"). Rust enums can't share fields across variants,
//! so these small `Copy` structs are embedded as variant payloads instead;
//! the helper methods below implement the usage/duration/shield
//! arithmetic once so each concrete status only calls them.

/// `_UsageStatus`: a capped, consumable counter. `AUTO_DESTROY` callers
/// remove the status once `usages` reaches zero; non-auto-destroy
/// statuses (rare) keep existing at zero until an explicit remove effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageState {
    pub usages: u8,
    pub max_usages: u8,
}

impl UsageState {
    pub fn new(usages: u8, max_usages: u8) -> Self {
        Self {
            usages: usages.min(max_usages),
            max_usages,
        }
    }

    /// `update` merge rule: sum usages, capped at `max_usages`.
    pub fn merged_with(&self, other: &Self) -> Self {
        Self {
            usages: (self.usages + other.usages).min(self.max_usages),
            max_usages: self.max_usages,
        }
    }

    /// Consumes one usage. Returns `None` (destroy) if this was the last.
    pub fn consume_one(&self) -> Option<Self> {
        if self.usages <= 1 {
            None
        } else {
            Some(Self {
                usages: self.usages - 1,
                ..*self
            })
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.usages == 0
    }
}

/// `_DurationStatus`: usages interpreted as remaining rounds, decremented
/// on `ROUND_END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationState {
    pub rounds_left: u8,
}

impl DurationState {
    pub fn new(rounds: u8) -> Self {
        Self { rounds_left: rounds }
    }

    pub fn merged_with(&self, other: &Self, max_rounds: u8) -> Self {
        Self {
            rounds_left: (self.rounds_left + other.rounds_left).min(max_rounds),
        }
    }

    /// Ticks down one round. Returns `None` (destroy) once it hits zero.
    pub fn tick(&self) -> Option<Self> {
        if self.rounds_left <= 1 {
            None
        } else {
            Some(Self {
                rounds_left: self.rounds_left - 1,
            })
        }
    }
}

/// `FixedShieldStatus`: absorbs a fixed amount per hit, one usage
/// consumed regardless of how much damage that hit actually carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedShieldState {
    pub usages: u8,
    pub max_usages: u8,
    pub shield_amount: i32,
}

impl FixedShieldState {
    pub fn new(usages: u8, max_usages: u8, shield_amount: i32) -> Self {
        Self {
            usages: usages.min(max_usages),
            max_usages,
            shield_amount,
        }
    }

    /// Absorbs `incoming` damage. Returns `(remaining_damage,
    /// new_self_or_none)`.
    pub fn absorb(&self, incoming: i32) -> (i32, Option<Self>) {
        let remaining = (incoming - self.shield_amount).max(0);
        let next = if self.usages <= 1 {
            None
        } else {
            Some(Self {
                usages: self.usages - 1,
                ..*self
            })
        };
        (remaining, next)
    }

    pub fn merged_with(&self, other: &Self) -> Self {
        Self {
            usages: (self.usages + other.usages).min(self.max_usages),
            ..*self
        }
    }
}

/// `StackedShieldStatus`: absorbs `stacks * shield_amount` total,
/// consuming only as many stacks as the hit actually needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackedShieldState {
    pub stacks: u8,
    pub max_stacks: u8,
    pub shield_amount_per_stack: i32,
}

impl StackedShieldState {
    pub fn new(stacks: u8, max_stacks: u8, shield_amount_per_stack: i32) -> Self {
        Self {
            stacks: stacks.min(max_stacks),
            max_stacks,
            shield_amount_per_stack,
        }
    }

    /// Absorbs `incoming` damage, consuming the minimum number of whole
    /// stacks needed. Returns `(remaining_damage, new_self_or_none)`.
    pub fn absorb(&self, incoming: i32) -> (i32, Option<Self>) {
        if incoming <= 0 || self.stacks == 0 {
            return (incoming.max(0), Some(*self));
        }
        let needed_stacks =
            ((incoming + self.shield_amount_per_stack - 1) / self.shield_amount_per_stack.max(1))
                .clamp(0, self.stacks as i32) as u8;
        let absorbed = needed_stacks as i32 * self.shield_amount_per_stack;
        let remaining = (incoming - absorbed).max(0);
        let left = self.stacks - needed_stacks;
        let next = if left == 0 {
            None
        } else {
            Some(Self {
                stacks: left,
                ..*self
            })
        };
        (remaining, next)
    }

    pub fn merged_with(&self, other: &Self) -> Self {
        Self {
            stacks: (self.stacks + other.stacks).min(self.max_stacks),
            ..*self
        }
    }
}
