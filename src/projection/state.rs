//! Running cash state while stepping through a projection

/// Cash position at a point in the projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current projection month (0-indexed)
    pub month: u32,

    /// Running cash balance; may go negative before the projection stops
    pub cash: f64,

    /// Steady-state monthly net added each month
    pub monthly_profit: f64,
}

impl ProjectionState {
    pub fn new(initial_cash: f64, monthly_profit: f64) -> Self {
        Self {
            month: 0,
            cash: initial_cash,
            monthly_profit,
        }
    }

    /// Cash as shown to the user, floored at zero
    pub fn display_cash(&self) -> f64 {
        self.cash.max(0.0)
    }

    /// Cash has run out under a sustained loss
    pub fn is_depleted(&self) -> bool {
        self.cash <= 0.0 && self.monthly_profit < 0.0
    }

    /// Advance to next month
    pub fn advance_month(&mut self) {
        self.month += 1;
        self.cash += self.monthly_profit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_and_depletion() {
        let mut state = ProjectionState::new(100_000.0, -60_000.0);
        assert!(!state.is_depleted());

        state.advance_month();
        assert_eq!(state.month, 1);
        assert_eq!(state.cash, 40_000.0);
        assert!(!state.is_depleted());

        state.advance_month();
        assert_eq!(state.cash, -20_000.0);
        assert_eq!(state.display_cash(), 0.0);
        assert!(state.is_depleted());
    }

    #[test]
    fn test_profitable_state_never_depletes() {
        let state = ProjectionState::new(-10.0, 0.0);
        assert_eq!(state.display_cash(), 0.0);
        assert!(!state.is_depleted());
    }
}
