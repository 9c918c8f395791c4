/// Outcome of applying the Life rule to a single cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transition {
    Birth,
    Death,
    Survive,
}

/// Conway's Game of Life (B3/S23)
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors is born
/// 3. Live cell with any other count dies
/// 4. Everything else keeps its state
pub const fn transition(was_alive: bool, neighbors: u8) -> Transition {
    match (was_alive, neighbors) {
        (false, 3) => Transition::Birth,
        (true, 2 | 3) => Transition::Survive,
        (true, _) => Transition::Death,
        (false, _) => Transition::Survive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(transition(true, 0), Transition::Death);
        assert_eq!(transition(true, 1), Transition::Death);
    }

    #[test]
    fn test_survival() {
        assert_eq!(transition(true, 2), Transition::Survive);
        assert_eq!(transition(true, 3), Transition::Survive);
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(transition(true, 4), Transition::Death);
        assert_eq!(transition(true, 8), Transition::Death);
    }

    #[test]
    fn test_reproduction_only_at_three() {
        assert_eq!(transition(false, 3), Transition::Birth);
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(transition(false, n), Transition::Survive);
        }
    }
}
