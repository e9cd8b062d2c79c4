#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PitKind {
    House,
    Store,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pit {
    stones: u32,
    kind: PitKind,
}

impl Pit {
    pub fn house(stones: u32) -> Self {
        Self { stones, kind: PitKind::House }
    }

    pub fn store() -> Self {
        Self { stones: 0, kind: PitKind::Store }
    }

    pub fn stones(&self) -> u32 {
        self.stones
    }

    pub fn kind(&self) -> PitKind {
        self.kind
    }

    pub fn is_store(&self) -> bool {
        self.kind == PitKind::Store
    }

    pub fn is_empty(&self) -> bool {
        self.stones == 0
    }

    pub fn sow_stone(&mut self) {
        self.stones += 1;
    }

    pub fn add_stones(&mut self, stones: u32) {
        self.stones += stones;
    }

    /// Empties the pit and returns what it held.
    pub fn pick_stones(&mut self) -> u32 {
        std::mem::take(&mut self.stones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_stones_empties_house() {
        let mut pit = Pit::house(6);
        assert_eq!(pit.pick_stones(), 6);
        assert!(pit.is_empty());
        assert_eq!(pit.pick_stones(), 0);
    }

    #[test]
    fn test_store_starts_empty_and_accumulates() {
        let mut store = Pit::store();
        assert!(store.is_store());
        assert!(store.is_empty());
        store.sow_stone();
        store.add_stones(4);
        assert_eq!(store.stones(), 5);
        assert_eq!(store.kind(), PitKind::Store);
    }
}
