use crate::engine::TimerHandle;
use crate::rng::SymbolRng;

use super::Symbol;

/// Number of reels in the machine.
pub const REEL_COUNT: usize = 3;
/// Number of visible slots on each reel (top, middle, bottom).
pub const SLOTS_PER_REEL: usize = 3;
/// Index of the slot used for win evaluation, the cheat and highlighting.
pub const MIDDLE_SLOT: usize = 1;

/// A vertical strip of visible symbols.
///
/// The reel owns its randomization task: the handle is stored while the reel
/// spins and handed back to the controller for cancellation when it halts, so
/// no tick can land after the flag clears.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reel {
    slots: [Symbol; SLOTS_PER_REEL],
    randomizing: bool,
    highlighted: bool,
    spin_task: Option<TimerHandle>,
}

impl Reel {
    /// Creates an idle reel with the given symbols.
    pub const fn new(slots: [Symbol; SLOTS_PER_REEL]) -> Self {
        Self {
            slots,
            randomizing: false,
            highlighted: false,
            spin_task: None,
        }
    }

    /// Creates an idle reel with every slot drawn at random.
    pub fn random<R: SymbolRng + ?Sized>(rng: &mut R) -> Self {
        Self::new(core::array::from_fn(|_| Symbol::draw(rng)))
    }

    pub fn slots(&self) -> &[Symbol; SLOTS_PER_REEL] {
        &self.slots
    }

    /// Symbol in the given slot, or `None` if the slot index is out of range.
    pub fn symbol(&self, slot: usize) -> Option<Symbol> {
        self.slots.get(slot).copied()
    }

    pub fn middle(&self) -> Symbol {
        self.slots[MIDDLE_SLOT]
    }

    pub fn is_randomizing(&self) -> bool {
        self.randomizing
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub(crate) fn spin_task(&self) -> Option<TimerHandle> {
        self.spin_task
    }

    /// Marks the reel as randomizing and takes ownership of its tick task.
    pub(crate) fn begin_spin(&mut self, task: TimerHandle) {
        self.randomizing = true;
        self.spin_task = Some(task);
    }

    /// Replaces the tick task after a tick rescheduled itself.
    pub(crate) fn replace_spin_task(&mut self, task: TimerHandle) {
        self.spin_task = Some(task);
    }

    /// Redraws every slot. Returns `false` without touching the slots when the
    /// reel is not randomizing.
    pub(crate) fn reroll<R: SymbolRng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.randomizing {
            return false;
        }
        for slot in &mut self.slots {
            *slot = Symbol::draw(rng);
        }
        true
    }

    /// Clears the randomizing flag and returns the pending tick task, which the
    /// caller must cancel.
    pub(crate) fn halt(&mut self) -> Option<TimerHandle> {
        self.randomizing = false;
        self.spin_task.take()
    }

    pub(crate) fn force_middle(&mut self, symbol: Symbol) {
        self.slots[MIDDLE_SLOT] = symbol;
    }

    pub(crate) fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
}

/// The fixed set of reels, addressed 0 (left) to 2 (right).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReelSet {
    reels: [Reel; REEL_COUNT],
}

impl ReelSet {
    pub const fn new(reels: [Reel; REEL_COUNT]) -> Self {
        Self { reels }
    }

    /// Creates a reel set with every slot drawn at random.
    pub fn random<R: SymbolRng + ?Sized>(rng: &mut R) -> Self {
        Self::new(core::array::from_fn(|_| Reel::random(rng)))
    }

    pub fn get(&self, index: usize) -> Option<&Reel> {
        self.reels.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Reel> {
        self.reels.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reel> {
        self.reels.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Reel> {
        self.reels.iter_mut()
    }

    /// The middle symbol of every reel, left to right.
    pub fn middle_row(&self) -> [Symbol; REEL_COUNT] {
        core::array::from_fn(|index| self.reels[index].middle())
    }

    pub fn any_randomizing(&self) -> bool {
        self.reels.iter().any(Reel::is_randomizing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{TimerKind, Timeline};
    use crate::rng::PcgRng;
    use crate::state::Millis;

    #[test]
    fn idle_reel_ignores_reroll() {
        let mut rng = PcgRng::new(9);
        let mut reel = Reel::new([Symbol::Bell; SLOTS_PER_REEL]);
        assert!(!reel.reroll(&mut rng));
        assert_eq!(reel.slots(), &[Symbol::Bell; SLOTS_PER_REEL]);
    }

    #[test]
    fn halt_returns_owned_task() {
        let mut timeline = Timeline::new();
        let task = timeline.schedule(Millis(50), TimerKind::Randomize { reel: 0 });
        let mut reel = Reel::new([Symbol::Star; SLOTS_PER_REEL]);

        reel.begin_spin(task);
        assert!(reel.is_randomizing());
        assert_eq!(reel.halt(), Some(task));
        assert!(!reel.is_randomizing());
        assert_eq!(reel.halt(), None);
    }

    #[test]
    fn force_middle_only_touches_middle_slot() {
        let mut reel = Reel::new([Symbol::Lemon, Symbol::Cherry, Symbol::Bell]);
        reel.force_middle(Symbol::Seven);
        assert_eq!(reel.slots(), &[Symbol::Lemon, Symbol::Seven, Symbol::Bell]);
    }

    #[test]
    fn middle_row_reads_left_to_right() {
        let set = ReelSet::new([
            Reel::new([Symbol::Bell, Symbol::Cherry, Symbol::Bell]),
            Reel::new([Symbol::Bell, Symbol::Lemon, Symbol::Bell]),
            Reel::new([Symbol::Bell, Symbol::Cherry, Symbol::Bell]),
        ]);
        assert_eq!(
            set.middle_row(),
            [Symbol::Cherry, Symbol::Lemon, Symbol::Cherry]
        );
        assert!(!set.any_randomizing());
        assert!(set.get(REEL_COUNT).is_none());
    }
}
