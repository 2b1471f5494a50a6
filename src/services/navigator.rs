/// Сдвиг, который пользователь накручивает клавишами
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    offset: i64,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn step(&mut self, delta: i64) {
        self.offset = self.offset.saturating_add(delta);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Индекс для позиции `base` или `None` для пустой коллекции
    pub fn index_for(&self, base: usize, count: usize) -> Option<usize> {
        index_for(base, self.offset, count)
    }
}

/// `(base + offset) mod count`, приведённое в `[0, count)`.
/// Для `count == 0` индекса нет.
pub fn index_for(base: usize, offset: i64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }

    let n = count as i128;
    let index = (base as i128 + offset as i128).rem_euclid(n);
    Some(index as usize)
}
