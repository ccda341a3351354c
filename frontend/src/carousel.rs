#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { current: 0, len })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.current = index;
        true
    }

    pub fn next(&mut self) {
        self.go_to((self.current + 1) % self.len);
    }

    pub fn previous(&mut self) {
        self.go_to((self.current + self.len - 1) % self.len);
    }

    /// Missing, non-numeric and out-of-range `data-slide` values are ignored.
    pub fn select_by_indicator(&mut self, raw: Option<&str>) -> bool {
        match raw.and_then(|value| parse_index(value, self.len)) {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    pub fn offset_of(&self, position: usize) -> i64 {
        100 * (position as i64 - self.current as i64)
    }

    pub fn is_active(&self, position: usize) -> bool {
        position == self.current
    }

    pub fn offsets(&self) -> impl Iterator<Item = i64> + '_ {
        (0..self.len).map(|position| self.offset_of(position))
    }

    pub fn dots(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|position| self.is_active(position))
    }
}

pub fn parse_index(raw: &str, len: usize) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|index| *index < len)
}
