//! Ring-buffer snake body
//!
//! The body is a fixed array of grid-cell capacity indexed by two wrapping
//! cursors plus a length. The cells from tail to head (inclusive, wrapping)
//! are the body from tail to head and are pairwise distinct, except in the
//! window between `advance_head` and the following `grow`/`drop_tail` where
//! the freshly written head is not yet counted.

use glam::IVec2;

use super::grid::Direction;

/// The snake: a fixed-capacity ring of body cells plus its heading
#[derive(Debug, Clone)]
pub struct Snake {
    cells: Vec<IVec2>,
    head_idx: usize,
    tail_idx: usize,
    len: usize,
    /// Current heading; `None` until the first accepted direction input
    pub dir: Option<Direction>,
}

impl Snake {
    /// Create a length-1 snake at `start`. Capacity is the grid cell count,
    /// allocated once and reused across restarts.
    pub fn new(capacity: usize, start: IVec2) -> Self {
        debug_assert!(capacity > 0);
        let mut cells = vec![IVec2::ZERO; capacity];
        cells[0] = start;
        Self {
            cells,
            head_idx: 0,
            tail_idx: 0,
            len: 1,
            dir: None,
        }
    }

    /// Number of body cells
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Maximum possible length (the grid cell count)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Current head cell
    #[inline]
    pub fn head(&self) -> IVec2 {
        self.cells[self.head_idx]
    }

    /// Current tail cell
    #[inline]
    pub fn tail(&self) -> IVec2 {
        self.cells[self.tail_idx]
    }

    /// Advance the head cursor and write the next head cell.
    ///
    /// Leaves the length stale until the caller settles the step with
    /// `grow` (apple eaten) or `drop_tail` (plain move).
    pub fn advance_head(&mut self, dir: Direction) -> IVec2 {
        let new_head = self.head() + dir.offset();
        self.head_idx = (self.head_idx + 1) % self.capacity();
        self.cells[self.head_idx] = new_head;
        new_head
    }

    /// Keep the tail in place and count the new head: net growth of one
    pub fn grow(&mut self) {
        self.len += 1;
    }

    /// Vacate the tail cell; length is unchanged by the completed step
    pub fn drop_tail(&mut self) {
        self.tail_idx = (self.tail_idx + 1) % self.capacity();
    }

    /// Body cells ordered tail to head
    pub fn iter(&self) -> impl Iterator<Item = IVec2> + '_ {
        let capacity = self.capacity();
        (0..self.len).map(move |i| self.cells[(self.tail_idx + i) % capacity])
    }

    /// True iff `cell` is occupied by any body cell, head included
    pub fn occupies(&self, cell: IVec2) -> bool {
        self.iter().any(|c| c == cell)
    }

    /// True iff the head coincides with another body cell
    pub fn self_collision(&self) -> bool {
        let head = self.head();
        self.iter().take(self.len - 1).any(|c| c == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(snake: &mut Snake, dir: Direction, grow: bool) -> IVec2 {
        let head = snake.advance_head(dir);
        if grow {
            snake.grow();
        } else {
            snake.drop_tail();
        }
        head
    }

    #[test]
    fn test_cursors_wrap_around_capacity() {
        let mut snake = Snake::new(4, IVec2::new(0, 0));
        for i in 1..=10 {
            let head = step(&mut snake, Direction::Right, false);
            assert_eq!(head, IVec2::new(i, 0));
            assert_eq!(snake.len(), 1);
            assert_eq!(snake.tail(), head);
        }
    }

    #[test]
    fn test_growth_keeps_tail_and_order() {
        let mut snake = Snake::new(16, IVec2::new(5, 5));
        step(&mut snake, Direction::Right, true);
        step(&mut snake, Direction::Right, true);
        step(&mut snake, Direction::Down, true);

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), IVec2::new(5, 5));
        assert_eq!(snake.head(), IVec2::new(7, 6));

        let body: Vec<_> = snake.iter().collect();
        assert_eq!(
            body,
            vec![
                IVec2::new(5, 5),
                IVec2::new(6, 5),
                IVec2::new(7, 5),
                IVec2::new(7, 6),
            ]
        );
        for cell in body {
            assert!(snake.occupies(cell));
        }
        assert!(!snake.occupies(IVec2::new(4, 5)));
    }

    #[test]
    fn test_loop_onto_grown_tail_collides() {
        // Grow around a 2x2 loop; the fourth step lands on the still-present tail
        let mut snake = Snake::new(16, IVec2::new(5, 5));
        step(&mut snake, Direction::Right, true);
        step(&mut snake, Direction::Down, true);
        step(&mut snake, Direction::Left, true);
        assert!(!snake.self_collision());

        step(&mut snake, Direction::Up, true);
        assert_eq!(snake.head(), IVec2::new(5, 5));
        assert!(snake.self_collision());
    }

    #[test]
    fn test_chasing_vacated_tail_is_legal() {
        // Same loop, but the final step vacates the tail cell first
        let mut snake = Snake::new(16, IVec2::new(5, 5));
        step(&mut snake, Direction::Right, true);
        step(&mut snake, Direction::Down, true);
        step(&mut snake, Direction::Left, true);

        step(&mut snake, Direction::Up, false);
        assert_eq!(snake.head(), IVec2::new(5, 5));
        assert!(!snake.self_collision());
        assert_eq!(snake.len(), 4);
    }
}
