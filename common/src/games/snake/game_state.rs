use std::collections::{HashSet, VecDeque};

use crate::log;
use crate::games::SessionRng;
use super::geometry::{cells_equal, sample_free_cell, wrap_if_out_of_bounds};
use super::orientation::neighbor_direction;
use super::types::{Cell, Direction, FieldSize, GameEndReason, GameStatus};

/// Tail first, head last.
pub const INITIAL_BODY: [Cell; 7] = [
    Cell::new(0, 0),
    Cell::new(1, 0),
    Cell::new(2, 0),
    Cell::new(2, 1),
    Cell::new(3, 1),
    Cell::new(4, 1),
    Cell::new(5, 1),
];
pub const INITIAL_DIRECTION: Direction = Direction::Right;
pub const INITIAL_FOOD: Cell = Cell::new(1, 1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was already over; nothing changed.
    Skipped,
    Moved,
    Ate,
    Ended(GameEndReason),
}

pub struct SnakeGameState {
    body: VecDeque<Cell>,
    direction: Direction,
    food: Option<Cell>,
    field_size: FieldSize,
    game_end_reason: Option<GameEndReason>,
    rng: SessionRng,
}

impl SnakeGameState {
    pub fn new(field_size: FieldSize, rng: SessionRng) -> Self {
        let mut state = Self {
            body: VecDeque::from(INITIAL_BODY),
            direction: INITIAL_DIRECTION,
            food: None,
            field_size,
            game_end_reason: None,
            rng,
        };
        state.place_initial_food();
        state
    }

    /// Starts a new round on the same field, continuing the RNG stream.
    pub fn reset(&mut self) {
        self.body = VecDeque::from(INITIAL_BODY);
        self.direction = INITIAL_DIRECTION;
        self.game_end_reason = None;
        self.place_initial_food();
        log!("New round started (seed {})", self.rng.seed());
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn head(&self) -> Option<Cell> {
        self.body.back().copied()
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn field_size(&self) -> &FieldSize {
        &self.field_size
    }

    pub fn score(&self) -> usize {
        self.body.len()
    }

    pub fn game_end_reason(&self) -> Option<GameEndReason> {
        self.game_end_reason
    }

    pub fn is_over(&self) -> bool {
        self.game_end_reason.is_some()
    }

    pub fn status(&self) -> GameStatus {
        match self.game_end_reason {
            Some(reason) => GameStatus::Over(reason),
            None => GameStatus::Running,
        }
    }

    /// Returns whether the heading changed. A heading pointing at the
    /// segment right behind the head is refused.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.is_over() {
            return false;
        }

        let mut segments = self.body.iter().rev();
        if let (Some(&head), Some(&neck)) = (segments.next(), segments.next()) {
            let mut behind = neighbor_direction(head, neck);
            if !head.is_adjacent_to(neck) {
                // Head and neck sit on opposite edges after a wrap.
                behind = behind.flipped();
            }
            if behind.points_to(direction) {
                return false;
            }
        }

        self.direction = direction;
        true
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.is_over() {
            return TickOutcome::Skipped;
        }

        let Some(removed_tail) = self.body.pop_front() else {
            return TickOutcome::Skipped;
        };
        let head = self.body.back().copied().unwrap_or(removed_tail);
        let new_head = wrap_if_out_of_bounds(head.step(self.direction), &self.field_size);
        self.body.push_back(new_head);

        let mut outcome = TickOutcome::Moved;

        if self.food.is_some_and(|food| cells_equal(food, new_head)) {
            self.body.push_front(removed_tail);
            outcome = TickOutcome::Ate;

            if !self.respawn_food() {
                return self.finish(GameEndReason::BoardFilled);
            }
        }

        if let Some(cell) = find_duplicate_cell(self.body.iter().copied()) {
            log!("Snake collided with itself at {}. Final score: {}", cell, self.score());
            return self.finish(GameEndReason::SelfCollision);
        }

        outcome
    }

    fn finish(&mut self, reason: GameEndReason) -> TickOutcome {
        self.game_end_reason = Some(reason);
        log!("Game over: {:?}", reason);
        TickOutcome::Ended(reason)
    }

    fn respawn_food(&mut self) -> bool {
        let occupied: HashSet<Cell> = self.body.iter().copied().collect();
        match sample_free_cell(&self.field_size, &occupied, &mut self.rng) {
            Ok(cell) => {
                self.food = Some(cell);
                true
            }
            Err(err) => {
                log!("Cannot place food: {}", err);
                self.food = None;
                false
            }
        }
    }

    fn place_initial_food(&mut self) {
        if self.field_size.contains(INITIAL_FOOD) && !self.body.contains(&INITIAL_FOOD) {
            self.food = Some(INITIAL_FOOD);
        } else {
            self.respawn_food();
        }
    }

    #[cfg(test)]
    pub(crate) fn set_body(&mut self, body: &[Cell], direction: Direction) {
        self.body = body.iter().copied().collect();
        self.direction = direction;
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Option<Cell>) {
        self.food = food;
    }
}

pub fn find_duplicate_cell(cells: impl IntoIterator<Item = Cell>) -> Option<Cell> {
    let mut seen = HashSet::new();
    cells.into_iter().find(|cell| !seen.insert(*cell))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(column: i32, row: i32) -> Cell {
        Cell::new(column, row)
    }

    fn create_state() -> SnakeGameState {
        SnakeGameState::new(FieldSize::new(600, 300, 30), SessionRng::new(42))
    }

    fn assert_connected(state: &SnakeGameState) {
        let field = state.field_size();
        let body: Vec<Cell> = state.body().iter().copied().collect();
        for pair in body.windows(2) {
            let unwrapped = field.unwrap_neighbor(pair[0], pair[1]);
            assert!(
                pair[0].is_adjacent_to(unwrapped),
                "{} and {} are not adjacent",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_initial_state() {
        let state = create_state();
        assert_eq!(state.body().len(), 7);
        assert_eq!(state.head(), Some(c(5, 1)));
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.food(), Some(INITIAL_FOOD));
        assert_eq!(state.status(), GameStatus::Running);
        assert_eq!(state.score(), 7);
    }

    #[test]
    fn test_first_tick_moves_head_and_drops_tail() {
        let mut state = create_state();
        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(state.body().len(), 7);
        assert_eq!(state.head(), Some(c(6, 1)));
        assert_eq!(state.body().front().copied(), Some(c(1, 0)));
        assert!(!state.body().contains(&c(0, 0)));
    }

    #[test]
    fn test_eating_grows_by_one_and_moves_food() {
        let mut state = create_state();
        state.set_food(Some(c(6, 1)));

        assert_eq!(state.tick(), TickOutcome::Ate);
        assert_eq!(state.body().len(), 8);
        assert_eq!(state.body().front().copied(), Some(c(0, 0)));
        let food = state.food().unwrap();
        assert!(!state.body().contains(&food));
        assert!(state.field_size().contains(food));
    }

    #[test]
    fn test_self_collision_ends_game() {
        let mut state = create_state();
        state.set_body(&[c(0, 0), c(1, 0), c(2, 0), c(1, 0)], Direction::Right);

        assert_eq!(state.tick(), TickOutcome::Ended(GameEndReason::SelfCollision));
        assert!(state.is_over());
        assert_eq!(state.status(), GameStatus::Over(GameEndReason::SelfCollision));
    }

    #[test]
    fn test_ticks_after_game_over_are_no_ops() {
        let mut state = create_state();
        state.set_body(&[c(0, 0), c(1, 0), c(2, 0), c(1, 0)], Direction::Right);
        state.tick();

        let body_before: Vec<Cell> = state.body().iter().copied().collect();
        assert_eq!(state.tick(), TickOutcome::Skipped);
        let body_after: Vec<Cell> = state.body().iter().copied().collect();
        assert_eq!(body_before, body_after);
        assert!(!state.set_direction(Direction::Up));
    }

    #[test]
    fn test_turning_into_own_body_ends_game() {
        let mut state = create_state();
        state.set_body(
            &[c(3, 3), c(4, 3), c(5, 3), c(5, 4), c(4, 4)],
            Direction::Left,
        );
        assert!(state.set_direction(Direction::Up));
        assert_eq!(state.tick(), TickOutcome::Ended(GameEndReason::SelfCollision));
    }

    #[test]
    fn test_moving_into_vacated_tail_cell_is_allowed() {
        let mut state = create_state();
        state.set_body(&[c(4, 3), c(5, 3), c(5, 4), c(4, 4)], Direction::Up);
        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(state.head(), Some(c(4, 3)));
        assert!(!state.is_over());
    }

    #[test]
    fn test_reverse_direction_is_rejected() {
        let mut state = create_state();
        assert!(!state.set_direction(Direction::Left));
        assert_eq!(state.direction(), Direction::Right);
    }

    #[test]
    fn test_latest_direction_before_tick_wins() {
        let mut state = create_state();
        assert!(state.set_direction(Direction::Up));
        assert!(state.set_direction(Direction::Down));
        state.tick();
        assert_eq!(state.head(), Some(c(5, 2)));
    }

    #[test]
    fn test_reverse_guard_uses_body_not_pending_heading() {
        let mut state = create_state();
        assert!(state.set_direction(Direction::Up));
        assert!(!state.set_direction(Direction::Left));
        assert_eq!(state.direction(), Direction::Up);
    }

    #[test]
    fn test_reverse_guard_across_wrap_edge() {
        let mut state = create_state();
        state.set_body(&[c(17, 4), c(18, 4), c(19, 4), c(0, 4)], Direction::Right);

        assert!(!state.set_direction(Direction::Left));
        assert!(state.set_direction(Direction::Right));
        assert!(state.set_direction(Direction::Down));
    }

    #[test]
    fn test_head_wraps_around_right_edge() {
        let mut state = create_state();
        state.set_body(&[c(17, 4), c(18, 4), c(19, 4)], Direction::Right);
        state.set_food(None);

        state.tick();
        assert_eq!(state.head(), Some(c(0, 4)));
        assert!(!state.is_over());
    }

    #[test]
    fn test_head_wraps_around_top_edge() {
        let mut state = create_state();
        state.set_body(&[c(3, 2), c(3, 1), c(3, 0)], Direction::Up);
        state.set_food(None);

        state.tick();
        assert_eq!(state.head(), Some(c(3, 9)));
    }

    #[test]
    fn test_body_stays_connected_over_many_ticks() {
        let mut state = create_state();
        let turns = [Direction::Down, Direction::Right, Direction::Up, Direction::Right];

        for step in 0..200 {
            if step % 7 == 0 {
                state.set_direction(turns[(step / 7) % turns.len()]);
            }
            state.tick();
            assert_connected(&state);
            if state.is_over() {
                break;
            }
        }
    }

    #[test]
    fn test_filling_the_board_wins() {
        let mut state = SnakeGameState::new(FieldSize::new(240, 120, 30), SessionRng::new(7));
        // 8x4 grid, a serpentine covering every cell but the last one.
        let mut body = Vec::new();
        for row in 0..4 {
            if row % 2 == 0 {
                body.extend((0..8).map(|column| c(column, row)));
            } else {
                body.extend((0..8).rev().map(|column| c(column, row)));
            }
        }
        let last = body.pop().unwrap();
        state.set_body(&body, Direction::Left);
        state.set_food(Some(last));

        assert_eq!(state.tick(), TickOutcome::Ended(GameEndReason::BoardFilled));
        assert_eq!(state.score(), 32);
        assert_eq!(state.food(), None);
        assert!(state.is_over());
    }

    #[test]
    fn test_reset_restores_initial_round() {
        let mut state = create_state();
        state.set_body(&[c(0, 0), c(1, 0), c(2, 0), c(1, 0)], Direction::Right);
        state.tick();
        assert!(state.is_over());

        state.reset();
        assert!(!state.is_over());
        assert_eq!(state.body().len(), INITIAL_BODY.len());
        assert_eq!(state.direction(), INITIAL_DIRECTION);
    }

    #[test]
    fn test_find_duplicate_cell() {
        assert_eq!(find_duplicate_cell([c(0, 0), c(1, 0), c(2, 0), c(1, 0)]), Some(c(1, 0)));
        assert_eq!(find_duplicate_cell(INITIAL_BODY), None);
    }
}
