use serde::{Deserialize, Serialize};

use super::action::Direction;
use super::config::GRID_SIZE;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Whether the position lies on the grid
    pub fn is_in_bounds(&self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Direction the snake last moved in
    pub direction: Direction,
    /// Turn requested since the last move, applied on the next one
    pending: Option<Direction>,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        // Lay the initial segments out behind the head
        let (dx, dy) = direction.delta();
        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(-dx, -dy));
        }

        Self {
            body,
            direction,
            pending: None,
        }
    }

    /// Snake with an explicit body, head first
    pub fn from_body(body: Vec<Position>, direction: Direction) -> Self {
        Self {
            body,
            direction,
            pending: None,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Check if position collides with any segment, head included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Direction the next move will take
    pub fn heading(&self) -> Direction {
        self.pending.unwrap_or(self.direction)
    }

    /// Queue a turn for the next move unless it reverses the direction last
    /// moved in. A later request before that move replaces an earlier one.
    /// Returns whether the request was accepted.
    pub fn turn(&mut self, requested: Direction) -> bool {
        if self.direction.is_opposite(requested) {
            return false;
        }
        self.pending = Some(requested);
        true
    }

    /// Push a new head and drop the tail unless growing.
    /// The queued turn, if any, becomes the direction moved in.
    pub fn advance_to(&mut self, new_head: Position, grow: bool) {
        self.direction = self.heading();
        self.pending = None;
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }
}

/// Type of collision that ends a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Everything the simulation moves forward each tick
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
}

impl World {
    /// Where every new game begins
    pub const INITIAL_HEAD: Position = Position::new(0, 0);
    pub const INITIAL_FOOD: Position = Position::new(5, 5);
    pub const INITIAL_DIRECTION: Direction = Direction::Right;

    pub fn new(snake: Snake, food: Position) -> Self {
        Self {
            snake,
            food,
            score: 0,
        }
    }

    /// One-segment snake in the corner heading right
    pub fn initial() -> Self {
        Self::new(
            Snake::new(Self::INITIAL_HEAD, Self::INITIAL_DIRECTION, 1),
            Self::INITIAL_FOOD,
        )
    }
}

impl Default for World {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_bounds_checking() {
        assert!(Position::new(0, 0).is_in_bounds());
        assert!(Position::new(9, 9).is_in_bounds());
        assert!(!Position::new(-1, 0).is_in_bounds());
        assert!(!Position::new(10, 0).is_in_bounds());
        assert!(!Position::new(0, 10).is_in_bounds());
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.body.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.body[1], Position::new(4, 5));
        assert_eq!(snake.body[2], Position::new(3, 5));
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        snake.advance_to(Position::new(6, 5), false);
        assert_eq!(snake.body.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));

        snake.advance_to(Position::new(7, 5), true);
        assert_eq!(snake.body.len(), 4);
        assert_eq!(snake.head(), Position::new(7, 5));
    }

    #[test]
    fn test_turn_rejects_reversal() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 1);
        assert!(!snake.turn(Direction::Left));
        assert_eq!(snake.heading(), Direction::Right);

        assert!(snake.turn(Direction::Up));
        assert_eq!(snake.heading(), Direction::Up);
        assert_eq!(snake.direction, Direction::Right);
    }

    #[test]
    fn test_turns_checked_against_last_move() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        assert!(snake.turn(Direction::Up));
        // Left reverses the direction actually moved in, even though Up is queued
        assert!(!snake.turn(Direction::Left));
        assert_eq!(snake.heading(), Direction::Up);

        snake.advance_to(Position::new(5, 4), false);
        assert_eq!(snake.direction, Direction::Up);
        assert!(snake.turn(Direction::Left));
        assert_eq!(snake.heading(), Direction::Left);
    }

    #[test]
    fn test_initial_world() {
        let world = World::initial();
        assert_eq!(world.snake.body, vec![Position::new(0, 0)]);
        assert_eq!(world.snake.direction, Direction::Right);
        assert_eq!(world.food, Position::new(5, 5));
        assert_eq!(world.score, 0);
        assert!(!world.snake.occupies(world.food));
    }
}
