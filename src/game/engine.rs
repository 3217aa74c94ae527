use super::{
    config::{FoodPolicy, GameConfig, GRID_SIZE},
    state::{CollisionType, Position, Snake, World},
};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// Result of a game step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionType>,
}

impl StepResult {
    /// Whether the step ended the game
    pub fn terminated(&self) -> bool {
        self.collision.is_some()
    }
}

/// The simulation engine: advances a world one tick at a time and keeps the
/// best score seen by this process.
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
    high_score: u32,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            rng,
            high_score: 0,
        }
    }

    /// Best score recorded so far
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Raise the high score if `score` beats it
    pub fn record_score(&mut self, score: u32) {
        if score > self.high_score {
            self.high_score = score;
        }
    }

    /// Execute one step of the game.
    ///
    /// The queued turn, if any, is taken here. A colliding step leaves
    /// `world` untouched, queued turn included.
    pub fn step(&mut self, world: &mut World) -> StepResult {
        let new_head = world.snake.head().moved_in_direction(world.snake.heading());

        if let Some(collision) = check_collision(&world.snake, new_head) {
            return StepResult {
                ate_food: false,
                collision: Some(collision),
            };
        }

        let ate_food = new_head == world.food;
        world.snake.advance_to(new_head, ate_food);

        if ate_food {
            world.score += 1;
            self.record_score(world.score);
            world.food = self.place_food(&world.snake);
            tracing::trace!(
                x = world.food.x,
                y = world.food.y,
                score = world.score,
                "food placed"
            );
        }

        StepResult {
            ate_food,
            collision: None,
        }
    }

    /// Pick the next food cell according to the configured policy
    fn place_food(&mut self, snake: &Snake) -> Position {
        if self.config.food_policy == FoodPolicy::AvoidSnake {
            let free: Vec<Position> = (0..GRID_SIZE)
                .flat_map(|y| (0..GRID_SIZE).map(move |x| Position::new(x, y)))
                .filter(|pos| !snake.occupies(*pos))
                .collect();

            if let Some(pos) = free.choose(&mut self.rng) {
                return *pos;
            }
        }

        Position::new(
            self.rng.gen_range(0..GRID_SIZE),
            self.rng.gen_range(0..GRID_SIZE),
        )
    }
}

/// Check if the new head position causes a collision. Walls are checked first.
fn check_collision(snake: &Snake, pos: Position) -> Option<CollisionType> {
    if !pos.is_in_bounds() {
        return Some(CollisionType::Wall);
    }

    if snake.occupies(pos) {
        return Some(CollisionType::SelfCollision);
    }

    None
}
