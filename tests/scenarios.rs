use grid_snake::game::{
    CollisionType, Command, Direction, Game, GameConfig, GameEngine, GamePhase, Position, Snake,
    World,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashSet;

fn running(snake: Snake, food: Position) -> Game {
    Game::running_with(
        GameEngine::new(GameConfig::seeded(42)),
        World::new(snake, food),
    )
}

#[test]
fn eating_food_grows_and_scores() {
    let mut game = running(
        Snake::new(Position::new(0, 0), Direction::Right, 1),
        Position::new(1, 0),
    );

    let result = game.tick().unwrap();

    let snapshot = game.snapshot();
    assert!(result.ate_food);
    assert_eq!(snapshot.phase, GamePhase::Running);
    assert_eq!(snapshot.snake, vec![Position::new(1, 0)]);
    assert_ne!(snapshot.food, Position::new(1, 0));
    assert_eq!(snapshot.score, 1);
    assert_eq!(snapshot.high_score, 1);
}

#[test]
fn wall_ends_game_without_moving() {
    let mut game = running(
        Snake::new(Position::new(9, 0), Direction::Right, 1),
        Position::new(5, 5),
    );

    let result = game.tick().unwrap();

    assert_eq!(result.collision, Some(CollisionType::Wall));
    let snapshot = game.snapshot();
    assert_eq!(snapshot.phase, GamePhase::GameOver);
    assert_eq!(snapshot.snake, vec![Position::new(9, 0)]);
    assert_eq!(snapshot.score, 0);
}

#[test]
fn running_into_body_ends_game() {
    let mut snake = Snake::new(Position::new(2, 0), Direction::Right, 3);
    snake.direction = Direction::Left;
    let mut game = running(snake, Position::new(5, 5));

    let result = game.tick().unwrap();

    assert_eq!(result.collision, Some(CollisionType::SelfCollision));
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(
        game.snapshot().snake,
        vec![Position::new(2, 0), Position::new(1, 0), Position::new(0, 0)]
    );
}

#[test]
fn double_pause_restores_running_state() {
    let mut game = Game::new(GameConfig::seeded(3));
    game.start();
    game.tick();
    game.set_direction(Direction::Down);
    game.tick();
    let before = game.snapshot();

    game.pause();
    game.pause();

    assert_eq!(game.snapshot(), before);
    assert_eq!(game.world().snake.direction, Direction::Down);
}

#[test]
fn start_again_keeps_best_score() {
    let mut engine = GameEngine::new(GameConfig::seeded(9));
    engine.record_score(5);
    let mut world = World::new(
        Snake::new(Position::new(0, 9), Direction::Down, 1),
        Position::new(5, 5),
    );
    world.score = 7;
    let mut game = Game::running_with(engine, world);

    game.tick();
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.high_score(), 7);

    game.start_again();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.phase, GamePhase::Running);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.high_score, 7);
}

fn opposite(direction: Direction) -> Direction {
    match direction {
        Direction::Up => Direction::Down,
        Direction::Down => Direction::Up,
        Direction::Left => Direction::Right,
        Direction::Right => Direction::Left,
    }
}

#[test]
fn reversal_never_changes_direction() {
    let mut game = running(
        Snake::new(Position::new(5, 5), Direction::Right, 1),
        Position::new(0, 9),
    );

    for heading in [Direction::Down, Direction::Left, Direction::Up, Direction::Right] {
        game.set_direction(heading);
        game.tick();
        assert_eq!(game.world().snake.direction, heading);

        game.set_direction(opposite(heading));

        assert_eq!(game.world().snake.heading(), heading);
    }
    assert_eq!(game.phase(), GamePhase::Running);
}

#[test]
fn quick_double_turn_does_not_reverse() {
    let mut game = running(
        Snake::new(Position::new(5, 5), Direction::Right, 3),
        Position::new(0, 9),
    );

    game.set_direction(Direction::Down);
    game.set_direction(Direction::Left);
    game.tick();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.phase, GamePhase::Running);
    assert_eq!(
        snapshot.snake,
        vec![Position::new(5, 6), Position::new(5, 5), Position::new(4, 5)]
    );
}

#[test]
fn random_play_keeps_invariants() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut game = Game::new(GameConfig::seeded(2024));
    let directions = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
    let mut last_high = 0;

    for _ in 0..5_000 {
        let command = match rng.gen_range(0..20) {
            0 => Command::Pause,
            1 => Command::StartAgain,
            2 if game.phase() != GamePhase::Running => Command::Start,
            _ => Command::SetDirection(directions[rng.gen_range(0..4)]),
        };
        game.apply(command);

        let before = game.snapshot();
        if let Some(result) = game.tick() {
            let after = game.snapshot();
            if result.terminated() {
                assert_eq!(after.snake, before.snake);
                assert_eq!(after.phase, GamePhase::GameOver);
            } else if result.ate_food {
                assert_eq!(after.snake.len(), before.snake.len() + 1);
                assert_eq!(after.score, before.score + 1);
            } else {
                assert_eq!(after.snake.len(), before.snake.len());
                assert_eq!(after.score, before.score);
            }
        }

        let snapshot = game.snapshot();
        if snapshot.phase != GamePhase::GameOver {
            let distinct: HashSet<_> = snapshot.snake.iter().collect();
            assert_eq!(distinct.len(), snapshot.snake.len());
        }
        assert!(snapshot.high_score >= last_high);
        assert!(snapshot.high_score >= snapshot.score);
        last_high = snapshot.high_score;
    }
}
