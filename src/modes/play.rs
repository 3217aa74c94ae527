use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::driver::Session;
use crate::game::{Command, Game, GameConfig, GamePhase};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

pub struct PlayMode {
    session: Session,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Self {
        Self {
            session: Session::new(Game::new(config)),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        tracing::info!("play session started");

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        tracing::info!(
            games_played = self.metrics.games_played,
            high_score = self.session.game().high_score(),
            "play session ended"
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick, only armed while running
                _ = self.session.next_tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let snapshot = self.session.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Command(command) => self.apply_command(command),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    fn apply_command(&mut self, command: Command) {
        self.session.apply(command);

        if matches!(command, Command::Start | Command::StartAgain) {
            self.metrics.on_game_start();
        }
        self.metrics
            .set_running(self.session.phase() == GamePhase::Running);
    }

    fn update_game(&mut self) {
        let ended = self
            .session
            .on_tick()
            .is_some_and(|result| result.terminated());

        if ended {
            self.metrics.on_game_over();
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    #[test]
    fn test_game_initialization() {
        let mode = PlayMode::new(GameConfig::seeded(1));
        assert_eq!(mode.session.phase(), GamePhase::Start);
        assert_eq!(mode.metrics.games_played, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_commands_drive_session() {
        let mut mode = PlayMode::new(GameConfig::seeded(1));

        mode.apply_command(Command::Start);
        assert!(mode.session.is_ticking());

        mode.apply_command(Command::SetDirection(Direction::Down));
        mode.session.next_tick().await;
        mode.update_game();
        assert_eq!(
            mode.session.snapshot().snake,
            vec![crate::game::Position::new(0, 1)]
        );

        mode.apply_command(Command::Pause);
        assert!(!mode.session.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_game_over_counts_game() {
        let mut mode = PlayMode::new(GameConfig::seeded(1));
        mode.apply_command(Command::Start);
        mode.apply_command(Command::SetDirection(Direction::Up));

        mode.session.next_tick().await;
        mode.update_game();

        assert_eq!(mode.session.phase(), GamePhase::GameOver);
        assert_eq!(mode.metrics.games_played, 1);
    }
}
