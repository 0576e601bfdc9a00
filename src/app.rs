use std::thread;
use std::time::Duration;
use std::time::Instant;

use tracing::debug;
use tracing::info;
use tracing::trace;

use crate::config::Config;
use crate::error::Result;
use crate::events::AppEvent;
use crate::events::EngineEvent;
use crate::events::Event;
use crate::grid::Grid;
use crate::surface::Color;
use crate::surface::InputSource;
use crate::surface::Surface;

/// The presentation loop. Owns the world and everything about how it is shown.
pub struct App {
    grid: Grid,

    /// Whether generations are frozen. Cells can still be toggled.
    paused: bool,

    /// Cosmetic: dead cells are drawn purple instead of black
    tinted: bool,

    /// Cleared once the user asks to exit
    running: bool,

    /// Number of generations computed so far
    generation: u64,

    tick: Duration,
}

impl App {
    pub fn new(grid: Grid, config: &Config) -> Self {
        Self {
            grid,
            paused: config.start_paused,
            tinted: false,
            running: true,
            generation: 0,
            tick: config.tick,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_tinted(&self) -> bool {
        self.tinted
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::EngineEvent(EngineEvent::Press { x, y }) => {
                match self.grid.toggle_at_point(x, y) {
                    Some((cx, cy)) => debug!(x = cx, y = cy, "toggled cell"),
                    None => trace!(x, y, "press outside of the grid"),
                }
            }
            Event::AppEvent(AppEvent::TogglePause) => {
                self.paused = !self.paused;
                debug!(paused = self.paused, "toggled pause");
            }
            Event::AppEvent(AppEvent::ToggleTint) => {
                self.tinted = !self.tinted;
            }
            Event::AppEvent(AppEvent::Exit) => {
                info!(generation = self.generation, "exit requested");
                self.running = false;
            }
        }
    }

    /// Advance the world by one generation, unless paused.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }

        self.grid.step();
        self.generation += 1;

        trace!(
            generation = self.generation,
            population = self.grid.population(),
            "stepped"
        );
    }

    pub fn dead_color(&self) -> Color {
        let r = if self.tinted { Config::TINT } else { 0 };

        Color::rgba(r, 0, r, 0)
    }

    /// One line summary of the simulation
    pub fn status(&self) -> String {
        let state = if self.paused { "paused" } else { "running" };

        format!(
            "generation {} | population {} | {state} | [p] pause  [g] tint  [esc] quit",
            self.generation,
            self.grid.population(),
        )
    }

    /// Draw every cell of the world on `surface`.
    pub fn render<S>(&self, surface: &mut S) -> Result<()>
    where
        S: Surface + ?Sized,
    {
        surface.clear(Config::BACKGROUND_COLOR)?;

        let dead = self.dead_color();

        for (_, _, cell) in self.grid.cells() {
            let color = if cell.is_alive() {
                Config::ALIVE_COLOR
            } else {
                dead
            };

            surface.fill_rect(cell.rect(), color)?;
        }

        surface.caption(&self.status())
    }

    /// Run until an [`AppEvent::Exit`] comes in.
    ///
    /// Each frame drains the pending input, ticks, draws, then sleeps for whatever is left of
    /// the tick interval.
    pub fn run<B>(&mut self, backend: &mut B) -> Result<()>
    where
        B: Surface + InputSource,
    {
        info!(
            columns = self.grid.width(),
            rows = self.grid.height(),
            tick_ms = self.tick.as_millis() as u64,
            "starting simulation"
        );

        while self.running {
            let t = Instant::now();

            while let Some(event) = backend.poll_event(Duration::ZERO)? {
                self.handle_event(event);

                if !self.running {
                    break;
                }
            }

            if !self.running {
                break;
            }

            self.tick();
            self.render(backend)?;
            backend.present()?;

            thread::sleep(self.tick.saturating_sub(t.elapsed()));
        }

        Ok(())
    }
}
