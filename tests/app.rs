use std::collections::VecDeque;
use std::time::Duration;

use lifegrid::Coord;
use lifegrid::Result;
use lifegrid::app::App;
use lifegrid::config::Config;
use lifegrid::events::AppEvent;
use lifegrid::events::EngineEvent;
use lifegrid::events::Event;
use lifegrid::pattern::BLINKER;
use lifegrid::pattern::GLIDER;
use lifegrid::raster::Raster;
use lifegrid::rect::Rect;
use lifegrid::surface::Color;
use lifegrid::surface::InputSource;
use lifegrid::surface::Surface;

/// Draws to a raster and replays a script of events. Once `frames` frames have been presented,
/// every poll answers with an exit.
struct Headless {
    raster: Raster,
    events: VecDeque<Event>,
    frames: usize,
    presented: usize,
}

impl Headless {
    fn new(config: &Config, events: Vec<Event>, frames: usize) -> Self {
        Self {
            raster: Raster::new(config.width, config.height, config.cell_size),
            events: events.into(),
            frames,
            presented: 0,
        }
    }

    fn text(&self) -> String {
        self.raster.dump(|c| match c {
            Color::WHITE => '#',
            c if c.r == Config::TINT => '+',
            _ => '.',
        })
    }
}

impl Surface for Headless {
    fn clear(&mut self, color: Color) -> Result<()> {
        self.raster.clear(color)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        self.raster.fill_rect(rect, color)
    }

    fn caption(&mut self, text: &str) -> Result<()> {
        self.raster.caption(text)
    }

    fn present(&mut self) -> Result<()> {
        self.presented += 1;

        Ok(())
    }
}

impl InputSource for Headless {
    fn poll_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        if self.presented >= self.frames {
            return Ok(Some(AppEvent::Exit.into()));
        }

        Ok(self.events.pop_front())
    }
}

fn config(width: u32, height: u32) -> Config {
    Config {
        width,
        height,
        tick: Duration::ZERO,
        ..Config::default()
    }
}

#[test]
fn paused_run_only_draws() {
    let config = config(50, 50);
    let mut grid = config.grid();
    grid.seed(BLINKER.at(2, 2));
    let before = grid.clone();

    let mut app = App::new(grid, &config);
    let mut backend = Headless::new(&config, vec![], 3);

    app.run(&mut backend).unwrap();

    assert_eq!(backend.presented, 3);
    assert_eq!(app.generation(), 0);
    assert_eq!(app.grid(), &before);

    insta::assert_snapshot!(backend.text(), @r"
.....
.....
.###.
.....
.....
");
}

#[test]
fn unpaused_run_steps_every_frame() {
    let config = config(50, 50);
    let mut grid = config.grid();
    grid.seed(BLINKER.at(2, 2));

    let mut app = App::new(grid, &config);
    let mut backend = Headless::new(&config, vec![AppEvent::TogglePause.into()], 3);

    app.run(&mut backend).unwrap();

    assert_eq!(app.generation(), 3);
    assert!(!app.is_running());

    insta::assert_snapshot!(backend.text(), @r"
.....
..#..
..#..
..#..
.....
");
    assert_eq!(
        backend.raster.caption_text(),
        "generation 3 | population 3 | running | [p] pause  [g] tint  [esc] quit"
    );
}

#[test]
fn presses_and_tint_show_up() {
    let config = config(60, 40);
    let grid = config.grid();

    let events = vec![
        EngineEvent::Press { x: 0, y: 0 }.into(),
        EngineEvent::Press { x: 59, y: 39 }.into(),
        // outside of the surface
        EngineEvent::Press { x: 60, y: 0 }.into(),
        AppEvent::ToggleTint.into(),
    ];

    let mut app = App::new(grid, &config);
    let mut backend = Headless::new(&config, events, 1);

    app.run(&mut backend).unwrap();

    assert_eq!(app.grid().population(), 2);

    insta::assert_snapshot!(backend.text(), @r"
#+++++
++++++
++++++
+++++#
");
}

#[test]
fn exit_before_first_frame() {
    let config = config(50, 50);
    let mut app = App::new(config.grid(), &config);
    let mut backend = Headless::new(&config, vec![AppEvent::Exit.into()], 10);

    app.run(&mut backend).unwrap();

    assert_eq!(backend.presented, 0);
    assert_eq!(app.generation(), 0);
}

#[test]
fn startup_glider_travels_diagonally() {
    let config = Config {
        tick: Duration::ZERO,
        start_paused: false,
        ..Config::default()
    };
    let mut grid = config.grid();
    let (cx, cy) = ((grid.width() / 2) as Coord, (grid.height() / 2) as Coord);
    grid.seed(GLIDER.at(cx, cy));

    let mut app = App::new(grid, &config);
    let mut backend = Headless::new(&config, vec![], 8);

    app.run(&mut backend).unwrap();

    assert_eq!(app.generation(), 8);
    for (x, y) in GLIDER.at(cx + 2, cy + 2) {
        assert!(app.grid().is_alive(x, y), "({x}, {y}) should be alive");
    }
    assert_eq!(app.grid().population(), GLIDER.len());
}
