use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lifegrid::Coord;
use lifegrid::app::App;
use lifegrid::config::Config;
use lifegrid::pattern::GLIDER;
use lifegrid::term::Terminal;

/// Send logs to the file named by `LIFEGRID_LOG`, if any. The terminal is taken over by the
/// simulation, so logs never go to stderr.
fn init_logging() -> anyhow::Result<()> {
    let Some(path) = std::env::var_os(Config::LOG_FILE_VAR).map(PathBuf::from) else {
        return Ok(());
    };

    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = Config::default();

    let mut grid = config.grid();
    let (cx, cy) = ((grid.width() / 2) as Coord, (grid.height() / 2) as Coord);
    grid.seed(GLIDER.at(cx, cy));

    info!(pattern = GLIDER.name, x = cx, y = cy, "seeded");

    let mut app = App::new(grid, &config);

    let mut terminal = Terminal::new(config.width, config.height, config.cell_size)
        .context("Failed to set up the terminal")?;

    app.run(&mut terminal).context("Simulation stopped")?;

    Ok(())
}
