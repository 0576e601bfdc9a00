use crate::Pixel;

/// Input, as understood by the simulation. Backends translate their raw events into these.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Event {
    EngineEvent(EngineEvent),
    AppEvent(AppEvent),
}

/// Events that edit the world
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EngineEvent {
    /// Primary press at a point of the display surface
    Press { x: Pixel, y: Pixel },
}

/// Events that only concern the presentation loop
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppEvent {
    /// Run or freeze the simulation
    TogglePause,

    /// Switch the dead cell color. Cosmetic only.
    ToggleTint,

    /// Exit the application
    Exit,
}

impl From<EngineEvent> for Event {
    fn from(e: EngineEvent) -> Self {
        Event::EngineEvent(e)
    }
}

impl From<AppEvent> for Event {
    fn from(e: AppEvent) -> Self {
        Event::AppEvent(e)
    }
}
