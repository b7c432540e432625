use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, KeyEventKind};

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Blocking event pump: returns the next key press, or a tick when the tick
/// interval elapses without input. Single-threaded by design — every state
/// mutation happens between two calls to `next`.
pub struct EventHandler {
    tick_rate: Duration,
    last_tick: Instant,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            last_tick: Instant::now(),
        }
    }

    pub fn next(&mut self) -> anyhow::Result<Event> {
        loop {
            let timeout = self
                .tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if crossterm::event::poll(timeout)? {
                if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                    // Filter for Press only (Windows compatibility)
                    if key.kind == KeyEventKind::Press {
                        return Ok(Event::Key(key));
                    }
                }
                continue;
            }

            self.last_tick = Instant::now();
            return Ok(Event::Tick);
        }
    }
}
