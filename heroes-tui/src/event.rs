//! Terminal input: background polling and conversion into `EventKind`

use std::time::Duration;

use crossterm::event::{self, KeyEvent, MouseButton, MouseEventKind};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Raw event from crossterm before processing
#[derive(Debug)]
pub enum RawEvent {
    Key(KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
}

/// Input the page reacts to
#[derive(Debug, Clone)]
pub enum EventKind {
    Key(KeyEvent),
    /// Mouse wheel; positive delta scrolls down
    Scroll { column: u16, row: u16, delta: isize },
    /// Left mouse button pressed
    Click { column: u16, row: u16 },
    Resize(u16, u16),
}

/// Poll crossterm on a background task until `cancel_token` fires
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        const MAX_EVENTS_PER_BATCH: usize = 20;

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    info!("Event poller cancelled, draining buffer");
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut events_processed = 0;
                    while events_processed < MAX_EVENTS_PER_BATCH
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        events_processed += 1;
                        let Ok(evt) = event::read() else {
                            continue;
                        };
                        let raw = match evt {
                            event::Event::Key(key) => RawEvent::Key(key),
                            event::Event::Mouse(mouse) => RawEvent::Mouse(mouse),
                            event::Event::Resize(w, h) => RawEvent::Resize(w, h),
                            _ => continue,
                        };
                        if tx.send(raw).is_err() {
                            debug!("Event channel closed, stopping poller");
                            return;
                        }
                    }
                }
            }
        }
    })
}

/// Convert a raw event; mouse events other than the wheel and left clicks
/// are dropped
pub fn process_raw_event(raw: RawEvent) -> Option<EventKind> {
    match raw {
        RawEvent::Key(key) => Some(EventKind::Key(key)),
        RawEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown => Some(EventKind::Scroll {
                column: mouse.column,
                row: mouse.row,
                delta: 1,
            }),
            MouseEventKind::ScrollUp => Some(EventKind::Scroll {
                column: mouse.column,
                row: mouse.row,
                delta: -1,
            }),
            MouseEventKind::Down(MouseButton::Left) => Some(EventKind::Click {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        RawEvent::Resize(w, h) => Some(EventKind::Resize(w, h)),
    }
}
