//! Event/action/render loop
//!
//! One loop owns the store. It selects over two channels:
//! - raw terminal events, mapped to actions by the page
//! - actions, from the page, the tick timer and finished tasks
//!
//! Each action is dispatched on its own; declared effects are handed to the
//! effect handler together with the task manager.

use std::io;
use std::time::Duration;

use heroes_core::{Action, Middleware, Store};
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
use crate::tasks::TaskManager;

#[derive(Debug, Clone, Copy)]
pub struct PollerConfig {
    /// Timeout passed to each `crossterm::event::poll` call
    pub poll_timeout: Duration,
    /// Sleep between poll cycles
    pub loop_sleep: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(10),
            loop_sleep: Duration::from_millis(16),
        }
    }
}

/// Actions produced by one input event, plus a render hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome<A> {
    pub actions: Vec<A>,
    pub needs_render: bool,
}

impl<A> EventOutcome<A> {
    pub fn ignored() -> Self {
        Self {
            actions: Vec::new(),
            needs_render: false,
        }
    }

    pub fn action(action: A) -> Self {
        Self {
            actions: vec![action],
            needs_render: false,
        }
    }

    /// Collect a component's `handle_event` result
    pub fn from_actions(iter: impl IntoIterator<Item = A>) -> Self {
        Self {
            actions: iter.into_iter().collect(),
            needs_render: false,
        }
    }

    pub fn with_render(mut self) -> Self {
        self.needs_render = true;
        self
    }
}

impl<A> Default for EventOutcome<A> {
    fn default() -> Self {
        Self::ignored()
    }
}

/// What an effect handler may touch
pub struct EffectContext<'a, A: Action> {
    action_tx: &'a mpsc::UnboundedSender<A>,
    tasks: &'a mut TaskManager<A>,
}

impl<'a, A: Action> EffectContext<'a, A> {
    pub fn new(action_tx: &'a mpsc::UnboundedSender<A>, tasks: &'a mut TaskManager<A>) -> Self {
        Self { action_tx, tasks }
    }

    /// Queue an action right away
    pub fn emit(&self, action: A) {
        let _ = self.action_tx.send(action);
    }

    pub fn tasks(&mut self) -> &mut TaskManager<A> {
        self.tasks
    }
}

pub struct Runtime<S, A: Action, E, M: Middleware<A>> {
    store: Store<S, A, E, M>,
    action_tx: mpsc::UnboundedSender<A>,
    action_rx: mpsc::UnboundedReceiver<A>,
    tasks: TaskManager<A>,
    poller_config: PollerConfig,
    tick: Option<(Duration, fn() -> A)>,
    should_render: bool,
}

impl<S, A: Action, E, M: Middleware<A>> Runtime<S, A, E, M> {
    pub fn from_store(store: Store<S, A, E, M>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let tasks = TaskManager::new(action_tx.clone());
        Self {
            store,
            action_tx,
            action_rx,
            tasks,
            poller_config: PollerConfig::default(),
            tick: None,
            should_render: true,
        }
    }

    pub fn with_event_poller(mut self, config: PollerConfig) -> Self {
        self.poller_config = config;
        self
    }

    /// Send `make()` into the queue every `interval` while running
    pub fn with_tick(mut self, interval: Duration, make: fn() -> A) -> Self {
        self.tick = Some((interval, make));
        self
    }

    /// Queue an action; it is dispatched once the loop runs
    pub fn enqueue(&self, action: A) {
        let _ = self.action_tx.send(action);
    }

    pub fn action_tx(&self) -> mpsc::UnboundedSender<A> {
        self.action_tx.clone()
    }

    pub fn state(&self) -> &S {
        self.store.state()
    }

    pub fn tasks(&mut self) -> &mut TaskManager<A> {
        &mut self.tasks
    }

    /// Dispatch one action and run its effects
    ///
    /// Returns whether the state changed.
    pub fn dispatch<FEffect>(&mut self, action: A, handle_effect: &mut FEffect) -> bool
    where
        FEffect: FnMut(E, &mut EffectContext<'_, A>),
    {
        let result = self.store.dispatch(action);
        if result.has_effects() {
            let mut ctx = EffectContext::new(&self.action_tx, &mut self.tasks);
            for effect in result.effects {
                handle_effect(effect, &mut ctx);
            }
        }
        result.changed
    }

    /// Run until `should_quit` accepts an action or every sender is gone
    pub async fn run<B, FRender, FEvent, FQuit, FEffect>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut render: FRender,
        mut map_event: FEvent,
        mut should_quit: FQuit,
        mut handle_effect: FEffect,
    ) -> io::Result<()>
    where
        B: Backend,
        FRender: FnMut(&mut Frame, Rect, &S),
        FEvent: FnMut(&EventKind, &S) -> EventOutcome<A>,
        FQuit: FnMut(&A) -> bool,
        FEffect: FnMut(E, &mut EffectContext<'_, A>),
    {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
        let cancel_token = CancellationToken::new();
        let _poller = spawn_event_poller(
            event_tx,
            self.poller_config.poll_timeout,
            self.poller_config.loop_sleep,
            cancel_token.clone(),
        );
        if let Some((interval, make)) = self.tick {
            spawn_ticker(self.action_tx.clone(), interval, make, cancel_token.clone());
        }

        let result = loop {
            if self.should_render {
                let state = self.store.state();
                let drawn = terminal.draw(|frame| {
                    let area = frame.area();
                    render(frame, area, state);
                });
                if let Err(e) = drawn {
                    break Err(e);
                }
                self.should_render = false;
            }

            tokio::select! {
                Some(raw_event) = event_rx.recv() => {
                    let Some(event) = process_raw_event(raw_event) else {
                        continue;
                    };
                    let outcome = map_event(&event, self.store.state());
                    if outcome.needs_render {
                        self.should_render = true;
                    }
                    for action in outcome.actions {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if should_quit(&action) {
                        break Ok(());
                    }
                    if self.dispatch(action, &mut handle_effect) {
                        self.should_render = true;
                    }
                }

                else => break Ok(()),
            }
        };

        cancel_token.cancel();
        self.tasks.cancel_all();
        result
    }
}

fn spawn_ticker<A: Action>(
    tx: mpsc::UnboundedSender<A>,
    interval: Duration,
    make: fn() -> A,
    cancel_token: CancellationToken,
) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => break,
                _ = ticker.tick() => {
                    if tx.send(make()).is_err() {
                        break;
                    }
                }
            }
        }
    });
}
