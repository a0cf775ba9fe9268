use std::time::Duration;

use tracing::{info, instrument};

use crate::config::Config;
use crate::domain::{Automaton, Rule};
use crate::error::RenderError;
use crate::input::{InputTracker, Rect};
use crate::rendering::{EventSource, PauseOutcome, Renderer};

/// On-screen region whose clicks are reported as button presses
pub const DEMO_BUTTON: Rect = Rect::new(100.0, 100.0, 200.0, 100.0);

/// Loop parameters taken from the configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSettings {
    pub frame_delay: Duration,
    pub generations: Option<u64>,
    pub button: Rect,
}

impl RunSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            frame_delay: config.frame_delay(),
            generations: config.generations,
            button: DEMO_BUTTON,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// A quit event arrived while polling or pausing
    Quit,
    /// The configured number of generations was reached
    GenerationBudget,
}

/// What happened during a run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u64,
    pub clicks: u64,
    pub button_presses: u64,
    pub reason: StopReason,
}

/// Drive the simulation until quit or the generation budget runs out.
///
/// Per tick: poll events into the tracker, react to each click, render the
/// current generation, step, pause.
#[instrument(skip_all, fields(rule = automaton.rule().name()))]
pub async fn run<S, R>(
    screen: &mut S,
    automaton: &mut Automaton<R>,
    settings: &RunSettings,
) -> Result<RunSummary, RenderError>
where
    S: Renderer + EventSource,
    R: Rule,
{
    let mut tracker = InputTracker::new();
    let mut clicks = 0;
    let mut button_presses = 0;

    let reason = loop {
        tracker.begin_batch();
        for event in screen.poll_events() {
            tracker.handle_event(&event);
        }
        if tracker.quit_requested() {
            break StopReason::Quit;
        }

        while let Some((x, y)) = tracker.take_left_click() {
            clicks += 1;
            info!(x, y, "clicked");
            if tracker.inside(&settings.button) {
                button_presses += 1;
                info!("button pressed");
            }
        }

        screen.render(automaton.current_grid()).await?;

        if settings
            .generations
            .is_some_and(|budget| automaton.generation() >= budget)
        {
            break StopReason::GenerationBudget;
        }
        automaton.step();

        if screen.pause(settings.frame_delay).await == PauseOutcome::Quit {
            break StopReason::Quit;
        }
    };

    let summary = RunSummary {
        generations: automaton.generation(),
        clicks,
        button_presses,
        reason,
    };
    info!(?summary, "run finished");
    Ok(summary)
}
