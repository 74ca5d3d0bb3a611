//! Session: the editing loop and the run loop.
//!
//! A session owns the grid for its whole life. In the editing phase it
//! redraws, prompts, reads one line and applies the parsed command; in the
//! running phase it redraws, steps and waits one frame interval, forever.

use std::io::BufRead;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::{debug, info, trace, warn};

use crate::core::{step, Grid};
use crate::input::{parse_command, Command, InputError};
use crate::term::{Console, FrameBuffer, LifeView, ViewMode};
use crate::types::{LifeConfig, Phase, EDIT_PROMPT, INVALID_COMMAND};

/// Blocking wait between generations.
pub trait Pacer {
    fn wait(&mut self, interval: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn wait(&mut self, interval: Duration) {
        thread::sleep(interval);
    }
}

/// How the editing phase ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Start,
    Quit,
}

/// One interactive run: owns the grid, draws through `C`, reads lines from `R`, waits through `P`.
pub struct Session<C, R, P = ThreadPacer> {
    config: LifeConfig,
    grid: Grid,
    phase: Phase,
    generation: u64,
    status: Option<&'static str>,
    view: LifeView,
    fb: FrameBuffer,
    console: C,
    input: R,
    pacer: P,
    line: String,
}

impl<C: Console, R: BufRead, P: Pacer> Session<C, R, P> {
    pub fn new(config: LifeConfig, console: C, input: R, pacer: P) -> Self {
        info!(
            "life session: {}x{} grid at {} fps",
            config.rows, config.cols, config.fps
        );
        Self {
            grid: Grid::new(config.rows, config.cols),
            config,
            phase: Phase::Editing,
            generation: 0,
            status: None,
            view: LifeView::default(),
            fb: FrameBuffer::new(0, 0),
            console,
            input,
            pacer,
            line: String::new(),
        }
    }

    /// Replace the view (e.g. [`LifeView::plain`] for uncolored output).
    pub fn with_view(mut self, view: LifeView) -> Self {
        self.view = view;
        self
    }

    /// Replace the starting grid. Its dimensions override the config's.
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Generations stepped since the running phase began.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Status line shown on the next editing frame.
    pub fn status(&self) -> Option<&'static str> {
        self.status
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Paint the current grid in the layout for the current phase.
    pub fn draw(&mut self) -> Result<()> {
        let mode = ViewMode::from(self.phase);
        self.view
            .render_into(&self.grid, mode, self.status, &mut self.fb);
        self.console.present(&self.fb)
    }

    /// Prompt and read one command line.
    pub fn read_command(&mut self) -> Result<Command> {
        self.console.prompt(EDIT_PROMPT)?;
        self.line.clear();
        let n = self
            .input
            .read_line(&mut self.line)
            .map_err(InputError::from)?;
        if n == 0 {
            return Err(InputError::EndOfInput.into());
        }
        Ok(parse_command(&self.line)?)
    }

    /// Apply one editing command.
    ///
    /// Returns the outcome when the command ends the editing phase.
    pub fn apply(&mut self, cmd: Command) -> Option<EditOutcome> {
        let target = cmd.toggle_target();
        match cmd {
            Command::Start => {
                self.status = None;
                self.phase = Phase::Running;
                info!(
                    "starting simulation with {} live cells",
                    self.grid.population()
                );
                Some(EditOutcome::Start)
            }
            Command::Quit => Some(EditOutcome::Quit),
            Command::Toggle { row, col } => {
                self.status = None;
                let toggled = match target {
                    Some((r, c)) => self.grid.toggle(r, c),
                    None => false,
                };
                if toggled {
                    debug!("toggled cell ({row}, {col})");
                } else {
                    debug!("ignored toggle outside the field: ({row}, {col})");
                }
                None
            }
            Command::Unknown(token) => {
                warn!("unrecognised command `{token}`");
                self.status = Some(INVALID_COMMAND);
                None
            }
        }
    }

    /// Run the editing phase until `start` or `quit`.
    ///
    /// Malformed input and a closed or unreadable input stream are fatal and
    /// returned as errors (downcastable to [`InputError`]). Reporting them is
    /// left to the caller.
    pub fn edit(&mut self) -> Result<EditOutcome> {
        loop {
            self.draw()?;
            let cmd = self.read_command().map_err(|e| {
                debug!("editing ended by fatal input: {e:#}");
                e
            })?;
            if let Some(outcome) = self.apply(cmd) {
                return Ok(outcome);
            }
        }
    }

    /// One run-loop iteration without the wait: draw, then step.
    pub fn tick(&mut self) -> Result<()> {
        self.phase = Phase::Running;
        self.draw()?;
        self.grid = step(&self.grid);
        self.generation += 1;
        trace!(
            "generation {}: {} live\n{}",
            self.generation,
            self.grid.population(),
            self.grid.debug_dump()
        );
        Ok(())
    }

    /// Run `n` iterations of the run loop, waiting one frame interval after each.
    pub fn run_generations(&mut self, n: u64) -> Result<()> {
        let interval = self.config.frame_interval();
        for _ in 0..n {
            self.tick()?;
            self.pacer.wait(interval);
        }
        Ok(())
    }

    /// Run the simulation until the process is killed.
    pub fn run(&mut self) -> Result<()> {
        let interval = self.config.frame_interval();
        loop {
            self.tick()?;
            self.pacer.wait(interval);
        }
    }
}
