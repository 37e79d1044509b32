//! Observers for training pipelines
//!
//! Observers allow composable data collection during training without
//! coupling the pipeline to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::{Result, ports::TrainingObserver};

/// Progress bar observer - shows training progress with a running mean
/// return in the message slot.
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    episodes: usize,
    return_sum: f64,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            episodes: 0,
            return_sum: 0.0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> TrainingObserver<S, A> for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, episode_return: f64, _steps: usize) -> Result<()> {
        self.episodes += 1;
        self.return_sum += episode_return;

        if let Some(pb) = &self.progress_bar {
            pb.set_position(episode as u64 + 1);
            pb.set_message(format!(
                "mean return {:.3}",
                self.return_sum / self.episodes as f64
            ));
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            let mean = if self.episodes > 0 {
                self.return_sum / self.episodes as f64
            } else {
                0.0
            };
            pb.finish_with_message(format!("mean return {mean:.3}"));
        }
        Ok(())
    }
}

/// Metrics observer - tracks return statistics across a run.
#[derive(Debug, Default)]
pub struct MetricsObserver {
    episodes: usize,
    return_sum: f64,
    best: Option<f64>,
    worst: Option<f64>,
    last: Option<f64>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self::default()
    }

    /// Episodes observed so far.
    pub fn episodes(&self) -> usize {
        self.episodes
    }

    /// Mean return over observed episodes, 0.0 before the first.
    pub fn mean_return(&self) -> f64 {
        if self.episodes > 0 {
            self.return_sum / self.episodes as f64
        } else {
            0.0
        }
    }

    /// Highest episode return observed.
    pub fn best_return(&self) -> Option<f64> {
        self.best
    }

    /// Lowest episode return observed.
    pub fn worst_return(&self) -> Option<f64> {
        self.worst
    }

    /// Return of the most recent episode.
    pub fn last_return(&self) -> Option<f64> {
        self.last
    }
}

impl<S, A> TrainingObserver<S, A> for MetricsObserver {
    fn on_episode_end(&mut self, _episode: usize, episode_return: f64, _steps: usize) -> Result<()> {
        self.episodes += 1;
        self.return_sum += episode_return;
        self.best = Some(self.best.map_or(episode_return, |b| b.max(episode_return)));
        self.worst = Some(self.worst.map_or(episode_return, |w| w.min(episode_return)));
        self.last = Some(episode_return);
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct EpisodeRecord {
    episode: usize,
    steps: usize,
    episode_return: f64,
}

/// JSONL observer - writes one JSON record per episode for offline
/// analysis.
pub struct JsonlObserver {
    writer: BufWriter<File>,
}

impl JsonlObserver {
    /// Create an observer writing to the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref()).map_err(|source| crate::Error::Io {
            operation: format!("create observation file {:?}", path.as_ref()),
            source,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl<S, A> TrainingObserver<S, A> for JsonlObserver {
    fn on_episode_end(&mut self, episode: usize, episode_return: f64, steps: usize) -> Result<()> {
        let record = EpisodeRecord {
            episode,
            steps,
            episode_return,
        };
        let line = serde_json::to_string(&record)?;
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
