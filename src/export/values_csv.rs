//! CSV writers for Q-tables, weight vectors, and episode returns

use std::{fmt::Debug, hash::Hash, path::Path};

use crate::{Result, pipeline::TrainingResult, value::{QTable, WeightVector}};

/// Write a Q-table as `state,action,value` rows, sorted by state then
/// action rendering.
pub fn write_q_values<S, A, P>(table: &QTable<S, A>, path: P) -> Result<()>
where
    S: Debug + Eq + Hash,
    A: Debug + Eq + Hash,
    P: AsRef<Path>,
{
    let mut rows: Vec<(String, String, f64)> = table
        .iter()
        .map(|(state, action, value)| (format!("{state:?}"), format!("{action:?}"), value))
        .collect();
    rows.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["state", "action", "value"])?;
    for (state, action, value) in rows {
        writer.write_record([state, action, value.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a weight vector as `feature,weight` rows, sorted by feature key.
pub fn write_weights<P: AsRef<Path>>(weights: &WeightVector, path: P) -> Result<()> {
    let mut rows: Vec<(&str, f64)> = weights
        .iter()
        .map(|(key, weight)| (key.as_str(), weight))
        .collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["feature", "weight"])?;
    for (feature, weight) in rows {
        writer.write_record([feature.to_string(), weight.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a training result as `episode,return` rows.
pub fn write_episode_returns<P: AsRef<Path>>(result: &TrainingResult, path: P) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["episode", "return"])?;
    for (episode, episode_return) in result.episode_returns.iter().enumerate() {
        writer.write_record([episode.to_string(), episode_return.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
