mod parse_opts;
mod subcmd_run;
use crate::error::Result;
use async_trait::async_trait;
pub use parse_opts::parse_opts;

#[async_trait]
trait ClapSubCommand {
  fn subcmd() -> clap::Command;

  async fn exec_matches(sub_m: &clap::ArgMatches) -> Result<Option<crate::AppState>>;
}

/// Parses comma separated person ids like "1,2,3". Every id must be a positive integer.
pub(crate) fn verify_known_ids(arg_val: &str) -> Result<Vec<i64>, String> {
  arg_val
    .split(',')
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(|s| match s.parse::<i64>() {
      Ok(id) if id > 0 => Ok(id),
      _ => Err(format!("\"{}\" is not a valid person id. Ids must be positive integers.", s)),
    })
    .collect()
}
