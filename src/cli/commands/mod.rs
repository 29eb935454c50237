pub mod config;
pub mod export;
pub mod init;
pub mod show;
pub mod travel;

use crate::config::Config;
use crate::core::logic::{Agenda, Core};
use crate::core::schedule::Rules;
use crate::core::source::load_activities;
use crate::errors::AppResult;
use crate::models::region::Region;
use crate::utils::path::expand_tilde;

/// Load a feed file, narrow it to the requested region and run the engine.
/// `--region` wins over the configured default region.
pub(crate) fn agenda_from_feed(feed: &str, region: Option<&str>, cfg: &Config) -> AppResult<Agenda> {
    let raw = load_activities(&expand_tilde(feed))?;
    let region = Region::new(region.unwrap_or(&cfg.default_region));
    let raw = Core::select_region(raw, &region);

    let rules = Rules::from_config(cfg);
    let table = cfg.travel_table()?;
    Ok(Core::build_agenda(&raw, &rules, &table))
}
