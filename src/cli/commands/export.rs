use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::range::parse_range;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        feed,
        format,
        file,
        region,
        range,
        force,
    } = cmd
    {
        let filter = range.as_deref().map(parse_range).transpose()?;

        let mut agenda = super::agenda_from_feed(feed, region.as_deref(), cfg)?;
        if let Some(r) = filter {
            agenda.retain_dates(|d| r.contains(d));
        }

        ExportLogic::export(&agenda, format, &expand_tilde(file), *force)?;
    }
    Ok(())
}
