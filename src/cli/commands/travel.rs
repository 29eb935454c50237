use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::formatting::mins2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Travel { from, to } = cmd {
        let table = cfg.travel_table()?;
        let minutes = table.lookup(from, to);
        println!("{} → {}: {}", from.trim(), to.trim(), mins2readable(minutes));
    }
    Ok(())
}
