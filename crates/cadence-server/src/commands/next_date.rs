use crate::cli::NextDateCommand;
use anyhow::Result;
use cadence_core::date::parse_date;
use cadence_core::recurrence::next_date as compute_next_date;

pub fn next_date(command: NextDateCommand) -> Result<()> {
    let now = match command.now.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => chrono::Local::now().date_naive(),
    };
    let next = compute_next_date(now, &command.date, &command.repeat)?;
    println!("{}", next);
    Ok(())
}
