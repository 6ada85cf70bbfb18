//! Profiles command handler: list the personality table.

use std::io::Write;

use stackfish_brain::personality::profiles;

use crate::error::CliError;

pub fn handle_profiles_command(out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(
        out,
        "{:<12} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "persona", "eq_offset", "bluff_freq", "value_pct", "bluff_pct", "fe_bias"
    )?;
    for p in profiles() {
        writeln!(
            out,
            "{:<12} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
            p.name,
            p.equity_threshold,
            p.bluff_frequency,
            p.value_bet_pct,
            p.bluff_bet_pct,
            p.fold_equity_bias
        )?;
    }
    Ok(())
}
