//! Handler for the `calc` command.

use serde_json::json;

use crate::cli::{output, CalcArgs};
use crate::domain::{compute, ConversionMode};
use crate::error::Result;

/// Work out and print a single hedge.
pub fn execute(args: &CalcArgs) -> Result<()> {
    let mode: ConversionMode = args.mode.into();
    let c = compute(mode, args.back, args.stake, args.lay, args.commission)?;

    if args.json {
        let value = json!({
            "mode": mode,
            "back_price": args.back,
            "back_stake": args.stake,
            "lay_price": args.lay,
            "commission_pct": args.commission,
            "result": c,
            "extraction_pct": c.extraction_pct(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    output::section(&format!("Hedge ({mode})"));
    output::key_value("Back", format!("{} @ {}", args.stake, args.back));
    output::key_value("Lay odds", format!("{} ({}% commission)", args.lay, args.commission));
    output::key_value("Lay stake", format!("{:.2}", c.lay_stake));
    output::key_value("Liability", format!("{:.2}", c.liability));
    output::key_value("If back wins", format!("{:.2}", c.back_profit));
    output::key_value("If lay wins", format!("{:.2}", c.lay_profit));
    output::key_value("Guaranteed", format!("{:.2}", c.guaranteed_profit));
    output::key_value("Extraction", format!("{:.1}%", c.extraction_pct()));
    Ok(())
}
