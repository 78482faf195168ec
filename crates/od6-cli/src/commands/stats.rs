use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use od6_mechanics::RollStatus;
use od6_store::StatsLog;

pub async fn run(dir: &Path) -> Result<(), String> {
    let log = StatsLog::new(dir);
    let rolls = log.load().await.map_err(|e| e.to_string())?;

    if rolls.is_empty() {
        println!("  No rolls recorded.");
        return Ok(());
    }

    println!("  rolls recorded:     {}", rolls.len());
    println!("  dice thrown:        {}", rolls.total_dice_rolled());
    println!(
        "  critical successes: {}",
        rolls.count_by_status(RollStatus::CriticalSuccess)
    );
    println!(
        "  critical failures:  {}",
        rolls.count_by_status(RollStatus::CriticalFailure)
    );
    println!(
        "  crit success rate:  {:.1}%",
        rolls.critical_success_rate() * 100.0
    );
    println!();

    let distribution = rolls.face_distribution();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Face", "Count"]);
    for (face, count) in distribution.iter().enumerate() {
        table.add_row(vec![(face + 1).to_string(), count.to_string()]);
    }
    println!("{table}");

    if let Some(face) = rolls.most_common_face() {
        println!();
        println!("  most common face: {face}");
    }

    Ok(())
}
