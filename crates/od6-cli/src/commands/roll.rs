use std::path::Path;

use colored::Colorize;
use od6_mechanics::{RollRecord, RollStatus, Ruleset, legend_successes, roll, total};
use od6_store::StatsLog;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub async fn run(
    dir: &Path,
    dice: u32,
    pips: u32,
    legend: bool,
    seed: Option<u64>,
    count: u32,
) -> Result<(), String> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let ruleset = if legend {
        Ruleset::Legend
    } else {
        Ruleset::Classic
    };
    let mut log = StatsLog::new(dir);

    for i in 0..count {
        if count > 1 {
            println!("  {} {}", "roll".dimmed(), i + 1);
        }
        let result = roll(dice, &mut rng).map_err(|e| e.to_string())?;

        let faces: Vec<String> = result.rolls.iter().map(u32::to_string).collect();
        println!("  rolls: {} | wild: {}", faces.join(" "), result.wild_die);

        match result.status {
            RollStatus::Normal => {}
            RollStatus::CriticalSuccess => {
                let bonus: Vec<String> = result.bonus_rolls.iter().map(u32::to_string).collect();
                println!(
                    "  {} bonus: {}",
                    "Critical Success!".green().bold(),
                    bonus.join(" ")
                );
            }
            RollStatus::CriticalFailure => {
                println!("  {}", "Critical Failure!".red().bold());
                if let Some(penalty) = result.penalty_die {
                    println!("  penalty: {penalty}");
                }
            }
        }

        match ruleset {
            Ruleset::Classic => println!("  total: {}", total(&result, pips, ruleset)),
            Ruleset::Legend => println!("  successes: {}", legend_successes(&result)),
        }
        if count > 1 {
            println!();
        }

        log.add(RollRecord::capture(&result))
            .await
            .map_err(|e| e.to_string())?;
    }

    Ok(())
}
