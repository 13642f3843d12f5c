//! One combat exchange against a guardian of the given agility.

use colored::Colorize;
use th_mechanics::{CombatAction, Combatant, calculate_damage, calculate_dodge_chance, chance};

pub fn run(action: &str, agility: u32, seed: Option<u64>) -> Result<(), String> {
    let action = CombatAction::from_name(action);
    let mut rng = super::rng_from(seed);
    let attacker = Combatant::new("You", 0);
    let defender = Combatant::new("Guardian", agility);

    let dodge = calculate_dodge_chance(defender.agility).clamp(0.0, 1.0);
    if chance(&mut rng, dodge) {
        println!("  {} dodges your {action}.", defender.name);
        return Ok(());
    }

    let damage = calculate_damage(&mut rng, &attacker, &defender, &action);
    let label = if matches!(action, CombatAction::Attack) && damage > 1 {
        format!("{damage} (critical)").yellow().bold()
    } else {
        damage.to_string().normal()
    };
    println!("  Your {action} hits {} for {label}.", defender.name);
    Ok(())
}
