use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use od6_core::{Character, CostTable, complication_points, total_points};
use od6_store::{CharacterStore, TemplateStore};

pub async fn new(dir: &Path, name: &str, template_name: &str) -> Result<(), String> {
    let templates = TemplateStore::new(dir);
    let template = templates
        .load(template_name)
        .await
        .map_err(|e| e.to_string())?;

    let character = Character::from_template(&template, name);
    let store = CharacterStore::new(dir);
    store.save(&character).await.map_err(|e| e.to_string())?;
    println!("  Created character '{name}' from template {template_name}");
    Ok(())
}

pub async fn show(dir: &Path, name: &str) -> Result<(), String> {
    let store = CharacterStore::new(dir);
    let character = store.load(name).await.map_err(|e| e.to_string())?;

    println!(
        "  {} [{}]",
        character.name.bold(),
        character.template_name.dimmed()
    );
    if !character.species.is_empty() {
        println!("  species: {}", character.species);
    }
    println!();

    for ca in &character.attributes {
        let code = match ca.die_code {
            Some(code) => code.to_string(),
            None => "-".to_string(),
        };
        println!("  {:<16} {}", ca.attribute.name.bold(), code);
        for skill in &ca.attribute.skills {
            println!("    {}", skill.name.dimmed());
        }
    }

    if !character.selected_options.is_empty() {
        println!();
        println!("  {}", "Options:".dimmed());
        for option in &character.selected_options {
            println!(
                "    {} ({}, {} pts)",
                option.name(),
                option.category(),
                option.points()
            );
        }
    }

    println!();
    if character.health.use_body_points {
        let bp = character.health.body_points;
        println!("  body points: {}/{}", bp.current, bp.max);
    } else if let Some(worst) = character.health.wounds.worst() {
        println!("  wounds: {worst}");
    } else {
        println!("  wounds: none");
    }

    if character.defenses.use_static {
        let d = &character.defenses;
        println!(
            "  static defenses: dodge {} block {} parry {} soak {}",
            d.dodge, d.block, d.parry, d.soak
        );
    }

    Ok(())
}

pub async fn points(dir: &Path, name: &str) -> Result<(), String> {
    let store = CharacterStore::new(dir);
    let character = store.load(name).await.map_err(|e| e.to_string())?;

    let costs = CostTable::default();
    println!("  total points:        {}", total_points(&character, &costs));
    println!("  complication points: {}", complication_points(&character));
    Ok(())
}

pub async fn list(dir: &Path) -> Result<(), String> {
    let store = CharacterStore::new(dir);
    let characters = store.list().await.map_err(|e| e.to_string())?;

    if characters.is_empty() {
        println!("  No characters saved.");
        return Ok(());
    }

    let costs = CostTable::default();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Template", "Points", "Complications"]);

    for character in &characters {
        table.add_row(vec![
            character.name.clone(),
            character.template_name.clone(),
            total_points(character, &costs).to_string(),
            complication_points(character).to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} characters", characters.len());
    Ok(())
}

pub async fn delete(dir: &Path, name: &str) -> Result<(), String> {
    let store = CharacterStore::new(dir);
    store.delete(name).await.map_err(|e| e.to_string())?;
    println!("  Deleted character '{name}'");
    Ok(())
}
