use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use od6_core::{OptionCategory, validate_template};
use od6_store::{TemplateStore, builtin};

pub async fn list(dir: &Path) -> Result<(), String> {
    let store = TemplateStore::new(dir);
    let templates = store.list().await.map_err(|e| e.to_string())?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Attributes", "Options", "Source"]);

    for template in &templates {
        let source = if builtin::is_builtin(&template.name) {
            "built-in"
        } else {
            "saved"
        };
        table.add_row(vec![
            template.name.clone(),
            template.attributes.len().to_string(),
            template.options.len().to_string(),
            source.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} templates", templates.len());

    Ok(())
}

pub async fn show(dir: &Path, name: &str) -> Result<(), String> {
    let store = TemplateStore::new(dir);
    let template = store.load(name).await.map_err(|e| e.to_string())?;

    println!("  {}", template.name.bold());
    println!();

    for attribute in &template.attributes {
        let marker = if attribute.is_extranormal {
            " [extranormal]".dimmed().to_string()
        } else {
            String::new()
        };
        println!("  {}{marker}", attribute.name.bold());
        if !attribute.description.is_empty() {
            println!("    {}", attribute.description.dimmed());
        }
        for skill in &attribute.skills {
            println!("    - {}", skill.name);
        }
    }

    for category in [
        OptionCategory::Advantage,
        OptionCategory::Complication,
        OptionCategory::SpecialAbility,
    ] {
        let options: Vec<_> = template.options_in(category).collect();
        if options.is_empty() {
            continue;
        }
        println!();
        println!("  {}", format!("{category}s:").dimmed());
        for option in options {
            let desc = option.body().description.as_str();
            let desc = if desc.is_empty() { "no description" } else { desc };
            println!("    {} ({} pts) - {desc}", option.name(), option.points());
        }
    }

    Ok(())
}

pub async fn new(dir: &Path, name: &str, base: &str) -> Result<(), String> {
    let mut template =
        builtin::by_name(base).ok_or_else(|| format!("unknown base template: \"{base}\""))?;
    template.name = name.to_string();

    let store = TemplateStore::new(dir);
    store.save(&template).await.map_err(|e| e.to_string())?;
    println!("  Created template '{name}' from {base}");
    Ok(())
}

pub async fn validate(dir: &Path, name: &str) -> Result<(), String> {
    let store = TemplateStore::new(dir);
    let template = store.load(name).await.map_err(|e| e.to_string())?;

    let issues = validate_template(&template);
    if issues.is_empty() {
        println!("  {} is clean", template.name);
        return Ok(());
    }

    for issue in &issues {
        if issue.is_error {
            println!("  {}", issue.to_string().red());
        } else {
            println!("  {}", issue.to_string().yellow());
        }
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    if errors > 0 {
        Err(format!(
            "{errors} error{} found",
            if errors == 1 { "" } else { "s" }
        ))
    } else {
        Ok(())
    }
}

pub async fn delete(dir: &Path, name: &str) -> Result<(), String> {
    let store = TemplateStore::new(dir);
    store.delete(name).await.map_err(|e| e.to_string())?;
    println!("  Deleted template '{name}'");
    Ok(())
}
