//! Secret management CLI commands: set, remove, list, clear, path.

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use dialoguer::{Confirm, Password};

use gemterm_core::secret::SecretStore;
use gemterm_core::settings::API_KEY_SETTING;
use gemterm_types::secret::{Redacted, SecretEntry};

/// Set a secret value, prompting with hidden input when `value` is omitted.
///
/// ```bash
/// # Secure prompt (recommended)
/// gemterm secrets set "Gemini:ApiKey"
///
/// # Script/automation mode
/// gemterm secrets set "Gemini:ApiKey" "AIza..."
/// ```
pub async fn set_secret<S: SecretStore>(
    store: &mut S,
    key: &str,
    value: Option<&str>,
    json: bool,
) -> Result<()> {
    let secret_value = match value {
        Some(v) => v.to_string(),
        None => Password::new()
            .with_prompt(format!("Enter value for {}", style(key).bold()))
            .interact()?,
    };

    store.set(key, &secret_value).await?;
    let masked = Redacted::new(secret_value).masked();

    if json {
        println!(
            "{}",
            serde_json::json!({"set": true, "key": key, "masked": masked})
        );
    } else {
        println!(
            "  {} Secret '{}' set ({})",
            style("✓").green().bold(),
            style(key).bold(),
            masked
        );
    }

    Ok(())
}

pub async fn remove_secret<S: SecretStore>(store: &mut S, key: &str, json: bool) -> Result<()> {
    store.remove(key).await?;

    if json {
        println!("{}", serde_json::json!({"removed": true, "key": key}));
    } else {
        println!(
            "  {} Secret '{}' removed",
            style("✓").green().bold(),
            style(key).bold()
        );
    }

    Ok(())
}

/// List all secrets with masked values.
pub fn list_secrets<S: SecretStore>(store: &S, json: bool) -> Result<()> {
    let entries = store.list();

    if json {
        println!("{}", serde_json::to_string_pretty(&masked_json(&entries))?);
        return Ok(());
    }

    if entries.is_empty() {
        println!();
        println!(
            "  {} No secrets stored. Add one with: {}",
            style("i").blue().bold(),
            style(format!("gemterm secrets set \"{API_KEY_SETTING}\"")).yellow()
        );
        println!();
        return Ok(());
    }

    println!();
    println!("{}", secrets_table(&entries));
    println!();
    println!(
        "  {} secret{}",
        style(entries.len()).bold(),
        if entries.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

pub async fn clear_secrets<S: SecretStore>(store: &mut S, force: bool, json: bool) -> Result<()> {
    let count = store.list().len();

    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete all {count} stored secrets?"))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    store.clear().await?;

    if json {
        println!("{}", serde_json::json!({"cleared": count}));
    } else {
        println!(
            "  {} Removed {} secret{}",
            style("✓").green().bold(),
            style(count).bold(),
            if count == 1 { "" } else { "s" }
        );
    }

    Ok(())
}

pub fn print_path(path: &Path, json: bool) {
    if json {
        println!("{}", serde_json::json!({"path": path.display().to_string()}));
    } else {
        println!("{}", path.display());
    }
}

fn secrets_table(entries: &[SecretEntry]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Key").fg(Color::White),
        Cell::new("Value").fg(Color::White),
    ]);

    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.key).fg(Color::Cyan),
            Cell::new(entry.value.masked()).fg(Color::DarkGrey),
        ]);
    }

    table
}

fn masked_json(entries: &[SecretEntry]) -> serde_json::Value {
    entries
        .iter()
        .map(|e| serde_json::json!({"key": e.key, "masked": e.value.masked()}))
        .collect()
}
