//! Interactive prompts for the sync flow
//!
//! Uses dialoguer for terminal-based selection and confirmation. These are
//! the only places the run suspends for operator input.

use std::path::Path;

use colored::Colorize;
use dialoguer::{Confirm, Input, MultiSelect};
use folder_core::{parse_selection, select_indices};
use folder_fs::FolderDescriptor;

use crate::error::Result;

/// Visible rows in the multi-select list
const PAGE_SIZE: usize = 15;

/// Ask whether a missing target root should be created.
pub fn confirm_create_target(target: &Path) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(format!(
            "Target directory {} does not exist. Create it?",
            target.display()
        ))
        .default(true)
        .interact()?)
}

/// Let the operator pick which missing folders to create.
///
/// Every folder starts checked. If the operator unchecks everything, a
/// second prompt accepts comma-separated numbers from the listing instead.
pub fn select_folders(missing: &[FolderDescriptor]) -> Result<Vec<FolderDescriptor>> {
    println!();
    println!("{}", "Select folders to create:".cyan().bold());
    println!(
        "{}",
        "   Use arrow keys to navigate, space to toggle, enter to confirm".dimmed()
    );

    let labels: Vec<String> = missing.iter().map(choice_label).collect();
    let defaults = vec![true; missing.len()];

    let picked = MultiSelect::new()
        .with_prompt("Select folders to create")
        .items(&labels)
        .defaults(&defaults)
        .max_length(PAGE_SIZE)
        .interact()?;

    if !picked.is_empty() {
        return Ok(select_indices(missing, &picked));
    }

    let count = missing.len();
    let manual: String = Input::new()
        .with_prompt("Or enter folder numbers separated by commas (e.g., 1,3,5)")
        .allow_empty(true)
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            parse_selection(input, count)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;

    let indices = parse_selection(&manual, count)?;
    Ok(select_indices(missing, &indices))
}

/// Final go/no-go before anything is created.
pub fn confirm_creation(count: usize) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(format!("Create {} folder(s)?", count))
        .default(true)
        .interact()?)
}

/// Indented label for one folder in the selection list.
pub fn choice_label(folder: &FolderDescriptor) -> String {
    let indent = "  ".repeat(folder.depth().saturating_sub(1));
    format!("{}{}", indent, folder.relative_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_indented_by_depth() {
        let top = FolderDescriptor::new("/src", "docs");
        let nested = FolderDescriptor::new("/src", "docs/api/v1");
        assert_eq!(choice_label(&top), "docs");
        assert_eq!(choice_label(&nested), "    docs/api/v1");
    }
}
