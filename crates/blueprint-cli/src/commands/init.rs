//! Initialize a starter blueprint project

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Run the init command
pub fn run(path: &str, name: Option<&str>) -> Result<()> {
    let project_dir = Path::new(path);

    // Create directory if it doesn't exist
    if !project_dir.exists() {
        fs::create_dir_all(project_dir)?;
    }

    // Get absolute path for deriving name
    let abs_path = project_dir.canonicalize()?;

    // Derive blueprint name from directory name if not provided
    let project_name = match name {
        Some(n) => n.to_string(),
        None => abs_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("Could not determine blueprint name from path"))?,
    };

    // Check if already initialized
    if project_dir.join("blueprint.yaml").exists() {
        anyhow::bail!(
            "Directory '{}' already contains a blueprint.yaml",
            project_dir.display()
        );
    }

    tracing::info!("Creating new blueprint: {}", project_name);

    // Create blueprint.yaml
    let blueprint = format!(
        r##"# {project_name}
id: {project_name}
name: {project_name}
version: "0.1.0"

apps:
  - salesforce
  - slack
  - sendgrid

trigger:
  app: salesforce
  event: new_contact

steps:
  - id: create_record
    app: salesforce
    action: create_record
    inputs:
      object: Contact

  - id: notify_team
    app: slack
    action: send_message
    inputs:
      channel: "#sales"

  - id: welcome_email
    app: sendgrid
    action: send_email
    inputs:
      template: welcome
    transforms:
      - field: email
        operation: lowercase
"##
    );
    fs::write(project_dir.join("blueprint.yaml"), blueprint)?;

    // Create the exports directory ahead of the first export
    fs::create_dir_all(project_dir.join("exports"))?;

    // Create .gitignore
    let gitignore = r#"# Exported platform documents
exports/

# IDE
.idea/
.vscode/
*.swp
"#;
    fs::write(project_dir.join(".gitignore"), gitignore)?;

    tracing::info!(
        "✓ Created blueprint '{}' at {}",
        project_name,
        abs_path.display()
    );
    tracing::info!("");
    tracing::info!("Next steps:");
    if path != "." {
        tracing::info!("  cd {}", project_dir.display());
    }
    tracing::info!("  blueprint validate blueprint.yaml   # Check it against the schema");
    tracing::info!("  blueprint export blueprint.yaml     # Convert for every platform");

    Ok(())
}
