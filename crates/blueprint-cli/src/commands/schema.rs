//! Print the blueprint schema

use anyhow::Result;
use blueprint_dsl::schema;

/// Run the schema command
pub fn run(summary: bool) -> Result<()> {
    if summary {
        let info = schema::info();
        println!("id:       {}", info.id);
        println!("title:    {}", info.title);
        println!("required: {}", info.required.join(", "));
    } else {
        println!("{}", serde_json::to_string_pretty(schema::document())?);
    }

    Ok(())
}
