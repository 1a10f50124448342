use std::path::Path;

use pq_content::ContentTables;

/// Write the built-in tables as JSON to `output`, or to stdout.
pub fn run(output: Option<&Path>) -> Result<(), String> {
    let json = ContentTables::default()
        .to_json()
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .map_err(|e| format!("cannot write {}: {e}", path.display()))?;
            println!("  Wrote content tables to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
