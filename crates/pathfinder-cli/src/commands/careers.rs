//! The `pathfinder careers` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(
    trait_name: Option<String>,
    bank: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (_, assessment) = super::load_context(bank, config_path, false)?;
    let careers = &assessment.careers;

    if let Some(name) = trait_name {
        for career in careers.lookup(&name)? {
            println!("{career}");
        }
        return Ok(());
    }

    for (kind, titles) in careers.iter() {
        println!("{kind}: {}", titles.join(", "));
    }

    Ok(())
}
