//! The `pathfinder init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("pathfinder.toml").exists() {
        println!("pathfinder.toml already exists, skipping.");
    } else {
        std::fs::write("pathfinder.toml", SAMPLE_CONFIG)?;
        println!("Created pathfinder.toml");
    }

    std::fs::create_dir_all("question-banks")?;
    let example_path = std::path::Path::new("question-banks/example.toml");
    if example_path.exists() {
        println!("question-banks/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_BANK)?;
        println!("Created question-banks/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit question-banks/example.toml with your own questions");
    println!("  2. Run: pathfinder validate --bank question-banks/example.toml");
    println!("  3. Run: pathfinder take --bank question-banks/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# pathfinder configuration

# Question bank to use instead of the built-in assessment.
# question_bank = "question-banks/example.toml"

output_dir = "./pathfinder-results"
require_answer = true
"#;

const EXAMPLE_BANK: &str = r#"[bank]
id = "example"
name = "Example Assessment"
description = "A short starter bank; option 1 is analytical, 2 creative, 3 social, 4 practical"

[[questions]]
id = 1
prompt = "On a free afternoon you would rather:"
category = "interests"
options = [
    "Work through a logic puzzle",
    "Paint, write, or compose something",
    "Meet up with friends",
    "Repair or build something",
]

[[questions]]
id = 2
prompt = "A teacher asks for help. You volunteer to:"
category = "skills"
options = [
    "Check the grading spreadsheet",
    "Design the class poster",
    "Mentor a younger student",
    "Set up the lab equipment",
]

[[questions]]
id = 3
prompt = "The project you would enjoy most is:"
category = "environment"
options = [
    "Analyzing survey results",
    "Making a short film",
    "Organizing a charity drive",
    "Building a garden bed",
]

[[questions]]
id = 4
prompt = "Friends usually come to you for:"
category = "personality"
options = [
    "A careful second opinion",
    "Fresh ideas",
    "A good listener",
    "Hands-on help",
]

# Override the suggested careers for any trait; omitted traits keep the defaults.
[careers]
creative = ["Illustrator", "Film Editor", "Copywriter", "Game Designer"]
"#;
