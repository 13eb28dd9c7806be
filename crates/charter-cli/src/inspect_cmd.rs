//! The `charter inspect` command.

use std::path::Path;

use anyhow::Context;

use charter_core::load_plan;

/// Execute `charter inspect`: load a persisted plan, validate the sections
/// downstream agents rely on, and print a structural summary.
pub fn run_inspect(file: &str) -> anyhow::Result<()> {
    let plan = load_plan(Path::new(file))
        .with_context(|| format!("plan file {file:?} failed validation"))?;

    println!("Plan {file} is structurally valid.");
    if let Some(goal) = &plan.goal {
        println!("  goal: {goal}");
    }
    if let Some(domain) = plan.domain {
        println!("  domain: {domain}");
    }
    if let Some(generated_at) = plan.generated_at {
        println!("  generated_at: {generated_at}");
    }
    println!("  subtasks: {}", plan.subtasks().len());

    let files = plan
        .coder
        .as_ref()
        .and_then(|c| c.file_structure.as_ref())
        .map_or(0, |f| f.len());
    println!("  files: {files}");

    let pages = plan
        .designer
        .as_ref()
        .and_then(|d| d.pages.as_ref())
        .map_or(0, |p| p.len());
    println!("  pages: {pages}");

    Ok(())
}
