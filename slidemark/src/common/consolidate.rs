//! Merges adjacent runs that render to the same Markdown markers.
//!
//! The Slides API frequently splits visually uniform text into several runs
//! (a bold word followed by a bold space, or a run boundary left over from an
//! edit). Rendering those runs separately yields `**Hello ****World**`, so
//! runs are merged before rendering whenever their [`MarkdownStyle`]s are equal.
//!
//! Rich style never blocks a merge. The merged run keeps the first run's full
//! style, so rich differences between merged runs are dropped.
//!
//! [`MarkdownStyle`]: crate::style::MarkdownStyle

use crate::style::Run;

pub fn consolidate_runs(runs: &[Run]) -> Vec<Run> {
    let mut result: Vec<Run> = Vec::with_capacity(runs.len());

    for run in runs {
        match result.last_mut() {
            Some(current) if current.style.same_markdown_style(&run.style) => {
                current.content.push_str(&run.content);
            }
            _ => result.push(run.clone()),
        }
    }

    result
}
