//! Output formatting for CLI commands.

use keyfacet::BatchReport;

use super::ResolveResponse;

/// Print a batch summary to stderr; the outputs themselves go to stdout or a file.
pub fn print_batch_summary(report: &BatchReport) {
    eprintln!(
        "Processed {} documents in {}ms: {} keywords",
        report.documents(),
        report.processing_ms,
        report.keywords_found()
    );
    if !report.no_keywords.is_empty() {
        eprintln!("No keywords ({}):", report.no_keywords.len());
        for id in &report.no_keywords {
            eprintln!("  {}", id);
        }
    }
}

/// Print a resolve result.
pub fn print_resolve_result(result: &ResolveResponse, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    if !result.known_class {
        println!("{}: not in ontology", result.class);
    }
    match (&result.facet, &result.facet_label) {
        (Some(facet), Some(label)) => println!("{} -> {} ({})", result.class, label, facet),
        _ => println!("{} -> no facet", result.class),
    }
    Ok(())
}
