use std::fs;
use std::path::Path;
use std::time::Instant;

use log::info;

use pdp_compiler::{compile_psl, CompileOptions, CompileStats};
use pdp_core::RuleTable;

pub fn load_rule_table(path: &Path, include_private: bool) -> Result<(RuleTable, CompileStats), String> {
    let start = Instant::now();

    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;

    let options = CompileOptions { include_private };
    let (table, stats) = compile_psl(&content, &options)
        .map_err(|e| format!("Failed to compile '{}': {}", path.display(), e))?;

    info!(
        "Loaded '{}': {} rules ({} duplicates) in {:.1}ms",
        path.display(),
        stats.rules_after,
        stats.rules_deduped,
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok((table, stats))
}
