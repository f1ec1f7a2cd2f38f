//! PDP Public Suffix List Compiler
//!
//! This crate compiles Public Suffix List text into the rule table consumed
//! by `pdp-core`.

pub mod builder;
pub mod error;
pub mod optimizer;
pub mod parser;

pub use builder::{build_rule_table, CompileOptions};
pub use error::CompileError;
pub use optimizer::{optimize_rules, OptimizeStats};
pub use parser::{parse_psl, parse_psl_strict, PslRule, RuleKind, Section};

use pdp_core::rules::RuleTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileStats {
    pub lines: usize,
    pub rules_before: usize,
    pub rules_after: usize,
    pub rules_deduped: usize,
    pub nodes: usize,
    pub depth: usize,
}

/// Parse, dedupe and build in one step. Malformed rules are skipped.
pub fn compile_psl(text: &str, options: &CompileOptions) -> Result<(RuleTable, CompileStats), CompileError> {
    let mut rules = parse_psl(text);
    if rules.is_empty() {
        return Err(CompileError::EmptyList);
    }

    let optimize_stats = optimize_rules(&mut rules);
    let table = build_rule_table(&rules, options);

    let stats = CompileStats {
        lines: text.lines().count(),
        rules_before: optimize_stats.before,
        rules_after: optimize_stats.after,
        rules_deduped: optimize_stats.deduped,
        nodes: table.len(),
        depth: table.depth(),
    };

    Ok((table, stats))
}
