//! Text report renderers for recorded region trees
//!
//! Two independent views over the same data:
//!
//! - the **frequency-combined** view takes a forest already run through
//!   [`crate::combine`] and prints duration, percent-of-parent,
//!   percent-of-top, call count and the indented name;
//! - the **chronological** view takes the raw forest in original call order
//!   and prints the same numeric columns plus the annotation column,
//!   right-aligned across every block via a first measuring pass.
//!
//! In both views each top-level region forms its own block followed by a
//! blank line, and that region's duration serves as its block's 100% mark
//! for both the relative and absolute columns. Output is column-aligned
//! human-readable text, not a stable machine format; use
//! [`crate::json_output`] for machine parsing.

use std::io::{self, Write};

use crate::region::RegionNode;

/// Header row of the frequency-combined report
pub const FREQUENCY_HEADER: &str = " Wall time,    Relative,    Absolute,  Call time,   Function";

/// Header row of the chronological report
pub const CHRONOLOGICAL_HEADER: &str =
    " Wall time,    Relative,    Absolute,   Function,   Extra info (may be empty)";

/// Percentage of `seconds` against a denominator, 0.0 when the denominator
/// has no recorded duration (a region left open, or a degenerate recording)
fn percent(seconds: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        seconds / denominator * 100.0
    } else {
        0.0
    }
}

/// Render the frequency-combined report for a combined forest
///
/// The input is expected to come from [`crate::combine::combine_forest`], so
/// top-level blocks arrive in duration-descending order.
pub fn write_frequency_report<W: Write>(out: &mut W, combined: &[RegionNode]) -> io::Result<()> {
    writeln!(out, "{}", FREQUENCY_HEADER)?;
    for region in combined {
        write_frequency_node(out, region, region.seconds, region.seconds, 0)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_frequency_node<W: Write>(
    out: &mut W,
    node: &RegionNode,
    all_seconds: f64,
    parent_seconds: f64,
    offset: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "{:10.6},   {:7.3} %,   {:7.3} %,    {:7},   {:indent$}{}",
        node.seconds,
        percent(node.seconds, parent_seconds),
        percent(node.seconds, all_seconds),
        node.call_count,
        "",
        node.name,
        indent = offset,
    )?;
    for child in &node.children {
        write_frequency_node(out, child, all_seconds, node.seconds, offset + 1)?;
    }
    Ok(())
}

/// Render the chronological report for the raw forest
///
/// Blocks keep original call order and nesting. The first pass measures
/// `name length + indentation` over every node of every block so the
/// annotation column lines up globally; the second pass prints.
pub fn write_chronological_report<W: Write>(out: &mut W, regions: &[RegionNode]) -> io::Result<()> {
    writeln!(out, "{}", CHRONOLOGICAL_HEADER)?;
    let name_column = regions
        .iter()
        .map(|region| max_name_depth(region, 0))
        .max()
        .unwrap_or(0);
    for region in regions {
        write_chronological_node(out, region, region.seconds, region.seconds, 0, name_column)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Widest `name length + depth offset` in the subtree, offsets measured from
/// the subtree's own top-level region
fn max_name_depth(node: &RegionNode, offset: usize) -> usize {
    let mut widest = node.name.len() + offset;
    for child in &node.children {
        widest = widest.max(max_name_depth(child, offset + 1));
    }
    widest
}

fn write_chronological_node<W: Write>(
    out: &mut W,
    node: &RegionNode,
    all_seconds: f64,
    parent_seconds: f64,
    offset: usize,
    name_column: usize,
) -> io::Result<()> {
    let padding = name_column.saturating_sub(node.name.len() + offset);
    writeln!(
        out,
        "{:10.6},   {:7.3} %,   {:7.3} %,   {:indent$}{},  {:pad$}{}",
        node.seconds,
        percent(node.seconds, parent_seconds),
        percent(node.seconds, all_seconds),
        "",
        node.name,
        "",
        node.extra_info,
        indent = offset,
        pad = padding,
    )?;
    for child in &node.children {
        write_chronological_node(out, child, all_seconds, node.seconds, offset + 1, name_column)?;
    }
    Ok(())
}
