//! Region stack recorder
//!
//! The profiler infers call nesting purely from start/end call order: each
//! `start()` opens a child of the currently open region and each `end()`
//! closes the most recently opened one, a strict LIFO discipline. Pairing
//! must be balanced by the caller; the recorder owns one logical call stack
//! and is not meant to be shared across threads (use one `Profiler` per
//! thread, or wrap it in external mutual exclusion).
//!
//! Observation happens entirely through the report surfaces afterwards:
//! `print_frame_sorted` (merged siblings, sorted by duration) and
//! `print_all` (original call order with annotations).

use std::io::{self, Write};

use thiserror::Error;

use crate::combine;
use crate::region::RegionNode;
use crate::report;

/// Errors for misuse of the start/end protocol
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilerError {
    /// `end()` was called while no region was open. Continuing would corrupt
    /// depth and parent bookkeeping for everything recorded afterwards, so
    /// this is surfaced instead of being ignored.
    #[error("unmatched end(): no region is currently open")]
    ProtocolViolation,
}

pub type Result<T> = std::result::Result<T, ProfilerError>;

/// Explicit-instrumentation wall-clock profiler
///
/// Construct one per logical call stack and pass it explicitly; there is no
/// process-wide instance. The recorded tree grows until [`Profiler::reset`]
/// or drop.
///
/// # Example
/// ```
/// use cronista::recorder::Profiler;
///
/// let mut profiler = Profiler::new();
/// profiler.start("outer");
/// profiler.start_with_info("inner", "n=16");
/// profiler.end()?;
/// profiler.end()?;
/// assert_eq!(profiler.top_level_regions().len(), 1);
/// # Ok::<(), cronista::recorder::ProfilerError>(())
/// ```
#[derive(Debug)]
pub struct Profiler {
    /// Synthetic root anchoring all top-level regions; depth 0, never printed
    root: RegionNode,
    /// Child-index path from the root to the currently open region
    open_path: Vec<usize>,
    /// Mirrors `open_path.len()`, kept for depth bookkeeping on start
    depth: usize,
}

impl Profiler {
    /// Create a fresh profiler with an empty recording
    pub fn new() -> Self {
        Self {
            root: RegionNode::synthetic_root(),
            open_path: Vec::new(),
            depth: 0,
        }
    }

    /// Open a region with no annotation
    pub fn start(&mut self, name: &str) {
        self.start_with_info(name, "");
    }

    /// Open a region with a free-form annotation shown by the chronological
    /// report
    pub fn start_with_info(&mut self, name: &str, extra_info: &str) {
        self.depth += 1;
        let depth = self.depth;
        let parent = self.current_mut();
        let slot = parent.children.len();
        parent.children.push(RegionNode::open(name, extra_info, depth));
        self.open_path.push(slot);
        tracing::trace!(region = name, depth, "region opened");
    }

    /// Close the most recently opened, still-open region
    ///
    /// Stamps the end time, derives the region's duration and rewinds the
    /// current pointer to the parent.
    pub fn end(&mut self) -> Result<()> {
        if self.open_path.is_empty() {
            return Err(ProfilerError::ProtocolViolation);
        }
        let current = self.current_mut();
        current.close();
        let seconds = current.seconds;
        self.open_path.pop();
        self.depth -= 1;
        tracing::trace!(seconds, depth = self.depth, "region closed");
        Ok(())
    }

    /// The recorded forest: all top-level regions in chronological order
    pub fn top_level_regions(&self) -> &[RegionNode] {
        &self.root.children
    }

    /// Nesting depth of the currently open region (0 when none is open)
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The currently open region, or `None` when recording is balanced
    pub fn open_region(&self) -> Option<&RegionNode> {
        if self.open_path.is_empty() {
            return None;
        }
        let mut node = &self.root;
        for &index in &self.open_path {
            node = &node.children[index];
        }
        Some(node)
    }

    /// Release the entire recorded tree and reinitialize
    ///
    /// Afterwards the profiler is equivalent to a freshly constructed one.
    /// Dropping the profiler releases the tree as well; `reset` exists for
    /// callers that keep the instance around between measurement runs.
    pub fn reset(&mut self) {
        tracing::debug!(
            regions = self.root.subtree_len() - 1,
            "profiler reset, dropping recorded tree"
        );
        self.root = RegionNode::synthetic_root();
        self.open_path.clear();
        self.depth = 0;
    }

    /// Write the frequency-combined report
    ///
    /// Same-named sibling regions are merged (durations and call counts
    /// summed) and every sibling list is sorted by descending duration. The
    /// raw recording is left untouched; combination works on a copy.
    pub fn write_frame_sorted<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let combined = combine::combine_forest(self.top_level_regions());
        report::write_frequency_report(out, &combined)
    }

    /// Emit the frequency-combined report to standard output
    pub fn print_frame_sorted(&self) -> io::Result<()> {
        self.write_frame_sorted(&mut io::stdout().lock())
    }

    /// Write the chronological report: original call order, uncombined, with
    /// the annotation column right-aligned across all blocks
    pub fn write_all<W: Write>(&self, out: &mut W) -> io::Result<()> {
        report::write_chronological_report(out, self.top_level_regions())
    }

    /// Emit the chronological report to standard output
    pub fn print_all(&self) -> io::Result<()> {
        self.write_all(&mut io::stdout().lock())
    }

    fn current_mut(&mut self) -> &mut RegionNode {
        let mut node = &mut self.root;
        for &index in &self.open_path {
            node = &mut node.children[index];
        }
        node
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}
