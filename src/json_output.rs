//! JSON output format for region recordings
//!
//! Machine-readable rendering of the recorded tree for the demo binary's
//! `--format json`. The text reports stay the human surface; this format is
//! versioned so downstream tooling can detect changes.

use serde::{Deserialize, Serialize};

use crate::region::RegionNode;

/// A single region in the JSON report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRegion {
    /// Region name
    pub name: String,
    /// Free-form annotation (omitted when empty)
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub extra_info: String,
    /// Wall-clock duration in seconds (0.0 for a region never ended)
    pub seconds: f64,
    /// Number of original invocations represented (>1 after combining)
    pub call_count: u64,
    /// Nesting level, 1 for a top-level region
    pub depth: usize,
    /// Child regions (omitted when empty)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<JsonRegion>,
}

impl JsonRegion {
    fn from_node(node: &RegionNode) -> Self {
        Self {
            name: node.name.clone(),
            extra_info: node.extra_info.clone(),
            seconds: node.seconds,
            call_count: node.call_count,
            depth: node.depth,
            children: node.children.iter().map(JsonRegion::from_node).collect(),
        }
    }
}

/// Summary statistics for the recording
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummary {
    /// Total number of region nodes in the raw tree
    pub total_regions: u64,
    /// Total number of original invocations
    pub total_calls: u64,
    /// Sum of top-level durations in seconds
    pub total_seconds: f64,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// Raw recording in chronological order
    pub regions: Vec<JsonRegion>,
    /// Frequency-combined view (present when requested)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub combined: Option<Vec<JsonRegion>>,
    /// Summary statistics
    pub summary: JsonSummary,
}

impl JsonReport {
    /// Build a report from the recorded top-level forest
    pub fn from_regions(regions: &[RegionNode]) -> Self {
        let total_regions = regions
            .iter()
            .map(|region| region.subtree_len() as u64)
            .sum();
        let total_calls = regions.iter().map(count_calls).sum();
        let total_seconds = regions.iter().map(|region| region.seconds).sum();
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "cronista-json-v1".to_string(),
            regions: regions.iter().map(JsonRegion::from_node).collect(),
            combined: None,
            summary: JsonSummary {
                total_regions,
                total_calls,
                total_seconds,
            },
        }
    }

    /// Attach the frequency-combined view
    pub fn with_combined(mut self, combined: &[RegionNode]) -> Self {
        self.combined = Some(combined.iter().map(JsonRegion::from_node).collect());
        self
    }

    /// Serialize to pretty-printed JSON
    pub fn to_string_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn count_calls(node: &RegionNode) -> u64 {
    node.call_count + node.children.iter().map(count_calls).sum::<u64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combine;
    use crate::recorder::Profiler;

    fn recorded_forest() -> Vec<RegionNode> {
        let mut profiler = Profiler::new();
        profiler.start("outer");
        profiler.start_with_info("inner", "n=2");
        profiler.end().unwrap();
        profiler.start_with_info("inner", "n=3");
        profiler.end().unwrap();
        profiler.end().unwrap();
        profiler.top_level_regions().to_vec()
    }

    #[test]
    fn test_report_mirrors_tree_shape() {
        let forest = recorded_forest();
        let report = JsonReport::from_regions(&forest);

        assert_eq!(report.format, "cronista-json-v1");
        assert_eq!(report.regions.len(), 1);
        assert_eq!(report.regions[0].name, "outer");
        assert_eq!(report.regions[0].children.len(), 2);
        assert_eq!(report.regions[0].children[0].extra_info, "n=2");
        assert_eq!(report.summary.total_regions, 3);
        assert_eq!(report.summary.total_calls, 3);
    }

    #[test]
    fn test_empty_annotation_and_children_are_omitted() {
        let forest = recorded_forest();
        let json = JsonReport::from_regions(&forest)
            .to_string_pretty()
            .unwrap();

        // "outer" has no annotation and leaves have no children.
        assert!(json.contains("\"extra_info\": \"n=2\""));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["regions"][0].get("extra_info").is_none());
        assert!(value["regions"][0]["children"][0].get("children").is_none());
    }

    #[test]
    fn test_combined_section_is_optional() {
        let forest = recorded_forest();
        let plain = JsonReport::from_regions(&forest)
            .to_string_pretty()
            .unwrap();
        assert!(!plain.contains("\"combined\""));

        let combined_forest = combine::combine_forest(&forest);
        let with_combined = JsonReport::from_regions(&forest)
            .with_combined(&combined_forest)
            .to_string_pretty()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&with_combined).unwrap();
        assert_eq!(
            value["combined"][0]["children"][0]["call_count"],
            serde_json::json!(2)
        );
    }

    #[test]
    fn test_roundtrip_deserialization() {
        let forest = recorded_forest();
        let json = JsonReport::from_regions(&forest)
            .to_string_pretty()
            .unwrap();
        let parsed: JsonReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.regions.len(), 1);
        assert_eq!(parsed.regions[0].children.len(), 2);
        assert_eq!(parsed.summary.total_regions, 3);
    }

    #[test]
    fn test_empty_recording() {
        let report = JsonReport::from_regions(&[]);
        assert!(report.regions.is_empty());
        assert_eq!(report.summary.total_regions, 0);
        assert_eq!(report.summary.total_seconds, 0.0);
    }
}
