//! Canonical Graph Text Writer
//!
//! Renders vertex/edge sets back into the persisted text form. Output uses
//! the spaced separator variant and sorts both sets ascending so repeated
//! saves of the same graph produce identical bytes. Readers must not rely
//! on the ordering; only set equivalence after a re-parse is promised.

use crate::graph::VertexValue;

/// Serialize vertex values and edge pairs into canonical graph text
pub fn serialize(vertices: &[VertexValue], edges: &[(VertexValue, VertexValue)]) -> String {
    let mut values: Vec<u64> = vertices.iter().map(|v| v.as_u64()).collect();
    values.sort_unstable();

    let mut pairs: Vec<(u64, u64)> = edges
        .iter()
        .map(|&(from, to)| (from.as_u64(), to.as_u64()))
        .collect();
    pairs.sort_unstable();

    let vertex_list = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let edge_list = pairs
        .iter()
        .map(|&(from, to)| format!("({}, {})", from, to))
        .collect::<Vec<_>>()
        .join(", ");

    format!("V = {{{}}}; A = {{{}}};", vertex_list, edge_list)
}
