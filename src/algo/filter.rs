//! Intermediary inclusion checks
//!
//! A route query names the nodes a candidate path must contain: source
//! first, destination last, required intermediaries in between. The
//! checks run on resolved IDs against one candidate path at a time.

use crate::graph::NodeId;

/// Every required node appears in the path, at non-decreasing positions.
///
/// Walking the required list left to right, each entry must be found in
/// the path at or after the position of the previous entry; absence or
/// an inversion rejects the path.
pub(crate) fn contains_in_order(path: &[NodeId], required: &[NodeId]) -> bool {
    let mut last = 0;

    for &req in required {
        match path.iter().position(|&n| n == req) {
            Some(pos) if pos >= last => last = pos,
            _ => return false,
        }
    }

    true
}

/// Every required node appears somewhere in the path.
pub(crate) fn contains_all(path: &[NodeId], required: &[NodeId]) -> bool {
    required.iter().all(|req| path.contains(req))
}
