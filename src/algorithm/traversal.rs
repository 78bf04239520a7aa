//! 图遍历
//!
//! 基于邻居映射的广度优先搜索

use crate::graph::{NeighborMap, Vertex};
use indexmap::IndexSet;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// 广度优先搜索
///
/// 先探查当前顶点的全部相邻顶点，再处理队列中的下一个顶点。
/// 返回从 `start` 可达的所有顶点（含 `start`），按发现顺序排列，
/// 每个顶点只出现一次。同层顶点的访问顺序不作保证。
pub fn breadth_first_search(neighbors: &NeighborMap, start: &Vertex) -> IndexSet<Vertex> {
    let mut explored = IndexSet::new();
    let mut frontier = VecDeque::new();

    explored.insert(start.clone());
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        let Some(adjacent) = neighbors.get(current) else {
            continue;
        };
        for next in adjacent {
            if explored.insert(next.clone()) {
                trace!(from = %current, to = %next, "发现顶点");
                frontier.push_back(next);
            }
        }
    }

    debug!(start = %start, reached = explored.len(), "广度优先搜索完成");
    explored
}
