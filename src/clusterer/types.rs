use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::user::UserId;

/// Smallest group ever emitted as a cluster
pub const MIN_CLUSTER_SIZE: usize = 2;

/// One group of users.
///
/// `cluster_id` is an enumeration index in output order. It only means
/// something within the response that carries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterResult {
    pub cluster_id: u32,
    pub member_ids: Vec<UserId>,
    pub size: usize,
}

impl ClusterResult {
    /// Returns `None` for groups smaller than [`MIN_CLUSTER_SIZE`]
    pub fn new(cluster_id: u32, member_ids: Vec<UserId>) -> Option<Self> {
        if member_ids.len() < MIN_CLUSTER_SIZE {
            return None;
        }

        Some(Self {
            cluster_id,
            size: member_ids.len(),
            member_ids,
        })
    }

    /// Group ids by algorithm label.
    ///
    /// Groups come out in order of first appearance, `None` labels (noise) and
    /// undersized groups are dropped, and the survivors are numbered from 0.
    pub(crate) fn from_labels(ids: &[&UserId], labels: &[Option<usize>]) -> Vec<Self> {
        debug_assert_eq!(ids.len(), labels.len());

        let mut order: Vec<usize> = Vec::new();
        let mut groups: HashMap<usize, Vec<UserId>> = HashMap::new();

        for (id, label) in ids.iter().zip(labels) {
            let Some(label) = *label else {
                continue;
            };
            groups
                .entry(label)
                .or_insert_with(|| {
                    order.push(label);
                    Vec::new()
                })
                .push((*id).clone());
        }

        order
            .into_iter()
            .filter_map(|label| groups.remove(&label))
            .filter(|members| members.len() >= MIN_CLUSTER_SIZE)
            .enumerate()
            .filter_map(|(i, members)| Self::new(i as u32, members))
            .collect()
    }
}
