//! Control-flow and cross-reference edges.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::Address;

/// Cross-references to values at or below this are not recorded; they are
/// almost always the zero and ones registers or tiny constants.
pub const XREF_THRESHOLD: Address = 0x02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    XRef,
    Call,
    Jump,
}

/// One recorded reference from an instruction to a target value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// The target as it was formatted by the instruction that produced it.
    pub text: String,
    pub mnemonic: String,
    pub from: Address,
    pub to: Address,
}

/// Edges keyed by target, one map per edge kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ControlFlow {
    pub xrefs: BTreeMap<Address, Vec<Edge>>,
    pub calls: BTreeMap<Address, Vec<Edge>>,
    pub jumps: BTreeMap<Address, Vec<Edge>>,
}

impl ControlFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a cross-reference.
    ///
    /// Targets at or below [`XREF_THRESHOLD`] are dropped, as is a second
    /// reference from the same source to the same target.
    pub fn xref(&mut self, edge: Edge) {
        if edge.to <= XREF_THRESHOLD {
            return;
        }
        let edges = self.xrefs.entry(edge.to).or_default();
        if edges.iter().any(|e| e.from == edge.from) {
            return;
        }
        edges.push(edge);
    }

    /// Records a call. Calls are never filtered or de-duplicated.
    pub fn call(&mut self, edge: Edge) {
        self.calls.entry(edge.to).or_default().push(edge);
    }

    /// Records a jump. Jumps are never filtered or de-duplicated.
    pub fn jump(&mut self, edge: Edge) {
        self.jumps.entry(edge.to).or_default().push(edge);
    }

    pub fn record(&mut self, kind: EdgeKind, edge: Edge) {
        match kind {
            EdgeKind::XRef => self.xref(edge),
            EdgeKind::Call => self.call(edge),
            EdgeKind::Jump => self.jump(edge),
        }
    }

    /// Folds another instruction's edges into this one, applying the same
    /// rules as if they had been recorded here directly.
    pub fn merge(&mut self, other: &ControlFlow) {
        for edge in other.xrefs.values().flatten() {
            self.xref(edge.clone());
        }
        for edge in other.calls.values().flatten() {
            self.call(edge.clone());
        }
        for edge in other.jumps.values().flatten() {
            self.jump(edge.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.xrefs.is_empty() && self.calls.is_empty() && self.jumps.is_empty()
    }

    /// Every call and jump target, ascending and without duplicates.
    pub fn branch_targets(&self) -> Vec<Address> {
        let mut targets: Vec<Address> = self.calls.keys().chain(self.jumps.keys()).copied().collect();
        targets.sort_unstable();
        targets.dedup();
        targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: Address, to: Address) -> Edge {
        Edge {
            text: format!("R_{to:02X}"),
            mnemonic: "LD".to_string(),
            from,
            to,
        }
    }

    #[test]
    fn test_xref_dedup_same_source() {
        let mut flow = ControlFlow::new();
        flow.xref(edge(0x2000, 0x30));
        flow.xref(edge(0x2000, 0x30));
        assert_eq!(flow.xrefs[&0x30].len(), 1);
    }

    #[test]
    fn test_xref_distinct_sources() {
        let mut flow = ControlFlow::new();
        flow.xref(edge(0x2000, 0x30));
        flow.xref(edge(0x2004, 0x30));
        assert_eq!(flow.xrefs[&0x30].len(), 2);
    }

    #[test]
    fn test_xref_threshold() {
        let mut flow = ControlFlow::new();
        flow.xref(edge(0x2000, 0x00));
        flow.xref(edge(0x2000, 0x02));
        flow.xref(edge(0x2000, 0x03));
        assert!(!flow.xrefs.contains_key(&0x00));
        assert!(!flow.xrefs.contains_key(&0x02));
        assert!(flow.xrefs.contains_key(&0x03));
    }

    #[test]
    fn test_jumps_and_calls_are_not_deduplicated() {
        let mut flow = ControlFlow::new();
        flow.jump(edge(0x100, 0x00));
        flow.jump(edge(0x100, 0x00));
        flow.call(edge(0x100, 0x01));
        flow.call(edge(0x100, 0x01));
        assert_eq!(flow.jumps[&0x00].len(), 2);
        assert_eq!(flow.calls[&0x01].len(), 2);
        assert_eq!(flow.branch_targets(), vec![0x00, 0x01]);
    }

    #[test]
    fn test_merge() {
        let mut a = ControlFlow::new();
        a.xref(edge(0x100, 0x40));
        let mut b = ControlFlow::new();
        b.xref(edge(0x100, 0x40));
        b.xref(edge(0x104, 0x40));
        b.jump(edge(0x104, 0x200));
        a.merge(&b);
        assert_eq!(a.xrefs[&0x40].len(), 2);
        assert_eq!(a.jumps[&0x200].len(), 1);
        assert!(!a.is_empty());
    }
}
