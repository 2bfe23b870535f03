use serde::{Deserialize, Serialize};

/// Node of the country → league → team tree.
///
/// `count` is the number of matches under the node's scope. Children are
/// ordered by count descending, then label ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationNode {
    pub label: String,
    pub count: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavigationNode>,
}

impl NavigationNode {
    pub fn leaf(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<NavigationNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth of the subtree rooted here (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(|c| c.depth()).max().unwrap_or(0)
    }

    /// Pre-order walk yielding (depth, node), the root at depth 0.
    pub fn walk(&self) -> Vec<(usize, &NavigationNode)> {
        let mut out = Vec::new();
        let mut stack = vec![(0usize, self)];
        while let Some((depth, node)) = stack.pop() {
            out.push((depth, node));
            for child in node.children.iter().rev() {
                stack.push((depth + 1, child));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> NavigationNode {
        NavigationNode::leaf("Angleterre", 4).with_children(vec![
            NavigationNode::leaf("Premier League", 3).with_children(vec![
                NavigationNode::leaf("Arsenal", 2),
                NavigationNode::leaf("Chelsea", 2),
            ]),
            NavigationNode::leaf("Championship", 1),
        ])
    }

    #[test]
    fn test_walk_is_preorder() {
        let root = tree();
        let labels: Vec<(usize, &str)> = root
            .walk()
            .into_iter()
            .map(|(d, n)| (d, n.label.as_str()))
            .collect();
        assert_eq!(
            labels,
            vec![
                (0, "Angleterre"),
                (1, "Premier League"),
                (2, "Arsenal"),
                (2, "Chelsea"),
                (1, "Championship"),
            ]
        );
    }

    #[test]
    fn test_depth_and_leaves() {
        let root = tree();
        assert_eq!(root.depth(), 3);
        assert!(!root.children[0].is_leaf());
        assert!(root.children[1].is_leaf());
        assert_eq!(root.children[1].depth(), 1);
    }
}
