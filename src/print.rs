use std::fmt::{self, Debug, Display, Write};

use crate::{Color, Link, RbTree};

impl Color {
    fn tag(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Black => 'B',
        }
    }
}

impl<K: Display> RbTree<K> {
    /// Renders the tree one node per line, children indented below their
    /// parent, left before right. Each key is prefixed with its color:
    ///
    /// ```text
    /// B 5
    /// ├── B 3
    /// │   ├── R 1
    /// │   └── R 4
    /// └── B 8
    ///     ├── R 6
    ///     └── R 9
    /// ```
    ///
    /// A missing child is drawn as `∅` when its sibling exists, so that
    /// sides stay unambiguous. The layout is meant for humans and may
    /// change.
    pub fn dump(&self) -> String {
        self.to_string()
    }

    fn write_subtree(
        &self,
        f: &mut fmt::Formatter<'_>,
        link: Link,
        prefix: &str,
        last: bool,
    ) -> fmt::Result {
        let branch = if last { "└── " } else { "├── " };
        let Some(node) = link else {
            return writeln!(f, "{prefix}{branch}∅");
        };
        let node = &self.arena[node];
        writeln!(f, "{prefix}{branch}{} {}", node.color.tag(), node.key)?;
        let prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
        self.write_children(f, node.left, node.right, &prefix)
    }

    fn write_children(
        &self,
        f: &mut fmt::Formatter<'_>,
        left: Link,
        right: Link,
        prefix: &str,
    ) -> fmt::Result {
        if left.is_none() && right.is_none() {
            return Ok(());
        }
        self.write_subtree(f, left, prefix, false)?;
        self.write_subtree(f, right, prefix, true)
    }
}

impl<K: Display> Display for RbTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root else {
            return f.write_char('∅');
        };
        let root = &self.arena[root];
        writeln!(f, "{} {}", root.color.tag(), root.key)?;
        self.write_children(f, root.left, root.right, "")
    }
}

impl<K: Debug> Debug for RbTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
