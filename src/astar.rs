use std::hash::Hash;

use crate::finder::{OpenEntry, PathFinder};
use crate::traits::AstarPather;

impl<N: Copy + Eq + Hash + Ord> PathFinder<N> {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Returns the full path including both endpoints, or `None` if the goal
    /// is unreachable (or the step budget ran out). An unreachable goal is a
    /// normal outcome, not an error.
    ///
    /// The search is optimal as long as `pather`'s estimate is admissible
    /// and its edge costs are positive.
    pub fn astar_path<P: AstarPather<Node = N>>(
        &mut self,
        pather: &P,
        from: N,
        to: N,
    ) -> Option<Vec<N>> {
        self.reset();

        if from == to {
            self.g.insert(from, 0);
            return Some(vec![from]);
        }

        self.g.insert(from, 0);
        self.parents.insert(from, from);
        self.open.push(OpenEntry {
            f: pather.estimate(from, to),
            g: 0,
            node: from,
        });

        let mut steps = 0usize;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(current) = self.open.pop() else {
                break false;
            };

            // A node already closed was popped through a stale duplicate
            // entry; discard it.
            if !self.closed.insert(current.node) {
                continue;
            }

            if current.node == to {
                break true;
            }

            if let Some(budget) = self.step_budget {
                if steps >= budget {
                    break false;
                }
            }
            steps += 1;

            let current_g = current.g;

            nbuf.clear();
            pather.neighbors(current.node, &mut nbuf);

            for &n in nbuf.iter() {
                if self.closed.contains(&n) {
                    continue;
                }
                let tentative_g = current_g + pather.cost(current.node, n);

                // Absent from the g-score map means "infinity": any finite
                // tentative cost wins. Otherwise only a strict improvement
                // is worth re-opening.
                if let Some(&best) = self.g.get(&n) {
                    if tentative_g >= best {
                        continue;
                    }
                }

                self.g.insert(n, tentative_g);
                self.parents.insert(n, current.node);
                self.open.push(OpenEntry {
                    f: tentative_g + pather.estimate(n, to),
                    g: tentative_g,
                    node: n,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        // Walk parent links back from the goal; the start is its own parent.
        let mut path = Vec::new();
        let mut cur = to;
        while let Some(&p) = self.parents.get(&cur) {
            path.push(cur);
            if p == cur {
                break;
            }
            cur = p;
        }
        path.reverse();
        Some(path)
    }
}
