/// A global cut of a weighted undirected graph: the total weight of the
/// crossing edges and one side of the vertex bipartition. The other side is
/// the complement; which of the two complementary sides is reported is
/// unspecified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cut {
    pub value: u64,
    pub side: Vec<usize>,
}

impl Cut {
    pub fn new(value: u64, mut side: Vec<usize>) -> Self {
        side.sort_unstable();
        Self { value, side }
    }

    /// The vertices on the other side of the partition, given the total
    /// vertex count of the graph the cut was computed on.
    pub fn complement(&self, node_count: usize) -> Vec<usize> {
        (0..node_count).filter(|v| !self.side.contains(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::cuts::Cut;

    #[test]
    fn side_is_sorted() {
        let cut = Cut::new(3, vec![4, 0, 2]);
        assert_eq!(cut.side, vec![0, 2, 4]);
    }

    #[test]
    fn complement_covers_remaining_vertices() {
        let cut = Cut::new(3, vec![1, 3]);
        assert_eq!(cut.complement(5), vec![0, 2, 4]);
    }
}
