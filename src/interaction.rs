use std::collections::{HashMap, HashSet};
use std::error::Error;

use log::debug;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::registry::Registry;

/// matplotlib's tab20 qualitative palette, the 20-color cycle used for
/// node fills.
pub const PALETTE: [(u8, u8, u8); 20] = [
    (31, 119, 180),
    (174, 199, 232),
    (255, 127, 14),
    (255, 187, 120),
    (44, 160, 44),
    (152, 223, 138),
    (214, 39, 40),
    (255, 152, 150),
    (148, 103, 189),
    (197, 176, 213),
    (140, 86, 75),
    (196, 156, 148),
    (227, 119, 194),
    (247, 182, 210),
    (127, 127, 127),
    (199, 199, 199),
    (188, 189, 34),
    (219, 219, 141),
    (23, 190, 207),
    (158, 218, 229),
];

/// Directed R -> Avr graph built from a selection of R gene names. The left
/// column keeps the selection order, the right column orders Avr genes by
/// first appearance.
pub struct InteractionGraph {
    graph: DiGraph<String, ()>,
    indices: HashMap<String, NodeIndex>,
    left: Vec<String>,
    right: Vec<String>,
}

impl InteractionGraph {
    pub fn from_selection(selection: &[String], registry: &Registry) -> Self {
        let mut graph = DiGraph::new();
        let mut indices: HashMap<String, NodeIndex> = HashMap::new();
        let mut right: Vec<String> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for name in selection {
            let Some(record) = registry.lookup(name) else {
                debug!("no record for {name}, leaving it out of the graph");
                continue;
            };
            let gene_idx = Self::intern(&mut graph, &mut indices, name);
            for &avr in record.get_avr_gene().names() {
                let avr_idx = Self::intern(&mut graph, &mut indices, avr);
                // update_edge keeps repeated selections from stacking
                // parallel edges
                graph.update_edge(gene_idx, avr_idx, ());
                if seen.insert(avr) {
                    right.push(avr.to_string());
                }
            }
        }

        InteractionGraph {
            graph,
            indices,
            left: selection.to_vec(),
            right,
        }
    }

    fn intern(
        graph: &mut DiGraph<String, ()>,
        indices: &mut HashMap<String, NodeIndex>,
        name: &str,
    ) -> NodeIndex {
        match indices.get(name) {
            Some(idx) => *idx,
            None => {
                let idx = graph.add_node(name.to_string());
                indices.insert(name.to_string(), idx);
                idx
            }
        }
    }

    /// Two-column positions and fill colors for every selected name. Fails
    /// when the right column needs more colors than the palette holds.
    pub fn layout(&self) -> Result<DiagramLayout, Box<dyn Error>> {
        if self.right.len() > PALETTE.len() {
            return Err("Not enough colors available for Avr genes.".into());
        }

        let mut positions = HashMap::new();
        let mut colors = HashMap::new();
        for (i, name) in self.left.iter().enumerate() {
            positions.insert(name.clone(), (0.0, i as f32));
            colors.insert(name.clone(), PALETTE[i % PALETTE.len()]);
        }
        // right rows sit two units apart to spread the shared targets
        for (i, name) in self.right.iter().enumerate() {
            positions.insert(name.clone(), (1.0, (i * 2) as f32));
            colors.insert(name.clone(), PALETTE[i % PALETTE.len()]);
        }

        Ok(DiagramLayout { positions, colors })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_references().map(move |edge| {
            (
                self.graph[edge.source()].as_str(),
                self.graph[edge.target()].as_str(),
            )
        })
    }

    pub fn out_degree(&self, name: &str) -> usize {
        match self.indices.get(name) {
            Some(idx) => self.graph.edges(*idx).count(),
            None => 0,
        }
    }

    pub fn left(&self) -> &[String] {
        &self.left
    }

    pub fn right(&self) -> &[String] {
        &self.right
    }
}

/// Name-keyed diagram geometry. Positions use diagram units, not pixels.
#[derive(Debug)]
pub struct DiagramLayout {
    positions: HashMap<String, (f32, f32)>,
    colors: HashMap<String, (u8, u8, u8)>,
}

impl DiagramLayout {
    pub fn position_of(&self, name: &str) -> Option<(f32, f32)> {
        self.positions.get(name).copied()
    }

    pub fn color_of(&self, name: &str) -> Option<(u8, u8, u8)> {
        self.colors.get(name).copied()
    }
}
