//! Build binary and weighted incidence matrices from a small hypergraph

use hymat::{
    binary_incidence_of, weighted_incidence_of, Hypergraph, MatrixOperations, SparseMatrix,
};
use std::time::Instant;

fn main() -> hymat::Result<()> {
    // A co-authorship style hypergraph: each edge groups the nodes of one
    // collaboration, weighted by how often it occurred.
    let mut hypergraph = Hypergraph::new();
    hypergraph.add_edge(&[0, 1], 3.0);
    hypergraph.add_edge(&[1, 2, 3], 1.0);
    hypergraph.add_edge(&[0, 2, 4, 5], 2.0);
    hypergraph.add_edge(&[3, 5], 4.0);

    println!(
        "Hypergraph: {} nodes, {} hyperedges",
        hypergraph.node_count(),
        hypergraph.edge_count()
    );

    let start = Instant::now();
    let binary = binary_incidence_of::<f64>(&hypergraph, None)?;
    let weighted = weighted_incidence_of(&hypergraph, None)?;
    println!("Built both matrices in {:?}", start.elapsed());

    let (nrows, ncols) = binary.dimensions();
    println!("Incidence shape: {nrows} x {ncols}, {} non-zeros", binary.nnz());

    // Node degrees fall out of the binary matrix row-wise
    for node in 0..nrows {
        println!("node {node}: degree {}", binary.get_row(node).len());
    }

    // And the weighted matrix carries each edge's weight down its column
    for edge in 0..ncols {
        let col = weighted.get_col(edge);
        println!("edge {edge}: {} members, weight {}", col.len(), col[0]);
    }

    Ok(())
}
