//! Suffix Tree Substring Search Example
//!
//! Demonstrates building a tree online and answering queries in O(pattern_length).
//!
//! ```bash
//! cargo run --example substring_search
//! ```

use ukkonen_index::{simd, OrderedChildren, SuffixTree};

fn main() {
    println!("=== Ukkonen Suffix Tree Demo ===\n");

    let text = b"bananarama";

    println!("Text ({} bytes): \"{}\"", text.len(), String::from_utf8_lossy(text));
    println!("Vector width: {}", simd::vector_width());

    let tree = match ukkonen_index::construct(text) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("build failed: {err}");
            return;
        }
    };

    println!("Nodes: {}, leaves: {}", tree.node_count(), tree.leaf_count());

    println!("\n--- Search Results ---\n");

    for query in ["nana", "rama", "apple", "ban", "ama$"] {
        let found = tree.search(query.as_bytes());
        println!("  \"{}\" -> {}", query, if found { "found" } else { "not found" });
    }

    // Same tree with BTreeMap child tables
    println!("\n--- Ordered Child Tables ---\n");
    if let Ok(ordered) = SuffixTree::<OrderedChildren>::construct(text) {
        println!("  nodes: {} (linear: {})", ordered.node_count(), tree.node_count());
    }

    println!("\n--- Tree Structure ---\n");
    println!("Root (Node 0)");
    for edge in tree.edges() {
        println!(
            "{}Edge [{},{}]: {} (Node {})",
            "  ".repeat(edge.depth),
            edge.start,
            edge.end,
            String::from_utf8_lossy(edge.label),
            edge.node
        );
    }
}
