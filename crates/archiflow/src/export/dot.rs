//! Lowering of a [`Diagram`] to the Graphviz DOT model.
//!
//! Layout hints are translated one-to-one into graph attributes; node kinds
//! become shape and fill attributes taken from their [`Glyph`]. Node keys are
//! emitted as quoted DOT ids so that any key is representable.
//!
//! [`Glyph`]: archiflow_core::semantic::Glyph

use dot_generator::{attr, id};
use dot_structures::{
    Attribute, Edge as DotEdge, EdgeTy, Graph, GraphAttributes, Id, Node as DotNode, NodeId,
    Stmt, Subgraph, Vertex,
};
use graphviz_rust::printer::{DotPrinter, PrinterContext};

use archiflow_core::{identifier, text::quote};

use crate::structure::{Diagram, Edge, Node};

/// Builds the DOT graph for `diagram`.
pub fn to_graph(diagram: &Diagram) -> Graph {
    let mut stmts = vec![Stmt::GAttribute(GraphAttributes::Graph(graph_attributes(
        diagram,
    )))];
    if let Some(font) = diagram.font() {
        stmts.push(Stmt::GAttribute(GraphAttributes::Node(vec![quoted(
            "fontname", font,
        )])));
        stmts.push(Stmt::GAttribute(GraphAttributes::Edge(vec![quoted(
            "fontname", font,
        )])));
    }

    stmts.extend(
        diagram
            .nodes()
            .filter(|node| diagram.cluster_of(node.id()).is_none())
            .map(|node| Stmt::Node(node_stmt(node))),
    );

    for (idx, cluster) in diagram.clusters().iter().enumerate() {
        let mut cluster_stmts = vec![
            Stmt::Attribute(quoted("label", cluster.label())),
            Stmt::Attribute(quoted("style", "rounded,dashed")),
        ];
        cluster_stmts.extend(
            cluster
                .members()
                .iter()
                .filter_map(|id| diagram.node(*id))
                .map(|node| Stmt::Node(node_stmt(node))),
        );
        stmts.push(Stmt::Subgraph(Subgraph {
            id: Id::Plain(format!("cluster_{idx}")),
            stmts: cluster_stmts,
        }));
    }

    stmts.extend(diagram.edges().map(|edge| Stmt::Edge(edge_stmt(edge))));

    Graph::DiGraph {
        id: Id::Escaped(quote(diagram.name())),
        strict: false,
        stmts,
    }
}

/// Prints a DOT graph as text.
pub fn print(graph: &Graph) -> String {
    graph.print(&mut PrinterContext::default())
}

/// Convenience for `print(&to_graph(diagram))`.
pub fn to_dot_string(diagram: &Diagram) -> String {
    print(&to_graph(diagram))
}

fn graph_attributes(diagram: &Diagram) -> Vec<Attribute> {
    let direction: &'static str = diagram.direction().into();
    let splines: &'static str = diagram.splines().into();

    let mut attributes = vec![
        quoted("label", diagram.name()),
        attr!("labelloc", "t"),
        attr!("fontsize", "20"),
        plain("rankdir", direction),
        plain("splines", splines),
        attr!("nodesep", "0.6"),
        attr!("ranksep", "0.75"),
    ];
    if let Some(color) = diagram.background_color() {
        attributes.push(quoted("bgcolor", &color.to_graphviz()));
    }
    if let Some(font) = diagram.font() {
        attributes.push(quoted("fontname", font));
    }
    attributes
}

fn node_stmt(node: &Node) -> DotNode {
    let glyph = node.kind().glyph();
    DotNode {
        id: node_id(node.id()),
        attributes: vec![
            quoted("label", &format!("{}\n({})", node.label(), glyph.caption())),
            plain("shape", glyph.shape()),
            quoted("style", "filled"),
            quoted("fillcolor", glyph.fill_color()),
        ],
    }
}

fn edge_stmt(edge: &Edge) -> DotEdge {
    DotEdge {
        ty: EdgeTy::Pair(
            Vertex::N(node_id(edge.source())),
            Vertex::N(node_id(edge.target())),
        ),
        attributes: edge
            .label()
            .map(|label| vec![quoted("label", label)])
            .unwrap_or_default(),
    }
}

fn node_id(id: identifier::Id) -> NodeId {
    NodeId(Id::Escaped(quote(&id.as_string())), None)
}

fn plain(key: &str, value: &str) -> Attribute {
    Attribute(Id::Plain(key.to_string()), Id::Plain(value.to_string()))
}

fn quoted(key: &str, value: &str) -> Attribute {
    Attribute(Id::Plain(key.to_string()), Id::Escaped(quote(value)))
}
