//! Diagram model and its builder.

use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use archiflow_core::{
    color::Color,
    identifier::Id,
    semantic::{Direction, NodeKind, OutputFormat, Splines},
};

use super::{
    GraphError,
    graph_base::{GraphInternal, MissingNode},
};

/// A declared node: its key, visual kind and display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: Id,
    kind: NodeKind,
    label: String,
}

impl Node {
    /// Get the node identifier (the key it was declared with).
    pub fn id(&self) -> Id {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A directed edge, optionally labeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source: Id,
    target: Id,
    label: Option<String>,
}

impl Edge {
    pub fn source(&self) -> Id {
        self.source
    }

    pub fn target(&self) -> Id {
        self.target
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// A labeled visual group of nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    label: String,
    members: Vec<Id>,
}

impl Cluster {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Member node ids, in the order they were listed.
    pub fn members(&self) -> &[Id] {
        &self.members
    }
}

/// A complete, immutable diagram ready to be rendered.
#[derive(Debug, Clone)]
pub struct Diagram {
    name: String,
    file_stem: String,
    format: OutputFormat,
    direction: Direction,
    splines: Splines,
    background_color: Option<Color>,
    font: Option<String>,
    graph: GraphInternal<Node, Edge>,
    clusters: Vec<Cluster>,
}

impl Diagram {
    /// Diagram title, e.g. `Iteration3-1`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Output file name without extension, e.g. `iteration3-1`.
    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    /// Output file name including the extension of [`Diagram::format`].
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.file_stem, self.format.extension())
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn splines(&self) -> Splines {
        self.splines
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn font(&self) -> Option<&str> {
        self.font.as_deref()
    }

    /// Nodes in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.nodes()
    }

    pub fn node(&self, id: Id) -> Option<&Node> {
        self.graph.node(id)
    }

    /// Edges in declaration order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph.edges()
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn nodes_count(&self) -> usize {
        self.graph.nodes_count()
    }

    pub fn edges_count(&self) -> usize {
        self.graph.edges_count()
    }

    /// Number of nodes of the given kind.
    pub fn count_of(&self, kind: NodeKind) -> usize {
        self.nodes().filter(|node| node.kind == kind).count()
    }

    /// Nodes that no edge points to, in declaration order.
    pub fn roots(&self) -> impl Iterator<Item = &Node> {
        self.graph.roots()
    }

    /// Targets of the edges leaving `id`, in edge order.
    pub fn successors(&self, id: Id) -> impl Iterator<Item = &Node> {
        self.graph.outgoing_nodes(id)
    }

    /// Sources of the edges entering `id`, in edge order.
    pub fn predecessors(&self, id: Id) -> impl Iterator<Item = &Node> {
        self.graph.incoming_nodes(id)
    }

    /// Returns the cluster a node was placed in, if any.
    pub fn cluster_of(&self, id: Id) -> Option<&Cluster> {
        self.clusters
            .iter()
            .find(|cluster| cluster.members.contains(&id))
    }
}

/// Incrementally declares the nodes, edges and clusters of one [`Diagram`].
///
/// Nodes are referred to by the key they were declared with. Referring to a
/// key that has not been declared yet fails immediately with
/// [`GraphError::UnknownNode`], and a failing call leaves the builder as it was.
///
/// # Examples
///
/// ```
/// use archiflow::{DiagramBuilder, semantic::NodeKind};
///
/// let mut builder = DiagramBuilder::new("Iteration-1", "iteration-1");
/// builder.node("user", NodeKind::Mobile, "User")?;
/// builder.node("app", NodeKind::Application, "HelloWorld")?;
/// builder.edge("user", "app")?;
///
/// let diagram = builder.build();
/// assert_eq!(diagram.edges_count(), 1);
/// # Ok::<(), archiflow::GraphError>(())
/// ```
#[derive(Debug)]
pub struct DiagramBuilder {
    name: String,
    file_stem: String,
    format: OutputFormat,
    direction: Direction,
    splines: Splines,
    background_color: Option<Color>,
    font: Option<String>,
    graph: GraphInternal<Node, Edge>,
    clusters: Vec<Cluster>,
    cluster_by_node: HashMap<Id, usize>,
}

impl DiagramBuilder {
    /// Start a diagram titled `name`, written to `file_stem` plus the format's
    /// extension.
    pub fn new(name: impl Into<String>, file_stem: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_stem: file_stem.into(),
            format: OutputFormat::default(),
            direction: Direction::default(),
            splines: Splines::default(),
            background_color: None,
            font: None,
            graph: GraphInternal::new(),
            clusters: Vec::new(),
            cluster_by_node: HashMap::new(),
        }
    }

    pub fn format(&mut self, format: OutputFormat) -> &mut Self {
        self.format = format;
        self
    }

    pub fn direction(&mut self, direction: Direction) -> &mut Self {
        self.direction = direction;
        self
    }

    /// Edge routing hint, handed to the layout backend unchanged.
    pub fn splines(&mut self, splines: Splines) -> &mut Self {
        self.splines = splines;
        self
    }

    pub fn background_color(&mut self, color: Option<Color>) -> &mut Self {
        self.background_color = color;
        self
    }

    pub fn font(&mut self, font: Option<String>) -> &mut Self {
        self.font = font;
        self
    }

    /// Declare a node under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if `key` was already declared in
    /// this diagram.
    pub fn node(
        &mut self,
        key: &str,
        kind: NodeKind,
        label: impl Into<String>,
    ) -> Result<Id, GraphError> {
        let id = Id::new(key);
        let node = Node {
            id,
            kind,
            label: label.into(),
        };
        trace!(node:?; "Declaring node");

        if !self.graph.add_node(id, node) {
            return Err(GraphError::DuplicateNode {
                diagram: self.name.clone(),
                node: key.to_string(),
            });
        }
        Ok(id)
    }

    /// Declare an unlabeled edge `source -> target`.
    pub fn edge(&mut self, source: &str, target: &str) -> Result<&mut Self, GraphError> {
        self.add_edges(&[source], &[target], None)
    }

    /// Declare an edge `source -> target` carrying `label`.
    pub fn labeled_edge(
        &mut self,
        source: &str,
        target: &str,
        label: &str,
    ) -> Result<&mut Self, GraphError> {
        self.add_edges(&[source], &[target], Some(label))
    }

    /// Declare one edge from `source` to each of `targets`, in order.
    pub fn fan_out(&mut self, source: &str, targets: &[&str]) -> Result<&mut Self, GraphError> {
        self.add_edges(&[source], targets, None)
    }

    /// Like [`DiagramBuilder::fan_out`], with every edge carrying `label`.
    pub fn labeled_fan_out(
        &mut self,
        source: &str,
        targets: &[&str],
        label: &str,
    ) -> Result<&mut Self, GraphError> {
        self.add_edges(&[source], targets, Some(label))
    }

    /// Declare one edge from each of `sources` to `target`, in order.
    pub fn fan_in(&mut self, sources: &[&str], target: &str) -> Result<&mut Self, GraphError> {
        self.add_edges(sources, &[target], None)
    }

    /// Group already-declared nodes under a labeled cluster.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] for an undeclared member and
    /// [`GraphError::AlreadyClustered`] for a node placed in a cluster before
    /// or listed twice in `members`.
    pub fn cluster(&mut self, label: &str, members: &[&str]) -> Result<&mut Self, GraphError> {
        let ids = members
            .iter()
            .map(|key| self.resolve(key))
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = HashSet::with_capacity(ids.len());
        for (key, id) in members.iter().zip(&ids) {
            let earlier = self
                .cluster_by_node
                .get(id)
                .map(|&idx| self.clusters[idx].label.as_str());
            let repeated = !seen.insert(*id);
            if let Some(cluster) = earlier.or(repeated.then_some(label)) {
                return Err(GraphError::AlreadyClustered {
                    diagram: self.name.clone(),
                    node: key.to_string(),
                    cluster: cluster.to_string(),
                });
            }
        }

        let cluster_idx = self.clusters.len();
        for id in &ids {
            self.cluster_by_node.insert(*id, cluster_idx);
        }
        self.clusters.push(Cluster {
            label: label.to_string(),
            members: ids,
        });
        Ok(self)
    }

    /// Finish the diagram.
    pub fn build(self) -> Diagram {
        debug!(
            diagram = self.name.as_str(),
            nodes_count = self.graph.nodes_count(),
            edges_count = self.graph.edges_count(),
            clusters_count = self.clusters.len();
            "Diagram built",
        );

        Diagram {
            name: self.name,
            file_stem: self.file_stem,
            format: self.format,
            direction: self.direction,
            splines: self.splines,
            background_color: self.background_color,
            font: self.font,
            graph: self.graph,
            clusters: self.clusters,
        }
    }

    fn resolve(&self, key: &str) -> Result<Id, GraphError> {
        let id = Id::new(key);
        if self.graph.contains_node(id) {
            Ok(id)
        } else {
            Err(self.unknown(key))
        }
    }

    fn unknown(&self, key: &str) -> GraphError {
        GraphError::UnknownNode {
            diagram: self.name.clone(),
            node: key.to_string(),
        }
    }

    /// Adds the cross product `sources x targets` in declaration order.
    /// Every endpoint is resolved before the first edge is added.
    fn add_edges(
        &mut self,
        sources: &[&str],
        targets: &[&str],
        label: Option<&str>,
    ) -> Result<&mut Self, GraphError> {
        let sources = sources
            .iter()
            .map(|key| self.resolve(key))
            .collect::<Result<Vec<_>, _>>()?;
        let targets = targets
            .iter()
            .map(|key| self.resolve(key))
            .collect::<Result<Vec<_>, _>>()?;

        for &source in &sources {
            for &target in &targets {
                let edge = Edge {
                    source,
                    target,
                    label: label.map(str::to_string),
                };
                let idx = self
                    .graph
                    .add_edge(source, target, edge)
                    .map_err(|MissingNode(id)| self.unknown(&id.as_string()))?;
                trace!(edge:? = self.graph.edge(idx); "Declared edge");
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder_with(nodes: &[(&str, NodeKind)]) -> DiagramBuilder {
        let mut builder = DiagramBuilder::new("Test", "test");
        for (key, kind) in nodes {
            builder.node(key, *kind, key.to_uppercase()).unwrap();
        }
        builder
    }

    fn edge_pairs(diagram: &Diagram) -> Vec<(String, String)> {
        diagram
            .edges()
            .map(|edge| (edge.source().as_string(), edge.target().as_string()))
            .collect()
    }

    #[test]
    fn test_node_and_edge() {
        let mut builder = builder_with(&[("user", NodeKind::Mobile), ("app", NodeKind::Application)]);
        builder.labeled_edge("user", "app", "http").unwrap();

        let diagram = builder.build();
        assert_eq!(diagram.nodes_count(), 2);
        assert_eq!(diagram.edges_count(), 1);

        let edge = diagram.edges().next().unwrap();
        assert_eq!(edge.source(), "user");
        assert_eq!(edge.target(), "app");
        assert_eq!(edge.label(), Some("http"));

        let user = diagram.node(Id::new("user")).unwrap();
        assert_eq!(user.kind(), NodeKind::Mobile);
        assert_eq!(user.label(), "USER");
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut builder = builder_with(&[("svc", NodeKind::Service)]);

        let err = builder.node("svc", NodeKind::Pod, "again").unwrap_err();
        assert_eq!(
            err,
            GraphError::DuplicateNode {
                diagram: "Test".to_string(),
                node: "svc".to_string()
            }
        );

        let diagram = builder.build();
        assert_eq!(diagram.count_of(NodeKind::Service), 1);
        assert_eq!(diagram.count_of(NodeKind::Pod), 0);
    }

    #[test]
    fn test_edge_to_undeclared_node_fails() {
        let mut builder = builder_with(&[("user", NodeKind::Mobile)]);

        let err = builder.edge("user", "nowhere").unwrap_err();
        assert_eq!(
            err,
            GraphError::UnknownNode {
                diagram: "Test".to_string(),
                node: "nowhere".to_string()
            }
        );
        assert_eq!(builder.build().edges_count(), 0);
    }

    #[test]
    fn test_node_declared_in_other_diagram_is_unknown() {
        let mut first = DiagramBuilder::new("First", "first");
        first.node("shared-key", NodeKind::Pod, "pod").unwrap();

        let mut second = DiagramBuilder::new("Second", "second");
        second.node("local", NodeKind::Pod, "pod").unwrap();

        assert!(matches!(
            second.edge("local", "shared-key"),
            Err(GraphError::UnknownNode { .. })
        ));
    }

    #[test]
    fn test_fan_out_preserves_order() {
        let mut builder = builder_with(&[
            ("src", NodeKind::Service),
            ("a", NodeKind::Pod),
            ("b", NodeKind::Pod),
            ("c", NodeKind::Pod),
        ]);
        builder.fan_out("src", &["a", "b", "c"]).unwrap();

        let diagram = builder.build();
        assert_eq!(
            edge_pairs(&diagram),
            vec![
                ("src".to_string(), "a".to_string()),
                ("src".to_string(), "b".to_string()),
                ("src".to_string(), "c".to_string()),
            ]
        );
    }

    #[test]
    fn test_fan_out_is_all_or_nothing() {
        let mut builder = builder_with(&[("src", NodeKind::Service), ("a", NodeKind::Pod)]);

        assert!(builder.fan_out("src", &["a", "missing"]).is_err());
        assert_eq!(builder.build().edges_count(), 0);
    }

    #[test]
    fn test_fan_in_preserves_order() {
        let mut builder = builder_with(&[
            ("p3", NodeKind::Pod),
            ("p1", NodeKind::Pod),
            ("svc", NodeKind::Service),
        ]);
        builder.fan_in(&["p1", "p3"], "svc").unwrap();

        let diagram = builder.build();
        assert_eq!(
            edge_pairs(&diagram),
            vec![
                ("p1".to_string(), "svc".to_string()),
                ("p3".to_string(), "svc".to_string()),
            ]
        );
        let preds: Vec<&str> = diagram
            .predecessors(Id::new("svc"))
            .map(Node::label)
            .collect();
        assert_eq!(preds, vec!["P1", "P3"]);
    }

    #[test]
    fn test_labeled_fan_out_labels_every_edge() {
        let mut builder = builder_with(&[
            ("lb", NodeKind::Ingress),
            ("x", NodeKind::Pod),
            ("y", NodeKind::Pod),
        ]);
        builder.labeled_fan_out("lb", &["x", "y"], "grpc").unwrap();

        let diagram = builder.build();
        assert!(diagram.edges().all(|edge| edge.label() == Some("grpc")));
    }

    #[test]
    fn test_empty_fan_out_adds_nothing() {
        let mut builder = builder_with(&[("src", NodeKind::Service)]);
        builder.fan_out("src", &[]).unwrap();

        assert_eq!(builder.build().edges_count(), 0);
    }

    #[test]
    fn test_parallel_edges_and_cycles_allowed() {
        let mut builder = builder_with(&[("a", NodeKind::Pod), ("b", NodeKind::Pod)]);
        builder.edge("a", "b").unwrap();
        builder.edge("a", "b").unwrap();
        builder.edge("b", "a").unwrap();

        let diagram = builder.build();
        assert_eq!(diagram.edges_count(), 3);
        assert_eq!(diagram.roots().count(), 0);
    }

    #[test]
    fn test_cluster() {
        let mut builder = builder_with(&[
            ("user", NodeKind::Mobile),
            ("svc", NodeKind::Service),
            ("pod", NodeKind::Pod),
        ]);
        builder.cluster("Kubernetes", &["svc", "pod"]).unwrap();

        let err = builder.cluster("Other", &["pod"]).unwrap_err();
        assert!(matches!(err, GraphError::AlreadyClustered { ref cluster, .. } if cluster == "Kubernetes"));
        assert!(matches!(
            builder.cluster("Ghosts", &["ghost"]),
            Err(GraphError::UnknownNode { .. })
        ));

        let diagram = builder.build();
        assert_eq!(diagram.clusters().len(), 1);
        assert_eq!(diagram.clusters()[0].members(), &[Id::new("svc"), Id::new("pod")]);
        assert_eq!(
            diagram.cluster_of(Id::new("pod")).map(Cluster::label),
            Some("Kubernetes")
        );
        assert!(diagram.cluster_of(Id::new("user")).is_none());
    }

    #[test]
    fn test_cluster_rejects_repeated_member() {
        let mut builder = builder_with(&[("svc", NodeKind::Service), ("pod", NodeKind::Pod)]);

        let err = builder.cluster("Kubernetes", &["pod", "svc", "pod"]).unwrap_err();
        assert_eq!(
            err,
            GraphError::AlreadyClustered {
                diagram: "Test".to_string(),
                node: "pod".to_string(),
                cluster: "Kubernetes".to_string(),
            }
        );

        builder.cluster("Kubernetes", &["svc", "pod"]).unwrap();
        let diagram = builder.build();
        assert_eq!(diagram.clusters().len(), 1);
        assert_eq!(diagram.clusters()[0].members().len(), 2);
    }

    #[test]
    fn test_attributes_and_file_name() {
        let mut builder = DiagramBuilder::new("Iteration3", "iteration3");
        builder
            .format(OutputFormat::Svg)
            .direction(Direction::TopToBottom)
            .splines(Splines::Curved)
            .font(Some("Helvetica".to_string()));

        let diagram = builder.build();
        assert_eq!(diagram.name(), "Iteration3");
        assert_eq!(diagram.file_name(), "iteration3.svg");
        assert_eq!(diagram.direction(), Direction::TopToBottom);
        assert_eq!(diagram.splines(), Splines::Curved);
        assert_eq!(diagram.font(), Some("Helvetica"));
        assert!(diagram.background_color().is_none());
    }
}
