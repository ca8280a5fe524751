//! The fixed catalog of diagrams.
//!
//! Each [`DiagramDefinition`] names one diagram, its output file stem, and a
//! function that declares its nodes and edges. [`iterations`] lists the
//! stages of the sample "hello world" system, from a bare mobile-to-app call
//! to an ingress-fronted Kubernetes deployment. Adding a diagram means
//! appending a definition to that list.

use std::fmt;

use archiflow_core::semantic::{NodeKind, Splines};

use crate::{
    config::AppConfig,
    error::ArchiflowError,
    structure::{Diagram, DiagramBuilder, GraphError},
};

/// Declares the content of one diagram.
pub type BuildFn = fn(&mut DiagramBuilder) -> Result<(), GraphError>;

/// A named diagram and the function that declares it.
#[derive(Clone, Copy)]
pub struct DiagramDefinition {
    name: &'static str,
    file_stem: &'static str,
    build: BuildFn,
}

impl fmt::Debug for DiagramDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagramDefinition")
            .field("name", &self.name)
            .field("file_stem", &self.file_stem)
            .finish_non_exhaustive()
    }
}

impl DiagramDefinition {
    pub const fn new(name: &'static str, file_stem: &'static str, build: BuildFn) -> Self {
        Self {
            name,
            file_stem,
            build,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn file_stem(&self) -> &'static str {
        self.file_stem
    }

    /// Builds a fresh [`Diagram`] from this definition.
    ///
    /// Output format, layout hints and style come from `config`; hints set by
    /// the definition itself take precedence.
    ///
    /// # Errors
    ///
    /// [`ArchiflowError::Config`] for an invalid style setting and
    /// [`ArchiflowError::Graph`] if the definition references an undeclared
    /// node.
    pub fn instantiate(&self, config: &AppConfig) -> Result<Diagram, ArchiflowError> {
        let background_color = config
            .style()
            .background_color()
            .map_err(ArchiflowError::Config)?;

        let mut builder = DiagramBuilder::new(self.name, self.file_stem);
        builder
            .format(config.output().format())
            .direction(config.layout().direction())
            .splines(config.layout().splines())
            .background_color(background_color)
            .font(config.style().font().map(str::to_string));

        (self.build)(&mut builder)?;
        Ok(builder.build())
    }
}

/// The evolution of the sample system, in presentation order.
pub fn iterations() -> Vec<DiagramDefinition> {
    vec![
        DiagramDefinition::new("Iteration-1", "iteration-1", bare_application),
        DiagramDefinition::new("Iteration0", "iteration0", grpc_front),
        DiagramDefinition::new("Iteration1", "iteration1", containerized),
        DiagramDefinition::new("Iteration2", "iteration2", kubernetes_services),
        DiagramDefinition::new("Iteration3", "iteration3", ingress_replicas),
        DiagramDefinition::new("Iteration3-1", "iteration3-1", ingress_pods_behind_services),
    ]
}

const HELLO_WORLD: &str = "HelloWorld";
const HELLO_PROTO_WORLD: &str = "HelloProtoWorld";
const HELLO_WORLD_IMAGE: &str = "hello-world";
const HELLO_PROTO_WORLD_IMAGE: &str = "hello-proto-world";
const INGRESS_HOST: &str = "hello.local";
const CLUSTER_LABEL: &str = "Kubernetes";

const PROTO_PODS: [&str; 3] = ["proto-pod-1", "proto-pod-2", "proto-pod-3"];
const HELLO_PODS: [&str; 3] = ["hello-pod-1", "hello-pod-2", "hello-pod-3"];

fn bare_application(builder: &mut DiagramBuilder) -> Result<(), GraphError> {
    builder.node("user", NodeKind::Mobile, "User")?;
    builder.node("app", NodeKind::Application, HELLO_WORLD)?;

    builder.edge("user", "app")?;
    Ok(())
}

fn grpc_front(builder: &mut DiagramBuilder) -> Result<(), GraphError> {
    builder.node("user", NodeKind::Mobile, "User")?;
    builder.node("proto", NodeKind::Application, HELLO_PROTO_WORLD)?;
    builder.node("hello", NodeKind::Application, HELLO_WORLD)?;

    builder.labeled_edge("user", "proto", "grpc")?;
    builder.labeled_edge("proto", "hello", "http")?;
    Ok(())
}

fn containerized(builder: &mut DiagramBuilder) -> Result<(), GraphError> {
    builder.node("user", NodeKind::Mobile, "User")?;
    builder.node("proto", NodeKind::Container, HELLO_PROTO_WORLD_IMAGE)?;
    builder.node("hello", NodeKind::Container, HELLO_WORLD_IMAGE)?;

    builder.labeled_edge("user", "proto", "grpc")?;
    builder.labeled_edge("proto", "hello", "http")?;
    Ok(())
}

fn kubernetes_services(builder: &mut DiagramBuilder) -> Result<(), GraphError> {
    builder.node("user", NodeKind::Mobile, "User")?;
    builder.node("proto-svc", NodeKind::Service, HELLO_PROTO_WORLD_IMAGE)?;
    builder.node("proto-pod", NodeKind::Pod, HELLO_PROTO_WORLD_IMAGE)?;
    builder.node("hello-svc", NodeKind::Service, HELLO_WORLD_IMAGE)?;
    builder.node("hello-pod", NodeKind::Pod, HELLO_WORLD_IMAGE)?;
    builder.cluster(
        CLUSTER_LABEL,
        &["proto-svc", "proto-pod", "hello-svc", "hello-pod"],
    )?;

    builder.labeled_edge("user", "proto-svc", "grpc")?;
    builder.edge("proto-svc", "proto-pod")?;
    builder.labeled_edge("proto-pod", "hello-svc", "http")?;
    builder.edge("hello-svc", "hello-pod")?;
    Ok(())
}

fn ingress_replicas(builder: &mut DiagramBuilder) -> Result<(), GraphError> {
    builder.node("user", NodeKind::Mobile, "User")?;
    builder.node("ingress", NodeKind::Ingress, INGRESS_HOST)?;
    builder.node("proto-svc", NodeKind::Service, HELLO_PROTO_WORLD_IMAGE)?;
    for key in PROTO_PODS {
        builder.node(key, NodeKind::Pod, HELLO_PROTO_WORLD_IMAGE)?;
    }
    builder.node("hello-svc", NodeKind::Service, HELLO_WORLD_IMAGE)?;
    for key in HELLO_PODS {
        builder.node(key, NodeKind::Pod, HELLO_WORLD_IMAGE)?;
    }
    declare_cluster(builder)?;

    builder.labeled_edge("user", "ingress", "grpc")?;
    builder.edge("ingress", "proto-svc")?;
    builder.fan_out("proto-svc", &PROTO_PODS)?;
    builder.fan_in(&PROTO_PODS, "hello-svc")?;
    builder.fan_out("hello-svc", &HELLO_PODS)?;
    Ok(())
}

fn ingress_pods_behind_services(builder: &mut DiagramBuilder) -> Result<(), GraphError> {
    builder.splines(Splines::Curved);

    builder.node("user", NodeKind::Mobile, "User")?;
    builder.node("ingress", NodeKind::Ingress, INGRESS_HOST)?;
    for key in PROTO_PODS {
        builder.node(key, NodeKind::Pod, HELLO_PROTO_WORLD_IMAGE)?;
    }
    builder.node("proto-svc", NodeKind::Service, HELLO_PROTO_WORLD_IMAGE)?;
    for key in HELLO_PODS {
        builder.node(key, NodeKind::Pod, HELLO_WORLD_IMAGE)?;
    }
    builder.node("hello-svc", NodeKind::Service, HELLO_WORLD_IMAGE)?;
    declare_cluster(builder)?;

    builder.labeled_edge("user", "ingress", "grpc")?;
    builder.fan_out("ingress", &PROTO_PODS)?;
    builder.fan_in(&PROTO_PODS, "proto-svc")?;
    builder.fan_out("proto-svc", &HELLO_PODS)?;
    builder.fan_in(&HELLO_PODS, "hello-svc")?;
    Ok(())
}

/// Everything but the user lives in the cluster.
fn declare_cluster(builder: &mut DiagramBuilder) -> Result<(), GraphError> {
    let mut members = vec!["ingress", "proto-svc", "hello-svc"];
    members.extend(PROTO_PODS);
    members.extend(HELLO_PODS);
    builder.cluster(CLUSTER_LABEL, &members)?;
    Ok(())
}
