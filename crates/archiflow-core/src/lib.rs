//! Archiflow Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Archiflow
//! diagram pipeline. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Semantic**: The diagram vocabulary: node kinds and their glyphs,
//!   layout hints and output formats ([`semantic`] module)
//! - **Text**: Escaping for Graphviz quoted strings ([`text`] module)

pub mod color;
pub mod identifier;
pub mod semantic;
pub mod text;
