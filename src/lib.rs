//! manifest-ls: authoring assistance for integration manifests
//!
//! This crate provides the core functionality behind the manifest-ls
//! language server, helping authors of declarative integration manifests
//! (YAML documents describing how data is read from, written to and
//! subscribed from a provider).
//!
//! # Overview
//!
//! Three cooperating capabilities make up the core:
//!
//! - **Hover documentation**: position-aware resolution of the token under
//!   the cursor, backed by a static documentation registry
//! - **Quick fixes**: mapping externally supplied validation diagnostics to
//!   concrete textual repairs
//! - **Template generation**: synthesizing complete, valid example
//!   manifests from a catalog of known providers
//!
//! # Architecture
//!
//! The crate is organized around several key modules:
//!
//! - [`docs`]: the documentation registry for keys and providers
//! - [`catalog`]: provider templates (objects, fields, write capability)
//! - [`context`]: cursor context resolution over document text
//! - [`hover`], [`codeactions`], [`template`]: the three capabilities
//! - [`server`], [`cli`]: thin LSP and command-line hosts
//!
//! # Usage
//!
//! The core is plain synchronous functions over plain inputs, usable from
//! any embedding context:
//!
//! ```
//! use manifest_ls::config::Settings;
//! use manifest_ls::template;
//!
//! let settings = Settings::default();
//! let yaml = template::synthesize_complete("salesforce", &settings);
//! assert!(yaml.starts_with("specVersion: 1.0.0\n"));
//! ```

// Static data tables
pub mod catalog;
pub mod docs;

// Core capabilities
pub mod codeactions;
pub mod context;
pub mod hover;
pub mod template;

// Hosts
pub mod cli;
pub mod server;

// Configuration
pub mod config;

// Test utilities (only available in test builds)
#[cfg(test)]
pub mod test_utils;
