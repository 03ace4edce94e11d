//! Raciboard: client-side core of a RACI project-management application.
//!
//! This crate implements the stateful matrix editor that cross-references
//! projects, stages, tasks, members, and role assignments. Authentication,
//! persistence, HTTP routing, and presentation are external collaborators
//! reached only through request/response port contracts.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory fakes, etc.)
//!
//! # Modules
//!
//! - [`remote`]: Shared remote-call error taxonomy and timeout wrapper
//! - [`directory`]: Role catalog and project membership roster
//! - [`project`]: Project lifecycle, project requests, and notifications
//! - [`stage`]: Stage directory and selection state
//! - [`task`]: Task registry and deadline classification
//! - [`grid`]: The RACI assignment grid and matrix board orchestrator

#![feature(int_roundings)]

pub mod directory;
pub mod grid;
pub mod project;
pub mod remote;
pub mod stage;
pub mod task;
