#![warn(missing_docs)]
//! Core models and ports for selecting, from a catalog of indivisible assets,
//! the subset that maximizes realized profit under a hard budget ceiling.
//!
//! This crate carries no algorithms of its own. It defines the data that flows
//! into an optimizer ([`models::Catalog`], [`models::Budget`]), the data that
//! flows out ([`models::Portfolio`]), and the [`ports::PortfolioOptimizer`]
//! capability that every optimizer implementation provides.

/// Domain models for the asset-selection problem.
///
/// Catalogs and budgets are constructed once per run and never mutated; a
/// portfolio is created fresh by each optimizer invocation and owned by the
/// caller. None of these types hold references back into one another.
pub mod models;

/// Interface traits for the asset-selection problem.
///
/// Optimizer implementations live in other crates and plug in here, so that
/// callers can choose a strategy without inspecting concrete types.
pub mod ports;
