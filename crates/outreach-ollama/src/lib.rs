// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ollama-backed draft generation for the outreach pipeline.
//!
//! Implements the [`Generator`](outreach_core::Generator) seam by spawning
//! `ollama run` per record, plus the best-effort model-unload lifecycle
//! hook and the never-failing response parser.

pub mod client;
pub mod parse;
pub mod prompt;
pub mod unload;

pub use client::OllamaGenerator;
pub use parse::{NO_SUBJECT_FALLBACK, parse_draft};
pub use prompt::render_prompt;
