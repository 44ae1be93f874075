// guardian-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contracts the pipeline needs from the outside world (MetricSource, AlertSink...)
pub mod ports;

// 2. Domain (the Quality Evaluation Pipeline)
// Check engines, scoring, test compilation, insight annotation.
// Depends on NOTHING else (no infra, no app).
pub mod domain;

// 3. Infrastructure (Adapters)
// Technical implementations (file source, Slack, Jira, OpenAI, config, fs)
// Depends on the Domain and the Ports.
pub mod infrastructure;

// 4. Application (Use Cases)
// Orchestration (evaluate_dashboard, run_pipeline, report rendering)
// Depends on the Domain, the Infra and the Ports.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// Lets callers import the main error easily: use guardian_core::GuardianError;
pub use error::GuardianError;
