//! # trilex-client
//!
//! The collaborators around the [`trilex`] recovery core: an HTTP client for
//! an Ollama-style language-model endpoint, a dictionary blob store, and the
//! sequential batch orchestrator that wires them together.
//!
//! ```rust,no_run
//! use trilex_client::{BatchOptions, ClientConfig, HttpLlmClient, MemoryStore};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = HttpLlmClient::new(ClientConfig::default())?;
//! let store = MemoryStore::new();
//!
//! let report = trilex_client::process_text(
//!     &llm,
//!     &store,
//!     "academic",
//!     "The dominant paradigm shifted toward synthesis.",
//!     &BatchOptions::default(),
//! )
//! .await?;
//!
//! println!("{} words saved, {} failed", report.processed.len(), report.failed.len());
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod client;
pub mod connection;
pub mod error;
pub mod storage;

pub use batch::{process_text, BatchOptions, BatchReport};
pub use client::{ApiStyle, ClientConfig, HttpLlmClient};
pub use connection::ConnectionState;
pub use error::{ClientError, StoreError};
pub use storage::{Dictionary, DictionaryStore, MemoryStore};
