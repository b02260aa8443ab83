//! artgrid: browse a paginated artwork collection in the terminal
//!
//! The library holds the fetch client, the pagination and selection state
//! machines and the ratatui front end; `main.rs` only wires them to the CLI.

pub mod api;
pub mod commands;
pub mod config;
pub mod http;
pub mod logging;
pub mod models;
pub mod pagination;
pub mod selection;
pub mod tui;

pub use api::{ArticClient, ArtworkSource, FetchError};
pub use config::{ArtgridConfig, TuiTheme};
pub use models::{ArtworkId, ArtworkRecord, PageResult};
pub use pagination::Pagination;
pub use selection::{SelectionError, SelectionSet};
