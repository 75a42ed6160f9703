//! ZonaProp Scraper Core Library
//!
//! This crate extracts structured real-estate data from ZonaProp
//! (zonaprop.com.ar) HTML pages.
//!
//! # Features
//! - Parse a property page into normalized, typed attributes
//! - Enumerate listing URLs from a paginated index page
//! - Read result counts and generate page URLs from a search page
//! - Rate-limited HTTP client to avoid hammering the site

pub mod client;
pub mod error;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, RateLimiter, ZonaPropClient, BASE_URL};
pub use error::{Result, ZonaPropError};
pub use scraper::ZonaPropScraper;
pub use types::{
    Expensas, Informacion, Listado, PageKind, Propiedad, ResultadoBusqueda, Valor,
    RESULTADOS_POR_PAGINA,
};
