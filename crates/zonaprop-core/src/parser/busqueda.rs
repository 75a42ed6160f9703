//! Search-results page parser for ZonaProp
//!
//! Extracts the total match count from a search landing page. Page count
//! and per-page URLs derive from it on the resulting value.

use scraper::Html;

use crate::error::{Result, ZonaPropError};
use crate::types::{PageKind, ResultadoBusqueda};

use super::{selector, texto, validar_pagina};

/// Parse a search landing page from ZonaProp HTML.
///
/// # Arguments
/// * `html` - Raw HTML content of the search page
/// * `url` - The search URL, kept on the result for page templating
pub fn parse_busqueda(html: &str, url: &str) -> Result<ResultadoBusqueda> {
    let document = Html::parse_document(html);
    validar_pagina(&document, PageKind::Listado, url);

    let titulo_sel = selector("h1.list-result-title")?;
    let b_sel = selector("b")?;

    let titulo = document
        .select(&titulo_sel)
        .next()
        .ok_or_else(|| ZonaPropError::ElementNotFound("h1.list-result-title".to_string()))?;
    let negrita = titulo
        .select(&b_sel)
        .next()
        .ok_or_else(|| ZonaPropError::ElementNotFound("h1.list-result-title b".to_string()))?;

    // Thousands come dot-separated ("1.234 resultados")
    let crudo = texto(negrita).replace('.', "");
    let cantidad_de_resultados = crudo
        .parse()
        .map_err(|_| ZonaPropError::Parse(format!("not a result count: '{crudo}'")))?;

    Ok(ResultadoBusqueda {
        url: url.to_string(),
        cantidad_de_resultados,
    })
}
