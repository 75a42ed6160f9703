//! HTML parsers for ZonaProp pages
//!
//! This module contains parsers for extracting data from ZonaProp HTML:
//! - `propiedad`: parse a single property page
//! - `listado`: parse a listing index page
//! - `busqueda`: parse a search-results page

pub mod busqueda;
pub mod listado;
pub mod propiedad;

// Re-export main parsing functions
pub use busqueda::parse_busqueda;
pub use listado::parse_listado;
pub use propiedad::parse_propiedad;

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ZonaPropError};
use crate::types::PageKind;

/// Parse a CSS selector, mapping failure into a parse error
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ZonaPropError::Parse(format!("invalid selector '{css}': {e:?}")))
}

/// Collected, trimmed text of an element
pub(crate) fn texto(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Read the page kind from the posting marker (the `<body>` element's id)
pub fn detectar_pagina(document: &Html) -> Option<PageKind> {
    let body_sel = Selector::parse("body").ok()?;
    let body = document.select(&body_sel).next()?;
    match body.value().attr("id")?.to_uppercase().as_str() {
        "PROPERTY" => Some(PageKind::Propiedad),
        "BODY-LISTADO" => Some(PageKind::Listado),
        _ => None,
    }
}

/// Warn when the posting marker does not match the expected page kind.
/// Non-fatal: callers may keep parsing mismatched markup at their own risk.
pub(crate) fn validar_pagina(document: &Html, esperada: PageKind, url: &str) {
    if detectar_pagina(document) != Some(esperada) {
        log::warn!("{url} does not look like a {esperada:?} page");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detectar_pagina_propiedad() {
        let document = Html::parse_document("<html><body id=\"PROPERTY\"></body></html>");
        assert_eq!(detectar_pagina(&document), Some(PageKind::Propiedad));
    }

    #[test]
    fn test_detectar_pagina_listado() {
        let document = Html::parse_document("<html><body id=\"BODY-LISTADO\"></body></html>");
        assert_eq!(detectar_pagina(&document), Some(PageKind::Listado));
    }

    #[test]
    fn test_detectar_pagina_case_insensitive() {
        let document = Html::parse_document("<html><body id=\"property\"></body></html>");
        assert_eq!(detectar_pagina(&document), Some(PageKind::Propiedad));
    }

    #[test]
    fn test_detectar_pagina_unknown_marker() {
        let document = Html::parse_document("<html><body id=\"HOME\"></body></html>");
        assert_eq!(detectar_pagina(&document), None);
    }

    #[test]
    fn test_detectar_pagina_missing_marker() {
        let document = Html::parse_document("<html><body></body></html>");
        assert_eq!(detectar_pagina(&document), None);
    }
}
