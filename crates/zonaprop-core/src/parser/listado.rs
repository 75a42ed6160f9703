//! Index page parser for ZonaProp
//!
//! Enumerates the individual listing URLs of a paginated index page.

use scraper::Html;

use crate::client::BASE_URL;
use crate::error::{Result, ZonaPropError};
use crate::types::{Listado, PageKind};

use super::{selector, validar_pagina};

/// Parse a listing index page from ZonaProp HTML.
///
/// Only property postings are considered; development postings carry a
/// different `data-posting-type` and are skipped (a known gap). Each
/// posting's relative path resolves against the site base URL, in document
/// order.
///
/// # Arguments
/// * `html` - Raw HTML content of the index page
/// * `url` - URL (or local path) the page came from, used in diagnostics
pub fn parse_listado(html: &str, url: &str) -> Result<Listado> {
    let document = Html::parse_document(html);
    validar_pagina(&document, PageKind::Listado, url);

    let contenedor_sel = selector("div.list-card-container")?;
    let posting_sel = selector(r#"div[data-posting-type="PROPERTY"]"#)?;

    let contenedor = document
        .select(&contenedor_sel)
        .next()
        .ok_or_else(|| ZonaPropError::ElementNotFound("div.list-card-container".to_string()))?;

    let mut propiedades_url = Vec::new();
    for posting in contenedor.select(&posting_sel) {
        let ruta = posting.value().attr("data-to-posting").ok_or_else(|| {
            ZonaPropError::ElementNotFound("data-to-posting attribute".to_string())
        })?;
        propiedades_url.push(format!("{BASE_URL}{ruta}"));
    }

    Ok(Listado { propiedades_url })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGINA_LISTADO: &str = r#"
    <html><body id="BODY-LISTADO">
      <div class="list-card-container">
        <div data-posting-type="PROPERTY" data-to-posting="/a"></div>
        <div data-posting-type="DEVELOPMENT" data-to-posting="/torre-nueva"></div>
        <div data-posting-type="PROPERTY" data-to-posting="/b"></div>
        <div data-posting-type="PROPERTY" data-to-posting="/c"></div>
      </div>
    </body></html>
    "#;

    #[test]
    fn test_parse_listado_resolves_urls_in_order() {
        let listado = parse_listado(PAGINA_LISTADO, "http://example.test/listado.html").unwrap();
        assert_eq!(
            listado.propiedades_url,
            vec![
                "http://www.zonaprop.com.ar/a".to_string(),
                "http://www.zonaprop.com.ar/b".to_string(),
                "http://www.zonaprop.com.ar/c".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_listado_skips_development_postings() {
        let listado = parse_listado(PAGINA_LISTADO, "http://example.test/listado.html").unwrap();
        assert!(!listado
            .propiedades_url
            .iter()
            .any(|u| u.contains("torre-nueva")));
    }

    #[test]
    fn test_parse_listado_empty_container() {
        let html = r#"
        <html><body id="BODY-LISTADO">
          <div class="list-card-container"></div>
        </body></html>
        "#;
        let listado = parse_listado(html, "http://example.test/listado.html").unwrap();
        assert!(listado.propiedades_url.is_empty());
    }

    #[test]
    fn test_parse_listado_missing_container_errors() {
        let html = r#"<html><body id="BODY-LISTADO"></body></html>"#;
        let result = parse_listado(html, "http://example.test/listado.html");
        assert!(matches!(result, Err(ZonaPropError::ElementNotFound(_))));
    }

    #[test]
    fn test_parse_listado_missing_path_attribute_errors() {
        let html = r#"
        <html><body id="BODY-LISTADO">
          <div class="list-card-container">
            <div data-posting-type="PROPERTY"></div>
          </div>
        </body></html>
        "#;
        let result = parse_listado(html, "http://example.test/listado.html");
        assert!(matches!(result, Err(ZonaPropError::ElementNotFound(_))));
    }

    #[test]
    fn test_parse_listado_wrong_page_kind_still_parses() {
        // Validation mismatch only warns; parsing proceeds
        let html = r#"
        <html><body id="PROPERTY">
          <div class="list-card-container">
            <div data-posting-type="PROPERTY" data-to-posting="/solo"></div>
          </div>
        </body></html>
        "#;
        let listado = parse_listado(html, "http://example.test/raro.html").unwrap();
        assert_eq!(
            listado.propiedades_url,
            vec!["http://www.zonaprop.com.ar/solo".to_string()]
        );
    }
}
