//! Main ZonaProp scraper API
//!
//! Combines the HTTP client with the page parsers. Each method performs at
//! most one fetch (or local file read) and hands the markup to the matching
//! parser; everything after that is in-memory.

use std::fs;

use crate::client::ZonaPropClient;
use crate::error::Result;
use crate::parser::{parse_busqueda, parse_listado, parse_propiedad};
use crate::types::{Listado, Propiedad, ResultadoBusqueda};

/// High-level scraper for zonaprop.com.ar
///
/// # Example
/// ```no_run
/// use zonaprop_core::ZonaPropScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = ZonaPropScraper::new()?;
///
///     let busqueda = scraper
///         .busqueda("http://www.zonaprop.com.ar/departamentos-alquiler-palermo.html")
///         .await?;
///     println!(
///         "{} resultados en {} páginas",
///         busqueda.cantidad_de_resultados,
///         busqueda.cantidad_de_paginas()
///     );
///
///     Ok(())
/// }
/// ```
pub struct ZonaPropScraper {
    client: ZonaPropClient,
}

impl ZonaPropScraper {
    /// Create a new scraper with the default client configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: ZonaPropClient::new()?,
        })
    }

    /// Create a new scraper with a custom client.
    ///
    /// Useful for testing or custom rate limits.
    pub fn with_client(client: ZonaPropClient) -> Self {
        Self { client }
    }

    /// Fetch and parse a single property page.
    pub async fn propiedad(&self, url: &str) -> Result<Propiedad> {
        let html = self.client.fetch(url).await?;
        parse_propiedad(&html, url)
    }

    /// Parse a previously saved property page from disk ("local" mode).
    /// The path doubles as the stored source URL.
    pub fn propiedad_local(&self, path: &str) -> Result<Propiedad> {
        let html = fs::read_to_string(path)?;
        parse_propiedad(&html, path)
    }

    /// Fetch and parse a listing index page.
    pub async fn listado(&self, url: &str) -> Result<Listado> {
        let html = self.client.fetch(url).await?;
        parse_listado(&html, url)
    }

    /// Parse a previously saved index page from disk.
    pub fn listado_local(&self, path: &str) -> Result<Listado> {
        let html = fs::read_to_string(path)?;
        parse_listado(&html, path)
    }

    /// Fetch and parse every property of an index, one request per listing,
    /// sequentially through the rate limiter. Any single failure aborts the
    /// whole batch.
    pub async fn propiedades(&self, listado: &Listado) -> Result<Vec<Propiedad>> {
        let mut propiedades = Vec::with_capacity(listado.propiedades_url.len());
        for url in &listado.propiedades_url {
            propiedades.push(self.propiedad(url).await?);
        }
        Ok(propiedades)
    }

    /// Fetch and parse a search landing page.
    pub async fn busqueda(&self, url: &str) -> Result<ResultadoBusqueda> {
        let html = self.client.fetch(url).await?;
        parse_busqueda(&html, url)
    }

    /// Parse a previously saved search page from disk. Page-URL templating
    /// will not produce fetchable URLs from a filesystem path.
    pub fn busqueda_local(&self, path: &str) -> Result<ResultadoBusqueda> {
        log::warn!("local search pages carry reduced guarantees (page templating needs a URL)");
        let html = fs::read_to_string(path)?;
        parse_busqueda(&html, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZonaPropError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PAGINA_PROPIEDAD: &str = r#"
    <html><body id="PROPERTY">
      <h2 class="title-location"><b>Av. Santa Fe 1234</b>, Palermo, Capital Federal</h2>
      <ul>
        <li class="icon-feature"><span>Ambientes</span><b>3</b></li>
        <li class="icon-feature"><span>Superficie total</span><b>80m²</b></li>
      </ul>
      <div class="block-price block-row">
        <div class="price-operation">ALQUILER</div>
        <div class="price-items"><span>$ 45.000</span></div>
      </div>
      <div id="verDatosDescripcion">Departamento luminoso.</div>
    </body></html>
    "#;

    fn pagina_listado(rutas: &[&str]) -> String {
        let postings = rutas
            .iter()
            .map(|r| format!(r#"<div data-posting-type="PROPERTY" data-to-posting="{r}"></div>"#))
            .collect::<String>();
        format!(
            r#"<html><body id="BODY-LISTADO"><div class="list-card-container">{postings}</div></body></html>"#
        )
    }

    #[test]
    fn test_scraper_creation() {
        assert!(ZonaPropScraper::new().is_ok());
    }

    #[tokio::test]
    async fn test_propiedad_fetches_and_parses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/depto.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGINA_PROPIEDAD))
            .mount(&server)
            .await;

        let scraper = ZonaPropScraper::new().unwrap();
        let url = format!("{}/depto.html", server.uri());
        let prop = scraper.propiedad(&url).await.unwrap();

        assert_eq!(prop.url, url);
        assert_eq!(prop.ambientes().unwrap(), 3);
        assert_eq!(prop.alquiler(), Some(45000));
    }

    #[tokio::test]
    async fn test_propiedad_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gone.html"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let scraper = ZonaPropScraper::new().unwrap();
        let result = scraper
            .propiedad(&format!("{}/gone.html", server.uri()))
            .await;
        assert!(matches!(result, Err(ZonaPropError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_listado_fetches_and_parses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/listado.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string(pagina_listado(&["/a", "/b"])))
            .mount(&server)
            .await;

        let scraper = ZonaPropScraper::new().unwrap();
        let listado = scraper
            .listado(&format!("{}/listado.html", server.uri()))
            .await
            .unwrap();
        assert_eq!(
            listado.propiedades_url,
            vec![
                "http://www.zonaprop.com.ar/a".to_string(),
                "http://www.zonaprop.com.ar/b".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_propiedades_eagerly_fetches_each_listing() {
        let server = MockServer::start().await;
        for ruta in ["/p1.html", "/p2.html"] {
            Mock::given(method("GET"))
                .and(path(ruta))
                .respond_with(ResponseTemplate::new(200).set_body_string(PAGINA_PROPIEDAD))
                .mount(&server)
                .await;
        }

        let scraper = ZonaPropScraper::new().unwrap();
        let listado = Listado {
            propiedades_url: vec![
                format!("{}/p1.html", server.uri()),
                format!("{}/p2.html", server.uri()),
            ],
        };
        let propiedades = scraper.propiedades(&listado).await.unwrap();
        assert_eq!(propiedades.len(), 2);
        assert_eq!(propiedades[0].url, listado.propiedades_url[0]);
        assert_eq!(propiedades[1].direccion(), "Av. Santa Fe 1234");
    }

    #[tokio::test]
    async fn test_busqueda_fetches_and_parses() {
        let server = MockServer::start().await;
        let body = r#"
        <html><body id="BODY-LISTADO">
          <h1 class="list-result-title"><b>1.234</b> departamentos</h1>
        </body></html>
        "#;
        Mock::given(method("GET"))
            .and(path("/alquiler.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let scraper = ZonaPropScraper::new().unwrap();
        let url = format!("{}/alquiler.html", server.uri());
        let busqueda = scraper.busqueda(&url).await.unwrap();

        assert_eq!(busqueda.cantidad_de_resultados, 1234);
        assert_eq!(busqueda.cantidad_de_paginas(), 62);
        assert_eq!(
            busqueda.listado_pagina(2).unwrap(),
            format!("{}/alquiler-pagina-2.html", server.uri())
        );
    }

    #[test]
    fn test_propiedad_local_reads_saved_page() {
        let dir = std::env::temp_dir().join("zonaprop-core-tests");
        fs::create_dir_all(&dir).unwrap();
        let ruta = dir.join("propiedad_local.html");
        fs::write(&ruta, PAGINA_PROPIEDAD).unwrap();

        let scraper = ZonaPropScraper::new().unwrap();
        let prop = scraper
            .propiedad_local(ruta.to_str().unwrap())
            .unwrap();
        assert_eq!(prop.url, ruta.to_str().unwrap());
        assert_eq!(prop.superficie_total().unwrap(), 80);
    }

    #[test]
    fn test_propiedad_local_missing_file() {
        let scraper = ZonaPropScraper::new().unwrap();
        let result = scraper.propiedad_local("/no/such/page.html");
        assert!(matches!(result, Err(ZonaPropError::Io(_))));
    }
}
