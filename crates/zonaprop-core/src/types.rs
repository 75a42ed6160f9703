//! Data types for the ZonaProp scraper
//!
//! This module contains the core data structures used throughout the library.
//! All types implement Serialize and Deserialize for JSON compatibility.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ZonaPropError};

/// Number of results ZonaProp serves per search page
pub const RESULTADOS_POR_PAGINA: u32 = 20;

/// Page kind as tagged by the site's posting marker (the `<body>` id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageKind {
    /// A single property page (`PROPERTY`)
    Propiedad,
    /// An index or search-results page (`BODY-LISTADO`)
    Listado,
}

/// Value of a scraped feature-icon field
///
/// Labels with a known coercion rule become `Numero`; everything else
/// passes through verbatim as `Texto`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Valor {
    Numero(i64),
    Texto(String),
}

impl Valor {
    /// Numeric value, if this field was coerced to one
    pub fn as_numero(&self) -> Option<i64> {
        match self {
            Valor::Numero(n) => Some(*n),
            Valor::Texto(_) => None,
        }
    }

    /// Raw text value, if this field passed through uncoerced
    pub fn as_texto(&self) -> Option<&str> {
        match self {
            Valor::Numero(_) => None,
            Valor::Texto(t) => Some(t),
        }
    }
}

/// Monthly shared-expense fee
///
/// The site shows either an ARS amount (`$ 12.000`) or free text; the two
/// cases are kept apart instead of overloading one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expensas {
    /// Amount in pesos, thousands separators stripped
    Pesos(u32),
    /// Whatever the block said when it was not a `$` amount
    Texto(String),
}

/// Normalized attributes of a single listing, built once at parse time
///
/// Well-known computed fields live as struct fields; free-form feature-icon
/// fields (keyed by rewritten label) stay in the `campos` bucket. Computed
/// fields always win over a feature field with a clashing name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Informacion {
    /// Rental price in pesos; None when no ALQUILER block matched or the
    /// price was not in `$` (non-ARS currencies are not supported)
    pub alquiler: Option<u32>,
    /// Shared-expense fee; None when the page has no expense block
    pub expensas: Option<Expensas>,
    /// Street address, first comma-segment of the title heading
    pub direccion: String,
    /// Remaining comma-segments of the title heading, rejoined
    pub ubicacion: String,
    /// Free-text description
    pub descripcion: String,
    /// Grouped characteristics: category name to ordered feature texts
    pub caracteristicas: BTreeMap<String, Vec<String>>,
    /// Feature-icon fields by rewritten label; unknown labels pass through
    pub campos: BTreeMap<String, Valor>,
}

/// A parsed property listing: the source URL plus its extracted attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Propiedad {
    pub url: String,
    pub informacion: Informacion,
}

impl Propiedad {
    /// Look up a numeric feature field by its (rewritten) label
    fn campo_numero(&self, nombre: &str) -> Result<i64> {
        let valor = self
            .informacion
            .campos
            .get(nombre)
            .ok_or_else(|| ZonaPropError::MissingField(nombre.to_string()))?;
        valor
            .as_numero()
            .ok_or_else(|| ZonaPropError::Parse(format!("field '{nombre}' is not numeric")))
    }

    /// Look up a free-text feature field by its label
    fn campo_texto(&self, nombre: &str) -> Result<&str> {
        let valor = self
            .informacion
            .campos
            .get(nombre)
            .ok_or_else(|| ZonaPropError::MissingField(nombre.to_string()))?;
        valor
            .as_texto()
            .ok_or_else(|| ZonaPropError::Parse(format!("field '{nombre}' is not text")))
    }

    pub fn ambientes(&self) -> Result<i64> {
        self.campo_numero("Ambientes")
    }

    pub fn antiguedad(&self) -> Result<i64> {
        self.campo_numero("Antigüedad")
    }

    pub fn superficie_total(&self) -> Result<i64> {
        self.campo_numero("Superficie total")
    }

    pub fn superficie_cubierta(&self) -> Result<i64> {
        self.campo_numero("Superficie cubierta")
    }

    pub fn banios(&self) -> Result<i64> {
        self.campo_numero("Baños")
    }

    pub fn dormitorios(&self) -> Result<i64> {
        self.campo_numero("Dormitorios")
    }

    pub fn disposicion(&self) -> Result<&str> {
        self.campo_texto("Disposición")
    }

    pub fn orientacion(&self) -> Result<&str> {
        self.campo_texto("Orientación")
    }

    pub fn estado(&self) -> Result<&str> {
        self.campo_texto("Estado del inmueble")
    }

    pub fn luminosidad(&self) -> Result<&str> {
        self.campo_texto("Luminosidad")
    }

    pub fn alquiler(&self) -> Option<u32> {
        self.informacion.alquiler
    }

    pub fn expensas(&self) -> Option<&Expensas> {
        self.informacion.expensas.as_ref()
    }

    pub fn direccion(&self) -> &str {
        &self.informacion.direccion
    }

    pub fn ubicacion(&self) -> &str {
        &self.informacion.ubicacion
    }

    pub fn descripcion(&self) -> &str {
        &self.informacion.descripcion
    }

    pub fn caracteristicas(&self) -> &BTreeMap<String, Vec<String>> {
        &self.informacion.caracteristicas
    }

    /// Contact data needs the site's JavaScript; extraction is not supported.
    pub fn contacto(&self) -> Result<String> {
        Err(ZonaPropError::NotSupported("contacto"))
    }

    /// Map coordinates need the site's JavaScript; extraction is not supported.
    pub fn ubicacion_mapa(&self) -> Result<(f64, f64)> {
        Err(ZonaPropError::NotSupported("ubicacion_mapa"))
    }
}

/// Listing URLs enumerated from an index page, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listado {
    /// Absolute listing URLs, one per property posting
    pub propiedades_url: Vec<String>,
}

/// A search landing page: its URL plus the total match count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultadoBusqueda {
    pub url: String,
    pub cantidad_de_resultados: u32,
}

impl ResultadoBusqueda {
    /// Number of result pages, at 20 results per page
    pub fn cantidad_de_paginas(&self) -> u32 {
        self.cantidad_de_resultados.div_ceil(RESULTADOS_POR_PAGINA)
    }

    /// URL of result page `n`, derived from the search URL by suffix
    /// templating (`listado.html` becomes `listado-pagina-n.html`)
    pub fn listado_pagina(&self, n: u32) -> Result<String> {
        let base = self
            .url
            .strip_suffix(".html")
            .ok_or_else(|| ZonaPropError::InvalidUrl(self.url.clone()))?;
        Ok(format!("{base}-pagina-{n}.html"))
    }
}
