//! Property page parser for ZonaProp
//!
//! Extracts the normalized attributes of a single listing: feature-icon
//! fields, rental price, expenses, address, description and grouped
//! characteristics.

use std::collections::BTreeMap;

use scraper::Html;

use crate::error::{Result, ZonaPropError};
use crate::types::{Expensas, Informacion, PageKind, Propiedad, Valor};

use super::{selector, texto, validar_pagina};

/// Field names the computed fields always shadow; a feature icon with one of
/// these labels never survives the merge.
const CLAVES_RESERVADAS: [&str; 7] = [
    "Alquiler",
    "Expensas",
    "URL",
    "Direccion",
    "Ubicacion",
    "Descripcion",
    "Caracteristicas",
];

/// Parse a property page from ZonaProp HTML.
///
/// # Arguments
/// * `html` - Raw HTML content of the property page
/// * `url` - URL (or local path) the page came from, stored on the result
///
/// # Returns
/// * `Ok(Propiedad)` with the merged attributes
/// * `Err(ZonaPropError)` if a required markup node is missing or a value
///   fails coercion
pub fn parse_propiedad(html: &str, url: &str) -> Result<Propiedad> {
    let document = Html::parse_document(html);
    validar_pagina(&document, PageKind::Propiedad, url);

    let mut campos = extraer_campos(&document)?;
    let alquiler = extraer_alquiler(&document)?;
    let expensas = extraer_expensas(&document)?;
    let (direccion, ubicacion) = extraer_direccion(&document)?;
    let descripcion = extraer_descripcion(&document)?;
    let caracteristicas = extraer_caracteristicas(&document)?;

    // Fixed precedence: computed fields win over clashing feature labels
    for clave in CLAVES_RESERVADAS {
        campos.remove(clave);
    }

    Ok(Propiedad {
        url: url.to_string(),
        informacion: Informacion {
            alquiler,
            expensas,
            direccion,
            ubicacion,
            descripcion,
            caracteristicas,
            campos,
        },
    })
}

/// Rewrite singular labels the site sometimes uses to their plural form.
/// Any other label is unchanged.
fn reescribir_clave(clave: &str) -> String {
    match clave {
        "Baño" | "Ambiente" | "Dormitorio" => format!("{clave}s"),
        _ => clave.to_string(),
    }
}

/// Coerce a raw feature value according to its rewritten label.
/// Labels without a rule keep the raw text verbatim.
fn procesar_valor(clave: &str, crudo: &str) -> Result<Valor> {
    match clave {
        "Ambientes" | "Baños" | "Dormitorios" => Ok(Valor::Numero(parse_entero(crudo)?)),
        "Superficie total" | "Superficie cubierta" => Ok(Valor::Numero(quitar_m2(crudo)?)),
        "Antigüedad" => Ok(Valor::Numero(antiguedad(crudo)?)),
        _ => Ok(Valor::Texto(crudo.to_string())),
    }
}

fn parse_entero(entrada: &str) -> Result<i64> {
    entrada
        .trim()
        .parse()
        .map_err(|_| ZonaPropError::Parse(format!("not an integer: '{entrada}'")))
}

/// Strip the trailing m² marker and parse the prefix (`"120m²"` -> 120).
/// Input without the marker is out of contract and errors.
fn quitar_m2(entrada: &str) -> Result<i64> {
    let indice = entrada
        .find("m²")
        .ok_or_else(|| ZonaPropError::Parse(format!("missing m² marker: '{entrada}'")))?;
    parse_entero(&entrada[..indice])
}

/// "A estrenar" is a brand-new building, zero years old
fn antiguedad(entrada: &str) -> Result<i64> {
    if entrada == "A estrenar" {
        Ok(0)
    } else {
        parse_entero(entrada)
    }
}

/// Strip `$` and thousands-separator `.` and parse an ARS amount
fn parse_pesos(entrada: &str) -> Result<u32> {
    let limpio = entrada.replace(['$', '.'], "");
    limpio
        .trim()
        .parse()
        .map_err(|_| ZonaPropError::Parse(format!("not an ARS amount: '{entrada}'")))
}

/// Scan the feature icons: each `li.icon-feature` carries a label in its
/// `span` and a raw value in its `b` child.
fn extraer_campos(document: &Html) -> Result<BTreeMap<String, Valor>> {
    let item_sel = selector("li.icon-feature")?;
    let span_sel = selector("span")?;
    let b_sel = selector("b")?;

    let mut campos = BTreeMap::new();
    for item in document.select(&item_sel) {
        let etiqueta = item
            .select(&span_sel)
            .next()
            .ok_or_else(|| ZonaPropError::ElementNotFound("li.icon-feature span".to_string()))?;
        let negrita = item
            .select(&b_sel)
            .next()
            .ok_or_else(|| ZonaPropError::ElementNotFound("li.icon-feature b".to_string()))?;

        let clave = reescribir_clave(&texto(etiqueta));
        let valor = procesar_valor(&clave, &texto(negrita))?;
        campos.insert(clave, valor);
    }
    Ok(campos)
}

/// Rental price from the price blocks. Only blocks whose operation type is
/// ALQUILER count; a non-`$` price resolves to None (non-ARS currencies are
/// not supported). When several blocks match, the last one wins, matching
/// the site's observed layout.
fn extraer_alquiler(document: &Html) -> Result<Option<u32>> {
    let bloque_sel = selector("div.block-price.block-row")?;
    let operacion_sel = selector("div.price-operation")?;
    let precio_sel = selector("div.price-items span")?;

    let mut alquiler = None;
    for bloque in document.select(&bloque_sel) {
        let operacion = bloque
            .select(&operacion_sel)
            .next()
            .ok_or_else(|| ZonaPropError::ElementNotFound("div.price-operation".to_string()))?;
        if !texto(operacion).eq_ignore_ascii_case("ALQUILER") {
            continue;
        }
        let precio = bloque
            .select(&precio_sel)
            .next()
            .ok_or_else(|| ZonaPropError::ElementNotFound("div.price-items span".to_string()))?;
        let crudo = texto(precio);
        alquiler = if crudo.contains('$') {
            Some(parse_pesos(&crudo)?)
        } else {
            None
        };
    }
    Ok(alquiler)
}

/// Shared-expense fee. ARS amounts become `Expensas::Pesos`; anything else
/// keeps the raw block text. A page without the block yields None.
fn extraer_expensas(document: &Html) -> Result<Option<Expensas>> {
    let bloque_sel = selector("div.block-expensas.block-row")?;
    let span_sel = selector("span")?;

    let Some(bloque) = document.select(&bloque_sel).next() else {
        return Ok(None);
    };
    let span = bloque
        .select(&span_sel)
        .next()
        .ok_or_else(|| ZonaPropError::ElementNotFound("div.block-expensas span".to_string()))?;
    let crudo = texto(span);
    let expensas = if crudo.contains('$') {
        Expensas::Pesos(parse_pesos(&crudo)?)
    } else {
        Expensas::Texto(crudo)
    };
    Ok(Some(expensas))
}

/// Street address and secondary location from the title heading.
///
/// The bold child holds the address; the neighborhood sometimes comes
/// duplicated after a comma, so the address is cut at the first one. The
/// remaining comma segments of the full heading form the location.
fn extraer_direccion(document: &Html) -> Result<(String, String)> {
    let titulo_sel = selector("h2.title-location")?;
    let b_sel = selector("b")?;

    let titulo = document
        .select(&titulo_sel)
        .next()
        .ok_or_else(|| ZonaPropError::ElementNotFound("h2.title-location".to_string()))?;
    let negrita = titulo
        .select(&b_sel)
        .next()
        .ok_or_else(|| ZonaPropError::ElementNotFound("h2.title-location b".to_string()))?;

    let normalizada = negrita
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let direccion = normalizada
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();

    let completo = titulo.text().collect::<String>();
    let ubicacion = completo
        .split(',')
        .skip(1)
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(", ");

    Ok((direccion, ubicacion))
}

fn extraer_descripcion(document: &Html) -> Result<String> {
    let descripcion_sel = selector("div#verDatosDescripcion")?;
    let contenedor = document
        .select(&descripcion_sel)
        .next()
        .ok_or_else(|| ZonaPropError::ElementNotFound("div#verDatosDescripcion".to_string()))?;
    Ok(texto(contenedor))
}

/// Grouped characteristics: each general section yields a category (its
/// header div) mapped to the ordered texts of its list items.
fn extraer_caracteristicas(document: &Html) -> Result<BTreeMap<String, Vec<String>>> {
    let seccion_sel = selector("section.general-section.article-section")?;
    let div_sel = selector("div")?;
    let li_sel = selector("li")?;

    let mut caracteristicas = BTreeMap::new();
    for seccion in document.select(&seccion_sel) {
        let encabezado = seccion.select(&div_sel).next().ok_or_else(|| {
            ZonaPropError::ElementNotFound("section.general-section div".to_string())
        })?;
        let items = seccion.select(&li_sel).map(texto).collect::<Vec<_>>();
        caracteristicas.insert(texto(encabezado), items);
    }
    Ok(caracteristicas)
}
