use zonaprop_core::ZonaPropScraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let url = std::env::args().nth(1).unwrap_or_else(|| {
        "http://www.zonaprop.com.ar/departamentos-alquiler-palermo.html".to_string()
    });

    let scraper = ZonaPropScraper::new()?;

    println!("🔍 Buscando en {url}...\n");
    let busqueda = scraper.busqueda(&url).await?;
    println!(
        "{} resultados en {} páginas",
        busqueda.cantidad_de_resultados,
        busqueda.cantidad_de_paginas()
    );

    let listado = scraper.listado(&url).await?;
    println!("\n📋 Propiedades de la primera página:");
    for propiedad_url in &listado.propiedades_url {
        println!("  • {propiedad_url}");
    }

    if let Some(primera) = listado.propiedades_url.first() {
        println!("\n🏠 Primera propiedad:");
        let propiedad = scraper.propiedad(primera).await?;
        println!("  Dirección: {}", propiedad.direccion());
        println!("  Ubicación: {}", propiedad.ubicacion());
        if let Ok(ambientes) = propiedad.ambientes() {
            println!("  Ambientes: {ambientes}");
        }
        if let Some(alquiler) = propiedad.alquiler() {
            println!("  Alquiler: $ {alquiler}");
        }
        if let Some(expensas) = propiedad.expensas() {
            println!("  Expensas: {expensas:?}");
        }
    }

    if busqueda.cantidad_de_paginas() > 1 {
        println!("\n➡️  Página 2: {}", busqueda.listado_pagina(2)?);
    }

    Ok(())
}
