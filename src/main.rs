use php_codegen::{config, demo, CONFIG};

fn main() {
    // Cargar variables de entorno desde .env si existe (antes de leer CONFIG)
    config::init_dotenv();
    eprintln!("[demo] config: pretty_json={} namespace={:?}", CONFIG.pretty_json, CONFIG.namespace);

    let report = match demo::run(&CONFIG) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("[demo] Error: {e}");
            std::process::exit(1);
        }
    };
    eprintln!("[demo] {}", report.function);
    eprintln!("[demo] {}", report.method);

    match demo::to_json(&report, &CONFIG) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("[demo] Error serializando: {e}");
            std::process::exit(1);
        }
    }
}
