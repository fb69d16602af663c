use clap::Parser;
use demogeo::app::DemogeoApp;

fn main() {
    env_logger::init();
    let args = DemogeoApp::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running demogeo: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
