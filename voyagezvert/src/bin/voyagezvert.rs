use clap::Parser;
use voyagezvert::app::VoyagezVertApp;

fn main() {
    env_logger::init();
    let args = VoyagezVertApp::parse();
    if let Err(e) = args.run() {
        log::error!("voyagezvert failed: {e}");
        panic!("{e}")
    }
}
