use config::Config;
use macrod_cli::{interactive, panic_handler, MacrodApp};

fn main() {
    let config = Config::initialize();

    panic_handler::setup_full_backtrace_for_dev(config.debug);
    panic_handler::install_panic_handler();

    log::init(config.debug);

    log::info!("Configuration: {:?}", config);

    let result = if config.interactive {
        interactive::run()
    } else if config.config.is_none() && !config.defaults.exists() {
        eprintln!("Nothing to do: pass --config FILE, or --interactive to inspect a device");
        std::process::exit(2);
    } else {
        MacrodApp::new().run()
    };

    if let Err(e) = result {
        let error_chain = e
            .chain()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join(": ");

        eprintln!("\nError: {}\n", error_chain);
        if config.debug {
            eprintln!("Debug backtrace:\n{:?}", e);
        }
        std::process::exit(1);
    }
}
