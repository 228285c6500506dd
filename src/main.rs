mod cli;

fn main() {
    if let Err(err) = cli::run() {
        if let Some(usage) = err.downcast_ref::<cli::UsageError>() {
            eprintln!("Error: {}", usage.detail);
            println!("{}", usage);
        } else {
            eprintln!("Error: {:#}", err);
        }
        #[allow(clippy::exit)]
        std::process::exit(1);
    }
}
