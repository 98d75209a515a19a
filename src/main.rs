use anyhow::Result;
use clap::Parser;
use etcd_perf_report::cli;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let is_silent = args.silent;

    match cli::run(args) {
        Ok(()) => Ok(()),
        Err(e) => {
            if is_silent {
                println!("{}", e);
                std::process::exit(1);
            } else {
                Err(e)
            }
        }
    }
}
