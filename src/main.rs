//! Generate CORDIC constants for the widths given on the command line

use std::io::Write;

use cordic_constgen::Command;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let res = Command::from_args(&args).and_then(|command| {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        command.run(&mut out)?;
        out.flush().map_err(Into::into)
    });

    if let Err(err) = res {
        log::error!("{}", err);
        std::process::exit(1)
    }
}
