use std::process::ExitCode;


fn main() -> ExitCode {
    wspr_bands::frontend::cli::cli()
}
