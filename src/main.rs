use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().filter_or("INTVEC_LOG", "warn"));
    int_vector::init();

    let stdout = io::stdout();
    match int_vector::demo::run_demo(&mut stdout.lock()) {
        Ok(indices) => {
            log::debug!("demo finished: {:?}", indices);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("demo failed ({}): {}", e.category(), e);
            ExitCode::FAILURE
        }
    }
}
