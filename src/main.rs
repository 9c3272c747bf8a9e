use bc03_json::config::Paths;
use bc03_json::convert::run;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    run(&Paths::default(), &mut std::io::stdout())
}
