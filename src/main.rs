use engine::engine::Engine;
use engine::observer::TraceObserver;
use engine::render::to_text;
use tracing_subscriber::EnvFilter;

mod options;
mod ui;

use options::Options;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let options = match Options::parse_from_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => e.exit(),
    };
    tracing::debug!(?options, "parsed options");

    // 输入不合法时只提示，不启动搜索
    let engine = match Engine::from_arg(options.size.as_deref()) {
        Ok(engine) => engine,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };

    if options.headless {
        let mut observer = TraceObserver::new();
        let board = engine.run(&mut observer)?;
        print!("{}", to_text(&board));
    } else {
        ui::ui(engine, options.pacing)?;
    }
    Ok(())
}
