extern crate engine;

use engine::engine::Engine;
use engine::render::to_text;

fn main() {
    let arg = std::env::args().nth(1);
    match Engine::from_arg(arg.as_deref()).and_then(|e| e.run_headless()) {
        Ok(board) => print!("{}", to_text(&board)),
        Err(e) => println!("{e}"),
    }
}
