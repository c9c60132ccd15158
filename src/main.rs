// pose-render · AGPL-3.0 License - https://github.com/pose-render/pose-render

use clap::Parser;

use pose_render::cli::args::{Cli, Commands};
use pose_render::cli::render::run_render;

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Render(args) => run_render(args),
    }
}
