// pose-render · AGPL-3.0 License - https://github.com/pose-render/pose-render

use clap::{Args, Parser, Subcommand};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Render Options:
    --source, -s <SOURCE>  Input image to annotate
    --poses, -p <POSES>    Pose file (JSON) with boxes and keypoints
    --output, -o <OUTPUT>  Output image path
    --save                 Save into runs/render[N]/ instead of --output
    --kpt-radius <N>       Joint marker radius in pixels [default: 4]
    --limb-width <N>       Skeleton line width in pixels [default: 2]
    --box-thickness <N>    Box outline thickness in pixels [default: 2]
    --conf <CONF>          Keypoint confidence threshold [default: 0.5]
    --labels               Draw per-person score labels
    --verbose              Show verbose output

Examples:
    pose-render render --source image.jpg --poses poses.json --output out.jpg
    pose-render render -s image.jpg -p poses.json --save
    pose-render render -s frame.png -p poses.json -o out.png --conf 0.25 --labels"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw pose skeletons and boxes onto an image
    Render(RenderArgs),
}

/// Arguments for the render command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Input image to annotate
    #[arg(short, long)]
    pub source: String,

    /// Pose file (JSON) with boxes and keypoints
    #[arg(short, long)]
    pub poses: String,

    /// Output image path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Save into runs/render[N]/ instead of --output
    #[arg(long, default_value_t = false)]
    pub save: bool,

    /// Joint marker radius in pixels
    #[arg(long, default_value_t = 4)]
    pub kpt_radius: i32,

    /// Skeleton line width in pixels
    #[arg(long, default_value_t = 2)]
    pub limb_width: u32,

    /// Box outline thickness in pixels
    #[arg(long, default_value_t = 2)]
    pub box_thickness: i32,

    /// Keypoint confidence threshold
    #[arg(long, default_value_t = 0.5)]
    pub conf: f32,

    /// Draw per-person score labels
    #[arg(long, default_value_t = false)]
    pub labels: bool,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_args_defaults() {
        let args = Cli::parse_from(["app", "render", "--source", "img.jpg", "--poses", "p.json"]);
        match args.command {
            Commands::Render(render_args) => {
                assert_eq!(render_args.source, "img.jpg");
                assert_eq!(render_args.poses, "p.json");
                assert!(render_args.output.is_none());
                assert!(!render_args.save);
                assert_eq!(render_args.kpt_radius, 4);
                assert_eq!(render_args.limb_width, 2);
                assert!((render_args.conf - 0.5).abs() < f32::EPSILON);
                assert!(!render_args.labels);
                assert!(render_args.verbose);
            }
        }
    }

    #[test]
    fn test_render_args_custom() {
        let args = Cli::parse_from([
            "app",
            "render",
            "-s",
            "frame.png",
            "-p",
            "poses.json",
            "-o",
            "out.png",
            "--conf",
            "0.25",
            "--limb-width",
            "3",
            "--verbose",
            "false",
        ]);
        match args.command {
            Commands::Render(render_args) => {
                assert_eq!(render_args.source, "frame.png");
                assert_eq!(render_args.output, Some("out.png".to_string()));
                assert!((render_args.conf - 0.25).abs() < f32::EPSILON);
                assert_eq!(render_args.limb_width, 3);
                assert!(!render_args.verbose);
            }
        }
    }
}
