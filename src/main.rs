use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;

use rastly::{Color, Engine, FaceColor, Mesh, RasterizerType, RenderMode};

/// Render an OBJ mesh to a TGA image on the CPU.
#[derive(Parser)]
#[command(name = "rastly", version, about)]
struct Args {
    /// Path to the OBJ model to render
    model: PathBuf,

    /// Output image path
    #[arg(short, long, default_value = "out.tga")]
    output: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 1000)]
    width: i32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 1000)]
    height: i32,

    /// Draw triangle edges instead of filling faces
    #[arg(long)]
    wireframe: bool,

    /// Triangle fill algorithm
    #[arg(long, value_enum, default_value = "scanline")]
    fill: FillAlgorithm,

    /// Face color as RRGGBB hex
    #[arg(long, default_value = "FFFFFF")]
    color: String,

    /// Give every face a random color instead of --color
    #[arg(long)]
    random_colors: bool,

    /// Request top-to-bottom storage (sets bit 5 of the TGA descriptor)
    #[arg(long)]
    flip: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FillAlgorithm {
    Scanline,
    EdgeFunction,
}

impl From<FillAlgorithm> for RasterizerType {
    fn from(algorithm: FillAlgorithm) -> Self {
        match algorithm {
            FillAlgorithm::Scanline => RasterizerType::Scanline,
            FillAlgorithm::EdgeFunction => RasterizerType::EdgeFunction,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mesh = Mesh::from_obj(&args.model)
        .with_context(|| format!("failed to load model {}", args.model.display()))?;

    let hex = u32::from_str_radix(args.color.trim_start_matches("0x"), 16)
        .with_context(|| format!("invalid hex color '{}'", args.color))?;

    let mut engine = Engine::new(args.width, args.height)?;
    engine.set_render_mode(if args.wireframe {
        RenderMode::Wireframe
    } else {
        RenderMode::Filled
    });
    engine.set_rasterizer(args.fill.into());
    engine.set_face_color(if args.random_colors {
        FaceColor::Random
    } else {
        FaceColor::Uniform(Color::from_hex(hex, 0xFF))
    });

    engine
        .render(&mesh)
        .context("rasterization failed; do the model coordinates fit in [-1, 1]?")?;

    std::fs::write(&args.output, engine.to_tga_bytes(args.flip))
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(
        "rendered {} triangles to {}",
        mesh.triangle_count(),
        args.output.display()
    );
    Ok(())
}
