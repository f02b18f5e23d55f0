use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use engine_common::Viewport;
use engine_input::{InputState, Key};
use engine_render::{Camera, DebugTextRenderer, ProjectionMode, Renderer};
use engine_runtime::{EditorState, RenderLoop};
use glam::Mat4;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "engine-cli", about = "Headless tools for the engine editor")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Hold keys for a number of ticks and print the final frame
    Simulate {
        /// Number of ticks to run
        #[arg(short, long, default_value = "1")]
        ticks: u64,
        /// Comma-separated keys held for every tick (e.g. "w,left")
        #[arg(short, long, value_delimiter = ',')]
        keys: Vec<String>,
        /// Use the orthographic projection
        #[arg(long)]
        ortho: bool,
        /// Framebuffer width
        #[arg(long, default_value_t = 1024, value_parser = clap::value_parser!(u32).range(1..))]
        width: u32,
        /// Framebuffer height
        #[arg(long, default_value_t = 768, value_parser = clap::value_parser!(u32).range(1..))]
        height: u32,
    },
    /// Print perspective and orthographic matrices for the given planes
    Projection {
        #[arg(long, default_value_t = 0.1)]
        near: f32,
        #[arg(long, default_value_t = 100.0)]
        far: f32,
        /// Vertical field of view in degrees
        #[arg(long, default_value_t = 60.0)]
        fov: f32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("engine-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", engine_render::crate_info());
            let camera = Camera::default();
            println!(
                "camera: fov={} near={} far={}",
                camera.field_of_view(),
                camera.near_clip_plane(),
                camera.far_clip_plane()
            );
        }
        Commands::Simulate {
            ticks,
            keys,
            ortho,
            width,
            height,
        } => {
            let mut input = InputState::new();
            for name in &keys {
                let key = Key::from_name(name)
                    .with_context(|| format!("unknown key '{name}'"))?;
                input.set_key(key, true);
            }

            let mut editor = EditorState::default();
            let mut render_loop = RenderLoop::default();
            render_loop.start()?;

            if ortho {
                editor.camera.set_projection_mode(ProjectionMode::Orthographic);
            }

            let viewport = Viewport::new(width, height);
            let mut last = None;
            for _ in 0..ticks {
                last = render_loop.tick(&mut editor, &input, viewport, |_| Vec::new());
            }

            let Some(frame) = last else {
                bail!("no frame produced (ticks = 0?)");
            };
            tracing::debug!(frames = render_loop.frame_count(), "simulation finished");
            print!("{}", DebugTextRenderer::new().render(&frame));
        }
        Commands::Projection { near, far, fov } => {
            if !(near > 0.0 && near < far) {
                bail!("clip planes must satisfy 0 < near < far (got near={near}, far={far})");
            }
            let mut camera = Camera::default();
            camera.set_near_clip_plane(near);
            camera.set_far_clip_plane(far);
            camera.set_field_of_view(fov);

            println!("perspective:");
            print_matrix(&camera.projection_matrix());
            camera.set_projection_mode(ProjectionMode::Orthographic);
            println!("orthographic:");
            print_matrix(&camera.projection_matrix());
        }
    }

    Ok(())
}

/// Row-major print of a column-major matrix.
fn print_matrix(m: &Mat4) {
    for row in 0..4 {
        let r = m.row(row);
        println!("  [{:>9.4} {:>9.4} {:>9.4} {:>9.4}]", r.x, r.y, r.z, r.w);
    }
}
