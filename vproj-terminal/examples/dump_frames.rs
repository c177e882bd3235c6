/// Example: Project a cube through a frame table and print the 2D points
///
/// Usage: cargo run --example dump_frames -- [frames.txt] [--focal F] [--frames N]
use std::env;
use vproj_core::{rt_multiframe, VertexBuffer, Wireframe};
use vproj_terminal::{load_frames, AppError, PlayerConfig};

fn main() -> Result<(), AppError> {
    let config = PlayerConfig::from_args(env::args().skip(1))?;
    let frames = load_frames(&config)?;

    let cube = Wireframe::cube(2.0);
    let vertices = VertexBuffer::repeat(&cube.vertices, frames.len())?;
    let projected = rt_multiframe(&vertices.to_flat(), &frames, config.focal_length)?;

    println!(
        "# {} frames x {} vertices, f = {}",
        projected.n_frames(),
        projected.vertices_per_frame(),
        config.focal_length
    );
    for (i, frame) in projected.frames().enumerate() {
        let row: Vec<String> = frame
            .iter()
            .map(|p| format!("({:.4}, {:.4})", p.x, p.y))
            .collect();
        println!("{i:4}: {}", row.join(" "));
    }

    Ok(())
}
