use clap::Parser;
use objmesh::load_obj;
use std::process::ExitCode;

/// Parse a Wavefront OBJ file and print a summary of its contents.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the .obj file
    path: String,

    /// Also print every material's triangle bucket
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let model = match load_obj(&args.path) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "{}: {} object(s), {} material(s)",
        args.path,
        model.objects.len(),
        model.materials.len()
    );
    for object in &model.objects {
        println!(
            "  {}: {} vertices, {} triangles, smooth shading {}",
            object.name,
            object.vertices.len(),
            object.faces.len(),
            if object.smooth_shading { "on" } else { "off" }
        );
        if args.verbose {
            let mut buckets: Vec<_> = object.material_faces.iter().collect();
            buckets.sort_by_key(|(name, _)| name.as_str());
            for (name, faces) in buckets {
                println!("    {}: {} triangle(s)", name, faces.len());
            }
        }
    }
    ExitCode::SUCCESS
}
