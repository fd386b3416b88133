use argh::FromArgs;
use log::info;
use pixgrid_core::codec;
use pixgrid_core::grid::{HEIGHT, PixelGrid, WIDTH};

mod convert;

#[derive(FromArgs)]
/// Conversion options
struct Args {
    /// input image path
    #[argh(option, short = 'i')]
    input_path: String,

    /// output text file path
    #[argh(option, short = 'o')]
    output_path: String,

    /// brightness threshold, cells turn on below it
    #[argh(option, short = 't', default = "128")]
    threshold: u16,

    /// optional black/white preview image path
    #[argh(option, short = 'p')]
    preview_path: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let source = convert::load_source(&args.input_path);
    let (cells, preview) = convert::threshold_source(&source, args.threshold);
    let grid = PixelGrid::from_cells(cells);
    let text = codec::encode(&grid);

    std::fs::write(&args.output_path, &text).expect("Failed to write output text file");
    info!(
        "Wrote {} rows of logo text to {}",
        grid.rows().count(),
        args.output_path
    );

    if let Some(path) = &args.preview_path {
        image::save_buffer(
            path,
            &preview,
            WIDTH as u32,
            HEIGHT as u32,
            image::ColorType::Rgba8,
        )
        .expect("Failed to save preview image");
        info!("Wrote preview image to {}", path);
    }
}
