use argh::FromArgs;
use log::info;
use pixgrid_core::codec;
use pixgrid_core::grid::{HEIGHT, WIDTH};

#[derive(FromArgs)]
/// Renders a logo text file back to a black/white image.
struct Args {
    /// input text file path
    #[argh(option, short = 'i')]
    input_path: String,

    /// output image path
    #[argh(option, short = 'o')]
    output_path: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let text = std::fs::read_to_string(&args.input_path).expect("Failed to read input text file");
    let rows = codec::decode(&text);
    info!("Decoded {} rows", rows.len());
    let grid = codec::rows_to_grid(&rows);

    let luma: Vec<u8> = grid
        .cells()
        .iter()
        .map(|&on| if on { 0u8 } else { 255u8 })
        .collect();
    image::save_buffer(
        &args.output_path,
        &luma,
        WIDTH as u32,
        HEIGHT as u32,
        image::ColorType::L8,
    )
    .expect("Failed to save output image");
    info!("Wrote image to {}", args.output_path);
}
