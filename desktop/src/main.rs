use argh::FromArgs;
use log::info;
use pixgrid_core::editor::Editor;

use crate::editor_window::EditorWindow;

mod convert;
mod editor_window;

#[derive(FromArgs)]
/// Interactive 112x38 logo grid editor.
///
/// Drag with the left mouse button to paint cells; the first cell under the
/// press decides whether the stroke draws or erases. Up/Down adjust the
/// threshold when an image was loaded, C clears the grid, S saves the text
/// representation, Escape quits.
struct Args {
    /// input image to threshold
    #[argh(option, short = 'i')]
    image: Option<String>,

    /// input text file with byte rows
    #[argh(option)]
    text: Option<String>,

    /// brightness threshold, cells turn on below it
    #[argh(option, short = 't', default = "128")]
    threshold: u16,

    /// path the text representation is written to on save
    #[argh(option, short = 'o')]
    output: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let mut editor = Editor::new();
    let mut threshold = args.threshold;

    let source = args.image.as_deref().map(convert::load_source);
    if let Some(source) = &source {
        let (cells, _) = convert::threshold_source(source, threshold);
        editor.load_cells(cells);
    } else if let Some(path) = &args.text {
        let text = std::fs::read_to_string(path).expect("Failed to read input text file");
        editor.apply_text(&text);
    }

    let mut window = EditorWindow::new();
    while window.is_open() {
        if window.left_button_down() {
            if let Some((x, y)) = window.cell_under_mouse() {
                if editor.is_painting() {
                    editor.pointer_over(x, y);
                } else {
                    editor.pointer_down(x, y);
                }
            }
        } else if editor.is_painting() {
            editor.pointer_up();
        }

        if let Some(source) = &source {
            let delta = window.threshold_delta();
            if delta != 0 {
                threshold = threshold.saturating_add_signed(delta);
                info!("threshold: {}", threshold);
                let (cells, _) = convert::threshold_source(source, threshold);
                editor.load_cells(cells);
            }
        }

        if window.clear_requested() {
            editor.clear();
        }
        if window.save_requested() {
            save(&editor, args.output.as_deref());
        }

        window.render(editor.grid());
    }

    save(&editor, args.output.as_deref());
}

fn save(editor: &Editor, path: Option<&str>) {
    match path {
        Some(path) => {
            std::fs::write(path, editor.text()).expect("Failed to write output text file");
            info!("Wrote logo text to {}", path);
        }
        None => println!("{}", editor.text()),
    }
}
