use std::process::ExitCode;

use lib_icon::constants::{ICON_DEPTH, ICON_HEIGHT, ICON_WIDTH};
use lib_icon::{
    build_icon_grid, derive_selected_variant, render_preview, write_icon_file, EncodeError,
    IconOptions, OptionsError,
};
use log::error;
use thiserror::Error;

#[derive(Error, Debug)]
enum MkIconError {
    #[error("{0}")]
    Options(#[from] OptionsError),
    #[error("Failed to write icon: {0}")]
    Encode(#[from] EncodeError),
}

fn run() -> Result<(), MkIconError> {
    let options = IconOptions::from_args(std::env::args().skip(1))?;

    println!("Generating icon: {}", options.output.display());
    println!(
        "  Size: {}x{}, {} bitplanes ({} colors)",
        ICON_WIDTH,
        ICON_HEIGHT,
        ICON_DEPTH,
        1u32 << ICON_DEPTH
    );

    let grid = build_icon_grid();
    let selected = derive_selected_variant(&grid);

    println!("\nNormal state:");
    print!("{}", render_preview(&grid));
    println!("\nSelected state:");
    print!("{}", render_preview(&selected));

    let size = write_icon_file(&options.output, &grid, &selected, options.stack_size)?;
    println!("\nWrote {} bytes to {}", size, options.output.display());
    Ok(())
}

fn main() -> ExitCode {
    lib_icon::init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
