//! Render a color wheel into a PAM image.
//!
//! Usage: `cargo run --example render -- wheel.pam [lightness] [hue-offset]`
//!
//! Run with `RUST_LOG=okwheel=debug` to see timings.

use std::fs::File;
use std::io::{BufWriter, Error, ErrorKind, Result, Write};

use okwheel::geometry::{Point, Size};
use okwheel::picker::PointerEvent;
use okwheel::{WheelPicker, WheelStyle};

fn parse_arg(arg: Option<String>, default: f64) -> Result<f64> {
    arg.map_or(Ok(default), |s| {
        s.parse()
            .map_err(|_| Error::new(ErrorKind::InvalidInput, format!("not a number: {}", s)))
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .ok_or_else(|| Error::new(ErrorKind::InvalidInput, "missing output path"))?;
    let lightness = parse_arg(args.next(), 0.7)?;
    let hue_offset = parse_arg(args.next(), 0.0)?;

    let style = WheelStyle::builder()
        .base_lightness(lightness)
        .hue_offset(hue_offset)
        .build();
    let size = Size::new(256.0, 256.0);
    let mut picker = WheelPicker::new();

    picker.paint(size, 1.0, &style);

    // Pick the color halfway between hole and rim at the top.
    let top = Point::new(127.5, 127.5 * 0.35);
    if picker.handle_pointer(size, PointerEvent::Pressed(top), &style) {
        log::debug!("repainting for marker at {:?}", top);
    }
    let frame = picker.paint(size, 1.0, &style);
    let image = frame.image;

    let mut file = BufWriter::new(File::create(&path)?);
    write!(
        file,
        "P7\nWIDTH {}\nHEIGHT {}\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n",
        image.width(),
        image.height()
    )?;
    file.write_all(&image.to_straight_rgba())?;
    file.flush()?;

    log::info!("wrote {}×{} wheel to {}", image.width(), image.height(), path);
    if let Some(selection) = picker.selection() {
        log::info!("picked {}", selection.info());
    }
    Ok(())
}
