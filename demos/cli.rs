use clap::Parser;
use image::RgbImage;
use mmcq::{Palette, PaletteSize, quantize};
use palette::{Srgb, cast, cast::IntoComponents as _};
use std::path::PathBuf;

#[derive(Parser)]
pub struct Options {
    #[arg(short, long, default_value_t = PaletteSize::MAX, value_parser = parse_palette_size)]
    k: PaletteSize,

    #[arg(long)]
    verbose: bool,

    input: PathBuf,

    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_palette_size(s: &str) -> Result<PaletteSize, String> {
    let value: u16 = s.parse().map_err(|e| format!("{e}"))?;
    value.try_into().map_err(|e| format!("{e}"))
}

fn main() {
    let Options { k, verbose, input, output } = Options::parse();

    macro_rules! log {
        ($name: literal, $val: expr) => {
            if verbose {
                let time = std::time::Instant::now();
                let value = $val;
                println!("{} took {}ms", $name, time.elapsed().as_millis());
                value
            } else {
                $val
            }
        };
    }

    let image = log!("read image", image::open(input).unwrap()).into_rgb8();
    let pixels: &[Srgb<u8>] = cast::from_component_slice(image.as_raw());

    let color_map = log!("quantization", quantize(pixels, k.as_u16()).unwrap());

    if let Some(output) = output {
        let mut quantized = pixels.to_vec();
        log!("remapping", color_map.map_slice_in_place(&mut quantized));

        let (width, height) = image.dimensions();
        let image = RgbImage::from_raw(width, height, quantized.into_components()).unwrap();
        log!("write image", image.save(output).unwrap())
    } else {
        print_palette(color_map.palette())
    }
}

fn print_palette(palette: &Palette<Srgb<u8>>) {
    println!("{}", palette.map_ref(|color| format!("{color:X}")).join(" "));
}
