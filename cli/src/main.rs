extern crate clap;
extern crate tinyvg;

mod commands;
mod render;
mod tga;

use clap::{App, Arg};
use commands::RenderCmd;

fn main() {
    let matches = App::new("TinyVG command-line renderer")
        .version("0.1")
        .about("Renders TinyVG vector graphics into TGA images")
        .arg(
            Arg::with_name("INPUT")
                .help("The TinyVG file to render ('-' reads standard input)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help(
                    "Sets the output file ('-' writes standard output). \
                     Defaults to the input path with a .tga extension",
                )
                .takes_value(true),
        )
        .arg(
            Arg::with_name("GEOMETRY")
                .short("g")
                .long("geometry")
                .value_name("WxH")
                .help(
                    "Sets the output size; either WIDTHxHEIGHT or a single \
                     integer for square output. Defaults to the image header",
                )
                .takes_value(true),
        )
        .arg(
            Arg::with_name("ANTI_ALIAS")
                .short("a")
                .long("anti-alias")
                .help("Renders with 4x super-sampling"),
        )
        .arg(
            Arg::with_name("SUPER_SAMPLING")
                .short("s")
                .long("super-sampling")
                .value_name("N")
                .help("Sets the super-sampling factor, between 1 and 32 (overrides -a)")
                .takes_value(true),
        )
        .get_matches();

    let cmd = match RenderCmd::from_matches(&matches) {
        Ok(cmd) => cmd,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    };

    if let Err(error) = render::run(&cmd) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
