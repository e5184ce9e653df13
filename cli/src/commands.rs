use clap::ArgMatches;

use std::path::PathBuf;

/// Where the TinyVG bytes come from.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

/// Where the rendered image goes.
#[derive(Clone, Debug, PartialEq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

/// The fully resolved command-line invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderCmd {
    pub input: Input,
    pub output: Output,
    /// Output size in pixels; `None` inherits the image header.
    pub geometry: Option<(u32, u32)>,
    pub super_sampling: u32,
}

impl RenderCmd {
    pub fn from_matches(matches: &ArgMatches<'_>) -> Result<RenderCmd, String> {
        let input = match matches.value_of("INPUT") {
            Some("-") => Input::Stdin,
            Some(path) => Input::File(PathBuf::from(path)),
            None => return Err("No input file".to_string()),
        };

        let output = match matches.value_of("OUTPUT") {
            Some("-") => Output::Stdout,
            Some(path) => Output::File(PathBuf::from(path)),
            None => match &input {
                Input::File(path) => Output::File(path.with_extension("tga")),
                Input::Stdin => {
                    return Err("Reading from standard input requires --output".to_string());
                }
            },
        };

        let geometry = match matches.value_of("GEOMETRY") {
            Some(text) => Some(parse_geometry(text)?),
            None => None,
        };

        let super_sampling = match matches.value_of("SUPER_SAMPLING") {
            Some(text) => match text.parse::<u32>() {
                Ok(n) if (1..=32).contains(&n) => n,
                _ => {
                    return Err(format!(
                        "Invalid super-sampling factor '{text}': expected an integer \
                         between 1 and 32"
                    ));
                }
            },
            None => {
                if matches.is_present("ANTI_ALIAS") {
                    4
                } else {
                    1
                }
            }
        };

        Ok(RenderCmd {
            input,
            output,
            geometry,
            super_sampling,
        })
    }
}

/// Parse `WxH`, or a single integer for square output.
fn parse_geometry(text: &str) -> Result<(u32, u32), String> {
    let invalid = || format!("Invalid geometry '{text}': expected WIDTHxHEIGHT or SIZE");

    let (width, height) = match text.split_once('x') {
        Some((w, h)) => (
            w.parse::<u32>().map_err(|_| invalid())?,
            h.parse::<u32>().map_err(|_| invalid())?,
        ),
        None => {
            let size = text.parse::<u32>().map_err(|_| invalid())?;
            (size, size)
        }
    };
    if width == 0 || height == 0 {
        return Err(invalid());
    }

    Ok((width, height))
}
