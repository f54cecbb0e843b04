// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The command-line front end: decode, run one operation, encode.
//! Everything interesting lives in the library.

use clap::{App, Arg};
use failure::{format_err, Error};
use image::{Pixel, Rgb};
use log::info;

use recarve::{imageops, RgbWeights, SeamCarver};

fn parse_color(spec: &str) -> Result<Rgb<u8>, Error> {
    let hex = spec.trim_start_matches('#');
    if hex.len() != 6 {
        return Err(format_err!(
            "seam color must be six hex digits, got {:?}",
            spec
        ));
    }
    let packed = u32::from_str_radix(hex, 16)?;
    Ok(*Rgb::from_slice(&[
        (packed >> 16) as u8,
        (packed >> 8) as u8,
        packed as u8,
    ]))
}

fn main() -> Result<(), Error> {
    let matches = App::new("recarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing")
        .arg(
            Arg::with_name("input")
                .help("The image to resize")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .required(true)
                .help("Where to write the result"),
        )
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .takes_value(true)
                .help("Target width in pixels"),
        )
        .arg(
            Arg::with_name("show-seams")
                .long("show-seams")
                .help("Paint the seams on the original image instead of resizing"),
        )
        .arg(
            Arg::with_name("seam-color")
                .long("seam-color")
                .takes_value(true)
                .default_value("ff0000")
                .help("Seam paint color, RRGGBB hex"),
        )
        .arg(
            Arg::with_name("weights")
                .long("weights")
                .takes_value(true)
                .default_value("1,1,1")
                .help("Greyscale channel weights, R,G,B"),
        )
        .arg(
            Arg::with_name("greyscale")
                .long("greyscale")
                .help("Write the weighted greyscale conversion and exit"),
        )
        .arg(
            Arg::with_name("hue")
                .long("hue")
                .help("Write the weight-shifted hue image and exit"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .help("Write the gradient magnitude map and exit"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Increase logging verbosity"),
        )
        .get_matches();

    stderrlog::new()
        .verbosity(matches.occurrences_of("verbose") as usize + 1)
        .init()?;

    let input = matches.value_of("input").unwrap();
    let output = matches.value_of("output").unwrap();
    let weights: RgbWeights = matches.value_of("weights").unwrap().parse()?;

    let image = image::open(input)?.to_rgb();
    info!("loaded {} at {}x{}", input, image.width(), image.height());

    if matches.is_present("greyscale") {
        imageops::greyscale(&image, &weights)?.save(output)?;
        return Ok(());
    }
    if matches.is_present("hue") {
        imageops::change_hue(&image, &weights)?.save(output)?;
        return Ok(());
    }
    if matches.is_present("energy") {
        imageops::gradient_magnitude(&image, &weights)?.save(output)?;
        return Ok(());
    }

    let width: u32 = matches
        .value_of("width")
        .ok_or_else(|| format_err!("--width is required unless a one-shot transform is chosen"))?
        .parse()?;

    let mut carver = SeamCarver::with_weights(&image, width, weights)?;
    let result = if matches.is_present("show-seams") {
        let color = parse_color(matches.value_of("seam-color").unwrap())?;
        carver.show_seams(color)?
    } else {
        carver.resize()?
    };

    info!(
        "writing {}x{} image to {}",
        result.width(),
        result.height(),
        output
    );
    result.save(output)?;
    Ok(())
}
