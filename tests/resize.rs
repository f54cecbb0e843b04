// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! End-to-end carving against a synthetic image with a known shape:
//! a wide, flat plateau in the middle where the seams must go, and
//! steep gradients everywhere else where they must not.

use image::{ImageBuffer, Pixel, Rgb, RgbImage};
use recarve::SeamCarver;

// Per-column grey levels; columns 3..=6 form a flat plateau, so the
// two zero-energy working columns sit inside it and every seam has to
// land there.
const COLUMN_VALUES: [u8; 10] = [0, 50, 100, 200, 200, 200, 200, 100, 50, 0];
const HEIGHT: u32 = 4;

fn rgb(v: u8) -> Rgb<u8> {
    *Rgb::from_slice(&[v, v, v])
}

fn plateau_image() -> RgbImage {
    let mut img = ImageBuffer::new(COLUMN_VALUES.len() as u32, HEIGHT);
    for y in 0..HEIGHT {
        for (x, v) in COLUMN_VALUES.iter().enumerate() {
            img.put_pixel(x as u32, y, rgb(*v));
        }
    }
    img
}

#[test]
fn reduction_seams_stay_inside_the_plateau() {
    let img = plateau_image();
    let mut carver = SeamCarver::new(&img, 8).unwrap();

    let seams = carver.seams().unwrap();
    assert_eq!(seams.len(), 2);
    for seam in seams {
        assert_eq!(seam.len(), HEIGHT as usize);
        assert!(seam.is_connected());
        for step in &seam.steps {
            assert!(
                step.original_x >= 3 && step.original_x <= 6,
                "seam left the plateau at original column {}",
                step.original_x
            );
        }
    }

    // Per row, the two removed original columns and the carved
    // image's source columns must partition the original columns.
    let removed_per_row: Vec<Vec<u32>> = {
        let seams = carver.seams().unwrap();
        (0..HEIGHT)
            .map(|y| {
                vec![
                    seams[0].step(y).original_x,
                    seams[1].step(y).original_x,
                ]
            })
            .collect()
    };

    let out = carver.resize().unwrap();
    assert_eq!(out.dimensions(), (8, HEIGHT));
    for y in 0..HEIGHT {
        let mut survivors: Vec<u8> = COLUMN_VALUES.to_vec();
        // Remove by value index, highest first, to keep indices valid.
        let mut removed = removed_per_row[y as usize].clone();
        removed.sort();
        for column in removed.iter().rev() {
            survivors.remove(*column as usize);
        }
        for (x, v) in survivors.iter().enumerate() {
            assert_eq!(out.get_pixel(x as u32, y), &rgb(*v));
        }
    }
}

#[test]
fn enlargement_duplicates_each_seam_column_adjacently() {
    let img = plateau_image();
    let mut carver = SeamCarver::new(&img, 12).unwrap();

    let seams = carver.seams().unwrap();
    assert_eq!(seams.len(), 2);
    let duplicated_per_row: Vec<Vec<u32>> = (0..HEIGHT)
        .map(|y| {
            vec![
                seams[0].step(y).original_x,
                seams[1].step(y).original_x,
            ]
        })
        .collect();

    let out = carver.resize().unwrap();
    assert_eq!(out.dimensions(), (12, HEIGHT));

    for y in 0..HEIGHT {
        let mut expected: Vec<u32> = (0..COLUMN_VALUES.len() as u32).collect();
        expected.extend(&duplicated_per_row[y as usize]);
        expected.sort();

        // The duplicated columns appear exactly twice, adjacently,
        // in the sorted source list; the rendered row samples it.
        for duplicated in &duplicated_per_row[y as usize] {
            let occurrences = expected.iter().filter(|c| *c == duplicated).count();
            assert_eq!(occurrences, 2);
            let first = expected.iter().position(|c| c == duplicated).unwrap();
            assert_eq!(expected[first + 1], *duplicated);
        }
        for (x, source) in expected.iter().enumerate() {
            assert_eq!(
                out.get_pixel(x as u32, y),
                &rgb(COLUMN_VALUES[*source as usize])
            );
        }
    }
}

#[test]
fn show_seams_recolors_exactly_the_seam_pixels() {
    let img = plateau_image();
    let mut carver = SeamCarver::new(&img, 8).unwrap();
    let red = rgb_color(255, 0, 0);

    let painted = carver.show_seams(red).unwrap();
    assert_eq!(painted.dimensions(), img.dimensions());

    let seams = carver.seams().unwrap();
    let mut seam_pixels = Vec::new();
    for seam in seams {
        for (y, step) in seam.steps.iter().enumerate() {
            seam_pixels.push((step.original_x, y as u32));
        }
    }
    // k seams × height rows, all distinct.
    assert_eq!(seam_pixels.len(), 2 * HEIGHT as usize);
    seam_pixels.sort();
    seam_pixels.dedup();
    assert_eq!(seam_pixels.len(), 2 * HEIGHT as usize);

    let mut recolored = 0;
    for y in 0..HEIGHT {
        for x in 0..img.width() {
            if seam_pixels.contains(&(x, y)) {
                assert_eq!(painted.get_pixel(x, y), &red);
                recolored += 1;
            } else {
                assert_eq!(painted.get_pixel(x, y), img.get_pixel(x, y));
            }
        }
    }
    assert_eq!(recolored, 2 * HEIGHT);
}

fn assert_same_pixels(a: &RgbImage, b: &RgbImage) {
    assert_eq!(a.dimensions(), b.dimensions());
    assert!(a.pixels().eq(b.pixels()));
}

#[test]
fn separately_built_carvers_agree_completely() {
    let img = plateau_image();
    let mut first = SeamCarver::new(&img, 8).unwrap();
    let mut second = SeamCarver::new(&img, 8).unwrap();

    assert_eq!(first.seams().unwrap(), second.seams().unwrap());
    assert_same_pixels(&first.resize().unwrap(), &second.resize().unwrap());
}

#[test]
fn repeated_resize_calls_are_stable() {
    let img = plateau_image();
    let mut carver = SeamCarver::new(&img, 8).unwrap();
    let once = carver.resize().unwrap();
    let twice = carver.resize().unwrap();
    assert_same_pixels(&once, &twice);
}

#[test]
fn no_op_resize_is_pixel_identical() {
    let img = plateau_image();
    let mut carver = SeamCarver::new(&img, img.width()).unwrap();
    assert_same_pixels(&carver.resize().unwrap(), &img);
}

#[test]
fn construction_rejects_bad_dimensions_and_budgets() {
    let img = plateau_image();
    // 10-wide image: at most 5 seams either way.
    assert!(SeamCarver::new(&img, 4).unwrap_err().is_configuration());
    assert!(SeamCarver::new(&img, 16).unwrap_err().is_configuration());

    let mut one_wide = ImageBuffer::new(1, 4);
    for y in 0..4 {
        one_wide.put_pixel(0, y, rgb(9));
    }
    assert!(SeamCarver::new(&one_wide, 1)
        .unwrap_err()
        .is_configuration());

    let mut one_tall = ImageBuffer::new(4, 1);
    for x in 0..4 {
        one_tall.put_pixel(x, 0, rgb(9));
    }
    assert!(SeamCarver::new(&one_tall, 4)
        .unwrap_err()
        .is_configuration());
}

fn rgb_color(r: u8, g: u8, b: u8) -> Rgb<u8> {
    *Rgb::from_slice(&[r, g, b])
}
