//! End-to-end properties of the strip processor
//!
//! Exercises the full transform over in-memory buffers: validation,
//! determinism, color substitution, background pre-fill, rotation
//! correctness and the paired-cell layouts.

use image::{Rgb, RgbImage};
use spriterot::compose::Layout;
use spriterot::config::RotateJob;
use spriterot::geometry::{Orientation, SpriteGeometry};
use spriterot::processor::{process, StripError};

fn job(geometry: SpriteGeometry, layout: Layout) -> RotateJob {
    RotateJob {
        geometry,
        layout,
        border_color: None,
        background_color: Rgb([0, 0, 0]),
        scrub_original: false,
        exclude_first_cell: false,
    }
}

fn row_geom(w: u32, h: u32) -> SpriteGeometry {
    SpriteGeometry {
        cell_width: w,
        cell_height: h,
        orientation: Orientation::RowMajor,
        trim_margin: 0,
    }
}

fn column_geom(w: u32, h: u32) -> SpriteGeometry {
    SpriteGeometry {
        cell_width: w,
        cell_height: h,
        orientation: Orientation::ColumnMajor,
        trim_margin: 0,
    }
}

/// The documented reference scenario: a 2-cell 4x4 row-major strip with the
/// stacked layout yields an 8x8 canvas whose quadrants are the originals on
/// top and their quarter-turned copies below.
#[test]
fn test_stacked_two_cell_reference_scenario() {
    // Cell 0: gradient, cell 1: distinct gradient
    let strip = RgbImage::from_fn(8, 4, |x, y| {
        let cell = x / 4;
        Rgb([(x % 4) as u8 + cell as u8 * 100, y as u8, 42])
    });

    let dest = process(&strip, &job(row_geom(4, 4), Layout::Stacked)).unwrap();
    assert_eq!(dest.dimensions(), (8, 8));

    for cell in 0..2u32 {
        let base_x = cell * 4;
        for y in 0..4 {
            for x in 0..4 {
                // Top band: verbatim copies
                assert_eq!(
                    dest.get_pixel(base_x + x, y),
                    strip.get_pixel(base_x + x, y),
                    "original copy mismatch at cell {} ({},{})",
                    cell,
                    x,
                    y
                );
                // Bottom band: quarter-turned copies, (x, y) -> (y, 3 - x)
                assert_eq!(
                    dest.get_pixel(base_x + y, 4 + (3 - x)),
                    strip.get_pixel(base_x + x, y),
                    "rotated copy mismatch at cell {} ({},{})",
                    cell,
                    x,
                    y
                );
            }
        }
    }
}

#[test]
fn test_validation_rejects_non_multiple_strip_length() {
    let strip = RgbImage::new(13, 115 + 7);
    let result = process(&strip, &job(column_geom(13, 23), Layout::SideBySide));
    assert!(matches!(result, Err(StripError::InvalidGeometry(_))));
}

#[test]
fn test_validation_rejects_wrong_orthogonal_dimension() {
    let strip = RgbImage::new(14, 115);
    let result = process(&strip, &job(column_geom(13, 23), Layout::SideBySide));
    assert!(matches!(result, Err(StripError::InvalidGeometry(_))));
}

#[test]
fn test_validation_rejects_huge_trim_margin() {
    // A margin large enough that doubling it would wrap a u32 must fail
    // validation instead of reaching the pixel loops
    let strip = RgbImage::from_pixel(24, 48, Rgb([1, 2, 3]));
    let mut j = job(column_geom(24, 24), Layout::SideBySide);
    j.geometry.trim_margin = 2_147_483_648;

    let result = process(&strip, &j);
    assert!(matches!(result, Err(StripError::InvalidGeometry(_))));
}

#[test]
fn test_identical_inputs_produce_identical_buffers() {
    let strip = RgbImage::from_fn(13, 69, |x, y| Rgb([x as u8 * 3, y as u8 * 2, x as u8 ^ y as u8]));
    let j = job(column_geom(13, 23), Layout::SideBySide);

    let a = process(&strip, &j).unwrap();
    let b = process(&strip, &j).unwrap();
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn test_border_color_never_reaches_output_when_scrubbing_both_copies() {
    let border = Rgb([128, 128, 128]);
    let background = Rgb([192, 192, 192]);

    // 24x24 bordered cells: decorative ring plus stray border-colored
    // pixels inside the interior, which only the scrub can remove
    let strip = RgbImage::from_fn(24, 48, |x, y| {
        let cy = y % 24;
        if x == 0 || cy == 0 || x == 23 || cy == 23 || (x + cy) % 7 == 0 {
            border
        } else {
            Rgb([10, 20, 30])
        }
    });

    let j = RotateJob {
        geometry: SpriteGeometry {
            cell_width: 24,
            cell_height: 24,
            orientation: Orientation::ColumnMajor,
            trim_margin: 1,
        },
        layout: Layout::SideBySide,
        border_color: Some(border),
        background_color: background,
        scrub_original: true,
        exclude_first_cell: false,
    };

    let dest = process(&strip, &j).unwrap();
    assert!(dest.pixels().all(|p| *p != border), "border color leaked into the destination");
}

#[test]
fn test_border_survives_in_original_copy_without_scrub() {
    let border = Rgb([128, 128, 128]);

    // A single 4x4 cell whose payload contains one border-colored pixel
    let mut strip = RgbImage::from_pixel(4, 4, Rgb([10, 20, 30]));
    strip.put_pixel(1, 2, border);

    let mut j = job(column_geom(4, 4), Layout::SideBySide);
    j.border_color = Some(border);
    j.background_color = Rgb([0, 0, 0]);

    let dest = process(&strip, &j).unwrap();

    // Left half (original) keeps the sentinel, right half (rotated) scrubs it
    assert_eq!(*dest.get_pixel(1, 2), border);
    let right_half_has_border =
        (4..8).any(|x| (0..4).any(|y| *dest.get_pixel(x, y) == border));
    assert!(!right_half_has_border);
}

#[test]
fn test_uncovered_pixels_equal_background() {
    // Non-square cells leave uncovered slack in each slot; all of it must
    // be background.
    let background = Rgb([255, 0, 255]);
    let payload = Rgb([1, 2, 3]);
    let strip = RgbImage::from_pixel(13, 46, payload);

    let mut j = job(column_geom(13, 23), Layout::SideBySide);
    j.background_color = background;

    let dest = process(&strip, &j).unwrap();
    for p in dest.pixels() {
        assert!(*p == payload || *p == background);
    }
    // The rotated column is 23 wide but only 13 tall per 23-pixel slot, so
    // some background must remain visible.
    assert!(dest.pixels().any(|p| *p == background));
}

#[test]
fn test_four_quarter_turns_reproduce_the_strip() {
    let geometry = column_geom(6, 6);
    let strip = RgbImage::from_fn(6, 18, |x, y| Rgb([x as u8 * 40, y as u8 * 13, 99]));

    // Extract each rotated cell from a side-by-side canvas and feed a strip
    // of rotated cells back through the processor, four times in total.
    let mut current = strip.clone();
    for _ in 0..4 {
        let dest = process(&current, &job(geometry, Layout::SideBySide)).unwrap();
        let mut next = RgbImage::new(6, 18);
        for cell in 0..3u32 {
            for y in 0..6 {
                for x in 0..6 {
                    let p = *dest.get_pixel(6 + x, cell * 6 + y);
                    next.put_pixel(x, cell * 6 + y, p);
                }
            }
        }
        current = next;
    }

    assert_eq!(current, strip);
}

#[test]
fn test_exclude_first_cell_drops_the_reference_row() {
    let strip = RgbImage::from_fn(4, 12, |_, y| Rgb([(y / 4) as u8 * 50 + 10, 0, 0]));
    let mut j = job(column_geom(4, 4), Layout::SideBySide);
    j.exclude_first_cell = true;

    let dest = process(&strip, &j).unwrap();
    assert_eq!(dest.dimensions(), (8, 8));

    // Slot 0 now holds cell 1 (color 60), slot 1 holds cell 2 (color 110)
    assert_eq!(*dest.get_pixel(0, 0), Rgb([60, 0, 0]));
    assert_eq!(*dest.get_pixel(0, 4), Rgb([110, 0, 0]));
    // Cell 0's color appears nowhere
    assert!(dest.pixels().all(|p| *p != Rgb([10, 0, 0])));
}

#[test]
fn test_row_major_and_column_major_agree_on_cell_content() {
    // The same four cells, laid out as a row strip and as a column strip,
    // produce the same stacked output bands cell for cell.
    let cells: Vec<RgbImage> = (0..4)
        .map(|i| RgbImage::from_fn(5, 5, |x, y| Rgb([i as u8 * 60, x as u8, y as u8])))
        .collect();

    let mut row_strip = RgbImage::new(20, 5);
    let mut col_strip = RgbImage::new(5, 20);
    for (i, cell) in cells.iter().enumerate() {
        for y in 0..5 {
            for x in 0..5 {
                row_strip.put_pixel(i as u32 * 5 + x, y, *cell.get_pixel(x, y));
                col_strip.put_pixel(x, i as u32 * 5 + y, *cell.get_pixel(x, y));
            }
        }
    }

    let from_row = process(&row_strip, &job(row_geom(5, 5), Layout::Stacked)).unwrap();
    let from_col = process(&col_strip, &job(column_geom(5, 5), Layout::Stacked)).unwrap();
    assert_eq!(from_row.as_raw(), from_col.as_raw());
}
