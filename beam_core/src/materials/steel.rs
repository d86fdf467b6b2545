//! JIS structural steel section database.
//!
//! Catalogue values are in the units the mill tables print them in: I in
//! cm⁴, Z in cm³, A in cm², unit weight in kg/m (kg/m² of wall for sheet
//! piles). [`section_properties`] converts to the solver's mm units.
//!
//! Sheet piles carry per-metre-of-wall values and only bend about their
//! strong axis; their weak-axis entries are zero.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::errors::{EngineError, EngineResult};
use crate::model::SectionProperties;
use crate::units::{CM3_TO_MM3, CM4_TO_MM4, E_STEEL};

/// Section family, matching the JIS standard the values come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SteelShape {
    /// H-shapes (JIS G 3192)
    H,
    /// Channels (JIS G 3192)
    Channel,
    /// Light-gauge lipped channels (JIS G 3350)
    LipChannel,
    /// Equal-leg angles (JIS G 3192)
    Angle,
    /// U-shaped sheet piles (JIS A 5523/5528)
    SheetPile,
    /// Wide (600 mm) sheet piles
    SheetPileW,
    /// Hat-shaped (900 mm) sheet piles
    SheetPileH,
    /// Lightweight sheet piles
    LightSheetPile,
    /// Square hollow sections (JIS G 3466)
    SquarePipe,
}

impl SteelShape {
    pub const ALL: [SteelShape; 9] = [
        SteelShape::H,
        SteelShape::Channel,
        SteelShape::LipChannel,
        SteelShape::Angle,
        SteelShape::SheetPile,
        SteelShape::SheetPileW,
        SteelShape::SheetPileH,
        SteelShape::LightSheetPile,
        SteelShape::SquarePipe,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SteelShape::H => "H-shape",
            SteelShape::Channel => "Channel",
            SteelShape::LipChannel => "Lip channel",
            SteelShape::Angle => "Angle",
            SteelShape::SheetPile => "Sheet pile (U)",
            SteelShape::SheetPileW => "Sheet pile (600w)",
            SteelShape::SheetPileH => "Sheet pile (hat)",
            SteelShape::LightSheetPile => "Light sheet pile",
            SteelShape::SquarePipe => "Square pipe",
        }
    }

    /// Sheet piles are catalogued per metre of wall
    pub fn is_sheet_pile(&self) -> bool {
        matches!(
            self,
            SteelShape::SheetPile
                | SteelShape::SheetPileW
                | SteelShape::SheetPileH
                | SteelShape::LightSheetPile
        )
    }
}

/// Bending axis selection for section property lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Strong,
    Weak,
}

/// Overall profile dimensions (mm), used for drawing and section display.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProfileDims {
    pub h: f64,
    pub b: f64,
    pub t1: f64,
    pub t2: f64,
    pub lip: f64,
}

/// One catalogue row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteelSection {
    pub shape: SteelShape,
    pub ix_cm4: f64,
    pub iy_cm4: f64,
    pub zx_cm3: f64,
    pub zy_cm3: f64,
    pub area_cm2: f64,
    pub unit_weight: f64,
    /// H / B / t (mm), catalogued only for sheet piles whose names do not
    /// encode their dimensions
    pub dims: Option<(f64, f64, f64)>,
}

struct Row(
    &'static str,
    SteelShape,
    f64,
    f64,
    f64,
    f64,
    f64,
    f64,
    Option<(f64, f64, f64)>,
);

#[rustfmt::skip]
const ROWS: &[Row] = &[
    // H-shapes (JIS G 3192): Ix, Iy, Zx, Zy, A, w
    Row("H-100x100x6x8",    SteelShape::H, 378.0,    134.0,   75.6,   26.7,  21.59, 16.9, None),
    Row("H-125x60x6x8",     SteelShape::H, 413.0,    29.2,    66.1,   9.73,  16.84, 13.2, None),
    Row("H-125x125x6.5x9",  SteelShape::H, 847.0,    293.0,   136.0,  47.0,  30.00, 23.6, None),
    Row("H-148x100x6x9",    SteelShape::H, 711.0,    122.0,   96.2,   24.4,  26.84, 21.1, None),
    Row("H-150x75x5x7",     SteelShape::H, 666.0,    49.5,    88.8,   13.2,  17.85, 14.0, None),
    Row("H-150x150x7x10",   SteelShape::H, 1640.0,   563.0,   219.0,  75.1,  39.65, 31.1, None),
    Row("H-175x90x5x8",     SteelShape::H, 1210.0,   89.6,    138.0,  19.9,  23.04, 18.1, None),
    Row("H-175x175x7.5x11", SteelShape::H, 2900.0,   984.0,   331.0,  112.0, 51.21, 40.2, None),
    Row("H-194x150x6x9",    SteelShape::H, 2690.0,   507.0,   277.0,  67.6,  38.11, 29.9, None),
    Row("H-200x100x5.5x8",  SteelShape::H, 1840.0,   134.0,   184.0,  26.8,  27.16, 21.3, None),
    Row("H-200x200x8x12",   SteelShape::H, 4720.0,   1600.0,  472.0,  160.0, 63.53, 49.9, None),
    Row("H-244x175x7x11",   SteelShape::H, 6120.0,   984.0,   502.0,  113.0, 55.49, 43.6, None),
    Row("H-250x125x6x9",    SteelShape::H, 4050.0,   294.0,   324.0,  47.0,  37.66, 29.6, None),
    Row("H-250x250x9x14",   SteelShape::H, 10800.0,  3650.0,  867.0,  292.0, 91.43, 71.8, None),
    Row("H-294x200x8x12",   SteelShape::H, 11300.0,  1600.0,  771.0,  160.0, 72.38, 56.8, None),
    Row("H-300x150x6.5x9",  SteelShape::H, 7210.0,   488.0,   481.0,  65.1,  46.78, 36.7, None),
    Row("H-300x300x10x15",  SteelShape::H, 20200.0,  6750.0,  1350.0, 450.0, 118.4, 93.0, None),
    Row("H-340x250x9x14",   SteelShape::H, 15300.0,  3650.0,  903.0,  292.0, 101.5, 79.7, None),
    Row("H-350x175x7x11",   SteelShape::H, 13600.0,  984.0,   775.0,  112.0, 62.91, 49.4, None),
    Row("H-350x350x12x19",  SteelShape::H, 39800.0,  13600.0, 2280.0, 776.0, 171.9, 135.0, None),
    Row("H-390x300x10x16",  SteelShape::H, 38700.0,  7210.0,  1980.0, 481.0, 133.2, 105.0, None),
    Row("H-400x200x8x13",   SteelShape::H, 23700.0,  1740.0,  1190.0, 174.0, 83.37, 65.4, None),
    Row("H-400x400x13x21",  SteelShape::H, 66600.0,  22400.0, 3330.0, 1120.0, 218.7, 172.0, None),
    Row("H-440x300x11x18",  SteelShape::H, 56100.0,  8110.0,  2550.0, 541.0, 157.4, 124.0, None),
    Row("H-450x200x9x14",   SteelShape::H, 33500.0,  1870.0,  1490.0, 187.0, 96.76, 76.0, None),
    Row("H-496x199x9x14",   SteelShape::H, 41900.0,  1840.0,  1690.0, 185.0, 101.3, 79.5, None),
    Row("H-500x200x10x16",  SteelShape::H, 47800.0,  2140.0,  1910.0, 214.0, 114.2, 89.6, None),
    Row("H-588x300x12x20",  SteelShape::H, 118000.0, 9020.0,  4020.0, 601.0, 192.5, 151.0, None),
    Row("H-600x200x11x17",  SteelShape::H, 77600.0,  2280.0,  2590.0, 228.0, 134.4, 106.0, None),

    // Channels (JIS G 3192)
    Row("C-75x40x5x7",       SteelShape::Channel, 75.3,    12.2,  20.1,  4.47, 8.818, 6.92, None),
    Row("C-100x50x5x7.5",    SteelShape::Channel, 188.0,   26.0,  37.6,  7.52, 11.92, 9.36, None),
    Row("C-125x65x6x8",      SteelShape::Channel, 424.0,   61.8,  67.8,  13.4, 17.11, 13.4, None),
    Row("C-150x75x6.5x10",   SteelShape::Channel, 861.0,   117.0, 115.0, 21.2, 23.71, 18.6, None),
    Row("C-150x75x9x12.5",   SteelShape::Channel, 1050.0,  147.0, 140.0, 26.6, 30.59, 24.0, None),
    Row("C-180x75x7x10.5",   SteelShape::Channel, 1380.0,  131.0, 153.0, 23.6, 27.20, 21.4, None),
    Row("C-200x80x7.5x11",   SteelShape::Channel, 1950.0,  168.0, 195.0, 27.4, 31.33, 24.6, None),
    Row("C-200x90x8x13.5",   SteelShape::Channel, 2490.0,  277.0, 249.0, 42.1, 38.65, 30.3, None),
    Row("C-250x90x9x13",     SteelShape::Channel, 4180.0,  294.0, 334.0, 43.6, 44.07, 34.6, None),
    Row("C-300x90x9x13",     SteelShape::Channel, 6440.0,  309.0, 429.0, 45.7, 48.57, 38.1, None),
    Row("C-380x100x10.5x16", SteelShape::Channel, 14500.0, 535.0, 763.0, 67.6, 69.39, 54.5, None),

    // Light-gauge lipped channels (JIS G 3350)
    Row("C-60x30x10x1.6",  SteelShape::LipChannel, 10.6,  2.37,  3.54, 1.12, 2.155, 1.69, None),
    Row("C-60x30x10x2.3",  SteelShape::LipChannel, 14.6,  3.20,  4.88, 1.54, 3.018, 2.37, None),
    Row("C-75x45x15x1.6",  SteelShape::LipChannel, 27.0,  7.82,  7.19, 2.50, 2.955, 2.32, None),
    Row("C-75x45x15x2.3",  SteelShape::LipChannel, 37.6,  10.8,  10.0, 3.51, 4.168, 3.27, None),
    Row("C-100x50x20x1.6", SteelShape::LipChannel, 58.7,  16.7,  11.7, 4.41, 3.675, 2.88, None),
    Row("C-100x50x20x2.3", SteelShape::LipChannel, 82.2,  23.2,  16.4, 6.25, 5.203, 4.08, None),
    Row("C-100x50x20x3.2", SteelShape::LipChannel, 109.0, 30.1,  21.8, 8.37, 7.077, 5.56, None),
    Row("C-125x50x20x2.3", SteelShape::LipChannel, 133.0, 26.2,  21.3, 6.81, 5.778, 4.54, None),
    Row("C-125x50x20x3.2", SteelShape::LipChannel, 178.0, 34.2,  28.5, 9.20, 7.877, 6.18, None),
    Row("C-150x75x20x3.2", SteelShape::LipChannel, 387.0, 90.9,  51.6, 16.3, 10.68, 8.38, None),

    // Equal-leg angles (JIS G 3192)
    Row("L-30x30x3",    SteelShape::Angle, 1.13,  1.13,  0.52, 0.52, 1.727, 1.36, None),
    Row("L-40x40x3",    SteelShape::Angle, 2.87,  2.87,  0.98, 0.98, 2.327, 1.83, None),
    Row("L-40x40x5",    SteelShape::Angle, 4.45,  4.45,  1.58, 1.58, 3.755, 2.95, None),
    Row("L-50x50x4",    SteelShape::Angle, 9.38,  9.38,  2.57, 2.57, 3.892, 3.06, None),
    Row("L-50x50x6",    SteelShape::Angle, 13.3,  13.3,  3.73, 3.73, 5.644, 4.43, None),
    Row("L-60x60x5",    SteelShape::Angle, 20.3,  20.3,  4.71, 4.71, 5.747, 4.51, None),
    Row("L-65x65x6",    SteelShape::Angle, 33.3,  33.3,  7.11, 7.11, 7.527, 5.91, None),
    Row("L-75x75x6",    SteelShape::Angle, 52.4,  52.4,  9.85, 9.85, 8.727, 6.85, None),
    Row("L-75x75x9",    SteelShape::Angle, 75.2,  75.2,  14.5, 14.5, 12.69, 9.96, None),
    Row("L-90x90x7",    SteelShape::Angle, 107.0, 107.0, 16.7, 16.7, 12.22, 9.59, None),
    Row("L-90x90x10",   SteelShape::Angle, 147.0, 147.0, 23.6, 23.6, 17.00, 13.3, None),
    Row("L-100x100x7",  SteelShape::Angle, 150.0, 150.0, 21.0, 21.0, 13.62, 10.7, None),
    Row("L-100x100x10", SteelShape::Angle, 207.0, 207.0, 29.5, 29.5, 19.00, 14.9, None),
    Row("L-130x130x9",  SteelShape::Angle, 395.0, 395.0, 42.9, 42.9, 22.74, 17.9, None),
    Row("L-130x130x12", SteelShape::Angle, 516.0, 516.0, 57.0, 57.0, 29.76, 23.4, None),
    Row("L-150x150x12", SteelShape::Angle, 804.0, 804.0, 75.7, 75.7, 34.77, 27.3, None),

    // U-shaped sheet piles (JIS A 5523/5528), per metre of wall
    Row("SP-II",  SteelShape::SheetPile, 8740.0,  0.0, 874.0,  0.0, 152.9, 120.0, Some((100.0, 400.0, 10.5))),
    Row("SP-III", SteelShape::SheetPile, 16800.0, 0.0, 1340.0, 0.0, 191.0, 150.0, Some((125.0, 400.0, 13.0))),
    Row("SP-IV",  SteelShape::SheetPile, 22700.0, 0.0, 2270.0, 0.0, 242.5, 190.0, Some((170.0, 400.0, 15.5))),
    Row("SP-VL",  SteelShape::SheetPile, 31500.0, 0.0, 3150.0, 0.0, 267.5, 210.0, Some((200.0, 500.0, 24.3))),
    Row("SP-VIL", SteelShape::SheetPile, 38600.0, 0.0, 3820.0, 0.0, 306.0, 240.0, Some((225.0, 500.0, 27.6))),

    // Wide sheet piles (600 mm effective width)
    Row("SP-IIw",  SteelShape::SheetPileW, 13000.0, 0.0, 1000.0, 0.0, 131.2, 103.0, Some((130.0, 600.0, 10.3))),
    Row("SP-IIIw", SteelShape::SheetPileW, 22400.0, 0.0, 1360.0, 0.0, 173.3, 136.0, Some((180.0, 600.0, 13.4))),
    Row("SP-IVw",  SteelShape::SheetPileW, 32400.0, 0.0, 2160.0, 0.0, 202.5, 159.0, Some((225.0, 600.0, 18.0))),

    // Hat-shaped sheet piles (900 mm effective width)
    Row("SP-10H", SteelShape::SheetPileH, 10800.0, 0.0, 902.0,  0.0, 122.2, 95.9, Some((230.0, 900.0, 10.8))),
    Row("SP-25H", SteelShape::SheetPileH, 24400.0, 0.0, 1610.0, 0.0, 169.6, 133.0, Some((300.0, 900.0, 13.2))),

    // Lightweight sheet piles
    Row("LSP-1", SteelShape::LightSheetPile, 382.0, 0.0, 147.0, 0.0, 61.2, 48.0, Some((35.0, 200.0, 3.2))),
    Row("LSP-2", SteelShape::LightSheetPile, 644.0, 0.0, 208.0, 0.0, 77.4, 60.8, Some((40.0, 250.0, 4.0))),

    // Square hollow sections (JIS G 3466, STKR400)
    Row("Square-50x50x2.3",    SteelShape::SquarePipe, 16.3,    16.3,    6.54,   6.54,   4.321, 3.39, None),
    Row("Square-60x60x2.3",    SteelShape::SquarePipe, 28.8,    28.8,    9.61,   9.61,   5.241, 4.11, None),
    Row("Square-75x75x3.2",    SteelShape::SquarePipe, 78.2,    78.2,    20.8,   20.8,   9.043, 7.10, None),
    Row("Square-100x100x3.2",  SteelShape::SquarePipe, 192.0,   192.0,   38.3,   38.3,   12.24, 9.61, None),
    Row("Square-100x100x4.5",  SteelShape::SquarePipe, 259.0,   259.0,   51.8,   51.8,   16.85, 13.2, None),
    Row("Square-125x125x4.5",  SteelShape::SquarePipe, 518.0,   518.0,   82.9,   82.9,   21.35, 16.8, None),
    Row("Square-150x150x6.0",  SteelShape::SquarePipe, 1270.0,  1270.0,  170.0,  170.0,  34.02, 26.7, None),
    Row("Square-200x200x6.0",  SteelShape::SquarePipe, 3080.0,  3080.0,  308.0,  308.0,  46.02, 36.1, None),
    Row("Square-250x250x9.0",  SteelShape::SquarePipe, 8870.0,  8870.0,  710.0,  710.0,  85.64, 67.2, None),
    Row("Square-300x300x12.0", SteelShape::SquarePipe, 20100.0, 20100.0, 1340.0, 1340.0, 135.5, 106.0, None),
];

static STEEL_DB: Lazy<HashMap<&'static str, SteelSection>> = Lazy::new(|| {
    ROWS.iter()
        .map(|r| {
            (
                r.0,
                SteelSection {
                    shape: r.1,
                    ix_cm4: r.2,
                    iy_cm4: r.3,
                    zx_cm3: r.4,
                    zy_cm3: r.5,
                    area_cm2: r.6,
                    unit_weight: r.7,
                    dims: r.8,
                },
            )
        })
        .collect()
});

/// Look up a catalogue row by designation.
pub fn steel_section(designation: &str) -> EngineResult<&'static SteelSection> {
    STEEL_DB
        .get(designation)
        .ok_or_else(|| EngineError::section_not_found(designation))
}

/// Designations of one shape family, in catalogue order.
pub fn sections_of(shape: SteelShape) -> Vec<&'static str> {
    ROWS.iter().filter(|r| r.1 == shape).map(|r| r.0).collect()
}

/// Solver-ready section properties for a steel designation about one axis.
///
/// Converts catalogue cm⁴/cm³ values to mm⁴/mm³ and pairs them with the
/// steel modulus [`E_STEEL`].
pub fn section_properties(designation: &str, axis: Axis) -> EngineResult<SectionProperties> {
    let s = steel_section(designation)?;
    let (i_cm4, z_cm3) = match axis {
        Axis::Strong => (s.ix_cm4, s.zx_cm3),
        Axis::Weak => (s.iy_cm4, s.zy_cm3),
    };
    Ok(SectionProperties::new(
        E_STEEL,
        i_cm4 * CM4_TO_MM4,
        z_cm3 * CM3_TO_MM3,
    ))
}

/// Overall profile dimensions (mm) for drawing the cross-section.
///
/// Dimension-coded designations are parsed; sheet piles use their catalogued
/// H/B/t instead.
pub fn profile_dims(designation: &str) -> EngineResult<ProfileDims> {
    let s = steel_section(designation)?;

    if let Some((h, b, t)) = s.dims {
        return Ok(ProfileDims {
            h,
            b,
            t1: t,
            t2: t,
            lip: 0.0,
        });
    }

    let numeric = designation
        .split_once('-')
        .map(|(_, rest)| rest)
        .unwrap_or(designation);
    let nums: Vec<f64> = numeric
        .split('x')
        .map(|n| {
            n.parse::<f64>().map_err(|_| {
                EngineError::invalid_input("designation", designation, "Unparseable dimensions")
            })
        })
        .collect::<EngineResult<_>>()?;

    let dim = |i: usize| nums.get(i).copied().unwrap_or(0.0);
    Ok(match s.shape {
        SteelShape::H | SteelShape::Channel => ProfileDims {
            h: dim(0),
            b: dim(1),
            t1: dim(2),
            t2: dim(3),
            lip: 0.0,
        },
        SteelShape::LipChannel => ProfileDims {
            h: dim(0),
            b: dim(1),
            t1: dim(3),
            t2: dim(3),
            lip: dim(2),
        },
        SteelShape::Angle | SteelShape::SquarePipe => ProfileDims {
            h: dim(0),
            b: dim(1),
            t1: dim(2),
            t2: dim(2),
            lip: 0.0,
        },
        // Sheet piles always carry explicit dims
        _ => ProfileDims::default(),
    })
}
