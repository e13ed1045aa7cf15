//! IGP band definitions, RTCA DO-229 Appendix A.
//!
//! Each entry is `SubBand::new(fixed, varying, first, last)`. For bands 0 to 8 the fixed
//! coordinate is a longitude and the varying coordinates are latitudes. For bands 9 and 10
//! the fixed coordinate is a latitude and the varying coordinates are longitudes.
use super::SubBand;

#[rustfmt::skip]
const LAT_85N: [i16; 28] = [
    -75, -65, -55, -50, -45, -40, -35, -30, -25, -20, -15, -10, -5, 0, 5, 10, 15, 20,
    25, 30, 35, 40, 45, 50, 55, 65, 75, 85,
];
#[rustfmt::skip]
const LAT_55: [i16; 23] = [
    -55, -50, -45, -40, -35, -30, -25, -20, -15, -10, -5, 0, 5, 10, 15, 20, 25, 30,
    35, 40, 45, 50, 55,
];
#[rustfmt::skip]
const LAT_75: [i16; 27] = [
    -75, -65, -55, -50, -45, -40, -35, -30, -25, -20, -15, -10, -5, 0, 5, 10, 15, 20,
    25, 30, 35, 40, 45, 50, 55, 65, 75,
];
#[rustfmt::skip]
const LAT_85S: [i16; 28] = [
    -85, -75, -65, -55, -50, -45, -40, -35, -30, -25, -20, -15, -10, -5, 0, 5, 10, 15,
    20, 25, 30, 35, 40, 45, 50, 55, 65, 75,
];
#[rustfmt::skip]
const LON_5: [i16; 72] = [
    -180, -175, -170, -165, -160, -155, -150, -145, -140, -135, -130, -125, -120, -115,
    -110, -105, -100, -95, -90, -85, -80, -75, -70, -65, -60, -55, -50, -45,
    -40, -35, -30, -25, -20, -15, -10, -5, 0, 5, 10, 15, 20, 25,
    30, 35, 40, 45, 50, 55, 60, 65, 70, 75, 80, 85, 90, 95,
    100, 105, 110, 115, 120, 125, 130, 135, 140, 145, 150, 155, 160, 165,
    170, 175,
];
#[rustfmt::skip]
const LON_10: [i16; 36] = [
    -180, -170, -160, -150, -140, -130, -120, -110, -100, -90, -80, -70, -60, -50,
    -40, -30, -20, -10, 0, 10, 20, 30, 40, 50, 60, 70, 80, 90,
    100, 110, 120, 130, 140, 150, 160, 170,
];
#[rustfmt::skip]
const LON_30N: [i16; 12] = [-180, -150, -120, -90, -60, -30, 0, 30, 60, 90, 120, 150];
#[rustfmt::skip]
const LON_30S: [i16; 12] = [-170, -140, -110, -80, -50, -20, 10, 40, 70, 100, 130, 160];

/// Bands 0 to 8, eight 5 degree longitude strips each.
#[rustfmt::skip]
pub(super) static REGULAR: [[SubBand; 8]; 9] = [
    [
        SubBand::new(-180, &LAT_85N, 1, 28), SubBand::new(-175, &LAT_55, 29, 51),
        SubBand::new(-170, &LAT_75, 52, 78), SubBand::new(-165, &LAT_55, 79, 101),
        SubBand::new(-160, &LAT_75, 102, 128), SubBand::new(-155, &LAT_55, 129, 151),
        SubBand::new(-150, &LAT_75, 152, 178), SubBand::new(-145, &LAT_55, 179, 201),
    ],
    [
        SubBand::new(-140, &LAT_85S, 1, 28), SubBand::new(-135, &LAT_55, 29, 51),
        SubBand::new(-130, &LAT_75, 52, 78), SubBand::new(-125, &LAT_55, 79, 101),
        SubBand::new(-120, &LAT_75, 102, 128), SubBand::new(-115, &LAT_55, 129, 151),
        SubBand::new(-110, &LAT_75, 152, 178), SubBand::new(-105, &LAT_55, 179, 201),
    ],
    [
        SubBand::new(-100, &LAT_75, 1, 27), SubBand::new(-95, &LAT_55, 28, 50),
        SubBand::new(-90, &LAT_85N, 51, 78), SubBand::new(-85, &LAT_55, 79, 101),
        SubBand::new(-80, &LAT_75, 102, 128), SubBand::new(-75, &LAT_55, 129, 151),
        SubBand::new(-70, &LAT_75, 152, 178), SubBand::new(-65, &LAT_55, 179, 201),
    ],
    [
        SubBand::new(-60, &LAT_75, 1, 27), SubBand::new(-55, &LAT_55, 28, 50),
        SubBand::new(-50, &LAT_85S, 51, 78), SubBand::new(-45, &LAT_55, 79, 101),
        SubBand::new(-40, &LAT_75, 102, 128), SubBand::new(-35, &LAT_55, 129, 151),
        SubBand::new(-30, &LAT_75, 152, 178), SubBand::new(-25, &LAT_55, 179, 201),
    ],
    [
        SubBand::new(-20, &LAT_75, 1, 27), SubBand::new(-15, &LAT_55, 28, 50),
        SubBand::new(-10, &LAT_75, 51, 77), SubBand::new(-5, &LAT_55, 78, 100),
        SubBand::new(0, &LAT_85N, 101, 128), SubBand::new(5, &LAT_55, 129, 151),
        SubBand::new(10, &LAT_75, 152, 178), SubBand::new(15, &LAT_55, 179, 201),
    ],
    [
        SubBand::new(20, &LAT_75, 1, 27), SubBand::new(25, &LAT_55, 28, 50),
        SubBand::new(30, &LAT_75, 51, 77), SubBand::new(35, &LAT_55, 78, 100),
        SubBand::new(40, &LAT_85S, 101, 128), SubBand::new(45, &LAT_55, 129, 151),
        SubBand::new(50, &LAT_75, 152, 178), SubBand::new(55, &LAT_55, 179, 201),
    ],
    [
        SubBand::new(60, &LAT_75, 1, 27), SubBand::new(65, &LAT_55, 28, 50),
        SubBand::new(70, &LAT_75, 51, 77), SubBand::new(75, &LAT_55, 78, 100),
        SubBand::new(80, &LAT_75, 101, 127), SubBand::new(85, &LAT_55, 128, 150),
        SubBand::new(90, &LAT_85N, 151, 178), SubBand::new(95, &LAT_55, 179, 201),
    ],
    [
        SubBand::new(100, &LAT_75, 1, 27), SubBand::new(105, &LAT_55, 28, 50),
        SubBand::new(110, &LAT_75, 51, 77), SubBand::new(115, &LAT_55, 78, 100),
        SubBand::new(120, &LAT_75, 101, 127), SubBand::new(125, &LAT_55, 128, 150),
        SubBand::new(130, &LAT_85S, 151, 178), SubBand::new(135, &LAT_55, 179, 201),
    ],
    [
        SubBand::new(140, &LAT_75, 1, 27), SubBand::new(145, &LAT_55, 28, 50),
        SubBand::new(150, &LAT_75, 51, 77), SubBand::new(155, &LAT_55, 78, 100),
        SubBand::new(160, &LAT_75, 101, 127), SubBand::new(165, &LAT_55, 128, 150),
        SubBand::new(170, &LAT_75, 151, 177), SubBand::new(175, &LAT_55, 178, 200),
    ],
];

/// Bands 9 (north) and 10 (south), five latitude rings each.
#[rustfmt::skip]
pub(super) static POLAR: [[SubBand; 5]; 2] = [
    [
        SubBand::new(60, &LON_5, 1, 72), SubBand::new(65, &LON_10, 73, 108),
        SubBand::new(70, &LON_10, 109, 144), SubBand::new(75, &LON_10, 145, 180),
        SubBand::new(85, &LON_30N, 181, 192),
    ],
    [
        SubBand::new(-60, &LON_5, 1, 72), SubBand::new(-65, &LON_10, 73, 108),
        SubBand::new(-70, &LON_10, 109, 144), SubBand::new(-75, &LON_10, 145, 180),
        SubBand::new(-85, &LON_30S, 181, 192),
    ],
];
