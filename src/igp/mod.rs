//! Ionospheric Grid Point (IGP) geometry.
//!
//! IGPs are broadcast by band and IGP number. The mapping from number to location on
//! the globe is fixed by the standard and is not a closed-form function of the number, so
//! it is kept as literal tables (see `bands.rs`) with no way to modify them.
//!
//! Bands 0 to 8 each cover a 40 degree strip of longitude as eight 5 degree sub-bands
//! with latitudes running from south to north. Bands 9 and 10 cover the northern and
//! southern caps as five latitude rings with longitudes running west to east.
mod bands;

use tracing::debug;

use crate::prelude::*;

/// IGP band index, 0 to 10.
pub type BandIndex = u8;
/// IGP number within a band, starting at 1.
pub type IgpNumber = u8;

/// A contiguous run of IGP numbers sharing one fixed coordinate.
#[derive(Debug, PartialEq, Eq)]
pub struct SubBand {
    fixed: i16,
    varying: &'static [i16],
    first: IgpNumber,
    last: IgpNumber,
}

impl SubBand {
    const fn new(fixed: i16, varying: &'static [i16], first: IgpNumber, last: IgpNumber) -> Self {
        SubBand {
            fixed,
            varying,
            first,
            last,
        }
    }

    /// The coordinate shared by every IGP in this sub-band, in degrees. A longitude for
    /// bands 0 to 8, a latitude for bands 9 and 10.
    #[must_use]
    pub fn fixed(&self) -> i16 {
        self.fixed
    }

    /// The other coordinate of each IGP, in degrees, in IGP number order.
    #[must_use]
    pub fn varying(&self) -> &'static [i16] {
        self.varying
    }

    #[must_use]
    pub fn first(&self) -> IgpNumber {
        self.first
    }

    #[must_use]
    pub fn last(&self) -> IgpNumber {
        self.last
    }

    #[must_use]
    pub fn contains(&self, igp: IgpNumber) -> bool {
        (self.first..=self.last).contains(&igp)
    }

    fn coordinate(&self, igp: IgpNumber) -> Option<i16> {
        if !self.contains(igp) {
            return None;
        }
        self.varying.get(usize::from(igp - self.first)).copied()
    }
}

/// A resolved IGP location.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Igp {
    pub band: BandIndex,
    pub number: IgpNumber,
    /// Degrees, positive north.
    pub latitude: i16,
    /// Degrees, positive east.
    pub longitude: i16,
}

/// One of the 11 IGP bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    index: BandIndex,
    sub_bands: &'static [SubBand],
}

impl Band {
    pub const COUNT: u8 = 11;
    /// First of the polar bands.
    pub const FIRST_POLAR: BandIndex = 9;

    /// Look up band `index`.
    ///
    /// # Errors
    /// [Error::InvalidBand] if `index` is not 0 to 10.
    pub fn get(index: BandIndex) -> Result<Band> {
        let sub_bands: &'static [SubBand] = match index {
            0..=8 => &bands::REGULAR[usize::from(index)],
            9 | 10 => &bands::POLAR[usize::from(index - Self::FIRST_POLAR)],
            _ => return Err(Error::InvalidBand(index)),
        };
        Ok(Band { index, sub_bands })
    }

    #[must_use]
    pub fn index(&self) -> BandIndex {
        self.index
    }

    #[must_use]
    pub fn is_polar(&self) -> bool {
        self.index >= Self::FIRST_POLAR
    }

    #[must_use]
    pub fn sub_bands(&self) -> &'static [SubBand] {
        self.sub_bands
    }

    /// Smallest IGP number in this band.
    #[must_use]
    pub fn first_igp(&self) -> IgpNumber {
        self.sub_bands.first().map_or(0, SubBand::first)
    }

    /// Largest IGP number in this band.
    #[must_use]
    pub fn last_igp(&self) -> IgpNumber {
        self.sub_bands.last().map_or(0, SubBand::last)
    }

    /// Resolve IGP number `igp` to its location.
    ///
    /// # Errors
    /// [Error::IgpOutOfRange] if no sub-band of this band contains `igp`.
    pub fn resolve(&self, igp: IgpNumber) -> Result<Igp> {
        let Some((sub, coord)) = self
            .sub_bands
            .iter()
            .find_map(|s| s.coordinate(igp).map(|c| (s, c)))
        else {
            debug!(band = self.index, igp, "igp not in any sub-band");
            return Err(Error::IgpOutOfRange {
                band: self.index,
                igp,
            });
        };
        Ok(self.igp(igp, sub.fixed, coord))
    }

    /// Iterate every IGP of this band in IGP number order.
    pub fn points(&self) -> impl Iterator<Item = Igp> {
        let band = *self;
        let sub_bands = self.sub_bands;
        sub_bands.iter().flat_map(move |sub| {
            (sub.first..=sub.last)
                .zip(sub.varying.iter())
                .map(move |(number, coord)| band.igp(number, sub.fixed, *coord))
        })
    }

    fn igp(&self, number: IgpNumber, fixed: i16, varying: i16) -> Igp {
        let (latitude, longitude) = if self.is_polar() {
            (fixed, varying)
        } else {
            (varying, fixed)
        };
        Igp {
            band: self.index,
            number,
            latitude,
            longitude,
        }
    }
}

/// Iterate all 11 bands in index order.
pub fn bands() -> impl Iterator<Item = Band> {
    (0..Band::COUNT).filter_map(|i| Band::get(i).ok())
}

/// Resolve IGP number `igp` of band `band` to its location.
///
/// # Errors
/// [Error::InvalidBand] if `band` is not 0 to 10, or [Error::IgpOutOfRange] if `igp` is
/// not defined for the band.
pub fn resolve(band: BandIndex, igp: IgpNumber) -> Result<Igp> {
    Band::get(band)?.resolve(igp)
}
