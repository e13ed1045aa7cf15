#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The reception time was not set, or is before the GPS time reference epoch.
    #[error("reception time is unset")]
    UnsetTime,

    /// Check value recomputed over the payload does not match the broadcast value.
    #[error("check value mismatch: computed {computed:#08x}, broadcast {broadcast:#08x}")]
    IntegrityMismatch { computed: u32, broadcast: u32 },

    #[error("invalid igp band {0}; must be 0 to 10")]
    InvalidBand(u8),

    /// IGP number not covered by any sub-band of the band.
    #[error("igp {igp} out of range for band {band}")]
    IgpOutOfRange { band: u8, igp: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
