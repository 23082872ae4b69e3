mod conversion;
mod equality;
mod gamut;
mod string;

// conversion
pub use conversion::{clamp01, linear_to_srgb, srgb_to_linear, wrap_deg};
pub(crate) use conversion::{from_24bit, oklab_to_linear_srgb, oklch_to_24bit};
pub(crate) use conversion::{okxab_to_okxch, okxch_to_okxab};

// equality
#[cfg(test)]
pub(crate) use equality::assert_close;
pub use equality::{close_enough, EPSILON};

// gamut
pub use gamut::in_gamut;
pub(crate) use gamut::{clip, max_chroma};

// string
pub(crate) use string::{format_hashed, format_summary, parse_hashed};
