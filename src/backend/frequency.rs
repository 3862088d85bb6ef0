pub type Hertz     = u32;
pub type Kilohertz = u32;


pub const HZ_IN_KHZ: Hertz = 1_000;
pub const HZ_IN_MHZ: Hertz = 1_000_000;


#[must_use]
pub const fn hz_to_khz(frequency: Hertz) -> Kilohertz {
    frequency / HZ_IN_KHZ
}

/// Renders a frequency the way WSPR spot lists do, e.g. `7.040100 MHz`.
#[must_use]
pub fn format_mhz(frequency: Hertz) -> String {
    let megahertz = frequency / HZ_IN_MHZ;
    let remainder = frequency % HZ_IN_MHZ;

    format!("{megahertz}.{remainder:06} MHz")
}
